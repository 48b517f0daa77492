use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mb_config::ConfigError),

    #[error("Moodle client error: {0}")]
    Moodle(#[from] mb_moodle::MoodleError),

    #[error("Google verifier error: {0}")]
    Auth(#[from] mb_auth::AuthError),

    #[error("Invalid client app URL {url}: {source}")]
    ClientAppUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

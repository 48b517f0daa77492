use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    #[serde(default)]
    pub id_token: String,

    /// Moodle credentials to bind to the Google email
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

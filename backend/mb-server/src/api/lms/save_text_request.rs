use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SaveTextRequest {
    /// Online-text body, HTML
    #[serde(default)]
    pub text: Option<String>,
}

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    /// Google ID token obtained by the client
    #[serde(default)]
    pub id_token: String,
}

use mb_core::Session;

use serde::Serialize;

/// User payload returned with every successful login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub fullname: String,
    pub email: Option<String>,
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_to_google: Option<bool>,
}

impl From<&Session> for UserDto {
    fn from(session: &Session) -> Self {
        let google_email = session
            .google_identity
            .as_ref()
            .map(|identity| identity.email.clone());

        Self {
            id: session.profile.id,
            fullname: session.profile.full_name.clone(),
            email: session.profile.email.clone(),
            avatar: session.profile.avatar_url.clone(),
            linked_to_google: google_email.as_ref().map(|_| true),
            google_email,
        }
    }
}

use crate::SessionResponse;

use mb_core::{LinkPrompt, LoginOutcome};

use serde::Serialize;

/// Google profile echoed back while linking is pending
#[derive(Debug, Serialize)]
pub struct GoogleUserDto {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkingResponse {
    pub ok: bool,
    pub requires_linking: bool,
    pub google_user: GoogleUserDto,
}

/// Either a session or a request to link accounts first
#[derive(Serialize)]
#[serde(untagged)]
pub enum GoogleLoginResponse {
    Authenticated(SessionResponse),
    RequiresLinking(LinkingResponse),
}

impl From<LinkPrompt> for LinkingResponse {
    fn from(prompt: LinkPrompt) -> Self {
        Self {
            ok: true,
            requires_linking: true,
            google_user: GoogleUserDto {
                email: prompt.identity.email,
                name: prompt.identity.display_name,
                picture: prompt.identity.picture_url,
            },
        }
    }
}

impl From<LoginOutcome> for GoogleLoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Authenticated(session) => Self::Authenticated(session.into()),
            LoginOutcome::RequiresLinking(prompt) => Self::RequiresLinking(prompt.into()),
        }
    }
}

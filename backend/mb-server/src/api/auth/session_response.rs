use crate::UserDto;

use mb_core::Session;

use serde::Serialize;

/// `{ ok, token, user }`
#[derive(Serialize)]
pub struct SessionResponse {
    pub ok: bool,
    pub token: String,
    pub user: UserDto,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let user = UserDto::from(&session);
        Self {
            ok: true,
            token: session.token.into_inner(),
            user,
        }
    }
}

//! Browser-driven Google OAuth flow.
//!
//! The callback never answers with an error status: whatever happens, the
//! browser is sent back to the client app with the outcome in the query
//! string.

use crate::{ApiError, ApiResult, AppState, CallbackQuery, UserDto};

use mb_core::{LoginOutcome, OAuthCredential};

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Redirect,
};
use log::{info, warn};

/// GET /auth/google/start
///
/// 303 to the Google consent screen
pub async fn google_start(State(state): State<AppState>) -> ApiResult<Redirect> {
    let url = state.mediator.authorization_url()?;
    Ok(Redirect::to(&url))
}

/// GET /auth/google/callback?code=
pub async fn google_callback(
    State(state): State<AppState>,
    query: Result<Query<CallbackQuery>, QueryRejection>,
) -> Redirect {
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let code = match (query.code, query.error) {
        (Some(code), _) if !code.trim().is_empty() => code,
        (_, Some(error)) => {
            warn!("Google consent returned error: {}", error);
            return client_redirect(&state, &[("error", error.as_str())]);
        }
        _ => return client_redirect(&state, &[("error", "no_code")]),
    };

    match state
        .mediator
        .login_with_google(OAuthCredential::AuthorizationCode(code))
        .await
    {
        Ok(LoginOutcome::Authenticated(session)) => {
            let user = match serde_json::to_string(&UserDto::from(&session)) {
                Ok(user) => user,
                Err(e) => {
                    warn!("Could not serialize user for redirect: {}", e);
                    return client_redirect(&state, &[("error", "INTERNAL_ERROR")]);
                }
            };
            info!("OAuth callback signed in user {}", session.profile.id);
            client_redirect(
                &state,
                &[("token", session.token.as_str()), ("user", user.as_str())],
            )
        }
        Ok(LoginOutcome::RequiresLinking(prompt)) => {
            let name = prompt.identity.display_name.unwrap_or_default();
            let id_token = prompt.id_token.unwrap_or_default();
            client_redirect(
                &state,
                &[
                    ("requires_linking", "true"),
                    ("google_email", prompt.identity.email.as_str()),
                    ("google_name", name.as_str()),
                    ("id_token", id_token.as_str()),
                ],
            )
        }
        Err(e) => {
            let error = ApiError::from(e);
            warn!("OAuth callback failed: {}", error);
            client_redirect(&state, &[("error", error.error_code())])
        }
    }
}

fn client_redirect(state: &AppState, pairs: &[(&str, &str)]) -> Redirect {
    let mut url = state.client_app_url.clone();
    url.query_pairs_mut().extend_pairs(pairs);
    Redirect::to(url.as_str())
}

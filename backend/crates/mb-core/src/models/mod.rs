pub mod code_exchange;
pub mod gate_decision;
pub mod link_record;
pub mod login_outcome;
pub mod oauth_credential;
pub mod session;
pub mod session_token;
pub mod user_profile;
pub mod verified_identity;

use serde::Deserialize;

/// Query string Google appends when returning to the callback
#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    /// Set instead of `code` when the user cancels the consent screen
    pub error: Option<String>,
}

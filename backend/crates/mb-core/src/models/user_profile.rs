use serde::{Deserialize, Serialize};

/// Moodle profile fetched fresh on every login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

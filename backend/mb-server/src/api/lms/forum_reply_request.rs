use serde::Deserialize;

/// Clients send `postid` either as a number or as a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl PostId {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PostId::Number(id) => Some(*id),
            PostId::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ForumReplyRequest {
    #[serde(default)]
    pub postid: Option<PostId>,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub message: String,
}

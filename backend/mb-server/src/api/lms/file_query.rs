use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    /// Absolute Moodle file URL
    pub u: Option<String>,
}

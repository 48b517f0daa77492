/// Verdict of the "is this email known to Moodle" check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Recognized,
    NotRecognized,
    /// Gate not configured or unreachable. Callers treat this as allow.
    Unavailable(String),
}

impl GateDecision {
    /// Fail-open: only an explicit rejection blocks the login
    pub fn allows(&self) -> bool {
        !matches!(self, Self::NotRecognized)
    }
}

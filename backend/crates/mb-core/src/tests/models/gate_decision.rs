use crate::GateDecision;

#[test]
fn given_unavailable_gate_when_checking_then_login_is_allowed() {
    assert!(GateDecision::Unavailable("admin token not configured".into()).allows());
}

#[test]
fn given_recognized_and_rejected_when_checking_then_only_rejection_blocks() {
    assert!(GateDecision::Recognized.allows());
    assert!(!GateDecision::NotRecognized.allows());
}

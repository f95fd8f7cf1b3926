use super::*;

#[test]
fn loading_renders_a_placeholder_not_a_redirect() {
    assert_eq!(guard_outcome(true, false), GuardOutcome::Pending);
    assert_eq!(guard_outcome(true, true), GuardOutcome::Pending);
}

#[test]
fn authenticated_users_pass_through() {
    assert_eq!(guard_outcome(false, true), GuardOutcome::Allow);
}

#[test]
fn unauthenticated_users_are_redirected_to_login() {
    assert_eq!(guard_outcome(false, false), GuardOutcome::RedirectToLogin);
}

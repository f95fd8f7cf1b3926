//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected screens
//! bounce unauthenticated visitors to `/login`, and the login/signup
//! screens bounce already-authenticated users onward.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to `target` whenever auth has loaded and a user is present.
/// Used by the login and signup pages.
pub fn install_auth_redirect<F>(session: RwSignal<SessionState>, navigate: F, target: &'static str)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate(target, NavigateOptions::default());
        }
    });
}

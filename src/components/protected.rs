//! Route guard for authenticated-only screens.
//!
//! The guard holds no state of its own: each render pass projects the
//! session state holder into one of three outcomes.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;

/// What a protected route renders for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session lookup is still in flight; render a neutral
    /// placeholder, never a redirect.
    Pending,
    /// Render the requested view.
    Allow,
    /// Send the visitor to the login screen.
    RedirectToLogin,
}

/// Pure projection of the session state at render time.
#[must_use]
pub fn guard_outcome(loading: bool, authenticated: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Pending
    } else if authenticated {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Gate `children` behind authentication.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        let state = session.get();
        match guard_outcome(state.loading, state.is_authenticated()) {
            GuardOutcome::Pending => view! {
                <div class="route-guard__pending">
                    <div class="spinner" aria-label="Loading"></div>
                </div>
            }
            .into_any(),
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
        }
    }
}

//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Collaborator clients are built once at startup from the resolved
//! configuration and handed down via context, alongside the session
//! signal, the toast queue, the theme pair, and the auth dispatcher.
//! Navigation requested by non-view code (the dispatcher) is relayed
//! through a signal so the router hook stays inside the `Router` tree.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, ParamSegment, StaticSegment};

use crate::components::protected::Protected;
use crate::components::toast_host::ToastHost;
use crate::config;
use crate::net::auth::AuthClient;
use crate::net::storage::StorageClient;
use crate::pages::account::AccountPage;
use crate::pages::add_supplier::AddSupplierPage;
use crate::pages::admin::AdminPage;
use crate::pages::documents::DocumentsPage;
use crate::pages::index::IndexPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::signup::SignUpPage;
use crate::pages::supplier_details::SupplierDetailsPage;
use crate::pages::verification::VerificationPage;
use crate::state::auth_actions::{AuthDispatcher, AuthEffects};
use crate::state::session::{SessionState, provide_session};
use crate::state::toast::{ToastKind, ToastState, push_toast};
use crate::util;

/// Toast and navigation side effects as seen by the auth dispatcher.
#[derive(Clone, Copy)]
pub struct UiEffects {
    toasts: RwSignal<ToastState>,
    nav: RwSignal<Option<String>>,
}

impl AuthEffects for UiEffects {
    fn notify(&self, kind: ToastKind, title: &str, body: &str) {
        push_toast(self.toasts, kind, title, body);
    }

    fn navigate(&self, path: &str) {
        self.nav.set(Some(path.to_owned()));
    }
}

/// Auth dispatcher as shared through context.
pub type SharedDispatcher = Arc<AuthDispatcher<RwSignal<SessionState>, UiEffects>>;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let service_config = config::resolve();
    if service_config.is_none() {
        log::warn!(
            "service configuration missing; using the mock auth/storage backends \
             (sign in with admin@example.com / password)"
        );
    }
    let auth_client = Arc::new(AuthClient::from_config(service_config.clone()));
    let storage = Arc::new(StorageClient::from_config(service_config, auth_client.clone()));
    provide_context(storage);

    let session = provide_session(auth_client.clone());

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    let nav = RwSignal::new(None::<String>);
    let dispatcher: SharedDispatcher =
        Arc::new(AuthDispatcher::new(auth_client, session, UiEffects { toasts, nav }));
    provide_context(dispatcher);

    let theme = RwSignal::new(util::theme::load());
    provide_context(theme);
    Effect::new(move || {
        let state = theme.get();
        util::theme::apply(state);
        util::theme::save(state);
    });

    view! {
        <Title text="EcoVerify — Supply Chain Sustainability"/>

        <Router>
            <NavigationRelay target=nav/>
            <ToastHost/>

            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=(StaticSegment("supplier"), ParamSegment("id")) view=SupplierDetailsPage/>
                <Route path=StaticSegment("verification") view=VerificationPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("documents") view=DocumentsPage/>

                // Protected routes
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Protected><AdminPage/></Protected> }
                />
                <Route
                    path=StaticSegment("add-supplier")
                    view=|| view! { <Protected><AddSupplierPage/></Protected> }
                />
                <Route
                    path=StaticSegment("account")
                    view=|| view! { <Protected><AccountPage/></Protected> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <Protected><SettingsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <Protected><NotificationsPage/></Protected> }
                />

                // Legacy entry points
                <Route path=StaticSegment("index") view=|| view! { <Redirect path="/"/> }/>
                <Route path=StaticSegment("index.html") view=|| view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
    }
}

/// Applies navigation requests queued by non-view code.
#[component]
fn NavigationRelay(target: RwSignal<Option<String>>) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(&path, NavigateOptions::default());
        }
    });
}

//! Dashboard page showing the cached user record with a logout action.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::Session;
use crate::state::auth::AuthState;
use crate::util::guard;

/// Dashboard page — protected; unauthenticated visits redirect to `/login`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    guard::install_redirect(session.clone(), navigate.clone());

    // Record fields may be absent; display falls back to the empty string.
    let name = move || auth.get().user.map(|user| user.name).unwrap_or_default();
    let email = move || auth.get().user.map(|user| user.email).unwrap_or_default();
    let account_type = move || {
        auth.get()
            .user
            .map(|user| user.account_type)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.clear();
        auth.update(|state| state.user = None);
        #[cfg(feature = "csr")]
        log::info!("session cleared");
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <Title text="Dashboard - tecUnify Admin"/>
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Administration Dashboard"</h1>
                <button class="btn btn--danger" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>
            <section class="dashboard-page__profile">
                <p>"Welcome, " <strong>{name}</strong></p>
                <p>"Email: " {email}</p>
                <p>"Account type: " {account_type}</p>
            </section>
        </div>
    }
}

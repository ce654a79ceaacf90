//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::session::Session;
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the session capability and shared auth state, and sets up
/// client-side routing: `/login` (public), `/dashboard` (gated), and `/`
/// redirecting to the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::browser();
    let auth = RwSignal::new(AuthState::with_user(session.current()));

    provide_context(session);
    provide_context(auth);

    view! {
        <Title text="tecUnify Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
            </Routes>
        </Router>
    }
}

//! Login page with an email + password form.

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::session::Session;
use crate::state::auth::AuthState;

/// Login page — posts credentials to the administration API and, on
/// success, caches the user record and navigates to `/dashboard`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        // Submitting guard: ignore re-submission while a request is in flight.
        let started = auth
            .try_update(|state| state.begin_submit())
            .unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        log::info!("login succeeded for {}", user.email);
                        session.save(&user);
                        auth.update(|state| state.complete(user));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login rejected");
                        auth.update(|state| state.fail(err.message));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, email_value, password_value);
        }
    };

    view! {
        <Title text="Sign in - tecUnify Admin"/>
        <div class="login-page">
            <div class="login-card">
                <h1>"tecUnify Administration"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || auth.get().error().is_some()>
                        <p class="login-error">
                            {move || auth.get().error().map(str::to_owned).unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || auth.get().submitting()>
                        {move || if auth.get().submitting() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-hint">
                    <p>"Demo accounts:"</p>
                    <p>"admin@tecunify.com / admin123"</p>
                    <p>"usuario@tecunify.com / user123"</p>
                </div>
            </div>
        </div>
    }
}

//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::actions;
use crate::state::session::SessionState;

/// Login page: dispatches the login action and redirects to the
/// dashboard once the session is authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Already logged in (or just logged in): go to the dashboard.
    Effect::new(move || {
        if session.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    let submit = move || {
        let credentials = LoginRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            actions::login(session, credentials).await;
        });
    };

    view! {
        <div class="auth-page">
            <h1>"NeetUP"</h1>
            <form
                class="auth-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    session
                        .get()
                        .error
                        .map(|msg| view! { <p class="auth-page__error">{msg}</p> })
                }}
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || session.get().is_loading
                >
                    {move || if session.get().is_loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p>
                "No account yet? "
                <a href="/register">"Register"</a>
            </p>
        </div>
    }
}

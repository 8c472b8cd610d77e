//! Registration page. Creating an account never logs the user in; on
//! success the page redirects to the login form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::net::types::RegisterRequest;
use crate::state::actions;
use crate::state::session::SessionState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let created = RwSignal::new(false);

    // Drop any error left over from the login page.
    actions::clear_session_error(session);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let payload = RegisterRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
        };
        if payload.email.is_empty() || payload.password.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if actions::register(session, payload).await {
                    created.set(true);
                    // Give the user a moment to read the confirmation.
                    gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                    navigate("/login", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>
            <Show
                when=move || !created.get()
                fallback=|| {
                    view! { <p class="auth-page__success">"Account created. Redirecting to sign in..."</p> }
                }
            >
                <form
                    class="auth-page__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label>
                        "First name"
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Last name"
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        {move || {
                            if session.get().is_loading { "Creating..." } else { "Create account" }
                        }}
                    </button>
                </form>
            </Show>
            <p>
                "Already registered? "
                <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}

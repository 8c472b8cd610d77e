//! Top navigation bar with section links and the logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::actions;
use crate::state::session::SessionState;

/// Navigation bar shown on every authenticated page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .user
            .map(|u| format!("{} {}", u.first_name, u.last_name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        actions::logout(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"NeetUP"</a>
            <div class="nav-bar__links">
                <a href="/opportunities">"Opportunities"</a>
                <a href="/personality-test">"Personality Test"</a>
                <a href="/chat">"Chat"</a>
                <a href="/community">"Community"</a>
                <a href="/profile">"Profile"</a>
            </div>
            <div class="nav-bar__user">
                <span class="nav-bar__name">{display_name}</span>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </div>
        </nav>
    }
}

//! Profile page: view and edit the current user's profile.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::types::UserProfile;
use crate::state::profile::ProfileState;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let navigate = use_navigate();

    let bio = RwSignal::new(String::new());
    let position = RwSignal::new(String::new());

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.get_untracked().token {
            leptos::task::spawn_local(crate::state::actions::fetch_profile(profile, token));
        }
    }

    // Seed the form whenever a fresh record arrives.
    Effect::new(move || {
        if let Some(p) = profile.get().profile {
            bio.set(p.bio.unwrap_or_default());
            position.set(p.current_position.unwrap_or_default());
        }
    });

    let save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = session.get_untracked().token {
                let current = profile.get_untracked().profile.unwrap_or_default();
                let draft = UserProfile {
                    bio: Some(bio.get_untracked()).filter(|s| !s.is_empty()),
                    current_position: Some(position.get_untracked()).filter(|s| !s.is_empty()),
                    ..current
                };
                leptos::task::spawn_local(crate::state::actions::update_profile(
                    profile, token, draft,
                ));
            }
        }
    };

    view! {
        <div class="profile-page">
            <NavBar/>
            <h1>"Your profile"</h1>
            {move || {
                let state = profile.get();
                if state.fetch.is_loading() {
                    return view! { <p>"Loading profile..."</p> }.into_any();
                }
                if let Some(msg) = state.fetch.error() {
                    let msg = msg.to_owned();
                    return view! { <p class="profile-page__error">{msg}</p> }.into_any();
                }
                view! {
                    <form class="profile-page__form" on:submit=move |ev| ev.prevent_default()>
                        <label>
                            "Current position"
                            <input
                                type="text"
                                prop:value=move || position.get()
                                on:input=move |ev| position.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Bio"
                            <textarea
                                prop:value=move || bio.get()
                                on:input=move |ev| bio.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        {move || {
                            profile
                                .get()
                                .update
                                .error()
                                .map(|msg| {
                                    let msg = msg.to_owned();
                                    view! { <p class="profile-page__error">{msg}</p> }
                                })
                        }}
                        <button
                            class="btn btn--primary"
                            disabled=move || profile.get().update.is_loading()
                            on:click=save
                        >
                            {move || {
                                if profile.get().update.is_loading() { "Saving..." } else { "Save" }
                            }}
                        </button>
                    </form>
                }
                    .into_any()
            }}
        </div>
    }
}

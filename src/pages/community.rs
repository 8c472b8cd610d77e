//! Community feed page: read posts, publish a new one.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::community::CommunityState;
use crate::state::session::SessionState;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let community = expect_context::<RwSignal<CommunityState>>();
    let navigate = use_navigate();

    let draft = RwSignal::new(String::new());

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.get_untracked().token {
            leptos::task::spawn_local(crate::state::actions::fetch_community_posts(
                community, token,
            ));
        }
    }

    let publish = move |_| {
        let content = draft.get();
        if content.trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = session.get_untracked().token {
                leptos::task::spawn_local(crate::state::actions::create_community_post(
                    community,
                    token,
                    content.trim().to_owned(),
                ));
            }
        }
        draft.set(String::new());
    };

    view! {
        <div class="community-page">
            <NavBar/>
            <h1>"Community"</h1>

            <div class="community-page__composer">
                <textarea
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    placeholder="Share something with the community"
                ></textarea>
                <button
                    class="btn btn--primary"
                    disabled=move || community.get().post_submit.is_loading()
                    on:click=publish
                >
                    "Post"
                </button>
            </div>

            {move || {
                let state = community.get();
                if state.fetch.is_loading() && state.posts.is_empty() {
                    return view! { <p>"Loading feed..."</p> }.into_any();
                }
                if let Some(msg) = state.fetch.error() {
                    let msg = msg.to_owned();
                    return view! { <p class="community-page__error">{msg}</p> }.into_any();
                }
                view! {
                    <ul class="community-page__feed">
                        {state
                            .posts
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li class="community-post">
                                        <span class="community-post__author">{p.author_name}</span>
                                        <p>{p.content}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}

//! Community chat page: session list, message history, and composer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let navigate = use_navigate();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.get_untracked().token {
            leptos::task::spawn_local(crate::state::actions::fetch_chat_sessions(chat, token));
        }
    }

    // Keep the history scrolled to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let open_session = move |session_item: crate::net::types::ChatSession| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = session.get_untracked().token {
                leptos::task::spawn_local(crate::state::actions::fetch_session_messages(
                    chat,
                    token,
                    session_item,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session_item;
        }
    };

    let new_session = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = session.get_untracked().token {
                leptos::task::spawn_local(crate::state::actions::create_chat_session(chat, token));
            }
        }
    };

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = session.get_untracked().token {
                leptos::task::spawn_local(crate::state::actions::send_chat_message(
                    chat,
                    token,
                    text.trim().to_owned(),
                ));
            }
        }
        input.set(String::new());
    };

    view! {
        <div class="chat-page">
            <NavBar/>
            <div class="chat-page__layout">
                <aside class="chat-page__sessions">
                    <button class="btn" on:click=new_session>"+ New chat"</button>
                    {move || {
                        chat.get()
                            .sessions
                            .into_iter()
                            .map(|s| {
                                let label = s.title.clone();
                                view! {
                                    <button
                                        class="chat-page__session"
                                        on:click=move |_| open_session(s.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </aside>

                <section class="chat-page__main">
                    <div class="chat-page__messages" node_ref=messages_ref>
                        {move || {
                            let state = chat.get();
                            if state.is_loading {
                                return view! { <p>"Loading messages..."</p> }.into_any();
                            }
                            view! {
                                {state
                                    .messages
                                    .into_iter()
                                    .map(|m| {
                                        let class = format!("chat-message chat-message--{}", m.sender);
                                        view! { <div class=class>{m.content}</div> }
                                    })
                                    .collect::<Vec<_>>()}
                            }
                                .into_any()
                        }}
                    </div>

                    {move || {
                        chat.get()
                            .error
                            .map(|msg| view! { <p class="chat-page__error">{msg}</p> })
                    }}

                    <div class="chat-page__composer">
                        <input
                            type="text"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    do_send();
                                }
                            }
                        />
                        <button
                            class="btn btn--primary"
                            disabled=move || chat.get().is_sending
                            on:click=move |_| do_send()
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </div>
        </div>
    }
}

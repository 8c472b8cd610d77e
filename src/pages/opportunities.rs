//! Opportunity listings page with one tab per kind.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::opportunity_card::OpportunityCard;
use crate::state::opportunities::{OpportunitiesState, OpportunityKind};
use crate::state::session::SessionState;

#[component]
pub fn OpportunitiesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let opportunities = expect_context::<RwSignal<OpportunitiesState>>();
    let navigate = use_navigate();

    let active_kind = RwSignal::new(OpportunityKind::Job);

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    let load = move |kind: OpportunityKind, page: u32| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = session.get_untracked().token {
                leptos::task::spawn_local(crate::state::actions::fetch_opportunities(
                    opportunities,
                    token,
                    kind,
                    page,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, page);
        }
    };

    // Initial load and tab switches.
    Effect::new(move || {
        load(active_kind.get(), 1);
    });

    let tab = move |kind: OpportunityKind, label: &'static str| {
        view! {
            <button
                class="tab"
                class:tab--active=move || active_kind.get() == kind
                on:click=move |_| active_kind.set(kind)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="opportunities-page">
            <NavBar/>
            <header class="opportunities-page__header">
                <h1>"Opportunities"</h1>
                <div class="opportunities-page__tabs">
                    {tab(OpportunityKind::Job, "Jobs")}
                    {tab(OpportunityKind::Course, "Courses")}
                    {tab(OpportunityKind::Project, "Projects")}
                </div>
            </header>

            {move || {
                let kind = active_kind.get();
                let list = opportunities.get().list(kind).clone();
                if list.phase.is_loading() {
                    return view! { <p>"Loading opportunities..."</p> }.into_any();
                }
                if let Some(msg) = list.phase.error() {
                    let msg = msg.to_owned();
                    return view! {
                        <div class="opportunities-page__error">
                            <p>{msg}</p>
                            <button class="btn" on:click=move |_| load(kind, 1)>"Retry"</button>
                        </div>
                    }
                        .into_any();
                }
                let page = list.page;
                let total_pages = list.total_pages;
                view! {
                    <div class="opportunities-page__grid">
                        {list
                            .items
                            .into_iter()
                            .map(|o| view! { <OpportunityCard opportunity=o/> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="opportunities-page__pager">
                        <button
                            class="btn"
                            disabled=page <= 1
                            on:click=move |_| load(kind, page - 1)
                        >
                            "Previous"
                        </button>
                        <span>{format!("Page {page} of {total_pages}")}</span>
                        <button
                            class="btn"
                            disabled=page >= total_pages
                            on:click=move |_| load(kind, page + 1)
                        >
                            "Next"
                        </button>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

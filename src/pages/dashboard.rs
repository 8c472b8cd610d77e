//! Dashboard page: greeting, latest jobs, and the user's applications.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::opportunity_card::OpportunityCard;
use crate::state::opportunities::{OpportunitiesState, OpportunityKind};
use crate::state::session::SessionState;

/// Dashboard page. Redirects to `/login` when the session is not
/// authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let opportunities = expect_context::<RwSignal<OpportunitiesState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.get_untracked().token {
            leptos::task::spawn_local(async move {
                // Independent fetches; neither gates the other.
                futures::join!(
                    crate::state::actions::fetch_opportunities(
                        opportunities,
                        token.clone(),
                        OpportunityKind::Job,
                        1,
                    ),
                    crate::state::actions::fetch_applications(opportunities, token.clone()),
                );
            });
        }
    }

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome back, {}", u.first_name))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>

            <section class="dashboard-page__section">
                <h2>"Latest jobs"</h2>
                <Show
                    when=move || !opportunities.get().jobs.phase.is_loading()
                    fallback=|| view! { <p>"Loading jobs..."</p> }
                >
                    {move || {
                        opportunities
                            .get()
                            .jobs
                            .items
                            .into_iter()
                            .map(|o| view! { <OpportunityCard opportunity=o/> })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </section>

            <section class="dashboard-page__section">
                <h2>"Your applications"</h2>
                {move || {
                    let state = opportunities.get();
                    if state.applications.is_empty() {
                        view! { <p>"No applications yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="dashboard-page__applications">
                                {state
                                    .applications
                                    .into_iter()
                                    .map(|a| {
                                        view! {
                                            <li>
                                                {format!(
                                                    "{} ({}): {}",
                                                    a.opportunity_id,
                                                    a.opportunity_type,
                                                    a.status,
                                                )}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

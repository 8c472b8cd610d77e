//! Opportunity detail page: full description plus the apply/enroll/join
//! flow with its input and success dialogs.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::application_dialog::{ApplicationDialog, SuccessDialog};
use crate::components::nav_bar::NavBar;
use crate::flow::application::{ApplicationFlow, button_text, success_message};
use crate::state::opportunities::OpportunitiesState;
use crate::state::session::SessionState;

#[component]
pub fn OpportunityDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let opportunities = expect_context::<RwSignal<OpportunitiesState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let kind = move || params.read().get("kind").unwrap_or_default();
    let id = move || params.read().get("id").unwrap_or_default();

    let flow_state = RwSignal::new(ApplicationFlow::default());
    let cover_letter = RwSignal::new(String::new());

    Effect::new(move || {
        let state = session.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Load the detail record for the routed opportunity.
    Effect::new(move || {
        let (kind, id) = (kind(), id());
        #[cfg(feature = "hydrate")]
        {
            let Ok(kind) = kind.parse() else {
                return;
            };
            if let Some(token) = session.get_untracked().token {
                leptos::task::spawn_local(crate::state::actions::fetch_opportunity(
                    opportunities,
                    token,
                    kind,
                    id,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, id);
        }
    });

    let submitting = Signal::derive(move || opportunities.get().submit.is_loading());
    let dialog_error = Signal::derive(move || flow_state.get().error.clone());

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            use crate::flow::application::{ApiGateway, ApplicationForm, submit_application};
            use crate::state::actions::dispatch_opportunities;
            use crate::state::opportunities::OpportunitiesEvent;

            let Some(token) = session.get_untracked().token else {
                return;
            };
            let (kind, id) = (kind(), id());
            let form = ApplicationForm {
                cover_letter: cover_letter.get_untracked(),
                applied_at: crate::util::time::now_iso(),
            };

            dispatch_opportunities(opportunities, OpportunitiesEvent::SubmitPending);
            leptos::task::spawn_local(async move {
                let gateway = ApiGateway { token };
                match submit_application(&gateway, &kind, &id, &form).await {
                    Ok(outcome) => {
                        dispatch_opportunities(opportunities, OpportunitiesEvent::SubmitFulfilled);
                        if let Some(detail) = outcome.detail {
                            dispatch_opportunities(
                                opportunities,
                                OpportunitiesEvent::DetailFulfilled(detail),
                            );
                        }
                        if let (Ok(kind), Some(page)) = (kind.parse(), outcome.list_page) {
                            dispatch_opportunities(
                                opportunities,
                                OpportunitiesEvent::ListFulfilled { kind, page },
                            );
                        }
                        flow_state.update(ApplicationFlow::complete);
                    }
                    Err(e) => {
                        dispatch_opportunities(
                            opportunities,
                            OpportunitiesEvent::SubmitRejected(e.clone()),
                        );
                        flow_state.update(|f| f.fail(e));
                    }
                }
            });
        }
    });

    let on_cancel = Callback::new(move |()| flow_state.update(ApplicationFlow::close_dialog));
    let on_close_success =
        Callback::new(move |()| flow_state.update(ApplicationFlow::close_success));

    view! {
        <div class="opportunity-detail-page">
            <NavBar/>
            {move || {
                let state = opportunities.get();
                if state.detail.is_loading() {
                    return view! { <p>"Loading opportunity..."</p> }.into_any();
                }
                if let Some(msg) = state.detail.error() {
                    let msg = msg.to_owned();
                    return view! { <p class="opportunity-detail-page__error">{msg}</p> }
                        .into_any();
                }
                let Some(current) = state.current else {
                    return view! { <p>"Opportunity not found."</p> }.into_any();
                };
                let has_applied = current.has_applied;
                let label = button_text(&kind(), has_applied);
                view! {
                    <article class="opportunity-detail-page__body">
                        <h1>{current.title}</h1>
                        <p class="opportunity-detail-page__org">{current.organization}</p>
                        <p class="opportunity-detail-page__description">{current.description}</p>
                        <button
                            class="btn btn--primary"
                            disabled=has_applied
                            on:click=move |_| {
                                if !has_applied {
                                    cover_letter.set(String::new());
                                    flow_state.update(ApplicationFlow::open_dialog);
                                }
                            }
                        >
                            {label}
                        </button>
                    </article>
                }
                    .into_any()
            }}

            <Show when=move || flow_state.get().is_application_dialog_open>
                <ApplicationDialog
                    cover_letter=cover_letter
                    error=dialog_error
                    submitting=submitting
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>

            {move || {
                flow_state
                    .get()
                    .is_success_dialog_open
                    .then(|| {
                        view! {
                            <SuccessDialog
                                message=success_message(&kind())
                                on_close=on_close_success
                            />
                        }
                    })
            }}
        </div>
    }
}

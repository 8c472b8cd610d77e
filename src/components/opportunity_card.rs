//! Card for one opportunity in a list, linking to its detail page.

use leptos::prelude::*;

use crate::net::types::Opportunity;

#[component]
pub fn OpportunityCard(opportunity: Opportunity) -> impl IntoView {
    let href = format!("/opportunities/{}/{}", opportunity.kind, opportunity.id);
    let has_applied = opportunity.has_applied;

    view! {
        <a class="opportunity-card" href=href>
            <h3 class="opportunity-card__title">{opportunity.title}</h3>
            <p class="opportunity-card__org">{opportunity.organization}</p>
            {opportunity
                .location
                .map(|loc| view! { <p class="opportunity-card__location">{loc}</p> })}
            <Show when=move || has_applied>
                <span class="opportunity-card__badge">"Applied"</span>
            </Show>
        </a>
    }
}

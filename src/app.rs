//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    chat::ChatPage, community::CommunityPage, dashboard::DashboardPage, login::LoginPage,
    opportunities::OpportunitiesPage, opportunity_detail::OpportunityDetailPage,
    personality_test::PersonalityTestPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::chat::ChatState;
use crate::state::community::CommunityState;
use crate::state::opportunities::OpportunitiesState;
use crate::state::persist;
use crate::state::personality::PersonalityState;
use crate::state::profile::ProfileState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rehydrates the session slice from localStorage before anything
/// renders, provides all slice contexts, and sets up client-side routing.
/// When a token was rehydrated, a current-user fetch confirms it against
/// the backend; a rejection degrades to a logged-out session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(
        persist::load()
            .map(persist::SessionEnvelope::restore)
            .unwrap_or_default(),
    );
    let profile = RwSignal::new(ProfileState::default());
    let opportunities = RwSignal::new(OpportunitiesState::default());
    let personality = RwSignal::new(PersonalityState::default());
    let chat = RwSignal::new(ChatState::default());
    let community = RwSignal::new(CommunityState::default());

    provide_context(session);
    provide_context(profile);
    provide_context(opportunities);
    provide_context(personality);
    provide_context(chat);
    provide_context(community);

    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().token.is_some() {
            leptos::task::spawn_local(crate::state::actions::fetch_current_user(session));
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/neetup.css"/>
        <Title text="NeetUP"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("opportunities") view=OpportunitiesPage/>
                <Route
                    path=(
                        StaticSegment("opportunities"),
                        ParamSegment("kind"),
                        ParamSegment("id"),
                    )
                    view=OpportunityDetailPage
                />
                <Route path=StaticSegment("personality-test") view=PersonalityTestPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=StaticSegment("community") view=CommunityPage/>
            </Routes>
        </Router>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ApiConfig;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage,
    college_details::CollegeDetailsPage,
    consultancy::ConsultancyPage,
    course_details::CourseDetailsPage,
    for_coders::ForCodersPage,
    for_students::ForStudentsPage,
    forbidden::ForbiddenPage,
    home::HomePage,
    languages::{LanguageIndex, LanguageLayout, TopicPage},
    login::LoginPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    register::RegisterPage,
    roadmap_details::RoadmapDetailsPage,
    roadmaps::RoadmapsPage,
};
use crate::routes::Access;
use crate::state::auth::SessionContext;

/// Root application component.
///
/// Restores the session before anything renders, then sets up routing. The
/// route declarations mirror `routes::resolve`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    SessionContext::provide(ApiConfig::from_build_env());

    view! {
        <Title text="Vidhyardhi"/>
        <Meta name="description" content="Tutorials, exam prep, roadmaps and college guidance."/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("consultancy") view=ConsultancyPage/>
                    <Route path=(StaticSegment("colleges"), ParamSegment("id")) view=CollegeDetailsPage/>
                    <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailsPage/>
                    <Route path=StaticSegment("forbidden") view=ForbiddenPage/>

                    <Route
                        path=StaticSegment("for-coders")
                        view=|| view! { <ProtectedRoute><ForCodersPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("for-students")
                        view=|| view! { <ProtectedRoute><ForStudentsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("roadmaps")
                        view=|| view! { <ProtectedRoute><RoadmapsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("roadmaps"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><RoadmapDetailsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute access=Access::Role(Role::Admin)><AdminPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), WildcardSegment("rest"))
                        view=|| view! { <ProtectedRoute access=Access::Role(Role::Admin)><AdminPage/></ProtectedRoute> }
                    />

                    <ParentRoute path=(StaticSegment("languages"), ParamSegment("language")) view=LanguageLayout>
                        <Route path=StaticSegment("") view=LanguageIndex/>
                        <Route path=ParamSegment("slug") view=TopicPage/>
                        <Route path=(ParamSegment("slug"), ParamSegment("subslug")) view=TopicPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

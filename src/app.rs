//! Root application component with routing and context providers.
//!
//! The session signal is created here, restored from durable storage
//! before the first route renders, and provided through context to the
//! guards and the layout. The transport's session-expiry hook is also
//! installed here so a 401 anywhere in the app lands on the login
//! screen with the store already signed out.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::route_guard::{RequireAnon, RequireAuth};
use crate::pages::{
    budgets::BudgetsPage, dashboard::DashboardPage, goals::GoalsPage, insights::InsightsPage,
    login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    transactions::TransactionsPage,
};
use crate::state::session::{self, SessionState};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    session::initialize(session);

    crate::net::expiry::on_session_expired(move || {
        session::expire(session);
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    });

    view! {
        <Title text="FinHealthTracker"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <RequireAnon>
                                <LoginPage/>
                            </RequireAnon>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| {
                        view! {
                            <RequireAnon>
                                <RegisterPage/>
                            </RequireAnon>
                        }
                    }
                />
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <DashboardPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <DashboardPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("transactions")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <TransactionsPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("budgets")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <BudgetsPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("goals")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <GoalsPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("insights")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <InsightsPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

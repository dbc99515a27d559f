//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Card, Navbar};
use crate::pages::{DashboardPage, PredictPage};

/// Application routes.
#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/predict")]
    Predict,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes linked from the navbar, in display order.
    pub const NAV: [Route; 2] = [Route::Dashboard, Route::Predict];

    /// Label shown for the route in navigation.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Predict => "Predict",
            Route::NotFound => "Not Found",
        }
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Predict => html! { <PredictPage /> },
        Route::NotFound => html! {
            <Card title={"404 - Page Not Found"}>
                <p>{"The page you're looking for doesn't exist."}</p>
            </Card>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-container">
                <Navbar />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

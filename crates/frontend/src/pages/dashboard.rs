//! Dashboard page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Card;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div>
            <h1>{"Case Forecast"}</h1>
            <p class="text-secondary" style="margin-bottom: 2rem;">
                {"Reported cases alongside minimum temperature, humidity and rainfall"}
            </p>

            <Card title={"Overview"}>
                <p>{"Case charts and the district map render here."}</p>
            </Card>

            <Card title={"Quick Actions"}>
                <div style="display: flex; gap: 1rem;">
                    <Link<Route> to={Route::Predict} classes="btn btn-primary">
                        {"Run a Prediction"}
                    </Link<Route>>
                </div>
            </Card>
        </div>
    }
}

//! Prediction page component.

use yew::prelude::*;

use crate::components::Card;

/// Prediction page component.
#[function_component(PredictPage)]
pub fn predict_page() -> Html {
    html! {
        <div>
            <h1>{"Predict"}</h1>

            <Card title={"Upload Data"}>
                <p>{"Upload a CSV of observations to forecast case counts for Sleman or a single kapanewon."}</p>
            </Card>
        </div>
    }
}

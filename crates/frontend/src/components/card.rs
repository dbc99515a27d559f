//! Card container component.

use yew::prelude::*;

/// Properties for Card component.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: String,
    #[prop_or_default]
    pub children: Html,
}

/// Card component with a header.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{ &props.title }</h2>
            </div>
            { props.children.clone() }
        </div>
    }
}

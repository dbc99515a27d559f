//! Top navigation bar that compacts while scrolling down.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_scroll_shrink;

/// Class list for the navbar element.
pub(crate) fn navbar_classes(is_shrunk: bool) -> Classes {
    classes!("navbar", is_shrunk.then_some("navbar-shrunk"))
}

/// Navigation bar component.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll = use_scroll_shrink();
    let current = use_route::<Route>();

    html! {
        <nav class={navbar_classes(scroll.is_shrunk)}>
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                {"Case Forecast"}
            </Link<Route>>
            <ul class="nav-links">
                { for Route::NAV.iter().map(|route| {
                    let class = if current.as_ref() == Some(route) {
                        "nav-link active"
                    } else {
                        "nav-link"
                    };

                    html! {
                        <li>
                            <Link<Route> to={*route} classes={class}>
                                { route.title() }
                            </Link<Route>>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}

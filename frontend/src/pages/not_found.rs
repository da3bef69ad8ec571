use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="section not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"There is nothing at this address."}</p>
            <Link<Route> to={Route::Home} classes="button button-primary">
                {"Back to the portfolio"}
            </Link<Route>>
        </div>
    }
}

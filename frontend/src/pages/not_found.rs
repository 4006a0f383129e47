use crate::components::sidebar::NavLink;
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page not-found">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <NavLink to="/" class={classes!("btn-primary")}>{"Go home"}</NavLink>
        </div>
    }
}

use super::sidebar::NavLink;
use super::theme_switcher::ThemeSwitcher;
use crate::hooks::use_navigation::use_navigator;
use crate::hooks::use_session::use_session;
use shared::routes::Route;
use yew::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator();
    let session = use_session();

    let signed_in = session.as_ref().and_then(|context| context.session.clone());
    let on_logout = {
        let logout = session.as_ref().map(|context| context.logout.clone());
        let replace = navigator.replace.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(logout) = &logout {
                logout.emit(());
            }
            replace.emit(Route::Login.path());
        })
    };

    let home = signed_in
        .as_ref()
        .map(|session| session.role.home_path())
        .unwrap_or("/");

    html! {
        <header class="navbar">
            <div class="container">
                <NavLink to={home} class={classes!("navbar-brand")}>
                    <span class="brand-icon">{"🏦"}</span>
                    <span class="brand-name">{"BankDash"}</span>
                </NavLink>
                <div class="navbar-right">
                    <ThemeSwitcher />
                    if let Some(session) = &signed_in {
                        <span class="navbar-user">
                            {format!("{} ({})", session.user_id, session.role)}
                        </span>
                        <button type="button" class="navbar-logout" onclick={on_logout}>{"Logout"}</button>
                    }
                </div>
            </div>
        </header>
    }
}

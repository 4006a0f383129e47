use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::navbar::Navbar;
use components::sidebar::{Sidebar, SidebarVariant};
use hooks::use_navigation::{use_navigator, NavigationProvider};
use hooks::use_session::{use_session, SessionProvider};
use hooks::use_theme::ThemeProvider;
use hooks::use_toast::ToastProvider;
use pages::{
    accounts::AccountsPage, admin_accounts::AdminAccountsPage, admin_home::AdminHomePage,
    admin_reports::AdminReportsPage, admin_users::AdminUsersPage, dashboard::DashboardPage,
    login::LoginPage, not_found::NotFoundPage, transactions::TransactionsPage,
    user_profile::UserProfilePage,
};
use services::logging::Logger;
use shared::routes::{guard, GuardDecision, Route};
use shared::AppConfig;
use std::rc::Rc;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<AppConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <NavigationProvider>
            <SessionProvider max_age_secs={props.config.session_max_age_secs}>
                <ThemeProvider>
                    <ToastProvider default_duration_ms={props.config.toast_duration_ms}>
                        <Router />
                    </ToastProvider>
                </ThemeProvider>
            </SessionProvider>
        </NavigationProvider>
    }
}

/// Runs the route guard on every location change, then renders the page
/// inside the layout of its area
#[function_component(Router)]
fn router() -> Html {
    let navigator = use_navigator();
    let session = use_session().and_then(|context| context.session);

    let decision = guard(&navigator.location.path, session.as_ref());
    {
        let replace = navigator.replace.clone();
        use_effect_with(decision.clone(), move |decision| {
            if let GuardDecision::Redirect(target) = decision {
                replace.emit(target.clone());
            }
        });
    }

    if matches!(decision, GuardDecision::Redirect(_)) {
        return html! {};
    }

    let route = navigator.location.route();
    let page = match &route {
        Route::Login => html! { <LoginPage /> },
        Route::AdminHome => html! { <AdminHomePage /> },
        Route::AdminAccounts => html! { <AdminAccountsPage /> },
        Route::AdminReports => html! { <AdminReportsPage /> },
        Route::AdminUsers => html! { <AdminUsersPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Accounts => html! { <AccountsPage /> },
        Route::Transactions => html! { <TransactionsPage /> },
        Route::UserProfile(id) => html! { <UserProfilePage user_id={id.clone()} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    match layout_for(&route) {
        Layout::Bare => page,
        Layout::Area(variant) => html! {
            <div class="app-shell">
                <Navbar />
                <div class="app-body">
                    <Sidebar {variant} />
                    <main class="app-content">{page}</main>
                </div>
            </div>
        },
    }
}

#[derive(Debug, PartialEq)]
enum Layout {
    Bare,
    Area(SidebarVariant),
}

fn layout_for(route: &Route) -> Layout {
    match route {
        Route::Login | Route::NotFound => Layout::Bare,
        route if route.is_admin_area() => Layout::Area(SidebarVariant::Admin),
        _ => Layout::Area(SidebarVariant::User),
    }
}

fn main() {
    let config = services::config::load();
    Logger::init(&config);
    Logger::info_with_component("main", &format!("starting with API base {}", config.api_base_url));
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_routes() {
        assert_eq!(layout_for(&Route::Login), Layout::Bare);
        assert_eq!(layout_for(&Route::NotFound), Layout::Bare);
        assert_eq!(layout_for(&Route::AdminReports), Layout::Area(SidebarVariant::Admin));
        assert_eq!(layout_for(&Route::Dashboard), Layout::Area(SidebarVariant::User));
        assert_eq!(
            layout_for(&Route::UserProfile("me".to_string())),
            Layout::Area(SidebarVariant::User)
        );
    }
}

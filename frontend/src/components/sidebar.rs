use crate::hooks::use_navigation::use_navigator;
use crate::hooks::use_session::use_session;
use crate::hooks::use_toast::use_toast;
use gloo::timers::callback::Timeout;
use shared::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

/// Anchor that navigates through history instead of reloading the page
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let navigator = use_navigator();
    let onclick = {
        let push = navigator.push.clone();
        let to = props.to.to_string();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() || e.shift_key() {
                return;
            }
            e.prevent_default();
            push.emit(to.clone());
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.to.clone()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarVariant {
    Admin,
    User,
}

struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const ADMIN_ITEMS: [NavItem; 4] = [
    NavItem { label: "Admin Home", href: "/admin", icon: "🏠" },
    NavItem { label: "Accounts", href: "/admin/accounts", icon: "💳" },
    NavItem { label: "Reports", href: "/admin/reports", icon: "📊" },
    NavItem { label: "Users", href: "/admin/users", icon: "👥" },
];

const USER_ITEMS: [NavItem; 4] = [
    NavItem { label: "Dashboard", href: "/dashboard", icon: "🏠" },
    NavItem { label: "Accounts", href: "/accounts", icon: "💳" },
    NavItem { label: "Transactions", href: "/transaction", icon: "💸" },
    NavItem { label: "Profile", href: "/user/me", icon: "👤" },
];

/// Exact match, or a child path for every item except the profile link
fn is_active(variant: SidebarVariant, item: &NavItem, path: &str) -> bool {
    path == item.href
        || (variant == SidebarVariant::User
            && item.href != "/user/me"
            && path.starts_with(&format!("{}/", item.href)))
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub variant: SidebarVariant,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let navigator = use_navigator();
    let session = use_session();
    let toast = use_toast();
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };
    let on_overlay_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let on_logout = {
        let toast = toast.clone();
        let logout = session.as_ref().map(|session| session.logout.clone());
        let replace = navigator.replace.clone();
        Callback::from(move |_: MouseEvent| {
            toast.info("Logging you out...", Some("Goodbye"));
            let toast = toast.clone();
            let logout = logout.clone();
            let replace = replace.clone();
            Timeout::new(500, move || {
                if let Some(logout) = &logout {
                    logout.emit(());
                }
                toast.success("You have been logged out successfully", Some("Logged Out"));
                replace.emit(Route::Login.path());
            })
            .forget();
        })
    };

    let (items, title, subtitle) = match props.variant {
        SidebarVariant::Admin => (&ADMIN_ITEMS, "Admin Panel", "Management Console"),
        SidebarVariant::User => (&USER_ITEMS, "My Account", "Personal Banking"),
    };
    let path = navigator.location.path.as_str();
    let toggle_icon = if *is_open { "✕" } else { "☰" };

    html! {
        <>
            <button type="button" class="sidebar-toggle" aria-label="Toggle navigation" onclick={toggle}>
                {toggle_icon}
            </button>
            <aside class={classes!("sidebar", (*is_open).then_some("open"))}>
                <div class="sidebar-header">
                    <h2>{title}</h2>
                    <p>{subtitle}</p>
                </div>
                <nav class="sidebar-nav">
                    {for items.iter().map(|item| {
                        let active = is_active(props.variant, item, path);
                        html! {
                            <NavLink
                                to={item.href}
                                class={classes!("sidebar-link", active.then_some("active"))}
                                on_navigate={close.clone()}
                            >
                                <span class="sidebar-icon">{item.icon}</span>
                                <span>{item.label}</span>
                                if active {
                                    <span class="sidebar-active-marker">{"›"}</span>
                                }
                            </NavLink>
                        }
                    })}
                </nav>
                <div class="sidebar-footer">
                    <button type="button" class="logout-button" onclick={on_logout}>
                        {"🚪 Logout"}
                    </button>
                </div>
            </aside>
            if *is_open {
                <div class="sidebar-overlay" onclick={on_overlay_click}></div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_links_match_exactly() {
        let home = &ADMIN_ITEMS[0];
        assert!(is_active(SidebarVariant::Admin, home, "/admin"));
        assert!(!is_active(SidebarVariant::Admin, home, "/admin/users"));
    }

    #[test]
    fn test_user_links_match_children_except_profile() {
        let accounts = &USER_ITEMS[1];
        let profile = &USER_ITEMS[3];
        assert!(is_active(SidebarVariant::User, accounts, "/accounts/42"));
        assert!(!is_active(SidebarVariant::User, profile, "/user/me/settings"));
        assert!(is_active(SidebarVariant::User, profile, "/user/me"));
    }
}

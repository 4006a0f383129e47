//! Route table and the guard that runs before every navigation.

use crate::session::{Role, Session};
use std::fmt;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    AdminHome,
    AdminAccounts,
    AdminReports,
    AdminUsers,
    Dashboard,
    Accounts,
    Transactions,
    UserProfile(String),
    NotFound,
}

impl Route {
    /// Resolve a location pathname. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Login,
            ["admin"] => Route::AdminHome,
            ["admin", "accounts"] => Route::AdminAccounts,
            ["admin", "reports"] => Route::AdminReports,
            ["admin", "users"] => Route::AdminUsers,
            ["dashboard"] => Route::Dashboard,
            ["accounts"] => Route::Accounts,
            ["transaction"] => Route::Transactions,
            ["user", id] => Route::UserProfile((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::AdminHome => "/admin".to_string(),
            Route::AdminAccounts => "/admin/accounts".to_string(),
            Route::AdminReports => "/admin/reports".to_string(),
            Route::AdminUsers => "/admin/users".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Accounts => "/accounts".to_string(),
            Route::Transactions => "/transaction".to_string(),
            Route::UserProfile(id) => format!("/user/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn is_admin_area(&self) -> bool {
        matches!(
            self,
            Route::AdminHome | Route::AdminAccounts | Route::AdminReports | Route::AdminUsers
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of the navigation guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Continue,
    Redirect(String),
}

const USER_AREA_PREFIXES: [&str; 4] = ["/dashboard", "/accounts", "/transaction", "/user"];

fn login_redirect(path: &str) -> GuardDecision {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", path)
        .finish();
    GuardDecision::Redirect(format!("/?{}", query))
}

/// Decide whether `path` may be shown to `session`.
///
/// Signed-in visitors on the login page go to their home page, the admin
/// area needs the admin role, and the user area needs any session.
pub fn guard(path: &str, session: Option<&Session>) -> GuardDecision {
    let decision = if path == "/" {
        match session {
            Some(session) => GuardDecision::Redirect(session.role.home_path().to_string()),
            None => GuardDecision::Continue,
        }
    } else if path.starts_with("/admin") {
        match session {
            Some(session) if session.role == Role::Admin => GuardDecision::Continue,
            _ => login_redirect(path),
        }
    } else if USER_AREA_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        match session {
            Some(_) => GuardDecision::Continue,
            None => login_redirect(path),
        }
    } else {
        GuardDecision::Continue
    };

    if let GuardDecision::Redirect(target) = &decision {
        log::debug!("route guard: {} -> {}", path, target);
    }
    decision
}

/// The `redirect` target carried by the login page query, if it is a local path
pub fn redirect_target(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "redirect")
        .map(|(_, value)| value.into_owned())
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: "mock-token".to_string(),
            role,
            user_id: "u".to_string(),
        }
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse(""), Route::Login);
        assert_eq!(Route::parse("/admin/"), Route::AdminHome);
        assert_eq!(Route::parse("/admin/users"), Route::AdminUsers);
        assert_eq!(Route::parse("/transaction"), Route::Transactions);
        assert_eq!(Route::parse("/user/17"), Route::UserProfile("17".to_string()));
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::UserProfile("17".to_string()).path(), "/user/17");
    }

    #[test]
    fn test_login_page_redirects_signed_in_users() {
        assert_eq!(guard("/", None), GuardDecision::Continue);
        assert_eq!(
            guard("/", Some(&session(Role::Admin))),
            GuardDecision::Redirect("/admin".to_string())
        );
        assert_eq!(
            guard("/", Some(&session(Role::User))),
            GuardDecision::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn test_admin_area_requires_admin() {
        assert_eq!(
            guard("/admin/users", None),
            GuardDecision::Redirect("/?redirect=%2Fadmin%2Fusers".to_string())
        );
        assert_eq!(
            guard("/admin", Some(&session(Role::User))),
            GuardDecision::Redirect("/?redirect=%2Fadmin".to_string())
        );
        assert_eq!(guard("/admin", Some(&session(Role::Admin))), GuardDecision::Continue);
    }

    #[test]
    fn test_user_area_requires_session() {
        for path in ["/dashboard", "/accounts", "/transaction", "/user/3"] {
            assert!(matches!(guard(path, None), GuardDecision::Redirect(_)), "{}", path);
            assert_eq!(guard(path, Some(&session(Role::User))), GuardDecision::Continue);
            assert_eq!(guard(path, Some(&session(Role::Admin))), GuardDecision::Continue);
        }
        assert_eq!(guard("/about", None), GuardDecision::Continue);
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(
            redirect_target("?redirect=%2Fadmin%2Fusers").as_deref(),
            Some("/admin/users")
        );
        assert_eq!(redirect_target("redirect=https://evil.test"), None);
        assert_eq!(redirect_target("redirect=//evil.test"), None);
        assert_eq!(redirect_target(""), None);
    }
}

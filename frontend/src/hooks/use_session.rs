use crate::services::date_utils::now_millis;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStorage;
use shared::session::{AuthError, Credentials, Session, SessionManager};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub session: Option<Session>,
    pub login: Callback<Credentials, Result<Session, AuthError>>,
    pub logout: Callback<()>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub max_age_secs: u64,
    #[prop_or_default]
    pub children: Html,
}

/// Restores the stored session on mount and shares it through context
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let manager = {
        let max_age_secs = props.max_age_secs;
        use_mut_ref(move || {
            let mut manager = SessionManager::new(BrowserStorage, max_age_secs);
            if let Some(session) = manager.initialize() {
                Logger::debug_with_component(
                    "SessionProvider",
                    &format!("restored session for {}", session.user_id),
                );
            }
            manager
        })
    };
    let session = {
        let manager = manager.clone();
        use_state(move || manager.borrow().session().cloned())
    };

    let login = {
        let manager = manager.clone();
        let session = session.clone();
        use_callback((), move |credentials: Credentials, _| {
            let result = manager
                .borrow_mut()
                .login(&credentials, now_millis())
                .map(Session::clone);
            match &result {
                Ok(logged_in) => session.set(Some(logged_in.clone())),
                Err(e) => Logger::warn_with_component("SessionProvider", &format!("login failed: {}", e)),
            }
            result
        })
    };

    let logout = {
        let session = session.clone();
        use_callback((), move |_: (), _| {
            manager.borrow_mut().logout();
            session.set(None);
        })
    };

    let context = SessionContext {
        session: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}

use gloo::history::{BrowserHistory, History};
use shared::routes::Route;
use yew::prelude::*;

/// Current pathname plus raw query string (with its leading `?`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    fn of(history: &BrowserHistory) -> Self {
        let location = history.location();
        Self {
            path: location.path().to_string(),
            query: location.query_str().to_string(),
        }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }
}

/// Location plus the callbacks that change it
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub location: Location,
    pub push: Callback<String>,
    pub replace: Callback<String>,
}

impl Navigator {
    /// Navigator used outside a [`NavigationProvider`]; it still moves the
    /// browser but nothing re-renders.
    fn detached() -> Self {
        let history = BrowserHistory::new();
        let location = Location::of(&history);
        let push = {
            let history = history.clone();
            Callback::from(move |path: String| history.push(path))
        };
        let replace = Callback::from(move |path: String| history.replace(path));
        Self {
            location,
            push,
            replace,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let history = use_memo((), |_| BrowserHistory::new());
    let location = use_state(|| Location::of(&history));

    {
        let history = history.clone();
        let location = location.clone();
        use_effect_with((), move |_| {
            let listener = history.listen({
                let history = (*history).clone();
                move || location.set(Location::of(&history))
            });
            move || drop(listener)
        });
    }

    let push = use_callback(history.clone(), |path: String, history| {
        log::debug!("navigate -> {}", path);
        history.push(path);
    });
    let replace = use_callback(history, |path: String, history| {
        log::debug!("redirect -> {}", path);
        history.replace(path);
    });

    let navigator = Navigator {
        location: (*location).clone(),
        push,
        replace,
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            {props.children.clone()}
        </ContextProvider<Navigator>>
    }
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().unwrap_or_else(Navigator::detached)
}

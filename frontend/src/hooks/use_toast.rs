use crate::components::toast::ToastContainer;
use shared::toast::{ToastKind, ToastQueue};
use std::rc::Rc;
use yew::prelude::*;

pub enum ToastAction {
    Push {
        kind: ToastKind,
        message: String,
        title: Option<String>,
        duration_ms: Option<u32>,
    },
    Dismiss(u64),
}

#[derive(Clone, PartialEq)]
pub struct ToastState {
    pub queue: ToastQueue,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            ToastAction::Push {
                kind,
                message,
                title,
                duration_ms,
            } => {
                queue.push(kind, message, title, duration_ms);
            }
            ToastAction::Dismiss(id) => {
                if !queue.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(ToastState { queue })
    }
}

/// Handle for raising notifications from any component.
///
/// Outside a [`ToastProvider`] notifications only reach the log.
#[derive(Clone, Default, PartialEq)]
pub struct ToastContext {
    dispatcher: Option<UseReducerDispatcher<ToastState>>,
}

impl ToastContext {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>, title: Option<&str>, duration_ms: Option<u32>) {
        let message = message.into();
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push {
                kind,
                message,
                title: title.map(str::to_string),
                duration_ms,
            }),
            None => log::info!("toast ({:?}): {}", kind, message),
        }
    }

    pub fn success(&self, message: impl Into<String>, title: Option<&str>) {
        self.show(ToastKind::Success, message, title, None);
    }

    pub fn error(&self, message: impl Into<String>, title: Option<&str>) {
        self.show(ToastKind::Error, message, title, None);
    }

    pub fn warning(&self, message: impl Into<String>, title: Option<&str>) {
        self.show(ToastKind::Warning, message, title, None);
    }

    pub fn info(&self, message: impl Into<String>, title: Option<&str>) {
        self.show(ToastKind::Info, message, title, None);
    }

    pub fn dismiss(&self, id: u64) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub default_duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let default_duration_ms = props.default_duration_ms;
    let state = use_reducer(move || ToastState {
        queue: ToastQueue::new(default_duration_ms),
    });

    let context = ToastContext {
        dispatcher: Some(state.dispatcher()),
    };
    let on_dismiss = {
        let context = context.clone();
        Callback::from(move |id: u64| context.dismiss(id))
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastContainer toasts={state.queue.toasts().to_vec()} {on_dismiss} />
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_default()
}

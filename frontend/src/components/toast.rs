use gloo::timers::callback::Timeout;
use shared::toast::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-container">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss; dropping the timer on unmount cancels it
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((props.toast.id, props.toast.duration_ms), move |&(id, duration_ms)| {
            let timer = (duration_ms > 0).then(|| Timeout::new(duration_ms, move || on_dismiss.emit(id)));
            move || drop(timer)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let toast = &props.toast;
    html! {
        <div class={classes!("toast", toast.kind.css_class())} role="alert">
            <span class="toast-icon">{toast.kind.icon()}</span>
            <div class="toast-body">
                if let Some(title) = &toast.title {
                    <div class="toast-title">{title}</div>
                }
                <div class="toast-message">{&toast.message}</div>
            </div>
            <button type="button" class="toast-close" aria-label="Close" onclick={on_close}>{"×"}</button>
        </div>
    }
}

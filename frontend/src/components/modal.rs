use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ModalSize {
    fn css_class(self) -> &'static str {
        match self {
            ModalSize::Small => "modal-sm",
            ModalSize::Medium => "modal-md",
            ModalSize::Large => "modal-lg",
            ModalSize::ExtraLarge => "modal-xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: ModalSize,
    #[prop_or(true)]
    pub show_close_button: bool,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
    #[prop_or(true)]
    pub close_on_escape: bool,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Escape closes the dialog while it is open
    {
        let on_close = props.on_close.clone();
        let active = props.is_open && props.close_on_escape;
        use_effect_with(active, move |&active| {
            let listener = active.then(|| {
                EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|e| e.key() == "Escape")
                        .unwrap_or(false);
                    if escape {
                        on_close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let enabled = props.close_on_backdrop;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if enabled {
                on_close.emit(());
            }
        })
    };
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("modal", props.size.css_class())} role="dialog" aria-modal="true" onclick={on_dialog_click}>
                if props.title.is_some() || props.show_close_button {
                    <div class="modal-header">
                        if let Some(title) = &props.title {
                            <h3 class="modal-title">{title.clone()}</h3>
                        }
                        if props.show_close_button {
                            <button type="button" class="modal-close" aria-label="Close" onclick={on_close_click}>
                                {"×"}
                            </button>
                        }
                    </div>
                }
                <div class="modal-body">
                    {props.children.clone()}
                </div>
                if let Some(footer) = &props.footer {
                    <div class="modal-footer">{footer.clone()}</div>
                }
            </div>
        </div>
    }
}

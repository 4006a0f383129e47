use crate::services::logging::Logger;
use gloo::storage::{LocalStorage, Storage};
use shared::theme::{ThemeName, THEME_STORAGE_KEY};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: ThemeName,
    pub set_theme: Callback<ThemeName>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        let stored = LocalStorage::get::<String>(THEME_STORAGE_KEY).ok();
        ThemeName::from_stored(stored.as_deref())
    });

    use_effect_with(*theme, |theme| {
        if let Err(e) = apply_theme(*theme) {
            Logger::error_with_component("ThemeProvider", &format!("failed to apply theme {}: {:?}", theme, e));
        }
    });

    let set_theme = {
        let theme = theme.clone();
        use_callback((), move |next: ThemeName, _| {
            if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, next.as_str()) {
                log::warn!("could not persist theme: {}", e);
            }
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

/// Root class, CSS variables and the `theme-color` meta tag
fn apply_theme(theme: ThemeName) -> Result<(), JsValue> {
    let document = gloo::utils::document();
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;

    let classes = root.class_list();
    for name in ThemeName::ALL {
        classes.remove_1(name.as_str())?;
    }
    classes.add_1(theme.as_str())?;

    let config = theme.config();
    let style = root.dyn_into::<HtmlElement>()?.style();
    for (name, value) in config.css_variables() {
        style.set_property(name, value)?;
    }

    let meta = match document.query_selector("meta[name='theme-color']")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "theme-color")?;
            if let Some(head) = document.head() {
                head.append_child(&meta)?;
            }
            meta
        }
    };
    meta.set_attribute("content", config.meta_color())?;

    log::debug!("theme applied: {}", theme);
    Ok(())
}

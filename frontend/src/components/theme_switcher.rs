use crate::hooks::use_theme::use_theme;
use shared::theme::ThemeName;
use yew::prelude::*;

#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let theme = use_theme();
    let is_open = use_state(|| false);
    let Some(theme) = theme else {
        return html! {};
    };

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(false);
        })
    };

    let current = theme.theme.config();

    html! {
        <div class="theme-switcher">
            <button type="button" class="theme-switcher-button" title="Change theme" onclick={toggle}>
                <span class="theme-icon">{current.icon}</span>
                <span class="theme-name">{current.name}</span>
            </button>
            if *is_open {
                <div class="dropdown-backdrop" onclick={close}></div>
                <div class="theme-menu">
                    {for ThemeName::ALL.into_iter().map(|name| {
                        let config = name.config();
                        let onclick = {
                            let set_theme = theme.set_theme.clone();
                            let is_open = is_open.clone();
                            Callback::from(move |_: MouseEvent| {
                                set_theme.emit(name);
                                is_open.set(false);
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("theme-option", (name == theme.theme).then_some("active"))}
                                {onclick}
                            >
                                <span
                                    class="theme-swatch"
                                    style={format!(
                                        "background: linear-gradient(135deg, {}, {});",
                                        config.colors.accent_from, config.colors.accent_to
                                    )}
                                ></span>
                                <span class="theme-option-text">
                                    <span class="theme-option-name">{config.icon}{" "}{config.name}</span>
                                    <span class="theme-option-description">{config.description}</span>
                                </span>
                            </button>
                        }
                    })}
                </div>
            }
        </div>
    }
}

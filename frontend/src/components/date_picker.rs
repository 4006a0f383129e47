use crate::services::date_utils::today;
use chrono::{Datelike, NaiveDate};
use shared::calendar::{
    DateBounds, DatePickerState, DateRange, PickerEvent, SelectionMode, WEEKDAY_LABELS,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    #[prop_or(SelectionMode::Single)]
    pub mode: SelectionMode,
    /// Controlled single value
    #[prop_or_default]
    pub value: Option<NaiveDate>,
    /// Controlled range value
    #[prop_or_default]
    pub range_value: Option<DateRange>,
    #[prop_or_default]
    pub on_change: Option<Callback<Option<NaiveDate>>>,
    #[prop_or_default]
    pub on_range_change: Option<Callback<DateRange>>,
    #[prop_or_default]
    pub min_date: Option<NaiveDate>,
    #[prop_or_default]
    pub max_date: Option<NaiveDate>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let state = {
        let mode = props.mode;
        let bounds = DateBounds::new(props.min_date, props.max_date);
        let value = props.value;
        let range_value = props.range_value;
        use_state(move || {
            let mut state = DatePickerState::new(mode, bounds, today());
            state.sync_value(value);
            state.sync_range(range_value);
            state
        })
    };

    // Controlled props replace the internal selection when they change
    {
        let state = state.clone();
        use_effect_with((props.value, props.range_value), move |(value, range)| {
            let mut next = (*state).clone();
            next.sync_value(*value);
            next.sync_range(*range);
            if next != *state {
                state.set(next);
            }
        });
    }
    {
        let state = state.clone();
        use_effect_with((props.min_date, props.max_date), move |(min, max)| {
            let bounds = DateBounds::new(*min, *max);
            if state.bounds() != bounds {
                let mut next = (*state).clone();
                next.set_bounds(bounds);
                state.set(next);
            }
        });
    }

    let emit = {
        let on_change = props.on_change.clone();
        let on_range_change = props.on_range_change.clone();
        move |event: PickerEvent| match event {
            PickerEvent::DateChanged(day) => {
                if let Some(callback) = &on_change {
                    callback.emit(Some(day));
                }
            }
            PickerEvent::RangeChanged(range) => {
                if let Some(callback) = &on_range_change {
                    callback.emit(range);
                }
            }
        }
    };

    let update = {
        let state = state.clone();
        move |change: &dyn Fn(&mut DatePickerState)| {
            let mut next = (*state).clone();
            change(&mut next);
            state.set(next);
        }
    };

    let toggle = {
        let update = update.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| update(&|s| s.toggle(disabled)))
    };
    let dismiss = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(&|s| s.dismiss()))
    };
    let prev_month = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(&|s| s.previous_month()))
    };
    let next_month = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| update(&|s| s.next_month()))
    };
    let on_today = {
        let state = state.clone();
        let emit = emit.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            let event = next.select_today(today());
            state.set(next);
            emit(event);
        })
    };

    let placeholder = props
        .placeholder
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| props.mode.default_placeholder().to_string());
    let display_text = state.display_text(&placeholder);
    let now = today();
    let view = state.view();

    html! {
        <div class="date-picker">
            if let Some(label) = &props.label {
                <label class="date-picker-label">{label.clone()}</label>
            }

            <button
                type="button"
                class={classes!("date-display-button", (!state.has_value()).then_some("placeholder"))}
                onclick={toggle}
                disabled={props.disabled}
            >
                <span class="date-text">{display_text}</span>
                <span class="calendar-icon">{"📅"}</span>
            </button>

            if state.is_open() && !props.disabled {
                <div class="date-picker-backdrop" onclick={dismiss}></div>
                <div class="calendar-dropdown">
                    <div class="calendar-header">
                        <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                        <span class="month-year">{view.title()}</span>
                        <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                    </div>

                    <div class="weekday-header">
                        {for WEEKDAY_LABELS.iter().map(|label| html! { <span>{*label}</span> })}
                    </div>

                    <div class="calendar-days">
                        {for view.cells().into_iter().map(|cell| match cell {
                            None => html! { <span class="calendar-day empty"></span> },
                            Some(day) => {
                                let disabled = state.is_disabled(day);
                                let onclick = {
                                    let state = state.clone();
                                    let emit = emit.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*state).clone();
                                        let event = next.click_day(day);
                                        state.set(next);
                                        if let Some(event) = event {
                                            emit(event);
                                        }
                                    })
                                };
                                let onmouseenter = {
                                    let update = update.clone();
                                    Callback::from(move |_: MouseEvent| update(&|s| s.hover_day(day)))
                                };
                                html! {
                                    <button
                                        type="button"
                                        class={classes!(
                                            "calendar-day",
                                            state.is_selected(day).then_some("selected"),
                                            state.in_preview(day).then_some("in-range"),
                                            (day == now).then_some("today"),
                                            disabled.then_some("disabled")
                                        )}
                                        {disabled}
                                        {onclick}
                                        {onmouseenter}
                                    >
                                        {day.day()}
                                    </button>
                                }
                            }
                        })}
                    </div>

                    <div class="calendar-footer">
                        <button type="button" class="today-button" onclick={on_today}>
                            {"Today"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

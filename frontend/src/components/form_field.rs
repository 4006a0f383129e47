use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Email,
    Password,
    Tel,
    Url,
    Date,
    TextArea,
    Select,
    Checkbox,
}

impl FieldType {
    fn input_type(self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Tel => "tel",
            FieldType::Url => "url",
            FieldType::Date => "date",
            FieldType::Checkbox => "checkbox",
            FieldType::Text | FieldType::TextArea | FieldType::Select => "text",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub field_type: FieldType,
    /// Current value; checkboxes use `"true"` / `"false"`
    #[prop_or_default]
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    /// `(value, label)` pairs for [`FieldType::Select`]
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
    #[prop_or(4)]
    pub rows: u32,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let id = format!("field-{}", props.name);
    let class = classes!("form-input", props.error.is_some().then_some("has-error"));
    let placeholder = props.placeholder.clone().unwrap_or_default();

    let control = match props.field_type {
        FieldType::TextArea => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit(area.value());
            });
            html! {
                <textarea
                    id={id.clone()}
                    name={props.name.clone()}
                    {class}
                    rows={props.rows.to_string()}
                    value={props.value.clone()}
                    {placeholder}
                    required={props.required}
                    disabled={props.disabled}
                    {oninput}
                />
            }
        }
        FieldType::Select => {
            let on_change = props.on_change.clone();
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit(select.value());
            });
            html! {
                <select
                    id={id.clone()}
                    name={props.name.clone()}
                    {class}
                    required={props.required}
                    disabled={props.disabled}
                    {onchange}
                >
                    {for props.options.iter().map(|(value, label)| html! {
                        <option value={value.clone()} selected={*value == props.value}>{label.clone()}</option>
                    })}
                </select>
            }
        }
        FieldType::Checkbox => {
            let on_change = props.on_change.clone();
            let onchange = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(input.checked().to_string());
            });
            html! {
                <input
                    type="checkbox"
                    id={id.clone()}
                    name={props.name.clone()}
                    class="form-checkbox"
                    checked={props.value.as_str() == "true"}
                    disabled={props.disabled}
                    {onchange}
                />
            }
        }
        other => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(input.value());
            });
            html! {
                <input
                    type={other.input_type()}
                    id={id.clone()}
                    name={props.name.clone()}
                    {class}
                    value={props.value.clone()}
                    {placeholder}
                    required={props.required}
                    disabled={props.disabled}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class={classes!("form-group", (props.field_type == FieldType::Checkbox).then_some("form-group-inline"))}>
            if let Some(label) = &props.label {
                <label for={id}>
                    {label.clone()}
                    if props.required {
                        <span class="required">{" *"}</span>
                    }
                </label>
            }
            {control}
            if let Some(error) = &props.error {
                <p class="form-error">{error.clone()}</p>
            } else if let Some(helper) = &props.helper_text {
                <p class="form-helper">{helper.clone()}</p>
            }
        </div>
    }
}

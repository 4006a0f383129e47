use super::date_picker::DatePicker;
use super::form_field::{FieldType, FormField};
use crate::hooks::use_toast::use_toast;
use crate::services::date_utils::today;
use chrono::NaiveDate;
use shared::forms::{
    AccountApplication, AccountOpeningForm as FormState, ACCOUNT_TYPES, DOCUMENT_TYPES,
    EMPLOYMENT_STATUSES, STEP_LABELS, TOTAL_STEPS,
};
use std::collections::HashMap;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

/// Submitted application plus the chosen files, in document order
pub type Submission = (AccountApplication, Vec<File>);

#[derive(Properties, PartialEq)]
pub struct AccountOpeningFormProps {
    pub on_submit: Callback<Submission>,
    pub on_cancel: Callback<()>,
}

fn options(pairs: &[(&'static str, &'static str)]) -> Vec<(AttrValue, AttrValue)> {
    pairs
        .iter()
        .map(|&(value, label)| (AttrValue::from(value), AttrValue::from(label)))
        .collect()
}

#[function_component(AccountOpeningForm)]
pub fn account_opening_form(props: &AccountOpeningFormProps) -> Html {
    let toast = use_toast();
    let form = use_state(FormState::new);
    let files = use_mut_ref(HashMap::<String, File>::new);

    let field = |update: fn(&mut FormState, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let on_birth_date = {
        let form = form.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            let mut next = (*form).clone();
            next.personal.date_of_birth = date;
            form.set(next);
        })
    };

    let on_next = {
        let form = form.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            match next.next() {
                Ok(step) => {
                    toast.success(format!("Step {} of {}", step, TOTAL_STEPS), Some("Progress"));
                    form.set(next);
                }
                Err(e) => toast.error(e.to_string(), Some("Validation Error")),
            }
        })
    };

    let on_back = {
        let form = form.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            if form.step() == 1 {
                on_cancel.emit(());
                return;
            }
            let mut next = (*form).clone();
            next.previous();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let files = files.clone();
        let toast = toast.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit() {
                Ok(application) => {
                    let files = files.borrow();
                    let chosen = application
                        .documents
                        .iter()
                        .filter_map(|doc| files.get(&doc.id).cloned())
                        .collect();
                    toast.success("Account opening form submitted successfully!", Some("Success"));
                    on_submit.emit((application, chosen));
                }
                Err(e) => toast.error(e.to_string(), Some("Validation Error")),
            }
        })
    };

    let on_add_document = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.add_document();
            form.set(next);
        })
    };

    let step = form.step();
    let back_label = if step == 1 { "Cancel" } else { "Previous" };
    let personal = &form.personal;
    let account = &form.account;

    let step_content = match step {
        1 => html! {
            <div class="form-step">
                <div class="form-row">
                    <FormField name="first_name" label="First Name" required={true}
                        value={personal.first_name.clone()}
                        on_change={field(|f, v| f.personal.first_name = v)} />
                    <FormField name="last_name" label="Last Name" required={true}
                        value={personal.last_name.clone()}
                        on_change={field(|f, v| f.personal.last_name = v)} />
                </div>
                <div class="form-row">
                    <FormField name="email" label="Email" field_type={FieldType::Email} required={true}
                        value={personal.email.clone()}
                        on_change={field(|f, v| f.personal.email = v)} />
                    <FormField name="phone" label="Phone" field_type={FieldType::Tel} required={true}
                        value={personal.phone.clone()}
                        on_change={field(|f, v| f.personal.phone = v)} />
                </div>
                <div class="form-group">
                    <DatePicker
                        label="Date of Birth *"
                        value={personal.date_of_birth}
                        on_change={on_birth_date}
                        max_date={Some(today())}
                        placeholder="Select date of birth"
                    />
                </div>
                <FormField name="address" label="Address" required={true}
                    value={personal.address.clone()}
                    on_change={field(|f, v| f.personal.address = v)} />
                <div class="form-row">
                    <FormField name="city" label="City" required={true}
                        value={personal.city.clone()}
                        on_change={field(|f, v| f.personal.city = v)} />
                    <FormField name="state" label="State" required={true}
                        value={personal.state.clone()}
                        on_change={field(|f, v| f.personal.state = v)} />
                    <FormField name="zip_code" label="ZIP Code" required={true}
                        value={personal.zip_code.clone()}
                        on_change={field(|f, v| f.personal.zip_code = v)} />
                </div>
            </div>
        },
        2 => html! {
            <div class="form-step">
                <FormField name="account_type" label="Account Type" field_type={FieldType::Select} required={true}
                    options={options(&ACCOUNT_TYPES)}
                    value={account.account_type.clone()}
                    on_change={field(|f, v| f.account.account_type = v)} />
                <FormField name="initial_deposit" label="Initial Deposit ($)" field_type={FieldType::Number} required={true}
                    placeholder="0.00"
                    value={account.initial_deposit.clone()}
                    on_change={field(|f, v| f.account.initial_deposit = v)} />
                <FormField name="purpose" label="Purpose of Account" field_type={FieldType::TextArea} required={true}
                    rows={3}
                    value={account.purpose.clone()}
                    on_change={field(|f, v| f.account.purpose = v)} />
                <div class="form-row">
                    <FormField name="employment_status" label="Employment Status" field_type={FieldType::Select} required={true}
                        options={options(&EMPLOYMENT_STATUSES)}
                        value={account.employment_status.clone()}
                        on_change={field(|f, v| f.account.employment_status = v)} />
                    <FormField name="annual_income" label="Annual Income ($)" field_type={FieldType::Number} required={true}
                        value={account.annual_income.clone()}
                        on_change={field(|f, v| f.account.annual_income = v)} />
                </div>
            </div>
        },
        _ => {
            let mut document_options = vec![(AttrValue::from(""), AttrValue::from("Select document type"))];
            document_options.extend(options(&DOCUMENT_TYPES));
            let removable = form.can_remove_document();
            html! {
                <div class="form-step">
                    {for form.documents().iter().map(|doc| {
                        let on_type = {
                            let form = form.clone();
                            let id = doc.id.clone();
                            Callback::from(move |value: String| {
                                let mut next = (*form).clone();
                                next.set_document_type(&id, &value);
                                form.set(next);
                            })
                        };
                        let on_file = {
                            let form = form.clone();
                            let files = files.clone();
                            let id = doc.id.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let file = input.files().and_then(|list| list.get(0));
                                let mut next = (*form).clone();
                                next.set_document_file(&id, file.as_ref().map(File::name).as_deref());
                                match file {
                                    Some(file) => files.borrow_mut().insert(id.clone(), file),
                                    None => files.borrow_mut().remove(&id),
                                };
                                form.set(next);
                            })
                        };
                        let on_remove = {
                            let form = form.clone();
                            let files = files.clone();
                            let id = doc.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*form).clone();
                                if next.remove_document(&id) {
                                    files.borrow_mut().remove(&id);
                                    form.set(next);
                                }
                            })
                        };
                        html! {
                            <div class="document-slot" key={doc.id.clone()}>
                                <FormField name={format!("doc-type-{}", doc.id)} label="Document Type"
                                    field_type={FieldType::Select} required={true}
                                    options={document_options.clone()}
                                    value={doc.doc_type.clone()}
                                    on_change={on_type} />
                                <div class="form-group">
                                    <label>{"File"}</label>
                                    <input type="file" accept=".pdf,.jpg,.jpeg,.png" onchange={on_file} />
                                    if !doc.file_name.is_empty() {
                                        <p class="form-helper">{format!("Selected: {}", doc.file_name)}</p>
                                    }
                                </div>
                                if removable {
                                    <button type="button" class="btn-link danger" onclick={on_remove}>{"Remove"}</button>
                                }
                            </div>
                        }
                    })}
                    <button type="button" class="btn-secondary" onclick={on_add_document}>
                        {"+ Add Another Document"}
                    </button>
                </div>
            }
        }
    };

    html! {
        <form class="account-opening-form" onsubmit={on_submit}>
            <ol class="form-steps">
                {for STEP_LABELS.iter().enumerate().map(|(index, label)| {
                    let number = index as u8 + 1;
                    html! {
                        <li class={classes!(
                            "form-step-indicator",
                            (number == step).then_some("current"),
                            (number < step).then_some("done")
                        )}>
                            <span class="step-number">{number}</span>
                            <span class="step-label">{*label}</span>
                        </li>
                    }
                })}
            </ol>

            {step_content}

            <div class="form-actions">
                <button type="button" class="btn-secondary" onclick={on_back}>
                    {back_label}
                </button>
                if form.is_last_step() {
                    <button type="submit" class="btn-primary">{"Submit Application"}</button>
                } else {
                    <button type="button" class="btn-primary" onclick={on_next}>{"Next"}</button>
                }
            </div>
        </form>
    }
}

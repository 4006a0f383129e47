use crate::components::account_opening_form::{AccountOpeningForm, Submission};
use crate::components::date_picker::DatePicker;
use crate::components::modal::{Modal, ModalSize};
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;
use chrono::{Days, NaiveDate};
use serde_json::Value;
use shared::calendar::{format_long_date, DateRange, SelectionMode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn describe(date: Option<NaiveDate>) -> String {
    date.map(format_long_date).unwrap_or_else(|| "Not selected".to_string())
}

fn describe_range(range: &DateRange) -> Option<String> {
    match (range.start, range.end) {
        (Some(start), Some(end)) => Some(format!("{} - {}", format_long_date(start), format_long_date(end))),
        _ => None,
    }
}

#[function_component(AdminAccountsPage)]
pub fn admin_accounts_page() -> Html {
    let toast = use_toast();
    let form_open = use_state(|| false);
    let single_date = use_state(|| Option::<NaiveDate>::None);
    let range = use_state(DateRange::default);

    let open_form = {
        let form_open = form_open.clone();
        Callback::from(move |_: MouseEvent| form_open.set(true))
    };

    let on_cancel = {
        let form_open = form_open.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            form_open.set(false);
            toast.info("Account application cancelled", Some("Cancelled"));
        })
    };

    let on_submit = {
        let form_open = form_open.clone();
        let toast = toast.clone();
        Callback::from(move |(application, files): Submission| {
            log::info!(
                "account application for {} {} with {} document(s)",
                application.personal.first_name,
                application.personal.last_name,
                application.documents.len()
            );
            form_open.set(false);
            toast.success("Account application submitted successfully!", Some("Success"));

            let toast = toast.clone();
            spawn_local(async move {
                let fields = match serde_json::to_value(&application) {
                    Ok(Value::Object(map)) => map.into_iter().collect::<Vec<_>>(),
                    Ok(_) => Vec::new(),
                    Err(e) => {
                        log::error!("could not serialize application: {}", e);
                        Vec::new()
                    }
                };
                let response = ApiClient::new()
                    .upload::<Value>("/accounts/applications", &files, &fields)
                    .await;
                if let Err(e) = response.into_result() {
                    toast.warning(format!("Documents were not uploaded: {}", e), Some("Upload"));
                }
            });
        })
    };

    let on_single = {
        let single_date = single_date.clone();
        let toast = toast.clone();
        Callback::from(move |date: Option<NaiveDate>| {
            single_date.set(date);
            toast.success(format!("Selected: {}", describe(date)), Some("Date Selected"));
        })
    };

    let on_range = {
        let range = range.clone();
        let toast = toast.clone();
        Callback::from(move |next: DateRange| {
            range.set(next);
            if let Some(text) = describe_range(&next) {
                toast.success(format!("Range: {}", text), Some("Range Selected"));
            }
        })
    };

    let on_constrained_range = {
        let toast = toast.clone();
        Callback::from(move |next: DateRange| {
            if let Some(text) = describe_range(&next) {
                toast.info(format!("Constrained Range: {}", text), Some("Range Selected"));
            }
        })
    };

    let close_form = {
        let form_open = form_open.clone();
        Callback::from(move |_: ()| form_open.set(false))
    };

    let now = today();
    let thirty_days_ago = now.checked_sub_days(Days::new(30));

    html! {
        <div class="page admin-accounts">
            <h1>{"Account Management"}</h1>

            <div class="two-column">
                <div class="card">
                    <h2>{"Account Opening"}</h2>
                    <p class="text-secondary">
                        {"Multi-step form with personal info, account details, and document uploads."}
                    </p>
                    <button type="button" class="btn-primary btn-block" onclick={open_form}>
                        {"Open New Account"}
                    </button>
                </div>

                <div class="card date-picker-demo">
                    <section>
                        <h3>{"Single Date Selection"}</h3>
                        <DatePicker
                            mode={SelectionMode::Single}
                            value={*single_date}
                            on_change={on_single}
                            placeholder="Select a date"
                        />
                        <div class="selection-readout">
                            <span class="text-secondary">{"Selected Date:"}</span>
                            <strong>{describe(*single_date)}</strong>
                        </div>
                    </section>

                    <section>
                        <h3>{"Date Range Selection"}</h3>
                        <DatePicker
                            mode={SelectionMode::Range}
                            range_value={*range}
                            on_range_change={on_range}
                            placeholder="Select date range"
                        />
                        <div class="selection-readout">
                            <span class="text-secondary">{"Selected Range:"}</span>
                            <strong>{describe_range(&range).unwrap_or_else(|| "No range selected".to_string())}</strong>
                        </div>
                    </section>

                    <section>
                        <h3>{"Date Range with Min/Max (Last 30 Days)"}</h3>
                        <DatePicker
                            mode={SelectionMode::Range}
                            min_date={thirty_days_ago}
                            max_date={Some(now)}
                            on_range_change={on_constrained_range}
                            placeholder="Select last 30 days range"
                        />
                    </section>
                </div>
            </div>

            <Modal
                is_open={*form_open}
                on_close={close_form}
                title="Open New Account"
                size={ModalSize::Large}
                close_on_backdrop={false}
            >
                <AccountOpeningForm {on_submit} {on_cancel} />
            </Modal>
        </div>
    }
}

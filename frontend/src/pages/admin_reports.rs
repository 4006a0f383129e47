use crate::components::data_table::{Column, DataTable, TableMode};
use crate::hooks::use_navigation::use_navigator;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::services::config;
use serde::Deserialize;
use shared::calendar::format_short_date;
use shared::table::{page_from_query, page_href, ExternalPage, PAGE_QUERY_PARAM};
use shared::{mock, Report};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// `GET /reports?page=N&limit=M` body
#[derive(Debug, Deserialize)]
struct ReportsResponse {
    reports: Vec<Report>,
    #[serde(flatten)]
    page: ExternalPage,
}

#[derive(Clone, PartialEq)]
struct ReportPage {
    rows: Rc<Vec<Report>>,
    meta: ExternalPage,
}

const SUMMARY_CARDS: [(&str, &str, &str); 3] = [
    ("Monthly Revenue", "$45,231", "text-blue"),
    ("Active Users", "1,248", "text-green"),
    ("Pending Transactions", "12", "text-orange"),
];

fn report_columns() -> Vec<Column<Report>> {
    vec![
        Column::new("id", "ID"),
        Column::<Report>::new("title", "Report Title")
            .render(|value, _| html! { <span class="font-medium">{value.to_string()}</span> }),
        Column::<Report>::new("date", "Date")
            .render(|_, report| html! { {format_short_date(report.date)} }),
        Column::<Report>::new("status", "Status").render(|value, report| html! {
            <span class={report.status.badge_class()}>{value.to_string()}</span>
        }),
        Column::<Report>::new("revenue", "Revenue")
            .render(|value, _| html! { <span class="font-semibold">{value.to_string()}</span> }),
    ]
}

async fn fetch_page(client: &ApiClient, page: usize, page_size: usize) -> ReportPage {
    let params = vec![
        (PAGE_QUERY_PARAM.to_string(), page.to_string()),
        ("limit".to_string(), page_size.to_string()),
    ];
    match client.get::<ReportsResponse>("/reports", params).await.into_result() {
        Ok(response) => ReportPage {
            rows: Rc::new(response.reports),
            meta: response.page,
        },
        Err(e) => {
            log::warn!("reports API unavailable ({}), serving bundled data", e);
            let (rows, meta) = mock::report_page(page, page_size);
            ReportPage {
                rows: Rc::new(rows),
                meta,
            }
        }
    }
}

/// Reports are paginated upstream; the page number lives in the URL
#[function_component(AdminReportsPage)]
pub fn admin_reports_page() -> Html {
    let navigator = use_navigator();
    let toast = use_toast();
    let settings = use_memo((), |_| config::load());
    let client = use_memo(settings.clone(), |settings| ApiClient::from_config(settings));
    let columns = use_memo((), |_| report_columns());
    let data = use_state(|| Option::<ReportPage>::None);

    let page = page_from_query(&navigator.location.query);
    let page_size = settings.items_per_page;

    {
        let data = data.clone();
        let client = client.clone();
        use_effect_with(page, move |&page| {
            spawn_local(async move {
                data.set(Some(fetch_page(&client, page, page_size).await));
            });
        });
    }

    let on_page_change = {
        let push = navigator.push.clone();
        let location = navigator.location.clone();
        Callback::from(move |page: usize| push.emit(page_href(&location.path, &location.query, page)))
    };

    let on_export = {
        let client = client.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let params = [(PAGE_QUERY_PARAM.to_string(), page.to_string())];
                let response = client.download("/reports/export", Some("reports.csv"), &params).await;
                match response.into_result() {
                    Ok(bytes) => toast.success(format!("Exported {} bytes", bytes), Some("Export")),
                    Err(e) => toast.error(e, Some("Export Failed")),
                }
            });
        })
    };

    html! {
        <div class="page admin-reports">
            <div class="page-header">
                <div>
                    <h1>{"Reports"}</h1>
                    <p>{"View analytics, transaction summaries, and performance reports."}</p>
                </div>
                <button type="button" class="btn-secondary" onclick={on_export}>{"⬇ Export"}</button>
            </div>

            {match &*data {
                None => html! { <div class="loading">{"Loading reports..."}</div> },
                Some(report_page) => html! {
                    <DataTable<Report>
                        rows={report_page.rows.clone()}
                        columns={columns}
                        page_size={page_size}
                        mode={TableMode::External {
                            page: report_page.meta,
                            on_page_change: Some(on_page_change),
                        }}
                        empty_message="No reports found"
                    />
                },
            }}

            <div class="stat-grid">
                {for SUMMARY_CARDS.iter().map(|(label, value, class)| html! {
                    <div class="stat-card" key={*label}>
                        <h3 class="stat-label">{*label}</h3>
                        <p class={classes!("stat-value", *class)}>{*value}</p>
                    </div>
                })}
            </div>
        </div>
    }
}

use super::transactions::TransactionRow;
use crate::components::sidebar::NavLink;
use crate::hooks::use_toast::use_toast;
use shared::mock;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let toast = use_toast();
    let stats = use_memo((), |_| mock::dashboard_stats());
    let actions = use_memo((), |_| mock::quick_actions());
    let recent = use_memo((), |_| mock::recent_transactions());

    html! {
        <div class="page dashboard">
            <div class="page-header">
                <h1 class="gradient-text">{"Dashboard"}</h1>
                <p>{"Welcome back! Here's your financial overview."}</p>
            </div>

            <div class="stat-grid">
                {for stats.iter().map(|stat| html! {
                    <div class="stat-card" key={stat.title.clone()}>
                        <h3 class="stat-label">{&stat.title}</h3>
                        <p class="stat-value">{&stat.value}</p>
                        <span class={classes!("stat-change", if stat.is_positive() { "positive" } else { "negative" })}>
                            {format!("{} from last month", stat.change)}
                        </span>
                    </div>
                })}
            </div>

            <div class="card">
                <h2>{"Quick Actions"}</h2>
                <div class="quick-actions">
                    {for actions.iter().map(|action| {
                        let onclick = {
                            let toast = toast.clone();
                            let label = action.label.clone();
                            Callback::from(move |_: MouseEvent| {
                                toast.info(format!("{} is coming soon", label), None);
                            })
                        };
                        html! {
                            <button type="button" class="quick-action" key={action.label.clone()} {onclick}>
                                <span class="quick-action-icon">{&action.icon}</span>
                                <span>{&action.label}</span>
                            </button>
                        }
                    })}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>{"Recent Transactions"}</h2>
                    <NavLink to="/transaction" class={classes!("btn-link")}>{"View all"}</NavLink>
                </div>
                {for recent.iter().map(|t| html! {
                    <TransactionRow key={t.id} transaction={t.clone()} />
                })}
            </div>
        </div>
    }
}

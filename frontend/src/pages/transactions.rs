use crate::components::date_picker::DatePicker;
use shared::calendar::{format_short_date, DateRange, SelectionMode};
use shared::mock;
use shared::transactions::{
    category_icon, format_currency, format_signed, totals, TransactionFilter, TransactionQuery,
};
use shared::{Transaction, TransactionKind, TransactionStatus};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionRowProps {
    pub transaction: Transaction,
}

#[function_component(TransactionRow)]
pub fn transaction_row(props: &TransactionRowProps) -> Html {
    let t = &props.transaction;
    let kind_class = match t.kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "expense",
    };
    html! {
        <div class={classes!("transaction-row", kind_class)}>
            <span class="transaction-icon">{category_icon(&t.category)}</span>
            <div class="transaction-info">
                <p class="transaction-name">{&t.name}</p>
                <p class="transaction-meta">
                    {format!("{} • {} • {}", t.category, format_short_date(t.date), t.time)}
                </p>
            </div>
            <div class="transaction-amount">
                <p class={classes!("amount", kind_class)}>{format_signed(t.amount)}</p>
                if t.status == TransactionStatus::Pending {
                    <span class="badge badge-warning">{t.status.label()}</span>
                }
            </div>
        </div>
    }
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let all = use_memo((), |_| mock::transactions());
    let query = use_state(TransactionQuery::default);

    let summary = totals(&all);
    let visible = query.apply(&all);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.search = input.value();
            query.set(next);
        })
    };

    let on_range = {
        let query = query.clone();
        Callback::from(move |range: DateRange| {
            let mut next = (*query).clone();
            next.range = Some(range);
            query.set(next);
        })
    };

    let on_clear_range = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.range = None;
            query.set(next);
        })
    };

    html! {
        <div class="page transactions">
            <div class="page-header">
                <h1 class="gradient-text">{"Transactions"}</h1>
                <p>{"Track your income and spending"}</p>
            </div>

            <div class="stat-grid">
                <div class="stat-card income">
                    <p class="stat-label">{"Total Income"}</p>
                    <p class="stat-value">{format_currency(summary.income)}</p>
                </div>
                <div class="stat-card expense">
                    <p class="stat-label">{"Total Expenses"}</p>
                    <p class="stat-value">{format_currency(summary.expense)}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Net"}</p>
                    <p class="stat-value">{format_currency(summary.net())}</p>
                </div>
            </div>

            <div class="card transaction-filters">
                <div class="filter-buttons">
                    {for TransactionFilter::ALL.into_iter().map(|filter| {
                        let onclick = {
                            let query = query.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*query).clone();
                                next.filter = filter;
                                query.set(next);
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("filter-button", (query.filter == filter).then_some("active"))}
                                {onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    })}
                </div>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search transactions..."
                    value={query.search.clone()}
                    oninput={on_search}
                />
                <div class="range-filter">
                    <DatePicker
                        mode={SelectionMode::Range}
                        range_value={query.range.unwrap_or_default()}
                        on_range_change={on_range}
                        placeholder="Filter by date range"
                    />
                    if query.range.is_some() {
                        <button type="button" class="btn-link" onclick={on_clear_range}>{"Clear"}</button>
                    }
                </div>
            </div>

            <div class="card transaction-list">
                if visible.is_empty() {
                    <div class="empty-state">{"No transactions found"}</div>
                } else {
                    {for visible.into_iter().map(|t| html! {
                        <TransactionRow key={t.id} transaction={t.clone()} />
                    })}
                }
            </div>
        </div>
    }
}

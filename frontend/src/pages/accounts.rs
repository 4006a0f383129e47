use crate::hooks::use_toast::use_toast;
use shared::mock;
use shared::transactions::format_currency;
use yew::prelude::*;

#[function_component(AccountsPage)]
pub fn accounts_page() -> Html {
    let toast = use_toast();
    let accounts = use_memo((), |_| mock::bank_accounts());
    let total: f64 = accounts.iter().map(|account| account.balance).sum();

    let coming_soon = |action: &'static str| {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.info(format!("{} is coming soon", action), None))
    };

    html! {
        <div class="page accounts">
            <div class="page-header">
                <h1 class="gradient-text">{"My Accounts"}</h1>
                <p>{"Manage your bank accounts and cards"}</p>
            </div>

            <div class="card total-balance">
                <p class="stat-label">{"Total Balance"}</p>
                <h2 class="stat-value">{format_currency(total)}</h2>
                <p class="text-secondary">{format!("Across {} accounts", accounts.len())}</p>
            </div>

            <div class="page-actions">
                <button type="button" class="btn-primary" onclick={coming_soon("Adding an account")}>
                    {"+ Add New Account"}
                </button>
            </div>

            <div class="account-grid">
                {for accounts.iter().map(|account| html! {
                    <div class="account-card" key={account.id}>
                        <div class={classes!("account-card-header", account.color.clone())}>
                            <div>
                                <p class="account-type">{&account.account_type}</p>
                                <h3>{&account.name}</h3>
                            </div>
                            <span class="account-icon">{&account.icon}</span>
                        </div>
                        <p class="account-number">{&account.account_number}</p>
                        <div class="account-balance">
                            <p class="text-secondary">{"Available Balance"}</p>
                            <p class="balance">{format_currency(account.balance)}</p>
                            <p class="currency">{&account.currency}</p>
                        </div>
                        <div class="account-actions">
                            <button type="button" onclick={coming_soon("Transfer")}>{"↔ Transfer"}</button>
                            <button type="button" onclick={coming_soon("Deposit")}>{"⬇ Deposit"}</button>
                            <button type="button" onclick={coming_soon("Statements")}>{"📄 Statements"}</button>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

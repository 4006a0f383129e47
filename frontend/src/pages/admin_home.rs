use crate::components::sidebar::NavLink;
use shared::{mock, UserRole};
use yew::prelude::*;

const ADMIN_STATS: [(&str, &str, &str); 4] = [
    ("Total Users", "1,234", "👥"),
    ("Revenue", "$45,231", "💰"),
    ("Reports", "89", "📄"),
    ("Active Sessions", "456", "⚡"),
];

#[function_component(AdminHomePage)]
pub fn admin_home_page() -> Html {
    let recent_users = use_memo((), |_| mock::users().into_iter().take(5).collect::<Vec<_>>());

    html! {
        <div class="page admin-home">
            <div class="page-header">
                <h1 class="gradient-text">{"Admin Dashboard"}</h1>
                <p>{"Overview of users, revenue and activity"}</p>
            </div>

            <div class="stat-grid">
                {for ADMIN_STATS.iter().map(|(label, value, icon)| html! {
                    <div class="stat-card" key={*label}>
                        <span class="stat-icon">{*icon}</span>
                        <h3 class="stat-label">{*label}</h3>
                        <p class="stat-value">{*value}</p>
                    </div>
                })}
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>{"Recent Users"}</h2>
                    <NavLink to="/admin/users" class={classes!("btn-link")}>{"View all"}</NavLink>
                </div>
                <table class="simple-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Role"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for recent_users.iter().map(|user| html! {
                            <tr key={user.id}>
                                <td>{&user.name}</td>
                                <td>{&user.email}</td>
                                <td>
                                    <span class={classes!("badge", if user.role == UserRole::Admin { "badge-danger" } else { "badge-success" })}>
                                        {user.role.as_str()}
                                    </span>
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h2>{"Quick Actions"}</h2>
                <div class="quick-actions">
                    <NavLink to="/admin/users" class={classes!("quick-action")}>{"👥 Manage Users"}</NavLink>
                    <NavLink to="/admin/reports" class={classes!("quick-action")}>{"📊 View Reports"}</NavLink>
                    <NavLink to="/admin/accounts" class={classes!("quick-action")}>{"💳 Open Account"}</NavLink>
                </div>
            </div>
        </div>
    }
}

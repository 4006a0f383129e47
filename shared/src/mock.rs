//! Demo data backing every page until a real API exists.

use crate::table::{page_slice, total_pages, ExternalPage};
use crate::{
    BankAccount, DashboardStat, QuickAction, Report, ReportStatus, Transaction, TransactionKind,
    TransactionStatus, User, UserRole,
};
use chrono::NaiveDate;

type Ymd = (i32, u32, u32);

fn day((year, month, day): Ymd) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

const USERS: [(&str, UserRole, Ymd); 25] = [
    ("John Doe", UserRole::User, (2024, 1, 15)),
    ("Jane Smith", UserRole::Admin, (2024, 2, 20)),
    ("Bob Johnson", UserRole::User, (2024, 3, 10)),
    ("Alice Williams", UserRole::User, (2024, 3, 25)),
    ("Charlie Brown", UserRole::Moderator, (2024, 4, 5)),
    ("Diana Prince", UserRole::Admin, (2024, 4, 15)),
    ("Ethan Hunt", UserRole::User, (2024, 5, 1)),
    ("Fiona Gallagher", UserRole::User, (2024, 5, 12)),
    ("George Miller", UserRole::Moderator, (2024, 6, 3)),
    ("Hannah Montana", UserRole::User, (2024, 6, 18)),
    ("Isaac Newton", UserRole::Admin, (2024, 7, 5)),
    ("Julia Roberts", UserRole::User, (2024, 7, 22)),
    ("Kevin Hart", UserRole::User, (2024, 8, 10)),
    ("Laura Croft", UserRole::Moderator, (2024, 8, 25)),
    ("Michael Scott", UserRole::User, (2024, 9, 8)),
    ("Nancy Drew", UserRole::Admin, (2024, 9, 20)),
    ("Oliver Twist", UserRole::User, (2024, 10, 5)),
    ("Pam Beesly", UserRole::User, (2024, 10, 18)),
    ("Quinn Fabray", UserRole::Moderator, (2024, 10, 28)),
    ("Rachel Green", UserRole::User, (2024, 11, 2)),
    ("Sam Winchester", UserRole::Admin, (2024, 11, 10)),
    ("Tina Fey", UserRole::User, (2024, 11, 15)),
    ("Uma Thurman", UserRole::User, (2024, 11, 20)),
    ("Victor Hugo", UserRole::Moderator, (2024, 11, 25)),
    ("Wendy Williams", UserRole::User, (2024, 11, 28)),
];

/// Directory shown on the admin users page; ids are 1-based positions
pub fn users() -> Vec<User> {
    USERS
        .iter()
        .enumerate()
        .map(|(index, (name, role, joined))| {
            let id = index as u32 + 1;
            let first = name.split_whitespace().next().unwrap_or(*name);
            User {
                id,
                name: (*name).to_string(),
                email: format!("{}@example.com", first.to_lowercase()),
                role: *role,
                phone: format!("+1 234-567-89{:02}", id),
                joined_date: day(*joined),
                avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", first),
            }
        })
        .collect()
}

const REPORTS: [(&str, Ymd, ReportStatus, &str); 25] = [
    ("Monthly Revenue Report", (2025, 11, 1), ReportStatus::Completed, "$45,231"),
    ("User Analytics Summary", (2025, 11, 2), ReportStatus::Completed, "$12,450"),
    ("Transaction Overview", (2025, 11, 3), ReportStatus::Pending, "$8,920"),
    ("Performance Metrics", (2025, 11, 4), ReportStatus::Completed, "$34,100"),
    ("Q4 Financial Report", (2025, 11, 5), ReportStatus::InProgress, "$67,890"),
    ("Customer Retention Analysis", (2025, 11, 6), ReportStatus::Completed, "$23,450"),
    ("Marketing ROI Report", (2025, 11, 7), ReportStatus::Completed, "$15,600"),
    ("Sales Performance Q4", (2025, 11, 8), ReportStatus::Pending, "$89,200"),
    ("Annual Growth Summary", (2025, 11, 9), ReportStatus::Completed, "$156,400"),
    ("Product Analytics", (2025, 11, 10), ReportStatus::InProgress, "$45,800"),
    ("Operational Efficiency", (2025, 10, 15), ReportStatus::Completed, "$32,100"),
    ("Risk Assessment Report", (2025, 10, 20), ReportStatus::Completed, "$0"),
    ("Compliance Audit", (2025, 10, 25), ReportStatus::Completed, "$0"),
    ("Budget Analysis", (2025, 10, 28), ReportStatus::Pending, "$78,900"),
    ("Market Research Summary", (2025, 10, 30), ReportStatus::InProgress, "$12,300"),
    ("Customer Feedback Analysis", (2025, 9, 15), ReportStatus::Completed, "$9,500"),
    ("Inventory Report", (2025, 9, 20), ReportStatus::Completed, "$45,600"),
    ("Supply Chain Analysis", (2025, 9, 25), ReportStatus::Pending, "$67,200"),
    ("Employee Performance", (2025, 9, 28), ReportStatus::InProgress, "$0"),
    ("Technology Infrastructure", (2025, 9, 30), ReportStatus::Completed, "$23,100"),
    ("Security Audit Report", (2025, 8, 15), ReportStatus::Completed, "$0"),
    ("Customer Acquisition Cost", (2025, 8, 20), ReportStatus::Completed, "$34,500"),
    ("Churn Rate Analysis", (2025, 8, 25), ReportStatus::Pending, "$8,900"),
    ("Revenue Forecasting", (2025, 8, 28), ReportStatus::InProgress, "$120,000"),
    ("Competitive Analysis", (2025, 8, 30), ReportStatus::Completed, "$15,200"),
];

pub fn reports() -> Vec<Report> {
    REPORTS
        .iter()
        .enumerate()
        .map(|(index, (title, date, status, revenue))| Report {
            id: index as u32 + 1,
            title: (*title).to_string(),
            date: day(*date),
            status: *status,
            revenue: (*revenue).to_string(),
        })
        .collect()
}

/// One page of reports plus its metadata, sliced the way a server would
/// with LIMIT/OFFSET. Pages past the end come back empty.
pub fn report_page(page: usize, page_size: usize) -> (Vec<Report>, ExternalPage) {
    let all = reports();
    let meta = ExternalPage {
        current_page: page.max(1),
        total_pages: total_pages(all.len(), page_size),
        total_items: all.len(),
    };
    let rows = page_slice(&all, meta.current_page, page_size).to_vec();
    log::debug!(
        "report page {} of {}: {} rows",
        meta.current_page,
        meta.total_pages,
        rows.len()
    );
    (rows, meta)
}

const TRANSACTIONS: [(&str, f64, Ymd, &str, &str, TransactionStatus); 10] = [
    ("Salary Deposit", 5000.00, (2024, 10, 28), "10:30 AM", "Salary", TransactionStatus::Completed),
    ("Freelance Project", 2500.00, (2024, 10, 25), "03:15 PM", "Freelance", TransactionStatus::Completed),
    ("Netflix Subscription", -15.99, (2024, 10, 30), "08:45 AM", "Entertainment", TransactionStatus::Completed),
    ("Grocery Store", -125.50, (2024, 10, 27), "05:20 PM", "Food", TransactionStatus::Completed),
    ("Electric Bill", -85.00, (2024, 10, 24), "11:00 AM", "Utilities", TransactionStatus::Completed),
    ("Amazon Purchase", -234.99, (2024, 10, 23), "02:30 PM", "Shopping", TransactionStatus::Completed),
    ("Restaurant", -68.50, (2024, 10, 22), "07:45 PM", "Food", TransactionStatus::Completed),
    ("Investment Returns", 1200.00, (2024, 10, 20), "09:00 AM", "Investment", TransactionStatus::Completed),
    ("Gas Station", -45.00, (2024, 10, 19), "06:15 PM", "Transportation", TransactionStatus::Completed),
    ("Online Course", -199.00, (2024, 10, 18), "01:20 PM", "Education", TransactionStatus::Pending),
];

/// Full transaction history; the sign of `amount` decides the kind
pub fn transactions() -> Vec<Transaction> {
    TRANSACTIONS
        .iter()
        .enumerate()
        .map(|(index, (name, amount, date, time, category, status))| Transaction {
            id: index as u32 + 1,
            name: (*name).to_string(),
            amount: *amount,
            date: day(*date),
            time: (*time).to_string(),
            kind: if *amount >= 0.0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
            category: (*category).to_string(),
            status: *status,
        })
        .collect()
}

/// Most recent five, newest first, for the dashboard
pub fn recent_transactions() -> Vec<Transaction> {
    let mut all = transactions();
    all.sort_by(|a, b| b.date.cmp(&a.date));
    all.truncate(5);
    all
}

pub fn bank_accounts() -> Vec<BankAccount> {
    [
        ("Premium Checking", "Checking", "****4589", 15234.89, "💳", "from-blue-500 to-blue-700"),
        ("High-Yield Savings", "Savings", "****7823", 23456.78, "💰", "from-green-500 to-green-700"),
        ("Investment Account", "Investment", "****9102", 45678.90, "📈", "from-purple-500 to-purple-700"),
        ("Business Account", "Business", "****3456", 8942.15, "🏢", "from-orange-500 to-orange-700"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (name, account_type, number, balance, icon, color))| BankAccount {
        id: index as u32 + 1,
        name: name.to_string(),
        account_type: account_type.to_string(),
        account_number: number.to_string(),
        balance,
        currency: "USD".to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    [
        ("Total Balance", "$45,231.89", "+20.1%", "from-blue-500 to-blue-600"),
        ("Income", "$12,450.00", "+12.5%", "from-green-500 to-green-600"),
        ("Expenses", "$8,234.50", "-4.3%", "from-red-500 to-red-600"),
        ("Savings", "$23,456.78", "+8.2%", "from-purple-500 to-purple-600"),
    ]
    .into_iter()
    .map(|(title, value, change, color)| DashboardStat {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("Send Money", "💸", "bg-blue-500"),
        ("Request Payment", "💰", "bg-green-500"),
        ("Pay Bills", "📄", "bg-purple-500"),
        ("Add Account", "➕", "bg-pink-500"),
    ]
    .into_iter()
    .map(|(label, icon, color)| QuickAction {
        label: label.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;

pub mod api;
pub mod calendar;
pub mod config;
pub mod forms;
pub mod mock;
pub mod routes;
pub mod session;
pub mod table;
pub mod theme;
pub mod toast;
pub mod transactions;

pub use api::{ApiError, ApiResponse, Method, RequestConfig};
pub use calendar::{DateBounds, DatePickerState, DateRange, MonthView, PickerEvent, SelectionMode};
pub use config::AppConfig;
pub use forms::{AccountOpeningForm, FormError};
pub use routes::{GuardDecision, Route};
pub use session::{AuthError, Credentials, Role, Session, SessionManager, SessionStorage};
pub use table::{CellValue, ExternalPage, PaginationMode, Record, SortDirection, SortState, TableState};
pub use theme::{ThemeConfig, ThemeName};
pub use toast::{Toast, ToastKind, ToastQueue};

/// Role shown in the admin user directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Moderator,
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Moderator, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Moderator => "Moderator",
            UserRole::User => "User",
        }
    }

    /// Parse a select value; anything unknown is a plain user
    pub fn from_label(label: &str) -> Self {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == label)
            .unwrap_or(UserRole::User)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    pub joined_date: NaiveDate,
    pub avatar: String,
}

impl Record for User {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "joinedDate" => self.joined_date.to_string().into(),
            _ => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Pending => "Pending",
        }
    }

    /// Badge class for the status column
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "badge badge-success",
            ReportStatus::InProgress => "badge badge-info",
            ReportStatus::Pending => "badge badge-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub status: ReportStatus,
    /// Preformatted, e.g. "$45,231"
    pub revenue: String,
}

impl Record for Report {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "title" => self.title.as_str().into(),
            "date" => self.date.to_string().into(),
            "status" => self.status.label().into(),
            "revenue" => self.revenue.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

/// Type of transaction for rendering and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub name: String,
    /// Positive for income, negative for expense
    pub amount: f64,
    pub date: NaiveDate,
    /// Display time, e.g. "10:30 AM"
    pub time: String,
    pub kind: TransactionKind,
    pub category: String,
    pub status: TransactionStatus,
}

impl Record for Transaction {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "amount" => self.amount.into(),
            "date" => self.date.to_string().into(),
            "category" => self.category.as_str().into(),
            "status" => self.status.label().into(),
            _ => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: u32,
    pub name: String,
    pub account_type: String,
    /// Masked, e.g. "****4589"
    pub account_number: String,
    pub balance: f64,
    pub currency: String,
    pub icon: String,
    /// Card gradient class
    pub color: String,
}

/// Headline figure on the user dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub change: String,
    pub color: String,
}

impl DashboardStat {
    pub fn is_positive(&self) -> bool {
        !self.change.starts_with('-')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub icon: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{sort_rows, SortState};

    #[test]
    fn test_user_record_fields() {
        let users = mock::users();
        assert_eq!(users[0].field("name"), CellValue::Text("John Doe".to_string()));
        assert_eq!(users[0].field("id"), CellValue::Number(1.0));
        assert_eq!(users[0].field("joinedDate"), CellValue::Text("2024-01-15".to_string()));
        assert_eq!(users[0].field("avatar"), CellValue::Empty);
    }

    #[test]
    fn test_sort_users_by_name() {
        let users = mock::users();
        let sorted = sort_rows(&users, &SortState::ascending("name"));
        assert_eq!(sorted[0].name, "Alice Williams");
        assert_eq!(sorted[24].name, "Wendy Williams");
    }

    #[test]
    fn test_sort_transactions_by_amount() {
        let transactions = mock::transactions();
        let sorted = sort_rows(&transactions, &SortState::ascending("amount"));
        assert_eq!(sorted[0].name, "Amazon Purchase");
        assert_eq!(sorted[9].name, "Salary Deposit");
    }

    #[test]
    fn test_report_status_serialization() {
        let json = serde_json::to_string(&ReportStatus::InProgress).unwrap();
        assert_eq!(json, r#""In Progress""#);
        assert_eq!(ReportStatus::Pending.label(), "Pending");
    }

    #[test]
    fn test_user_role_from_label() {
        assert_eq!(UserRole::from_label("Moderator"), UserRole::Moderator);
        assert_eq!(UserRole::from_label("Root"), UserRole::User);
    }

    #[test]
    fn test_dashboard_stat_direction() {
        let stats = mock::dashboard_stats();
        assert!(stats[0].is_positive());
        assert!(!stats[2].is_positive());
    }
}

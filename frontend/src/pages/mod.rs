pub mod accounts;
pub mod admin_accounts;
pub mod admin_home;
pub mod admin_reports;
pub mod admin_users;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod transactions;
pub mod user_profile;

pub mod use_navigation;
pub mod use_session;
pub mod use_theme;
pub mod use_toast;

pub mod account_opening_form;
pub mod data_table;
pub mod date_picker;
pub mod form_field;
pub mod modal;
pub mod navbar;
pub mod pagination;
pub mod sidebar;
pub mod theme_switcher;
pub mod toast;

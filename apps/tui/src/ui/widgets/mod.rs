pub mod hints;
pub mod popup;
pub mod tables;
pub mod user_form;
pub mod user_table;

//! UI component modules composed by page-level views.

pub mod confirm_dialog;
pub mod event_card;
pub mod event_form;
pub mod event_list_item;
pub mod notification;
pub mod pagination;
pub mod registration_modal;
pub mod search_field;
pub mod signup_table;

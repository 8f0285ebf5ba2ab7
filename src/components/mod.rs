//! UI Components
//!
//! Leptos components making up the guestbook.

mod delete_confirm_button;
mod entry_card;
mod entry_form;
mod entry_list;
mod guestbook_view;

pub use delete_confirm_button::DeleteConfirmButton;
pub use entry_card::EntryCard;
pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use guestbook_view::GuestbookView;

//! Custom widget components

mod cards;
mod contact_form;
mod detail;
mod header;
mod home;
pub mod modal_overlay;
pub mod page;
mod status_bar;

pub use contact_form::ContactFormModal;
pub use detail::detail_page;
pub use header::MainHeader;
pub use home::home_page;
pub use page::{Page, PageBuilder, PageView};
pub use status_bar::StatusBar;

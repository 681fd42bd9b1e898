//! HTML page handlers.

mod about;
pub(crate) mod contact;
mod home;
mod news;
pub(crate) mod not_found;
mod services;

pub use about::about_handler;
pub use contact::{contact_page_handler, contact_submit_handler};
pub use home::home_handler;
pub use news::news_page_handler;
pub use not_found::not_found_handler;
pub use services::{category_page_handler, service_contact_handler, service_page_handler};

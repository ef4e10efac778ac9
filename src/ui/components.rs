//! UI components

pub mod logo;
pub mod notice_dialog;
pub mod search_bar;
pub mod suggestion_list;
pub mod weather_card;

pub use notice_dialog::{Notice, NoticeKind};

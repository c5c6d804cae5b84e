//! Application services for the guestbook.

mod guestbook;

pub use guestbook::{GuestbookError, GuestbookResult, GuestbookService};

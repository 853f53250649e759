//! Clip lookup and registration
//!
//! This module has zero teloxide dependency: handlers take a `Store` and
//! return `Reply` values, which the Telegram layer delivers.

pub mod ingest;
pub mod query;
pub mod reply;
pub mod request;

pub use ingest::{handle_attachment, Attachment, ACCEPTED_MIME_TYPE};
pub use query::handle_query;
pub use reply::Reply;
pub use request::{classify, KeyRange, Request};

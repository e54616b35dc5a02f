//! Data models exchanged with the news backend.

mod news;

pub use news::{Credentials, NewsItem};

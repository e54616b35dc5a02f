//! This crate contains all shared UI for the workspace: the three screens,
//! the state machines behind them, and the small components they share.

use dioxus::prelude::*;

pub const NEWS_CSS: Asset = asset!("/assets/news.css");

mod screen;
#[cfg(target_arch = "wasm32")]
pub use screen::open_external;
pub use screen::{Screen, Transition};

mod client;
pub use client::{use_client, ClientProvider};

mod navbar;
pub use navbar::{default_links, NavLink, Navbar};

mod news_tile;
pub use news_tile::NewsTile;

mod feed;
pub use feed::{item_keys, load_feed, FeedState, FeedTray};

mod login;
pub use login::{submit_login, FormStatus, LoginForm};

mod profile;
pub use profile::{request_logout, ProfileState, ProfileView};

pub mod views;

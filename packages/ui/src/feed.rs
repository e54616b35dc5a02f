//! # Feed: the home screen's news list
//!
//! [`FeedTray`] fetches the feed once when it mounts and shows exactly one of
//! [`FeedState`]'s variants. There is no refresh: getting back to `Loading`
//! takes a remount.
//!
//! | Outcome of [`load_feed`] | Transition |
//! |--------------------------|------------|
//! | items | `Stay(Ready(items))`, backend order untouched |
//! | 401 | `Navigate(Login)`; the tray keeps showing `Loading` until the route changes |
//! | anything else | `Stay(Failed(reason))`, no recovery |
//!
//! The fetch runs as a resource owned by the tray's scope, so unmounting the
//! tray drops the request and a late response is never applied.

use std::collections::HashSet;

use api::{FetchOutcome, NewsClient, NewsItem, Transport};
use dioxus::prelude::*;

use crate::{use_client, NewsTile, Screen, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Loading,
    Ready(Vec<NewsItem>),
    Failed(String),
}

/// Fetch the feed once and decide what the tray does next.
pub async fn load_feed<T: Transport>(client: &NewsClient<T>) -> Transition<FeedState> {
    match client.news_feed().await {
        FetchOutcome::Ok(items) => Transition::Stay(FeedState::Ready(items)),
        FetchOutcome::Unauthorized { .. } => {
            tracing::info!("Feed requires a session, redirecting to login");
            Transition::Navigate(Screen::Login)
        }
        FetchOutcome::Failed(err) => Transition::Stay(FeedState::Failed(err.to_string())),
    }
}

/// Render keys for `items`: URLs when they are all distinct, else positions.
///
/// Position keys are unstable across refetches; they are only used when the
/// backend sends the same URL twice.
pub fn item_keys(items: &[NewsItem]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    if items.iter().all(|item| seen.insert(item.url.as_str())) {
        items.iter().map(|item| item.url.clone()).collect()
    } else {
        (0..items.len()).map(|index| index.to_string()).collect()
    }
}

#[component]
pub fn FeedTray(on_navigate: EventHandler<Screen>) -> Element {
    let client = use_client();
    let mut state = use_signal(|| FeedState::Loading);

    let _feed = use_resource(move || {
        let client = client.clone();
        async move {
            match load_feed(&client).await {
                Transition::Stay(next) => state.set(next),
                Transition::Navigate(screen) => on_navigate.call(screen),
            }
        }
    });

    rsx! {
        FeedContent { state: state() }
    }
}

#[component]
fn FeedContent(state: FeedState) -> Element {
    rsx! {
        div {
            class: "feed-tray",
            {match state {
                FeedState::Loading => rsx! {
                    div { class: "feed-status", "Loading news..." }
                },
                FeedState::Failed(message) => rsx! {
                    div { class: "feed-error", "Error: {message}" }
                },
                FeedState::Ready(items) => {
                    let keys = item_keys(&items);
                    rsx! {
                        div {
                            class: "feed-grid",
                            for (key, item) in keys.into_iter().zip(items) {
                                NewsTile { key: "{key}", title: item.title, url: item.url }
                            }
                        }
                    }
                }
            }}
        }
    }
}

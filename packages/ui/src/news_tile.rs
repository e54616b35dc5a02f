use dioxus::prelude::*;

/// A single article card; the link opens in a new tab.
#[component]
pub fn NewsTile(title: String, url: String) -> Element {
    rsx! {
        div {
            class: "news-tile",
            h3 { class: "news-tile-title", "{title}" }
            a {
                class: "news-tile-link",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Read More"
            }
        }
    }
}

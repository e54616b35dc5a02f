use dioxus::prelude::*;

use crate::Screen;

/// One entry in the [`Navbar`].
#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub name: String,
    pub path: String,
    /// Runs instead of following `path`.
    pub on_click: Option<EventHandler<()>>,
    pub highlight: bool,
}

impl NavLink {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            on_click: None,
            highlight: false,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn on_click(mut self, handler: EventHandler<()>) -> Self {
        self.on_click = Some(handler);
        self
    }

    fn class(&self) -> &'static str {
        if self.highlight {
            "navbar-link navbar-link--highlight"
        } else {
            "navbar-link"
        }
    }
}

/// The bar shown above the feed.
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("News Recommender", Screen::Home.path()),
        NavLink::new("Profile", Screen::Profile.path()).highlighted(),
    ]
}

/// Renders `links` in order. Stateless.
#[component]
pub fn Navbar(links: Vec<NavLink>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            for link in links {
                if let Some(handler) = link.on_click {
                    button {
                        key: "{link.name}",
                        class: link.class(),
                        r#type: "button",
                        onclick: move |_| handler.call(()),
                        "{link.name}"
                    }
                } else {
                    Link {
                        key: "{link.name}",
                        class: link.class().to_string(),
                        to: link.path.clone(),
                        "{link.name}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::Route;

/// Turns a screen's navigation intent into a router push.
fn use_screen_navigation() -> EventHandler<ui::Screen> {
    let nav = use_navigator();
    use_callback(move |screen: ui::Screen| {
        nav.push(Route::from(screen));
    })
}

/// Feed screen.
#[component]
pub fn Home() -> Element {
    let on_navigate = use_screen_navigation();

    rsx! {
        ui::Navbar { links: ui::default_links() }
        ui::FeedTray { on_navigate }
    }
}

#[component]
pub fn Login() -> Element {
    let on_navigate = use_screen_navigation();

    rsx! {
        ui::LoginForm { on_navigate }
    }
}

#[component]
pub fn Profile() -> Element {
    let on_navigate = use_screen_navigation();

    rsx! {
        ui::ProfileView { on_navigate }
    }
}

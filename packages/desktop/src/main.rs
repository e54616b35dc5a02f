use dioxus::prelude::*;

use ui::{ClientProvider, Screen};
use views::{Home, Login, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/profile")]
    Profile {},
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Home => Route::Home {},
            Screen::Login => Route::Login {},
            Screen::Profile => Route::Profile {},
        }
    }
}

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    // The session cookie lives in the client's jar for the lifetime of the window.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::NEWS_CSS }

        ClientProvider {
            Router::<Route> {}
        }
    }
}

use api::{FetchOutcome, NewsClient, Transport};
use dioxus::prelude::*;

use crate::views::AlertModal;
use crate::{use_client, NavLink, Navbar, Screen, Transition};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileState {
    #[default]
    Idle,
    Failed(String),
}

/// End the session. Any failure keeps the user here, free to try again.
pub async fn request_logout<T: Transport>(client: &NewsClient<T>) -> Transition<ProfileState> {
    match client.logout().await {
        FetchOutcome::Ok(()) => Transition::Navigate(Screen::Login),
        FetchOutcome::Unauthorized { reason } => Transition::Stay(ProfileState::Failed(reason)),
        FetchOutcome::Failed(err) => Transition::Stay(ProfileState::Failed(err.to_string())),
    }
}

/// Profile screen with a logout action in its navbar.
#[component]
pub fn ProfileView(on_navigate: EventHandler<Screen>) -> Element {
    let client = use_client();
    let mut state = use_signal(ProfileState::default);

    let logout = use_callback(move |()| {
        let client = client.clone();
        spawn(async move {
            match request_logout(&client).await {
                Transition::Stay(next) => state.set(next),
                Transition::Navigate(screen) => on_navigate.call(screen),
            }
        });
    });

    let links = vec![
        NavLink::new("Home", Screen::Home.path()),
        NavLink::new("Logout", "#").highlighted().on_click(logout),
    ];

    rsx! {
        div {
            class: "profile",
            Navbar { links }
            div {
                class: "profile-content",
                h1 { "Profile" }
                p { "Welcome to your profile!" }
            }

            if let ProfileState::Failed(message) = state() {
                AlertModal {
                    message,
                    on_dismiss: move |_| state.set(ProfileState::Idle),
                }
            }
        }
    }
}

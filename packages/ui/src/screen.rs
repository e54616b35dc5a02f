//! Logical navigation targets shared by every platform.
//!
//! Screens never touch the router directly. A state-machine step returns a
//! [`Transition`]; when that is [`Transition::Navigate`], the component hands the
//! [`Screen`] to its `on_navigate` handler and the platform crate maps it onto
//! its own `Route`.

/// A place the app can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The news feed.
    Home,
    Login,
    Profile,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Profile => "/profile",
        }
    }
}

/// Outcome of one state-machine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<S> {
    /// Stay on this screen with a new local state.
    Stay(S),
    /// Leave the screen; its local state no longer matters.
    Navigate(Screen),
}

/// Full-page navigation away from the app (e.g. to an OAuth provider).
///
/// Browser only: the session cookie set at the end of the trip lands in the
/// browser, which is also where the app runs.
#[cfg(target_arch = "wasm32")]
pub fn open_external(url: &str) {
    tracing::info!("Leaving app for {}", url);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            tracing::error!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_paths() {
        assert_eq!(Screen::Home.path(), "/");
        assert_eq!(Screen::Login.path(), "/login");
        assert_eq!(Screen::Profile.path(), "/profile");
    }
}

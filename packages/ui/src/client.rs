//! Backend client context for the UI.

use api::AppClient;
use dioxus::prelude::*;

/// Get the shared backend client.
///
/// Every screen fetches through this one client, so on native builds they all
/// share one cookie jar.
pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}

/// Provider component that builds the backend client once.
/// Wrap your router with this component.
#[component]
pub fn ClientProvider(children: Element) -> Element {
    use_context_provider(api::connect);

    rsx! {
        {children}
    }
}

//! Username/password login form.

use api::{Credentials, FetchOutcome, NewsClient, Transport};
use dioxus::prelude::*;

use crate::{use_client, Screen, Transition};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Post `credentials` once. Fields are sent as typed, empty ones included.
pub async fn submit_login<T: Transport>(
    client: &NewsClient<T>,
    credentials: &Credentials,
) -> Transition<FormStatus> {
    match client.login(credentials).await {
        FetchOutcome::Ok(()) => Transition::Navigate(Screen::Home),
        // The login endpoint answers bad credentials with 401; that is a message, not a redirect.
        FetchOutcome::Unauthorized { reason } => Transition::Stay(FormStatus::Failed(reason)),
        FetchOutcome::Failed(err) => Transition::Stay(FormStatus::Failed(err.to_string())),
    }
}

#[component]
pub fn LoginForm(on_navigate: EventHandler<Screen>) -> Element {
    let client = use_client();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(FormStatus::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            status.set(FormStatus::Submitting);
            let credentials = Credentials::new(username(), password());
            match submit_login(&client, &credentials).await {
                Transition::Stay(next) => status.set(next),
                Transition::Navigate(screen) => on_navigate.call(screen),
            }
        });
    };

    let submitting = status() == FormStatus::Submitting;

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-form",
                onsubmit: handle_submit,

                h1 { class: "login-title", "Login" }

                input {
                    class: "login-input",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "login-btn",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Logging in..." } else { "Login" }
                }

                GoogleLoginButton {}

                if let FormStatus::Failed(err) = status() {
                    p { class: "login-error", "{err}" }
                }
            }
        }
    }
}

/// Sends the whole page to the backend's Google sign-in flow.
#[cfg(target_arch = "wasm32")]
#[component]
fn GoogleLoginButton() -> Element {
    let client = use_client();

    let handle_google = move |_| match client.google_login_url() {
        Ok(url) => crate::screen::open_external(url.as_str()),
        Err(e) => tracing::error!("Failed to build Google login URL: {}", e),
    };

    rsx! {
        button {
            class: "login-btn google-btn",
            r#type: "button",
            onclick: handle_google,
            "Login with Google"
        }
    }
}

// A native shell cannot pick up a session the system browser receives.
#[cfg(not(target_arch = "wasm32"))]
#[component]
fn GoogleLoginButton() -> Element {
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientProvider;
    use api::{ClientConfig, MemoryTransport, Method};

    fn client(transport: &MemoryTransport) -> NewsClient<MemoryTransport> {
        NewsClient::new(
            transport.clone(),
            ClientConfig::default().with_backend_url("https://news.example"),
        )
    }

    #[tokio::test]
    async fn test_success_navigates_home_without_further_requests() {
        let transport = MemoryTransport::new();
        transport.respond(200, r#"{"message":"Logged in"}"#);

        let step = submit_login(&client(&transport), &Credentials::new("ada", "pw")).await;

        assert_eq!(step, Transition::Navigate(Screen::Home));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_fields_still_post_once() {
        let transport = MemoryTransport::new();
        transport.respond(400, r#"{"error":"Missing username"}"#);

        let step = submit_login(&client(&transport), &Credentials::default()).await;

        assert_eq!(step, Transition::Stay(FormStatus::Failed("Missing username".to_string())));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"username":"","password":""}"#)
        );
    }

    #[tokio::test]
    async fn test_bad_credentials_show_server_message() {
        let transport = MemoryTransport::new();
        transport.respond(400, r#"{"error":"bad creds"}"#);

        let step = submit_login(&client(&transport), &Credentials::new("ada", "nope")).await;

        assert_eq!(step, Transition::Stay(FormStatus::Failed("bad creds".to_string())));
    }

    #[tokio::test]
    async fn test_unauthorized_is_shown_not_redirected() {
        let transport = MemoryTransport::new();
        transport
            .respond(401, r#"{"error":"Invalid credentials"}"#)
            .respond(401, "{}");
        let client = client(&transport);
        let credentials = Credentials::new("ada", "nope");

        assert_eq!(
            submit_login(&client, &credentials).await,
            Transition::Stay(FormStatus::Failed("Invalid credentials".to_string()))
        );
        assert_eq!(
            submit_login(&client, &credentials).await,
            Transition::Stay(FormStatus::Failed("Login failed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let transport = MemoryTransport::new();
        transport.respond(500, r#"{"detail":"db down"}"#);

        let step = submit_login(&client(&transport), &Credentials::new("ada", "pw")).await;

        assert_eq!(step, Transition::Stay(FormStatus::Failed("Login failed".to_string())));
    }

    #[tokio::test]
    async fn test_unparsable_reply_is_generic() {
        let transport = MemoryTransport::new();
        transport
            .respond(500, "Internal Server Error")
            .respond(200, "<html>ok</html>");
        let client = client(&transport);
        let credentials = Credentials::new("ada", "pw");
        let went_wrong = Transition::Stay(FormStatus::Failed("Something went wrong".to_string()));

        assert_eq!(submit_login(&client, &credentials).await, went_wrong);
        assert_eq!(submit_login(&client, &credentials).await, went_wrong);
    }

    #[tokio::test]
    async fn test_network_failure_is_generic() {
        let transport = MemoryTransport::new();
        transport.fail("connection reset");

        let step = submit_login(&client(&transport), &Credentials::new("ada", "pw")).await;

        assert_eq!(
            step,
            Transition::Stay(FormStatus::Failed("Something went wrong".to_string()))
        );
    }

    #[test]
    fn test_native_form_has_no_google_login() {
        fn app() -> Element {
            rsx! {
                ClientProvider {
                    LoginForm { on_navigate: move |_| {} }
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Username"));
        assert!(html.contains(r#"type="submit""#));
        assert!(!html.contains("Login with Google"));
    }
}

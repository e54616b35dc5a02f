use dioxus::prelude::*;

/// Blocking message box: the page behind stays inert until `OK` is pressed.
///
/// Clicks on the backdrop are swallowed rather than treated as a dismissal, so
/// the only way out is `on_dismiss`.
#[component]
pub fn AlertModal(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            role: "alertdialog",
            aria_modal: "true",
            div {
                class: "modal-card",
                div {
                    class: "modal-body",
                    p { class: "modal-message", "{message}" }
                    button {
                        class: "modal-dismiss",
                        r#type: "button",
                        autofocus: true,
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

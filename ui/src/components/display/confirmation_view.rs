use dioxus::prelude::*;

use crate::registration::CompletedRegistration;

#[derive(Props, PartialEq, Clone)]
pub struct ConfirmationViewProps {
    pub completed: Option<CompletedRegistration>,
    pub on_register_another: EventHandler<()>,
}

/// Terminal view shown in place of the form once a registration is stored
#[component]
pub fn ConfirmationView(props: ConfirmationViewProps) -> Element {
    rsx! {
        div {
            class: "confirmation-view",
            h2 {
                class: "confirmation-title",
                "🎉 You're registered!"
            }
            if let Some(completed) = props.completed {
                p {
                    class: "confirmation-detail",
                    "Thanks, {completed.name}. Your registration for {completed.email} has been received."
                }
            } else {
                p {
                    class: "confirmation-detail",
                    "Thanks, your registration has been received."
                }
            }
            p {
                class: "confirmation-detail",
                "See you at the party!"
            }
            button {
                class: "submit-button",
                r#type: "button",
                onclick: move |_| props.on_register_another.call(()),
                "Register someone else"
            }
        }
    }
}

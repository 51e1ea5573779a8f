use dioxus::prelude::*;

use crate::registration::SubmissionPhase;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub phase: SubmissionPhase,
}

/// Shows which step of the submission is running; renders nothing when idle
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    match props.phase.progress_label() {
        Some(label) => rsx! {
            div {
                class: "loading-indicator",
                "⏳ {label}"
            }
        },
        None => rsx! {},
    }
}

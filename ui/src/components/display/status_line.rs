use crate::registration::{StatusKind, StatusMessage};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct StatusLineProps {
    pub status: Option<StatusMessage>,
}

#[component]
pub fn StatusLine(props: StatusLineProps) -> Element {
    let Some(status) = props.status else {
        return rsx! {};
    };

    let class = match status.kind {
        StatusKind::Success => "status-line success",
        StatusKind::Error => "status-line error",
        StatusKind::Idle => "status-line",
    };

    rsx! {
        p {
            class: class,
            "{status.text}"
        }
    }
}

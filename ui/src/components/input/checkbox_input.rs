use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CheckboxInputProps {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub on_change: EventHandler<bool>,
}

#[component]
pub fn CheckboxInput(props: CheckboxInputProps) -> Element {
    rsx! {
        label {
            class: "checkbox-label",
            r#for: "{props.id}",
            input {
                id: "{props.id}",
                r#type: "checkbox",
                class: "checkbox-input",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |event| props.on_change.call(event.checked())
            }
            span { "{props.label}" }
        }
    }
}

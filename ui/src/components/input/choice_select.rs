use dioxus::prelude::*;

/// One `<option>` of a [`ChoiceSelect`]
#[derive(PartialEq, Clone, Debug)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Props, PartialEq, Clone)]
pub struct ChoiceSelectProps {
    pub id: String,
    pub choices: Vec<Choice>,
    pub selected: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ChoiceSelect(props: ChoiceSelectProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            id: "{props.id}",
            class: "input-field choice-select",
            value: "{selected}",
            disabled: props.disabled,
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            for choice in props.choices {
                option {
                    value: "{choice.value}",
                    selected: choice.value == selected,
                    "{choice.label}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    #[props(default)]
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default = "input-field".to_string())]
    pub input_class: String,
    #[props(default)]
    pub input_style: String,
    /// HTML pattern attribute, omitted when empty
    #[props(default)]
    pub pattern: String,
    #[props(default)]
    pub title: String,
    #[props(default = true)]
    pub required: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let min = (props.input_type == InputType::Number).then_some("1");
    let pattern = (!props.pattern.is_empty()).then(|| props.pattern.clone());
    let title = (!props.title.is_empty()).then(|| props.title.clone());

    rsx! {
        input {
            id: "{props.id}",
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            pattern: pattern,
            title: title,
            min: min,
            required: props.required,
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

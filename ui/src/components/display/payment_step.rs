use dioxus::prelude::*;

use crate::components::input::{InputType, ValidatedInput};

const PAYMENT_QR: Asset = asset!("/assets/img/payment-qr.svg");

#[derive(Props, PartialEq, Clone)]
pub struct PaymentStepProps {
    pub transaction_id: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// QR code to pay with, plus the transaction ID the payment produced
#[component]
pub fn PaymentStep(props: PaymentStepProps) -> Element {
    rsx! {
        div {
            class: "payment-step",
            p {
                class: "payment-hint",
                "Here is the QR Code:"
            }
            img {
                class: "payment-qr",
                src: PAYMENT_QR,
                alt: "QR Code"
            }
            label {
                class: "input-label",
                r#for: "transactionId",
                "Transaction ID"
            }
            ValidatedInput {
                id: "transactionId".to_string(),
                value: props.transaction_id,
                placeholder: "Enter the ID shown after paying".to_string(),
                input_type: InputType::Text,
                disabled: props.disabled,
                on_change: props.on_change
            }
        }
    }
}

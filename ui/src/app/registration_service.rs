use crate::console_error;
use dioxus::prelude::*;

use crate::components::forms::RegistrationForm;
use crate::registration::FormVariant;
use crate::services::config::get_global_config;
use crate::services::store::{StoreHandle, SupabaseClient};

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

/// Build the store client once per page from the build-time configuration
fn connect_store() -> Result<StoreHandle, String> {
    let config = get_global_config().map_err(|e| e.to_string())?;
    let client = SupabaseClient::new(&config).map_err(|e| e.to_string())?;
    Ok(StoreHandle::new(client))
}

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationServiceProps {
    #[props(default)]
    pub variant: FormVariant,
}

#[component]
pub fn RegistrationService(props: RegistrationServiceProps) -> Element {
    let store = use_hook(|| {
        let store = connect_store();
        if let Err(e) = &store {
            console_error!("[Registration Service] {}", e);
        }
        store
    });

    let body = match store {
        Ok(store) => rsx! {
            RegistrationForm {
                capabilities: props.variant.capabilities(),
                store: store
            }
        },
        Err(message) => rsx! {
            div {
                class: "config-error",
                p { "Registration is unavailable: the site is not configured." }
                p { class: "config-error-detail", "{message}" }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        div {
            class: "registration-page",

            div {
                class: "registration-card",

                h1 {
                    class: "registration-title",
                    "New Year Party at VRB!"
                }

                {body}
            }
        }
    }
}

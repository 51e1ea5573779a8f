use dioxus::prelude::*;
use ui::registration::FormVariant;
use ui::RegistrationService;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "New Year Party at VRB!" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/classic")]
    Classic {},
    #[route("/verified")]
    Verified {},
}

#[component]
fn Home() -> Element {
    rsx! {
        RegistrationService { variant: FormVariant::Group }
    }
}

/// Original sign-up: relationship choice, no duplicate checks, form resets after success
#[component]
fn Classic() -> Element {
    rsx! {
        RegistrationService { variant: FormVariant::Basic }
    }
}

#[component]
fn Verified() -> Element {
    rsx! {
        RegistrationService { variant: FormVariant::Verified }
    }
}

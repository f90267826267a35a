use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::{use_route, use_session};

/// Login form.
///
/// Any non-empty username/password pair is accepted; there is no real
/// credential check and nothing is retained after submission. A successful
/// submission authenticates the session and the shell re-resolves the
/// current path, so a protected target appears in place. If the user was
/// sitting on `/login` itself, navigate home instead of leaving the form up.
#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let mut path = use_route();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let mut submit = move || {
        let next = {
            let username = username.read();
            let password = password.read();
            session.read().login(&username, &password)
        };
        if next.is_authenticated() {
            info!("login accepted");
            session.set(next);
            if path.read().as_str() == "/login" {
                path.set("/".to_string());
            }
        }
    };

    rsx! {
        section { class: "pm-view pm-login",
            form {
                class: "pm-login-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit();
                },
                label { r#for: "pm-username", "Username:" }
                input {
                    id: "pm-username",
                    class: "pm-input",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "pm-password", "Password:" }
                input {
                    id: "pm-password",
                    class: "pm-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "pm-btn pm-btn--primary", r#type: "submit", "Login" }
            }
        }
    }
}

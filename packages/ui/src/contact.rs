use dioxus::prelude::*;

use content::{ContactChannel, ContactMethod};
use mailer::{ContactForm, EmailJsClient, SubmissionState, ValidationErrors};

use crate::icons::{
    LdArrowRight, LdFacebook, LdLink, LdMail, LdMapPin, LdMessageCircle, LdMessageSquare,
    LdPhone, LdSend,
};
use crate::toast::{use_toast, ToastOptions};
use crate::Icon;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

/// Contact section: reach-me cards plus the message form.
///
/// Submission walks Idle -> Submitting -> Succeeded/Failed and settles back
/// to Idle. Success clears the fields; failure keeps them for correction and
/// surfaces the delivery detail in a toast.
#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut state = use_signal(SubmissionState::default);
    let client = use_hook(EmailJsClient::default);
    let toast_api = use_toast();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            let snapshot = form();
            match snapshot.validate() {
                Ok(()) => errors.set(ValidationErrors::default()),
                Err(report) => {
                    tracing::debug!("contact form rejected: {} invalid field(s)", report.count());
                    errors.set(report);
                    return;
                }
            }
            if !state.write().begin() {
                return;
            }

            match client.send(&snapshot).await {
                Ok(()) => {
                    state.write().succeed();
                    toast_api.success(
                        "Message sent successfully!".to_string(),
                        ToastOptions::new()
                            .description("Thank you for your message. I'll get back to you soon."),
                    );
                    form.set(ContactForm::default());
                }
                Err(err) => {
                    tracing::error!("Message delivery failed: {err}");
                    let detail = err.user_message();
                    state.write().fail(detail.clone());
                    toast_api.error(
                        "Failed to send message".to_string(),
                        ToastOptions::new().description(detail),
                    );
                }
            }
            state.write().settle();
        }
    };

    let methods: Vec<(Element, String, bool, ContactMethod)> = ContactMethod::directory()
        .into_iter()
        .map(|method| {
            let icon = match method.channel {
                ContactChannel::Email => rsx! { Icon { icon: LdMail, width: 24, height: 24 } },
                ContactChannel::Phone => rsx! { Icon { icon: LdPhone, width: 24, height: 24 } },
                ContactChannel::Facebook => {
                    rsx! { Icon { icon: LdFacebook, width: 24, height: 24 } }
                }
                ContactChannel::Location => rsx! { Icon { icon: LdMapPin, width: 24, height: 24 } },
            };
            let target = method.href.clone().unwrap_or_else(|| "#".to_string());
            let external = method.is_external();
            (icon, target, external, method)
        })
        .collect();

    let current = form();
    let report = errors();
    let submitting = state().is_submitting();

    rsx! {
        document::Stylesheet { href: CONTACT_CSS }
        section {
            id: "contact",
            class: "contact",

            div {
                class: "contact-backdrop",
                div { class: "contact-blob contact-blob-bright" }
                div { class: "contact-blob contact-blob-dim" }
            }
            div { class: "section-divider" }

            div {
                class: "contact-inner",
                div {
                    class: "contact-heading",
                    h2 {
                        "Get In "
                        span { class: "heading-accent", "Touch" }
                    }
                    p {
                        "Feel free to reach out if you're looking for a developer, have a question, or just want to connect."
                    }
                }

                div {
                    class: "method-grid",
                    for (icon, target, external, method) in methods {
                        a {
                            class: "method-card",
                            href: "{target}",
                            target: if external { "_blank" },
                            rel: if external { "noopener noreferrer" },
                            div {
                                class: "method-card-front",
                                span { class: "method-icon", {icon} }
                                div {
                                    h3 { "{method.label}" }
                                    p { "{method.value}" }
                                }
                            }
                            div {
                                class: "method-card-back",
                                span {
                                    class: "method-back-icon",
                                    Icon { icon: LdLink, width: 32, height: 32 }
                                }
                                p { "Connect with me" }
                                span {
                                    class: "method-back-hint",
                                    "Click to open "
                                    Icon { icon: LdArrowRight, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "message-panel",
                    div {
                        class: "message-panel-head",
                        span {
                            class: "message-panel-icon",
                            Icon { icon: LdMessageCircle, width: 20, height: 20 }
                        }
                        h3 { "Send Me a Message" }
                    }

                    div {
                        class: "chat-greeting",
                        span { class: "chat-greeting-badge", "A" }
                        div {
                            class: "chat-greeting-bubble",
                            p { "Hi there! Thanks for visiting my portfolio. Send me a message using the form below." }
                        }
                    }

                    form {
                        class: "contact-form",
                        onsubmit: onsubmit,

                        div {
                            class: "field-row",
                            div {
                                class: "field",
                                label { r#for: "name", "Name" }
                                div {
                                    class: "field-control",
                                    input {
                                        id: "name",
                                        r#type: "text",
                                        placeholder: "Your name",
                                        class: if report.name.is_some() { "field-input field-invalid" } else { "field-input" },
                                        value: "{current.name}",
                                        oninput: move |evt| form.write().name = evt.value(),
                                    }
                                    span { class: "field-adornment", "@" }
                                }
                                if let Some(ref message) = report.name {
                                    p { class: "field-error", "{message}" }
                                }
                            }
                            div {
                                class: "field",
                                label { r#for: "email", "Email" }
                                div {
                                    class: "field-control",
                                    input {
                                        id: "email",
                                        r#type: "email",
                                        placeholder: "Your email",
                                        class: if report.email.is_some() { "field-input field-invalid" } else { "field-input" },
                                        value: "{current.email}",
                                        oninput: move |evt| form.write().email = evt.value(),
                                    }
                                    span {
                                        class: "field-adornment",
                                        Icon { icon: LdMail, width: 14, height: 14 }
                                    }
                                }
                                if let Some(ref message) = report.email {
                                    p { class: "field-error", "{message}" }
                                }
                            }
                        }

                        div {
                            class: "field",
                            label { r#for: "subject", "Subject" }
                            div {
                                class: "field-control",
                                input {
                                    id: "subject",
                                    r#type: "text",
                                    placeholder: "Subject",
                                    class: if report.subject.is_some() { "field-input field-invalid" } else { "field-input" },
                                    value: "{current.subject}",
                                    oninput: move |evt| form.write().subject = evt.value(),
                                }
                                span {
                                    class: "field-adornment",
                                    Icon { icon: LdMessageSquare, width: 14, height: 14 }
                                }
                            }
                            if let Some(ref message) = report.subject {
                                p { class: "field-error", "{message}" }
                            }
                        }

                        div {
                            class: "field",
                            label { r#for: "message", "Message" }
                            textarea {
                                id: "message",
                                rows: 5,
                                placeholder: "Your message",
                                class: if report.message.is_some() { "field-input field-textarea field-invalid" } else { "field-input field-textarea" },
                                value: "{current.message}",
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                            if let Some(ref message) = report.message {
                                p { class: "field-error", "{message}" }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "contact-submit",
                            disabled: submitting,
                            if submitting {
                                span { class: "submit-spinner" }
                                "Sending..."
                            } else {
                                "Send Message"
                                Icon { icon: LdSend, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}

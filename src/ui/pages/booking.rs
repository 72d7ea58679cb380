use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{BookingDraft, Estimator, ServiceMode},
    infra::BookingClient,
    ui::{
        components::{
            section_heading::SectionHeading,
            toast::{push_message, push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::config::SiteConfig,
};

const SUBMITTED: &str = "Request logged. Dispatch will call to confirm.";
const CONNECTION_ERROR: &str =
    "There was a connection error. Please call our dispatch line directly.";

#[component]
pub fn BookingSection() -> Element {
    let estimator = use_context::<Signal<Estimator>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<SiteConfig>();

    // Preselect whatever service the visitor was last estimating.
    let mut draft = use_signal(|| BookingDraft {
        service_mode: ServiceMode::from(estimator.peek().selection().mode),
        ..BookingDraft::default()
    });
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let phone_href = config.phone_href();
    let phone_display = config.phone_display();

    let on_submit = {
        let config = config.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if submitting() {
                return;
            }

            let request = match draft().into_request() {
                Ok(request) => request,
                Err(err) => {
                    push_toast(toasts, ToastKind::Warning, format!("Please check the form: {err}."));
                    return;
                }
            };

            let endpoint = config.booking_endpoint.clone();
            let phone_href = config.phone_href();
            submitting.set(true);
            spawn(async move {
                let outcome = match BookingClient::new(endpoint) {
                    Ok(client) => client.submit(&request).await,
                    Err(err) => Err(err),
                };
                submitting.set(false);
                match outcome {
                    Ok(()) => {
                        info!("Booking {} logged", request.request_id);
                        push_toast(toasts, ToastKind::Success, SUBMITTED);
                        submitted.set(true);
                    }
                    Err(err) => {
                        warn!("Booking {} not delivered: {err}", request.request_id);
                        push_message(
                            toasts,
                            ToastMessage::new(ToastKind::Error, CONNECTION_ERROR)
                                .with_action("Call", phone_href),
                        );
                    }
                }
            });
        }
    };

    let on_reset = move |_| {
        draft.set(BookingDraft::default());
        submitted.set(false);
    };

    if submitted() {
        return rsx! {
            section { id: "booking", class: "py-20 bg-slate-900 border-t border-slate-800",
                div { class: "container mx-auto px-4 max-w-3xl",
                    div { class: "bg-slate-950 border border-green-900/50 p-12 rounded-2xl text-center shadow-2xl",
                        div { class: "text-5xl mb-6", "✅" }
                        h2 { class: "text-3xl font-bold text-white mb-4", "Request Logged" }
                        p { class: "text-slate-400 mb-8 text-lg",
                            "Dispatch has your details. For immediate pickups, call us so we can roll a driver now."
                        }
                        div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                            a { class: theme::BTN_ALERT, href: "{phone_href}", "CALL NOW {phone_display}" }
                            button { class: theme::BTN_SECONDARY, onclick: on_reset, "Submit New Request" }
                        }
                    }
                }
            }
        };
    }

    let current = draft();

    rsx! {
        section { id: "booking", class: "py-20 bg-slate-900 border-t border-slate-800",
            div { class: "container mx-auto px-4 max-w-4xl",
                SectionHeading {
                    title: "Book a Courier",
                    subtitle: "Tell dispatch what is moving. We confirm every request by phone.",
                    centered: true,
                }
                form {
                    class: "bg-slate-950 border border-slate-800 rounded-2xl p-6 lg:p-10 space-y-8 shadow-2xl",
                    onsubmit: on_submit,

                    FormGroup { title: "Contact",
                        div { class: "grid gap-6 md:grid-cols-3",
                            div {
                                label { class: theme::LABEL, "Full Name" }
                                input {
                                    class: theme::INPUT,
                                    placeholder: "John Doe",
                                    value: "{current.full_name}",
                                    oninput: move |evt| draft.write().full_name = evt.value(),
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Phone Number" }
                                input {
                                    class: theme::INPUT,
                                    r#type: "tel",
                                    placeholder: "(512) 555-0123",
                                    value: "{current.phone}",
                                    oninput: move |evt| draft.write().phone = evt.value(),
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Email Address" }
                                input {
                                    class: theme::INPUT,
                                    r#type: "email",
                                    placeholder: "dispatch@company.com",
                                    value: "{current.email}",
                                    oninput: move |evt| draft.write().email = evt.value(),
                                }
                            }
                        }
                    }

                    FormGroup { title: "Service",
                        div { class: "grid gap-6 md:grid-cols-3",
                            div {
                                label { class: theme::LABEL, "Service Type" }
                                select {
                                    class: theme::INPUT,
                                    value: "{current.service_mode.value()}",
                                    onchange: move |evt: FormEvent| {
                                        if let Some(mode) = ServiceMode::from_value(&evt.value()) {
                                            draft.write().service_mode = mode;
                                        }
                                    },
                                    for mode in [ServiceMode::Ground, ServiceMode::Air] {
                                        option {
                                            key: "{mode.value()}",
                                            value: "{mode.value()}",
                                            selected: mode == current.service_mode,
                                            "{mode.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Pickup Time" }
                                input {
                                    class: theme::INPUT,
                                    r#type: "datetime-local",
                                    value: "{current.pickup_time}",
                                    oninput: move |evt| draft.write().pickup_time = evt.value(),
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Delivery Deadline" }
                                input {
                                    class: theme::INPUT,
                                    r#type: "datetime-local",
                                    value: "{current.delivery_time}",
                                    oninput: move |evt| draft.write().delivery_time = evt.value(),
                                }
                            }
                        }
                        label { class: "mt-4 flex items-center gap-3 text-sm text-slate-300 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                class: "h-5 w-5 accent-red-600",
                                checked: current.urgent,
                                onchange: move |evt: FormEvent| draft.write().urgent = evt.checked(),
                            }
                            "Urgent: needs to move within the hour"
                        }
                    }

                    FormGroup { title: "Route",
                        div { class: "grid gap-6 md:grid-cols-2",
                            div {
                                label { class: theme::LABEL, "Pickup Address" }
                                input {
                                    class: theme::INPUT,
                                    placeholder: "Street, City, Zip",
                                    value: "{current.pickup_address}",
                                    oninput: move |evt| draft.write().pickup_address = evt.value(),
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Delivery Address" }
                                input {
                                    class: theme::INPUT,
                                    placeholder: "Street, City, Zip",
                                    value: "{current.delivery_address}",
                                    oninput: move |evt| draft.write().delivery_address = evt.value(),
                                }
                            }
                        }
                    }

                    FormGroup { title: "Shipment",
                        div { class: "grid gap-6 md:grid-cols-3",
                            div { class: "md:col-span-3",
                                label { class: theme::LABEL, "Item Description" }
                                input {
                                    class: theme::INPUT,
                                    placeholder: "Medical samples, legal documents, parts...",
                                    value: "{current.item_description}",
                                    oninput: move |evt| draft.write().item_description = evt.value(),
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Weight (lbs)" }
                                input {
                                    class: theme::INPUT,
                                    placeholder: "e.g. 25",
                                    value: "{current.weight}",
                                    oninput: move |evt| draft.write().weight = evt.value(),
                                }
                            }
                            div {
                                label { class: theme::LABEL, "Dimensions" }
                                input {
                                    class: theme::INPUT,
                                    placeholder: "L x W x H",
                                    value: "{current.dimensions}",
                                    oninput: move |evt| draft.write().dimensions = evt.value(),
                                }
                            }
                            div { class: "md:col-span-3",
                                label { class: theme::LABEL, "Notes for Dispatch" }
                                textarea {
                                    class: theme::INPUT,
                                    rows: "3",
                                    placeholder: "Gate codes, contact on site, handling instructions",
                                    value: "{current.notes}",
                                    oninput: move |evt| draft.write().notes = evt.value(),
                                }
                            }
                        }
                    }

                    div { class: "flex flex-col sm:flex-row items-center justify-between gap-4 pt-4 border-t border-slate-800",
                        p { class: "text-sm text-slate-500",
                            "Need it moving right now? Call "
                            a { class: "text-red-400 font-semibold", href: "{phone_href}", "{phone_display}" }
                        }
                        button {
                            class: theme::BTN_ALERT,
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Sending..." } else { "Request Pickup" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FormGroup(title: &'static str, children: Element) -> Element {
    rsx! {
        fieldset { class: "space-y-4",
            legend { class: "text-xs font-bold uppercase tracking-widest text-red-500 mb-4", "{title}" }
            {children}
        }
    }
}

use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::{components::section_heading::SectionHeading, theme},
};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Last Minute Delivery",
        description: "When overnight isn't fast enough. Expedited direct-drive service for urgent, time-critical deliveries. We pick up within the hour and drive straight through to the destination.",
    },
    Feature {
        icon: "🩺",
        title: "Medical Courier",
        description: "Stat transport for specimens, pharmaceuticals, and surgical equipment. Professional medical couriers ensuring sterile, temperature-aware handling for healthcare providers.",
    },
    Feature {
        icon: "💼",
        title: "Legal Courier Services",
        description: "Secure chain of custody for court filings, evidence, and sensitive documents. We provide professional, verified hand-to-hand delivery for law firms and government.",
    },
    Feature {
        icon: "✈",
        title: "Air Hand Carry Austin",
        description: "On-board courier service (OBC) for domestic & international air delivery. Your critical asset never leaves our personal possession, flying in the cabin for immediate hand-off at any major airport globally.",
    },
];

const HUBS: [&str; 4] = ["Houston", "Dallas / Fort Worth", "San Antonio", "El Paso"];

const CENTRAL_TEXAS_CITIES: [&str; 21] = [
    "Round Rock",
    "Georgetown",
    "Cedar Park",
    "Pflugerville",
    "Lakeway",
    "Bee Cave",
    "West Lake Hills",
    "Kyle",
    "Leander",
    "Liberty Hill",
    "Lago Vista",
    "Taylor",
    "Hutto",
    "Salado",
    "Killeen",
    "Temple",
    "Buda",
    "Bastrop",
    "Elgin",
    "New Braunfels",
    "San Marcos",
];

const HAND_CARRY_POINTS: [&str; 3] = [
    "Chain of custody never broken",
    "Real-time flight tracking updates",
    "Direct delivery from airport to recipient",
];

struct Testimonial {
    role: &'static str,
    location: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        role: "Aviation Manager",
        location: "Austin-Bergstrom",
        quote: "We had an AOG (Aircraft on Ground) situation. Speedy Bat got the part from Dallas in 3 hours flat. Saved us $50k in delays.",
    },
    Testimonial {
        role: "Law Firm Partner",
        location: "Downtown Houston",
        quote: "The court filing deadline was 5:00 PM. They picked up at 1:30 PM. Walked it into the clerk's office at 4:15 PM. Incredible.",
    },
    Testimonial {
        role: "Medical Coordinator",
        location: "San Antonio Medical Center",
        quote: "When transplant teams need samples, we don't call Uber. We call Speedy Bat. Professional, sterile, and ridiculously fast.",
    },
];

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "relative flex items-center py-24 overflow-hidden bg-slate-900",
            div { class: "absolute inset-0 opacity-10 bg-[linear-gradient(to_right,#80808012_1px,transparent_1px),linear-gradient(to_bottom,#80808012_1px,transparent_1px)] bg-[size:24px_24px]" }
            div { class: "container mx-auto px-4 relative z-20",
                div { class: "max-w-4xl",
                    div { class: "inline-flex items-center gap-2 bg-slate-800/50 border border-slate-700 px-3 py-1 mb-8 rounded-full",
                        div { class: "w-2 h-2 bg-green-500 rounded-full animate-pulse" }
                        span { class: "text-xs font-medium text-slate-300 uppercase tracking-widest", "Status: Available | 24/7 Service" }
                    }
                    h1 { class: "text-5xl md:text-7xl font-bold text-white uppercase leading-tight mb-2 tracking-tight",
                        "Last Minute "
                        br {}
                        span { class: "text-transparent bg-clip-text bg-gradient-to-r from-red-500 to-red-700", "Courier Austin" }
                    }
                    h2 { class: "text-2xl md:text-3xl text-slate-400 font-medium uppercase tracking-widest mb-8",
                        "Professional Expedited Logistics"
                    }
                    p { class: "text-xl md:text-2xl text-slate-300 font-light mb-8 max-w-2xl border-l-4 border-red-600 pl-6 py-2",
                        "The premier "
                        strong { "last minute delivery" }
                        " and "
                        strong { "emergency courier" }
                        " service for Austin, TX. Specialized in dedicated direct-drive transport and secure US Domestic Hand Carry."
                    }
                    div { class: "flex flex-col sm:flex-row gap-4",
                        Link { class: theme::BTN_ALERT, to: Route::Booking {}, "Book Courier →" }
                        Link { class: theme::BTN_SECONDARY, to: Route::Estimator {}, "🕒 View Transit Times" }
                    }
                    p { class: "mt-12 text-slate-500 font-medium text-sm tracking-wider uppercase",
                        "Dedicated Vehicles. Direct Delivery. Zero Compromise."
                    }
                }
            }
        }
    }
}

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "py-24 border-b border-slate-800 bg-slate-900 relative overflow-hidden",
            div { class: "container mx-auto px-4 relative z-10",
                SectionHeading {
                    title: "Services Offered",
                    subtitle: "Specialized logistics solutions for high-stakes, time-critical, and sensitive requirements in Austin and Nationwide.",
                    centered: true,
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mt-16",
                    for feature in FEATURES.iter() {
                        div { key: "{feature.title}", class: "group bg-slate-800/50 border border-slate-700 p-6 hover:bg-slate-800 transition-all flex flex-col rounded-lg",
                            div { class: "bg-slate-900 w-12 h-12 flex items-center justify-center mb-6 border border-slate-600 group-hover:border-red-600 transition-colors rounded",
                                "{feature.icon}"
                            }
                            h3 { class: "text-lg font-bold uppercase text-white mb-3 tracking-wide", "{feature.title}" }
                            p { class: "text-slate-400 leading-relaxed text-sm", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ServiceArea() -> Element {
    rsx! {
        section { class: "py-24 bg-slate-900",
            div { class: "container mx-auto px-4",
                SectionHeading {
                    title: "Austin Courier Service Area",
                    subtitle: "Last-minute delivery and expedited delivery solutions originating from Austin/Waco Hub to all major Texas metros.",
                }
                div { class: "mt-12 flex flex-wrap justify-center gap-4 md:gap-8",
                    div { class: "flex items-center gap-2 bg-slate-800 px-6 py-4 border border-red-900/50 shadow-lg shadow-red-900/10 rounded-lg",
                        span { class: "text-red-600", "⌖" }
                        span { class: "text-white font-bold uppercase tracking-widest", "Austin (HQ)" }
                    }
                    for hub in HUBS {
                        div { key: "{hub}", class: "flex items-center gap-2 bg-slate-800 px-6 py-4 border border-slate-700 opacity-75 rounded-lg",
                            div { class: "w-2 h-2 bg-slate-500 rounded-full" }
                            span { class: "text-slate-300 font-bold uppercase tracking-widest", "{hub}" }
                        }
                    }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-12 mt-20",
                    div { class: "bg-slate-950 border border-slate-800 p-8 rounded-lg",
                        h3 { class: "text-xl font-bold text-white uppercase mb-4 flex items-center",
                            span { class: "w-2 h-8 bg-red-600 mr-3 rounded-full" }
                            "Austin Last Minute Delivery Zone"
                        }
                        p { class: "text-slate-400 mb-6 font-light leading-relaxed",
                            "Immediate dispatch to the following cities within "
                            span { class: "text-white font-bold", "60 minutes" }
                            " of driving from Austin HQ:"
                        }
                        div { class: "flex flex-wrap gap-2",
                            for city in CENTRAL_TEXAS_CITIES {
                                span { key: "{city}", class: "text-xs font-medium text-slate-500 bg-slate-900 border border-slate-800 px-2 py-1 uppercase rounded",
                                    "{city}"
                                }
                            }
                            span { class: "text-xs font-medium text-red-500 bg-red-950/20 border border-red-900/30 px-2 py-1 uppercase rounded",
                                "+ All Points Between"
                            }
                        }
                    }
                    div { class: "bg-slate-950 border border-slate-800 p-8 rounded-lg",
                        h3 { class: "text-xl font-bold text-white uppercase mb-4 flex items-center",
                            span { class: "w-2 h-8 bg-blue-600 mr-3 rounded-full" }
                            "US Domestic & International Hand Carry"
                        }
                        p { class: "text-slate-400 mb-6 font-light leading-relaxed",
                            "For ultra-critical assets that cannot leave human custody. Our courier flies with your package as carry-on luggage to any major airport in the United States."
                        }
                        ul { class: "space-y-2",
                            for point in HAND_CARRY_POINTS {
                                li { key: "{point}", class: "flex items-center gap-2 text-sm text-slate-300 font-medium",
                                    div { class: "w-1.5 h-1.5 bg-blue-500 rounded-full" }
                                    span { "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { class: "py-24 bg-slate-950 border-t border-slate-800",
            div { class: "container mx-auto px-4",
                SectionHeading {
                    title: "Client Reviews",
                    subtitle: "When failure is not an option, professionals choose Speedy Bat.",
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8 mt-12",
                    for testimonial in TESTIMONIALS.iter() {
                        div { key: "{testimonial.role}", class: "bg-slate-900 border border-slate-800 p-8 flex flex-col",
                            span { class: "text-slate-700 text-4xl mb-6", "“" }
                            p { class: "text-slate-300 mb-8 italic flex-grow leading-relaxed", "\"{testimonial.quote}\"" }
                            div { class: "mt-auto border-t border-slate-800 pt-4",
                                div { class: "text-white font-bold uppercase text-sm tracking-wider", "{testimonial.role}" }
                                div { class: "text-red-500 text-xs font-mono mt-1", "{testimonial.location}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Landing page: marketing sections followed by the estimator and booking form.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Hero {}
        Features {}
        super::EstimatorSection {}
        ServiceArea {}
        Testimonials {}
        super::BookingSection {}
    }
}

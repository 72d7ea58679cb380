use dioxus::prelude::*;

use crate::{
    app::Route,
    util::{
        config::SiteConfig,
        version::{version_label, APP_NAME},
    },
};

/// Bat mark shared with the favicon.
const LOGO_PATH: &str = "M12 2C6.5 2 2 6.5 2 12c0 2.5 1 4.8 2.5 6.5L12 22l7.5-3.5C21 16.8 22 14.5 22 12c0-5.5-4.5-10-10-10zm0 2c1.5 0 3 .5 4.2 1.3C14.5 6.5 13 8.5 12 11c-1-2.5-2.5-4.5-4.2-5.7C9 3.5 10.5 3 12 3zm-6 6c1.8-1.5 3.5-2.5 5-3 .5 1.5 1 3 1 4.5 0 2-.5 3.8-1.5 5.5L6 14c0-2 .5-3.5 0-5zm12 0c-.5 1.5 0 3 0 5l-4.5 2c-1-1.7-1.5-3.5-1.5-5.5 0-1.5.5-3 1-4.5 1.5.5 3.2 1.5 5 3z";

#[component]
pub fn Shell(children: Element) -> Element {
    let config = use_context::<SiteConfig>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header { class: "sticky top-0 z-50 bg-slate-900/95 backdrop-blur-md border-b border-slate-800 py-3",
                div { class: "container mx-auto px-4 flex justify-between items-center gap-4",
                    Link { to: Route::Home {}, class: "flex items-center gap-2",
                        svg {
                            class: "h-8 w-8 text-red-600",
                            view_box: "0 0 24 24",
                            fill: "currentColor",
                            path { d: LOGO_PATH }
                        }
                        div { class: "flex flex-col",
                            span { class: "text-xl font-black tracking-tighter uppercase leading-none", "Speedy Bat" }
                            span { class: "text-xs text-slate-400 tracking-[0.2em] uppercase leading-none", "Couriers" }
                        }
                    }

                    nav { class: "hidden md:flex gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Home {}), onclick: move |_| { nav.push(Route::Home {}); }, label: "Home" }
                        NavButton { active: matches!(current_route, Route::Estimator {}), onclick: move |_| { nav.push(Route::Estimator {}); }, label: "Rates" }
                        NavButton { active: matches!(current_route, Route::Booking {}), onclick: move |_| { nav.push(Route::Booking {}); }, label: "Book" }
                    }

                    a {
                        class: "flex items-center gap-2 bg-red-600 hover:bg-red-700 text-white px-5 py-2 font-bold uppercase tracking-wide transition-colors animate-pulse-heartbeat shadow-lg shadow-red-900/20 rounded",
                        href: "{config.phone_href()}",
                        span { "📞" }
                        span { "Call 24/7" }
                    }
                }
            }
            main {
                {children}
            }
            footer { class: "bg-slate-950 py-12 border-t border-slate-900",
                div { class: "container mx-auto px-4 text-center",
                    div { class: "text-2xl font-black text-white uppercase tracking-tight mb-4", "{APP_NAME}" }
                    p { class: "text-slate-500 text-sm mb-2", "Serving Central Texas & Beyond. 24/7/365." }
                    p { class: "text-slate-500 text-sm mb-6",
                        "Dispatch: "
                        a { class: "text-slate-300 hover:text-white", href: "{config.phone_href()}", "{config.phone_display()}" }
                    }
                    div { class: "text-slate-700 text-xs font-mono", "SPEEDY BAT COURIERS {version_label()}. ALL RIGHTS RESERVED." }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-red-600/60 bg-red-600/15 px-4 py-2 font-semibold text-red-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

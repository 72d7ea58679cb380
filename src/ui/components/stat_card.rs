use dioxus::prelude::*;

/// Icon + caption + value block used in the route preview overlay.
#[component]
pub fn StatCard(icon: String, icon_class: String, caption: String, value: String, unit: Option<String>) -> Element {
    rsx! {
        div { class: "flex items-center gap-4",
            div { class: "bg-slate-800 p-2 rounded-full {icon_class}", "{icon}" }
            div {
                div { class: "text-[10px] text-slate-500 uppercase tracking-widest font-bold", "{caption}" }
                div { class: "text-lg md:text-xl font-mono text-white font-bold",
                    "{value}"
                    if let Some(unit) = unit {
                        span { class: "ml-1 text-sm text-slate-500 font-normal", "{unit}" }
                    }
                }
            }
        }
    }
}

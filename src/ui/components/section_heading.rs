use dioxus::prelude::*;

#[component]
pub fn SectionHeading(
    title: String,
    subtitle: Option<String>,
    #[props(default)] centered: bool,
) -> Element {
    let align = if centered { "text-center mx-auto" } else { "" };
    rsx! {
        div { class: "mb-8 max-w-3xl {align}",
            h2 { class: "text-3xl md:text-4xl font-bold text-white uppercase tracking-tight mb-3", "{title}" }
            div { class: "h-1 w-16 bg-red-600 mb-4 {align}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-slate-400 text-lg", "{subtitle}" }
            }
        }
    }
}

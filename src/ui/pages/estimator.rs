use dioxus::prelude::*;

use crate::{
    domain::{
        ground_embed_url, AddOn, AddOns, Estimator, PreviewTarget, QuoteBreakdown, RoutePreview,
        ShippingMode, BASE_FEE, CUSTOM_MILES_MAX, CUSTOM_MILES_MIN, HQ_LABEL,
    },
    infra::LeafletMap,
    ui::{
        components::{section_heading::SectionHeading, stat_card::StatCard},
        format::format_usd,
        theme,
    },
};

/// DOM id of the element Leaflet mounts into while in air mode.
const AIR_MAP_CONTAINER: &str = "air-route-map";

#[component]
pub fn EstimatorSection() -> Element {
    let mut estimator = use_context::<Signal<Estimator>>();

    // Air map lifecycle: synced after every render that changed the selection,
    // released when this section unmounts.
    let mut preview = use_signal(|| RoutePreview::new(LeafletMap::new(AIR_MAP_CONTAINER)));
    use_effect(move || {
        let selection = *estimator.read().selection();
        preview.write().sync(&selection);
    });
    use_drop(move || {
        if let Ok(mut preview) = preview.try_write() {
            preview.teardown();
        }
    });

    let (catalog, selection, snapshot) =
        estimator.with(|e| (*e.catalog(), *e.selection(), e.snapshot().clone()));
    let mode = selection.mode;
    let target = PreviewTarget::for_selection(&selection);
    let is_custom = selection.ground_destination.is_custom();

    rsx! {
        section { id: "estimator", class: "py-8 lg:py-10 bg-slate-950 relative overflow-hidden",
            div { class: "container mx-auto px-4 relative z-10",
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6 lg:gap-10 items-start",
                    div {
                        SectionHeading {
                            title: "Rate Estimator",
                            subtitle: "Select your service level to estimate logistics costs.",
                        }
                        div { class: "bg-slate-900 border border-slate-800 shadow-2xl rounded-xl overflow-hidden",
                            div { class: "grid grid-cols-2 border-b border-slate-800",
                                for tab in [ShippingMode::Ground, ShippingMode::Air] {
                                    button {
                                        key: "{tab.label()}",
                                        class: "{theme::tab_class(tab, tab == mode)}",
                                        onclick: move |_| {
                                            estimator.write().set_mode(tab);
                                        },
                                        span { "{theme::tab_icon(tab)}" }
                                        span { "{tab.label()}" }
                                    }
                                }
                            }

                            div { class: "p-4 lg:p-5 space-y-3",
                                if mode == ShippingMode::Ground {
                                    div {
                                        label { class: theme::FIELD_LABEL, "Destination (From Austin HQ)" }
                                        select {
                                            class: "{theme::select_class(mode)}",
                                            value: "{selection.ground_destination.name}",
                                            onchange: move |evt: FormEvent| {
                                                estimator.write().select_ground_destination(&evt.value());
                                            },
                                            for destination in catalog.list_ground_destinations() {
                                                option {
                                                    key: "{destination.name}",
                                                    value: "{destination.name}",
                                                    selected: destination.name == selection.ground_destination.name,
                                                    "{destination.name}"
                                                }
                                            }
                                        }
                                    }

                                    if is_custom {
                                        div { class: "pt-2 pb-3 px-1",
                                            label { class: theme::FIELD_LABEL,
                                                "Distance (One Way Miles): "
                                                span { class: "text-white", "{selection.custom_miles} mi" }
                                            }
                                            input {
                                                r#type: "range",
                                                class: "estimator-range w-full h-2 bg-slate-700 rounded-lg cursor-pointer",
                                                min: "{CUSTOM_MILES_MIN}",
                                                max: "{CUSTOM_MILES_MAX}",
                                                value: "{selection.custom_miles}",
                                                oninput: move |evt: FormEvent| {
                                                    if let Ok(miles) = evt.value().parse::<i64>() {
                                                        estimator.write().set_custom_miles(miles);
                                                    }
                                                },
                                            }
                                        }
                                    }

                                    div {
                                        label { class: theme::FIELD_LABEL, "Shipment Specifics" }
                                        div { class: "grid grid-cols-2 gap-2",
                                            for add_on in AddOn::ALL {
                                                button {
                                                    key: "{add_on.label()}",
                                                    class: "{theme::add_on_class(add_on, add_on.is_set(&selection.add_ons))}",
                                                    onclick: move |_| {
                                                        estimator.write().toggle(add_on);
                                                    },
                                                    span { class: "mb-1", "{theme::add_on_icon(add_on)}" }
                                                    span { class: "text-[9px] uppercase font-bold tracking-wider", "{add_on.label()}" }
                                                }
                                            }
                                        }
                                    }
                                } else {
                                    div {
                                        label { class: theme::FIELD_LABEL, "Destination Airport / Hub" }
                                        select {
                                            class: "{theme::select_class(mode)}",
                                            value: "{selection.air_destination.name}",
                                            onchange: move |evt: FormEvent| {
                                                estimator.write().select_air_destination(&evt.value());
                                            },
                                            for destination in catalog.list_air_destinations() {
                                                option {
                                                    key: "{destination.name}",
                                                    value: "{destination.name}",
                                                    selected: destination.name == selection.air_destination.name,
                                                    "{destination.name}"
                                                }
                                            }
                                        }
                                    }
                                    div { class: "flex items-center gap-3 p-4 bg-slate-950/50 border border-slate-800 rounded-lg",
                                        div { class: "{theme::category_dot(selection.air_destination.category)}" }
                                        span { class: "text-slate-300 font-medium text-sm uppercase",
                                            "{selection.air_destination.category.label()} Operation"
                                        }
                                    }
                                }

                                div { class: "h-px bg-slate-800 my-4" }

                                QuoteBreakdownView {
                                    breakdown: snapshot.breakdown.clone(),
                                    add_ons: selection.add_ons,
                                }

                                div { class: "{theme::total_panel(mode)}",
                                    span { class: "{theme::accent_text(mode)} font-bold uppercase tracking-widest text-xs mb-1", "Estimated Total" }
                                    div { class: "text-4xl font-bold text-white tracking-tighter", "{format_usd(snapshot.total_cost, 0)}" }
                                    if mode == ShippingMode::Air {
                                        span { class: "text-xs text-slate-500 mt-2 font-medium uppercase", "*Includes carry-on logistics & last mile" }
                                    }
                                }

                                p { class: "text-xs text-slate-600 italic",
                                    "*Quote is an estimate for planning purposes. Flight prices fluctuate hourly. Final fixed price provided upon booking."
                                }
                            }
                        }
                    }

                    div { class: "flex flex-col h-full min-h-[180px] lg:min-h-[240px] mt-4 lg:mt-0",
                        div { class: "flex items-center gap-2 mb-4",
                            span { class: "{theme::accent_text(mode)}", "{theme::tab_icon(mode)}" }
                            h3 { class: "text-sm font-bold text-slate-300 uppercase tracking-wider", "Route Preview" }
                        }
                        div { class: "flex-grow bg-slate-900 border border-slate-800 rounded-xl overflow-hidden relative",
                            if mode == ShippingMode::Ground {
                                iframe {
                                    class: "w-full h-full min-h-[320px]",
                                    title: "Route Map",
                                    src: "{ground_embed_url(selection.ground_destination)}",
                                    width: "100%",
                                    height: "100%",
                                    frame_border: "0",
                                    scrolling: "no",
                                }
                            } else {
                                div { id: AIR_MAP_CONTAINER, class: "w-full h-full min-h-[320px] z-0 bg-slate-100" }
                            }

                            div { class: "absolute bottom-0 left-0 w-full bg-slate-950/90 border-t border-slate-800 p-4 backdrop-blur-md z-[1000]",
                                div { class: "grid grid-cols-2 gap-4",
                                    if let Some(miles) = snapshot.effective_miles {
                                        StatCard {
                                            icon: "🧭",
                                            icon_class: "text-white",
                                            caption: "Total Distance",
                                            value: "{miles}",
                                            unit: "mi",
                                        }
                                    } else {
                                        StatCard {
                                            icon: "🌐",
                                            icon_class: "text-white",
                                            caption: "Zone",
                                            value: "{selection.air_destination.category.label()}",
                                        }
                                    }
                                    StatCard {
                                        icon: "🕒",
                                        icon_class: "{theme::accent_text(mode)}",
                                        caption: "Est. Transit Time",
                                        value: "{snapshot.eta_label}",
                                    }
                                }
                                div { class: "mt-4 flex items-center justify-between text-xs font-medium text-slate-500 uppercase",
                                    span { "{HQ_LABEL}" }
                                    div { class: "h-px bg-slate-700 flex-grow mx-4 relative",
                                        div { class: "absolute top-1/2 left-1/2 -translate-y-1/2 -translate-x-1/2 bg-slate-950 px-2 text-slate-600",
                                            "{theme::route_caption(mode)}"
                                        }
                                    }
                                    span { "{target.destination_label}" }
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
fn QuoteBreakdownView(breakdown: QuoteBreakdown, add_ons: AddOns) -> Element {
    match breakdown {
        QuoteBreakdown::Ground(quote) => rsx! {
            div { class: "flex flex-col space-y-2",
                BreakdownRow { label: "Base Fee:", amount: format_usd(BASE_FEE, 2) }
                BreakdownRow {
                    label: "Mileage ({quote.miles} mi × 2):",
                    amount: format_usd(quote.mileage_charge, 2),
                }
                if add_ons.any() {
                    div { class: "flex justify-between items-center text-sm font-medium text-red-400 pt-2 border-t border-slate-800/50 mt-1",
                        span { "Surcharges & Fees:" }
                        span { "+ {format_usd(quote.surcharges, 2)}" }
                    }
                }
            }
        },
        QuoteBreakdown::Air(quote) => rsx! {
            div { class: "flex flex-col space-y-2",
                BreakdownRow { label: "Courier Day Rate (Est):", amount: format_usd(quote.courier_fee, 0) }
                BreakdownRow { label: "Airfare & Admin (Est):", amount: format_usd(quote.flight_estimate, 0) }
            }
        },
    }
}

#[component]
fn BreakdownRow(label: String, amount: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center text-sm font-medium text-slate-500",
            span { "{label}" }
            span { "{amount}" }
        }
    }
}

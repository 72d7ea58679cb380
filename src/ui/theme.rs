//! Mode-specific theme helpers: red for ground, blue for air.

use crate::domain::{AddOn, AirCategory, ShippingMode};

// ============================================
// ESTIMATOR TABS
// ============================================

pub fn tab_class(mode: ShippingMode, active: bool) -> &'static str {
    match (mode, active) {
        (ShippingMode::Ground, true) => "py-3 flex items-center justify-center gap-2 font-bold uppercase tracking-wider text-sm transition-all bg-slate-800 text-white border-b-2 border-red-600",
        (ShippingMode::Air, true) => "py-3 flex items-center justify-center gap-2 font-bold uppercase tracking-wider text-sm transition-all bg-slate-800 text-white border-b-2 border-blue-500",
        (_, false) => "py-3 flex items-center justify-center gap-2 font-bold uppercase tracking-wider text-sm transition-all bg-slate-900 text-slate-500 hover:text-slate-300",
    }
}

pub fn tab_icon(mode: ShippingMode) -> &'static str {
    match mode {
        ShippingMode::Ground => "🚚",
        ShippingMode::Air => "✈️",
    }
}

// ============================================
// ACCENTS
// ============================================

pub fn accent_text(mode: ShippingMode) -> &'static str {
    match mode {
        ShippingMode::Ground => "text-red-500",
        ShippingMode::Air => "text-blue-500",
    }
}

pub fn total_panel(mode: ShippingMode) -> &'static str {
    match mode {
        ShippingMode::Ground => "bg-black/40 p-4 border-l-4 border-red-600 flex flex-col items-start justify-center rounded-r-xl transition-colors duration-300",
        ShippingMode::Air => "bg-black/40 p-4 border-l-4 border-blue-500 flex flex-col items-start justify-center rounded-r-xl transition-colors duration-300",
    }
}

pub fn select_class(mode: ShippingMode) -> &'static str {
    match mode {
        ShippingMode::Ground => "w-full bg-slate-950 border border-slate-700 text-white px-4 py-4 rounded-lg focus:ring-1 focus:ring-red-600 focus:outline-none font-bold uppercase tracking-wide cursor-pointer hover:border-slate-600 transition-colors",
        ShippingMode::Air => "w-full bg-slate-950 border border-slate-700 text-white px-4 py-4 rounded-lg focus:ring-1 focus:ring-blue-500 focus:outline-none font-bold uppercase tracking-wide cursor-pointer hover:border-slate-600 transition-colors",
    }
}

pub fn route_caption(mode: ShippingMode) -> &'static str {
    match mode {
        ShippingMode::Ground => "DIRECT DRIVE",
        ShippingMode::Air => "NEXT FLIGHT",
    }
}

pub fn category_dot(category: AirCategory) -> &'static str {
    match category {
        AirCategory::Domestic => "h-2 w-2 rounded-full bg-blue-500",
        AirCategory::International => "h-2 w-2 rounded-full bg-orange-500",
    }
}

// ============================================
// ADD-ON TOGGLES
// ============================================

pub fn add_on_class(add_on: AddOn, active: bool) -> &'static str {
    if !active {
        return "flex flex-col items-center justify-center p-2 rounded-lg border transition-all duration-200 bg-slate-950 border-slate-800 text-slate-500 hover:border-slate-700";
    }
    match add_on {
        AddOn::Heavy => "flex flex-col items-center justify-center p-2 rounded-lg border transition-all duration-200 bg-red-900/20 border-red-500 text-white shadow-[0_0_10px_rgba(239,68,68,0.2)]",
        AddOn::Refrigerated => "flex flex-col items-center justify-center p-2 rounded-lg border transition-all duration-200 bg-blue-900/20 border-blue-500 text-white shadow-[0_0_10px_rgba(59,130,246,0.2)]",
        AddOn::Hazmat => "flex flex-col items-center justify-center p-2 rounded-lg border transition-all duration-200 bg-yellow-900/20 border-yellow-500 text-white shadow-[0_0_10px_rgba(234,179,8,0.2)]",
        AddOn::AfterHours => "flex flex-col items-center justify-center p-2 rounded-lg border transition-all duration-200 bg-purple-900/20 border-purple-500 text-white shadow-[0_0_10px_rgba(168,85,247,0.2)]",
    }
}

pub fn add_on_icon(add_on: AddOn) -> &'static str {
    match add_on {
        AddOn::Heavy => "🏋️",
        AddOn::Refrigerated => "❄️",
        AddOn::Hazmat => "⚡",
        AddOn::AfterHours => "🌙",
    }
}

// ============================================
// FORMS
// ============================================

pub const INPUT: &str = "w-full bg-slate-950 border border-slate-700 text-slate-200 px-5 py-4 rounded-lg focus:border-red-600 focus:ring-1 focus:ring-red-600 outline-none transition-all placeholder:text-slate-600 text-base";
pub const LABEL: &str = "block text-sm font-semibold text-slate-300 mb-2";
pub const FIELD_LABEL: &str = "block text-xs font-medium text-slate-500 uppercase tracking-widest mb-2";
pub const BTN_ALERT: &str = "bg-red-600 hover:bg-red-700 text-white font-bold uppercase tracking-wide px-6 py-3 rounded-lg shadow-lg shadow-red-900/20 transition-colors disabled:opacity-60 disabled:cursor-wait";
pub const BTN_SECONDARY: &str = "border border-slate-600 hover:border-slate-400 text-slate-200 font-bold uppercase tracking-wide px-6 py-3 rounded-lg transition-colors";

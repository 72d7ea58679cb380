#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

#[cfg(feature = "desktop")]
use crate::util::version::APP_NAME;

/// Fits the estimator and its route preview side by side.
#[cfg(feature = "desktop")]
const WINDOW_SIZE: (f64, f64) = (1280.0, 860.0);
/// Narrow enough for the stacked single-column layout.
#[cfg(feature = "desktop")]
const WINDOW_MIN_SIZE: (f64, f64) = (420.0, 640.0);

fn main() {
    dioxus::logger::initialize_default();

    // The embedded Leaflet map and route iframe render blank under WebKit's DMABUF
    // renderer on several Wayland compositors.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
                .with_inner_size(LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
                .with_min_inner_size(LogicalSize::new(WINDOW_MIN_SIZE.0, WINDOW_MIN_SIZE.1)),
        )
    });

    builder.launch(app::App);
}

use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Returns the bat logo as an inline SVG data URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(path.trim_start_matches('/'))
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

/// SVG text is URI-safe once quotes, brackets, hashes and whitespace runs are escaped.
fn svg_data_uri(svg: &str) -> String {
    let compact = svg.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut encoded = String::with_capacity(compact.len());
    for ch in compact.chars() {
        match ch {
            '"' => encoded.push('\''),
            '#' => encoded.push_str("%23"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '%' => encoded.push_str("%25"),
            other => encoded.push(other),
        }
    }
    format!("data:image/svg+xml,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_are_present() {
        assert!(main_css().contains(".marker-pin"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml,"));
    }

    #[test]
    fn svg_is_escaped_for_uris() {
        let uri = svg_data_uri("<svg fill=\"#dc2626\">\n   <path/>\n</svg>");
        assert_eq!(
            uri,
            "data:image/svg+xml,%3Csvg fill='%23dc2626'%3E %3Cpath/%3E %3C/svg%3E"
        );
    }
}

pub const APP_NAME: &str = "Speedy Bat Couriers";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("SPEEDY_BAT_GIT_TAG");

/// Release tag when built from a tagged checkout, otherwise the crate version.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

pub fn user_agent() -> String {
    format!("speedy-bat/{}", version_label().trim_start_matches(['v', 'V']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_crate_version() {
        if GIT_TAG.is_none() {
            assert_eq!(version_label(), format!("v{APP_VERSION}"));
        }
        assert!(!version_label().is_empty());
    }

    #[test]
    fn user_agent_drops_leading_v() {
        let agent = user_agent();
        assert!(agent.starts_with("speedy-bat/"));
        assert!(!agent.starts_with("speedy-bat/v"));
    }
}

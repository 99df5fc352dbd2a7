use crate::state::Platform;

/// Configuration types for the site runner.
pub mod config {
    use std::str::FromStr;

    /// Container the widget mounts into when nothing else is configured
    pub const DEFAULT_CONTAINER_ID: &str = "timelineContainer";

    /// Feed location relative to the essay page
    pub const DEFAULT_FEED_URL: &str = "js/timeline-data.json";

    /// Essay sections in reading order, matched by id prefix
    pub const DEFAULT_SECTION_PREFIXES: [&str; 7] = [
        "introduction",
        "origins",
        "expansion",
        "matthew-effect",
        "crisis",
        "reform",
        "conclusion",
    ];

    pub const FEED_URL_VAR: &str = "DEBTLINE_FEED_URL";
    pub const CONTAINER_ID_VAR: &str = "DEBTLINE_CONTAINER_ID";
    pub const SHELL_VAR: &str = "DEBTLINE_SHELL";
    pub const SECTION_PREFIXES_VAR: &str = "DEBTLINE_SECTION_PREFIXES";

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum ShellKind {
        #[default]
        Desktop,
        Mobile,
    }

    impl FromStr for ShellKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "desktop" => Ok(Self::Desktop),
                "mobile" => Ok(Self::Mobile),
                other => Err(format!("unknown shell kind: {other}")),
            }
        }
    }

    /// Where the widget lives and what it loads
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SiteConfig {
        pub container_id: String,
        pub feed_url: String,
        pub section_prefixes: Vec<String>,
    }

    impl Default for SiteConfig {
        fn default() -> Self {
            Self {
                container_id: DEFAULT_CONTAINER_ID.to_string(),
                feed_url: DEFAULT_FEED_URL.to_string(),
                section_prefixes: DEFAULT_SECTION_PREFIXES
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            }
        }
    }

    impl SiteConfig {
        /// Defaults overridden by whatever `lookup` knows about the
        /// `DEBTLINE_*` variables. Blank values are ignored.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
            let defaults = Self::default();

            Self {
                container_id: get(CONTAINER_ID_VAR).unwrap_or(defaults.container_id),
                feed_url: get(FEED_URL_VAR).unwrap_or(defaults.feed_url),
                section_prefixes: get(SECTION_PREFIXES_VAR)
                    .map(|raw| {
                        raw.split(',')
                            .map(str::trim)
                            .filter(|p| !p.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or(defaults.section_prefixes),
            }
        }
    }

    #[derive(Clone, Debug, Default)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        pub site: SiteConfig,
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn defaults_match_the_essay_page() {
            let config = SiteConfig::from_lookup(lookup(&[]));
            assert_eq!(config.container_id, "timelineContainer");
            assert_eq!(config.feed_url, "js/timeline-data.json");
            assert_eq!(config.section_prefixes.len(), DEFAULT_SECTION_PREFIXES.len());
        }

        #[test]
        fn variables_override_defaults() {
            let config = SiteConfig::from_lookup(lookup(&[
                (FEED_URL_VAR, "https://example.org/feed.json"),
                (CONTAINER_ID_VAR, "timeline"),
                (SECTION_PREFIXES_VAR, "intro, body ,,end"),
            ]));
            assert_eq!(config.feed_url, "https://example.org/feed.json");
            assert_eq!(config.container_id, "timeline");
            assert_eq!(config.section_prefixes, vec!["intro", "body", "end"]);
        }

        #[test]
        fn blank_variables_are_ignored() {
            let config = SiteConfig::from_lookup(lookup(&[(FEED_URL_VAR, "  ")]));
            assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        }

        #[test]
        fn shell_kind_parses_loosely() {
            assert_eq!(" Mobile ".parse::<ShellKind>(), Ok(ShellKind::Mobile));
            assert!("tablet".parse::<ShellKind>().is_err());
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, config } = deps;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_timeline_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Debtline Timeline"));
        builder = builder.with_cfg(cfg);
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = crate::infrastructure::page::install(&platform, &config.site) {
            tracing::warn!(error = %e, "Page glue unavailable");
        }
        let cfg = dioxus::web::Config::new().rootname(config.site.container_id.clone());
        builder = builder.with_cfg(cfg);
    }

    // Convert runner's ShellKind to the UI's ShellKind for context
    let ui_shell = match config.shell {
        config::ShellKind::Desktop => crate::ui::ShellKind::Desktop,
        config::ShellKind::Mobile => crate::ui::ShellKind::Mobile,
    };

    let services = crate::ui::presentation::Services::new(std::sync::Arc::new(platform.clone()));

    builder
        .with_context(platform)
        .with_context(ui_shell)
        .with_context(config.site)
        .with_context(services)
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_timeline_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("css")
        .join("timeline.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}

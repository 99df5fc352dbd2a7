//! Debtline site - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use debtline_site::runner::{
    self,
    config::{RunnerConfig, ShellKind, SiteConfig},
};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debtline_site=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Debtline site");

    // Platform
    let platform = debtline_site::infrastructure::platform::create_platform();

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                ShellKind::Mobile
            } else {
                ShellKind::Desktop
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var(runner::config::SHELL_VAR)
                .ok()
                .and_then(|s| s.parse::<ShellKind>().ok())
                .unwrap_or_default()
        }
    };

    // Widget placement and feed location
    let site = {
        #[cfg(target_arch = "wasm32")]
        {
            let mut site = SiteConfig::default();
            if let Some(url) =
                debtline_site::infrastructure::page::container_feed_url(&site.container_id)
            {
                site.feed_url = url;
            }
            site
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut site = SiteConfig::from_lookup(|key| std::env::var(key).ok());
            if std::env::var(runner::config::FEED_URL_VAR).is_err() {
                site.feed_url = bundled_feed_path();
            }
            site
        }
    };

    tracing::info!(
        container = %site.container_id,
        feed = %site.feed_url,
        ?shell,
        "Site configured"
    );

    runner::run(runner::RunnerDeps {
        platform,
        config: RunnerConfig { shell, site },
    });
}

/// Sample feed shipped with the crate, used by the desktop preview
#[cfg(not(target_arch = "wasm32"))]
fn bundled_feed_path() -> String {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("timeline-data.json")
        .to_string_lossy()
        .into_owned()
}

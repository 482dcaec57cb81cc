use std::time::Duration;

pub const MARINE_CADASTRE_URL: &str = "https://marinecadastre.gov/nationalviewer/";
pub const DEFAULT_RISK_THRESHOLD: i64 = 70;

/// Runtime settings shared by the browser shell and the headless preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for backend paths. Empty means same origin.
    pub base_url: String,
    pub marine_cadastre_url: String,
    pub default_threshold: i64,
    pub timings: Timings,
}

/// Delays used to sequence animations and deferred UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub fade: Duration,
    pub fade_in_delay: Duration,
    pub welcome_delay: Duration,
    pub marine_frame_delay: Duration,
    pub toast_visible: Duration,
    pub toast_fade: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(300),
            fade_in_delay: Duration::from_millis(50),
            welcome_delay: Duration::from_secs(1),
            marine_frame_delay: Duration::from_millis(500),
            toast_visible: Duration::from_secs(3),
            toast_fade: Duration::from_millis(500),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            marine_cadastre_url: MARINE_CADASTRE_URL.to_string(),
            default_threshold: DEFAULT_RISK_THRESHOLD,
            timings: Timings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Joins the base URL and an endpoint path without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

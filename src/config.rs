use std::{str::FromStr, time::Duration};

pub const BACKEND_URL_VAR: &str = "PORTFOLIO_BACKEND_URL";
pub const SOURCE_VAR: &str = "PORTFOLIO_SOURCE";
pub const CONTACT_DELAY_VAR: &str = "CONTACT_SIMULATED_DELAY_MS";
pub const TIMEOUT_VAR: &str = "BACKEND_TIMEOUT_SECS";

const DEFAULT_CONTACT_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the page gets its document from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Embedded,
    Remote,
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedded" | "static" => Ok(Self::Embedded),
            "remote" | "backend" => Ok(Self::Remote),
            other => Err(format!("unknown portfolio source: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub source: DataSource,
    /// Base URL of the JSON backend, without the `/api/...` suffix.
    pub backend_url: Option<String>,
    pub contact_delay: Duration,
    pub backend_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            backend_url: None,
            contact_delay: DEFAULT_CONTACT_DELAY,
            backend_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Bad values are logged and replaced by the
    /// default so a typo never takes the site down.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let source = lookup(SOURCE_VAR)
            .map(|raw| {
                raw.parse().unwrap_or_else(|e| {
                    tracing::warn!("{e}; using {:?}", defaults.source);
                    defaults.source
                })
            })
            .unwrap_or(defaults.source);

        let backend_url = lookup(BACKEND_URL_VAR)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let contact_delay = parse_number(&lookup, CONTACT_DELAY_VAR)
            .map(Duration::from_millis)
            .unwrap_or(defaults.contact_delay);
        let backend_timeout = parse_number(&lookup, TIMEOUT_VAR)
            .map(Duration::from_secs)
            .unwrap_or(defaults.backend_timeout);

        Self {
            source,
            backend_url,
            contact_delay,
            backend_timeout,
        }
    }

    /// Value shown on the debug error page.
    pub fn backend_url_display(&self) -> &str {
        self.backend_url.as_deref().unwrap_or("Undefined")
    }
}

fn parse_number(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(key, value = %raw, "ignoring invalid number: {e}");
            None
        }
    }
}

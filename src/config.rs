use crate::domain::error::DomainError;
use std::time::Duration;

pub const DEFAULT_WIKIPEDIA_API: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_WIKIPEDIA_REST: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_FANDOM_TEMPLATE: &str = "https://{slug}.fandom.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoints and HTTP settings for the source adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Wikipedia Action API endpoint (`.../w/api.php`)
    pub wikipedia_api: String,
    /// Wikipedia REST base (`.../api/rest_v1`)
    pub wikipedia_rest: String,
    /// Fandom wiki root shape probed by the locator; must contain `{slug}`.
    pub fandom_template: String,
    pub user_agent: String,
    /// Per-request deadline.
    pub timeout: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            wikipedia_api: DEFAULT_WIKIPEDIA_API.to_string(),
            wikipedia_rest: DEFAULT_WIKIPEDIA_REST.to_string(),
            fandom_template: DEFAULT_FANDOM_TEMPLATE.to_string(),
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DiscoveryConfig {
    /// Reads `WIKIDIVE_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = match lookup("WIKIDIVE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    DomainError::Config(format!("WIKIDIVE_TIMEOUT_SECS must be an integer, got '{raw}'"))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let config = Self {
            wikipedia_api: lookup("WIKIDIVE_WIKIPEDIA_API").unwrap_or(defaults.wikipedia_api),
            wikipedia_rest: lookup("WIKIDIVE_WIKIPEDIA_REST")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.wikipedia_rest),
            fandom_template: lookup("WIKIDIVE_FANDOM_TEMPLATE").unwrap_or(defaults.fandom_template),
            user_agent: lookup("WIKIDIVE_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.fandom_template.contains("{slug}") {
            return Err(DomainError::Config(format!(
                "Fandom template '{}' has no {{slug}} placeholder",
                self.fandom_template
            )));
        }
        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("wikidive/{} (interest discovery)", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DiscoveryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DiscoveryConfig::default());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = DiscoveryConfig::from_lookup(lookup_from(&[
            ("WIKIDIVE_WIKIPEDIA_API", "http://localhost:9000/w/api.php"),
            ("WIKIDIVE_WIKIPEDIA_REST", "http://localhost:9000/rest/"),
            ("WIKIDIVE_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.wikipedia_api, "http://localhost:9000/w/api.php");
        assert_eq!(config.wikipedia_rest, "http://localhost:9000/rest");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = DiscoveryConfig::from_lookup(lookup_from(&[("WIKIDIVE_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_template_requires_slug() {
        let err = DiscoveryConfig::from_lookup(lookup_from(&[(
            "WIKIDIVE_FANDOM_TEMPLATE",
            "https://fandom.com",
        )]))
        .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}

use crate::config::DiscoveryConfig;
use reqwest::Client;

/// Shared HTTP client for every adapter: one user agent, one per-request deadline.
pub fn build_client(config: &DiscoveryConfig) -> Client {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()
        .unwrap_or_default()
}

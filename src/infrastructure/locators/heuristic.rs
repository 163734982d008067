use crate::domain::ports::source_locator::SourceLocator;
use crate::infrastructure::mediawiki::ActionApi;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Guesses wiki roots from the topic and keeps the first one that answers
/// a siteinfo probe.
pub struct HeuristicProber {
    client: Client,
    /// Root URL shape with a `{slug}` placeholder, e.g. `https://{slug}.fandom.com`.
    template: String,
}

impl HeuristicProber {
    pub fn new(client: Client, template: impl Into<String>) -> Self {
        Self {
            client,
            template: template.into(),
        }
    }

    /// Candidate roots in probe order: `starwars`, `starwarswiki`, `star-wars`.
    /// Duplicates (single-word topics) are dropped.
    pub fn candidates(&self, topic: &str) -> Vec<String> {
        let words: Vec<String> = topic
            .split_whitespace()
            .map(host_label)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return vec![];
        }

        let joined = words.concat();
        let slugs = [joined.clone(), format!("{joined}wiki"), words.join("-")];

        let mut out: Vec<String> = Vec::with_capacity(slugs.len());
        for slug in slugs {
            let url = self.template.replace("{slug}", &slug);
            if !out.contains(&url) {
                out.push(url);
            }
        }
        out
    }
}

/// Lowercased word reduced to `[a-z0-9-]`, safe inside a hostname label.
fn host_label(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[async_trait]
impl SourceLocator for HeuristicProber {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn locate(&self, topic: &str) -> Option<String> {
        for candidate in self.candidates(topic) {
            let api = ActionApi::for_wiki_root(self.client.clone(), &candidate);
            match api.site_info().await {
                Ok(()) => {
                    debug!(topic, wiki = %candidate, "fandom probe hit");
                    return Some(candidate);
                }
                Err(e) => {
                    debug!(topic, wiki = %candidate, error = %e, "fandom probe miss");
                }
            }
        }
        None
    }
}

use crate::domain::ports::source_locator::SourceLocator;
use async_trait::async_trait;

/// Known topic → wiki pairs, matched on the exact name ignoring case.
pub struct StaticTableLocator {
    entries: Vec<(String, String)>,
}

const KNOWN_WIKIS: &[(&str, &str)] = &[
    ("Star Wars", "https://starwars.fandom.com"),
    ("Fallout", "https://fallout.fandom.com"),
    ("Warhammer", "https://warhammer40k.fandom.com"),
    ("Minecraft", "https://minecraft.fandom.com"),
    ("Elder Scrolls", "https://elderscrolls.fandom.com"),
    ("Tanks", "https://gup.fandom.com"),
    ("Cyberpunk", "https://cyberpunk.fandom.com"),
    ("The Backrooms", "https://backrooms.fandom.com"),
    ("SCP Foundation", "https://scp.fandom.com"),
    ("Matrix", "https://matrix.fandom.com"),
    ("Dune", "https://dune.fandom.com"),
];

impl StaticTableLocator {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, topic: &str) -> Option<&str> {
        let topic = topic.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| name.to_lowercase() == topic)
            .map(|(_, url)| url.as_str())
    }
}

impl Default for StaticTableLocator {
    fn default() -> Self {
        Self::new(
            KNOWN_WIKIS
                .iter()
                .map(|(name, url)| (name.to_string(), url.to_string()))
                .collect(),
        )
    }
}

#[async_trait]
impl SourceLocator for StaticTableLocator {
    fn name(&self) -> &str {
        "static_table"
    }

    async fn locate(&self, topic: &str) -> Option<String> {
        self.lookup(topic).map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_exact_match() {
        let table = StaticTableLocator::default();
        assert_eq!(table.lookup("star wars"), Some("https://starwars.fandom.com"));
        assert_eq!(table.lookup("ELDER SCROLLS"), Some("https://elderscrolls.fandom.com"));
    }

    #[test]
    fn test_match_folds_non_ascii_case() {
        let table = StaticTableLocator::new(vec![(
            "Pokémon".to_string(),
            "https://pokemon.fandom.com".to_string(),
        )]);
        assert_eq!(table.lookup("POKÉMON"), Some("https://pokemon.fandom.com"));
        assert_eq!(table.lookup(" pokémon "), Some("https://pokemon.fandom.com"));
    }

    #[test]
    fn test_no_partial_matches() {
        let table = StaticTableLocator::default();
        assert!(table.lookup("Star Wars Lego").is_none());
        assert!(table.lookup("Fall").is_none());
    }
}

//! Per-request result accumulator.
//!
//! Holds anchors and discovery items separately plus the set of titles
//! already emitted, so that every title appears at most once across all
//! vectors of one request.

use crate::domain::entities::canonical_page::CanonicalPage;
use crate::domain::entities::discovery_item::DiscoveryItem;
use crate::domain::ports::shuffler::Shuffler;
use crate::domain::values::source_kind::SourceKind;
use std::collections::HashSet;

/// Upper bound on items returned for one request.
pub const MAX_RESULTS: usize = 12;

#[derive(Debug, Default)]
pub struct Blend {
    anchors: Vec<DiscoveryItem>,
    discovery: Vec<DiscoveryItem>,
    used: HashSet<String>,
}

impl Blend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vector's anchor. If the title was already emitted as a
    /// discovery item, that item gives way to the anchor. Returns `false`
    /// when an anchor with this title already exists.
    pub fn push_anchor(&mut self, anchor: DiscoveryItem) -> bool {
        if !self.used.insert(anchor.title.clone()) {
            if self.anchors.iter().any(|a| a.title == anchor.title) {
                return false;
            }
            self.discovery.retain(|d| d.title != anchor.title);
        }
        self.anchors.push(anchor);
        true
    }

    /// Adds discovery items for `pages`, skipping disambiguation pages and
    /// titles already emitted. Returns how many were added.
    pub fn push_discovered(
        &mut self,
        pages: Vec<CanonicalPage>,
        source: SourceKind,
        api_base_url: Option<&str>,
    ) -> usize {
        let mut added = 0;
        for page in pages {
            if page.is_disambiguation() || self.used.contains(&page.title) {
                continue;
            }
            self.used.insert(page.title.clone());
            self.discovery
                .push(DiscoveryItem::discovered(page, source, api_base_url));
            added += 1;
        }
        added
    }

    pub fn anchors(&self) -> &[DiscoveryItem] {
        &self.anchors
    }

    pub fn discovery(&self) -> &[DiscoveryItem] {
        &self.discovery
    }

    /// Anchors in input order, then shuffled discovery items, capped at
    /// [`MAX_RESULTS`]. Anchors are never dropped; only discovery items are
    /// cut to fit.
    pub fn finish(self, shuffler: &dyn Shuffler) -> Vec<DiscoveryItem> {
        let Blend {
            mut anchors,
            mut discovery,
            ..
        } = self;

        shuffler.shuffle(&mut discovery);
        discovery.truncate(MAX_RESULTS.saturating_sub(anchors.len()));
        anchors.extend(discovery);
        anchors
    }
}

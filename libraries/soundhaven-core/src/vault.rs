//! Vault of past discoveries
//!
//! Joins the discovery log with the card catalog and keeps the "added"
//! flags in sync optimistically after a successful mark-as-added call.

use crate::types::{Card, DiscoveryLogEntry, TrackUri};

/// A log entry together with the card it refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultItem<'a> {
    pub entry: &'a DiscoveryLogEntry,
    pub card: &'a Card,
}

/// Read-through cache of the user's discovery history
#[derive(Debug, Clone, Default)]
pub struct Vault {
    entries: Vec<DiscoveryLogEntry>,
    catalog: Vec<Card>,
    open_uri: Option<TrackUri>,
}

impl Vault {
    pub fn new(entries: Vec<DiscoveryLogEntry>, catalog: Vec<Card>) -> Self {
        Self {
            entries,
            catalog,
            open_uri: None,
        }
    }

    pub fn set_catalog(&mut self, catalog: Vec<Card>) {
        self.catalog = catalog;
        if let Some(uri) = &self.open_uri {
            if self.find_card(uri).is_none() {
                self.open_uri = None;
            }
        }
    }

    pub fn entries(&self) -> &[DiscoveryLogEntry] {
        &self.entries
    }

    pub fn find_card(&self, uri: &TrackUri) -> Option<&Card> {
        self.catalog.iter().find(|c| &c.track_uri == uri)
    }

    /// Log entries in log order, skipping those with no catalog card
    pub fn items(&self) -> Vec<VaultItem<'_>> {
        self.entries
            .iter()
            .filter_map(|entry| {
                self.find_card(&entry.track_uri)
                    .map(|card| VaultItem { entry, card })
            })
            .collect()
    }

    /// Open the detail view for `uri`. Returns false for unknown tracks.
    pub fn open(&mut self, uri: &TrackUri) -> bool {
        if self.find_card(uri).is_some() {
            self.open_uri = Some(uri.clone());
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.open_uri = None;
    }

    pub fn open_card(&self) -> Option<&Card> {
        self.open_uri.as_ref().and_then(|uri| self.find_card(uri))
    }

    /// Whether any logged choice of `uri` is flagged as added
    pub fn is_added(&self, uri: &TrackUri) -> bool {
        self.entries
            .iter()
            .any(|e| &e.track_uri == uri && e.added)
    }

    /// Flag every entry for `uri` as added. Returns how many changed.
    pub fn mark_added(&mut self, uri: &TrackUri) -> usize {
        let mut changed = 0;
        for entry in self.entries.iter_mut().filter(|e| &e.track_uri == uri) {
            if !entry.added {
                entry.added = true;
                changed += 1;
            }
        }
        changed
    }
}

//! Taxonomy database data models

use serde::{Deserialize, Serialize};

/// A single taxon stored in a taxonomy database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyEntry {
    /// NCBI Taxonomy ID (e.g., 9606 for Homo sapiens)
    pub taxonomy_id: u32,
    /// Parent taxon ID; equal to `taxonomy_id` for the root
    pub parent_taxonomy_id: u32,
    /// Taxonomic rank (e.g., "species", "genus", "no rank")
    pub rank: String,
    /// Scientific name (e.g., "Homo sapiens")
    pub scientific_name: String,
}

impl TaxonomyEntry {
    /// Create a new TaxonomyEntry
    pub fn new(
        taxonomy_id: u32,
        parent_taxonomy_id: u32,
        rank: impl Into<String>,
        scientific_name: impl Into<String>,
    ) -> Self {
        Self {
            taxonomy_id,
            parent_taxonomy_id,
            rank: rank.into(),
            scientific_name: scientific_name.into(),
        }
    }
}

use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// DestinationRecord – one row of the normalized table
// ---------------------------------------------------------------------------

/// A single destination (one row of the source CSV) after schema
/// normalization.
///
/// `name` and `state` are always non-empty — rows where either is blank are
/// dropped during load. Every other field is optional: a cell that is missing
/// or trims to nothing becomes `None`, never an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationRecord {
    pub name: String,
    /// Administrative region label (state/province).
    pub state: String,
    pub description: Option<String>,
    /// Comma-separated free text; split via [`DestinationRecord::attractions`].
    pub popular_attractions: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DestinationRecord {
    /// Attraction names parsed out of `popular_attractions`: split on commas,
    /// each item trimmed, empty items dropped.
    pub fn attractions(&self) -> Vec<&str> {
        self.popular_attractions
            .as_deref()
            .map(|text| {
                text.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Map position as `(latitude, longitude)`.
    ///
    /// `None` unless both coordinates are present: a record with only one of
    /// the pair stays in the table but never becomes a map marker.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

// ---------------------------------------------------------------------------
// DestinationTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized table, immutable after load. Filtering derives index
/// views over `records` and never mutates or reorders them.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationTable {
    /// All destinations, in source-file row order.
    pub records: Vec<DestinationRecord>,
    /// Sorted unique `state` values; feeds the region selector.
    pub regions: Vec<String>,
    /// Slugged headers exactly as parsed from the source file, including
    /// columns the schema does not use. Diagnostics only — consumers read
    /// the canonical fields, not these.
    pub source_columns: Vec<String>,
}

impl DestinationTable {
    /// Build the region index from loaded records.
    pub fn from_records(records: Vec<DestinationRecord>, source_columns: Vec<String>) -> Self {
        let regions: BTreeSet<&str> = records.iter().map(|r| r.state.as_str()).collect();
        DestinationTable {
            regions: regions.into_iter().map(String::from).collect(),
            records,
            source_columns,
        }
    }

    /// Number of destinations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

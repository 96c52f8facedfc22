use super::model::{DestinationRecord, DestinationTable};

// ---------------------------------------------------------------------------
// Filter predicate: free-text query + region selection
// ---------------------------------------------------------------------------

/// The two user-controlled filters.
///
/// `region: None` is the "all regions" sentinel; an empty query matches
/// everything. Both default to unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub region: Option<String>,
}

impl FilterState {
    /// True when neither filter constrains the table.
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.region.is_none()
    }
}

/// Return indices of records that pass both filters, in table order.
///
/// A record passes the text filter when the query is a case-insensitive
/// substring of its name, description, or attractions text; absent fields
/// never match (and never error). The region filter is an exact match
/// against `state`. The two compose with AND. Filtering never reorders or
/// deduplicates.
pub fn filtered_indices(table: &DestinationTable, filters: &FilterState) -> Vec<usize> {
    let needle = filters.query.to_lowercase();
    let region = filters.region.as_deref();

    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| matches_query(rec, &needle) && matches_region(rec, region))
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_query(record: &DestinationRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains_ci(Some(record.name.as_str()), needle)
        || contains_ci(record.description.as_deref(), needle)
        || contains_ci(record.popular_attractions.as_deref(), needle)
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|text| text.to_lowercase().contains(needle))
}

fn matches_region(record: &DestinationRecord, region: Option<&str>) -> bool {
    match region {
        Some(selected) => record.state == selected,
        None => true,
    }
}

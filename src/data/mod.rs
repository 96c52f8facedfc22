/// Data layer: core types, loading, normalization, and filtering.
///
/// Architecture:
/// ```text
///  destinations.csv (any accepted header spelling)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  slug headers → bind synonyms → validate → coerce
///   └──────────┘
///        │                         (memoized by cache: path + mtime)
///        ▼
///   ┌──────────────────┐
///   │ DestinationTable  │  Vec<DestinationRecord>, region index
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  query + region predicates → filtered indices
///   └──────────┘
/// ```
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;

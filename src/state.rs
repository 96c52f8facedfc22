use std::path::{Path, PathBuf};

use crate::color::ColorMap;
use crate::data::cache::TableCache;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::DestinationTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Path of the currently loaded CSV (None before the first load).
    pub source: Option<PathBuf>,

    /// Loaded table (None until a load succeeds).
    pub table: Option<DestinationTable>,

    /// Free-text query and region selection.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Marker colour per region.
    pub color_map: Option<ColorMap>,

    /// One-shot request to centre the map on a record. Set by the card list,
    /// consumed by the map view.
    pub focused: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Memoized loader keyed by path + mtime.
    pub cache: TableCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source: None,
            table: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            color_map: None,
            focused: None,
            status_message: None,
            cache: TableCache::default(),
        }
    }
}

impl AppState {
    /// Load (or reload) a destinations file, routing failures into the
    /// status message instead of propagating them.
    pub fn load_from(&mut self, path: &Path) {
        match self.cache.load(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} destinations from {} with columns {:?}",
                    table.len(),
                    path.display(),
                    table.source_columns
                );
                self.source = Some(path.to_path_buf());
                self.set_table(table);
            }
            Err(err) => {
                log::error!("Failed to load {}: {err}", path.display());
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Invalidate the cache and re-read the current source.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.cache.invalidate();
            self.load_from(&path);
        }
    }

    /// Ingest a newly loaded table, resetting filters and colours.
    pub fn set_table(&mut self, table: DestinationTable) {
        self.filters = FilterState::default();
        self.visible_indices = (0..table.len()).collect();
        self.color_map = Some(ColorMap::for_regions(&table.regions));
        self.focused = None;
        self.table = Some(table);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.filters);
        }
    }

    /// Select a region (None = all regions) and refilter.
    pub fn set_region(&mut self, region: Option<String>) {
        self.filters.region = region;
        self.refilter();
    }

    /// Ask the map to centre on a record.
    pub fn focus_on(&mut self, index: usize) {
        self.focused = Some(index);
    }
}

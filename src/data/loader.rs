use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{DestinationRecord, DestinationTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a load attempt failed. Every failure path of [`load`] ends up in one
/// of these four kinds so the UI can show a specific, actionable message.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file does not exist.
    #[error("{} not found. Place your destinations CSV there or open another file.", .0.display())]
    NotFound(PathBuf),

    /// File is empty or not parseable as delimited text.
    #[error("{} is empty or not parseable as CSV. Check the file contents.", .0.display())]
    EmptyOrInvalid(PathBuf),

    /// Required canonical fields stayed unbound after synonym matching.
    #[error(
        "required column(s) not found: {}. Available columns: {}. \
         Rename the CSV headers to one of the accepted spellings.",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// Any other read failure, wrapped with a readable message.
    #[error("error loading destinations: {0}")]
    Unknown(String),
}

// ---------------------------------------------------------------------------
// Header synonyms
// ---------------------------------------------------------------------------

// Accepted header spellings per canonical field, matched against slugged
// headers. Order is priority: when a file carries several aliases at once,
// the first listed one wins.
const NAME_SYNONYMS: &[&str] = &["name", "destination", "place", "title", "location"];
const STATE_SYNONYMS: &[&str] = &["state", "region", "province"];
const DESCRIPTION_SYNONYMS: &[&str] = &["description", "desc", "details", "about"];
const ATTRACTIONS_SYNONYMS: &[&str] = &[
    "popular_attractions",
    "attractions",
    "popular_attraction",
    "attraction",
];
const IMAGE_URL_SYNONYMS: &[&str] = &[
    "image_url",
    "image",
    "image_link",
    "imageurl",
    "photo",
    "photo_url",
];
const LATITUDE_SYNONYMS: &[&str] = &["latitude", "lat"];
const LONGITUDE_SYNONYMS: &[&str] = &["longitude", "lon", "long", "lng"];

/// Canonical header slug: trimmed, lowercased, spaces replaced with
/// underscores (`" Image URL "` → `image_url`).
fn slug(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Index of the source column a canonical field binds to, or `None`.
/// Synonyms are scanned in listed order; within one synonym the first
/// matching column wins, so a field binds to at most one column.
fn resolve_column(slugs: &[String], synonyms: &[&str]) -> Option<usize> {
    synonyms
        .iter()
        .find_map(|syn| slugs.iter().position(|header| header.as_str() == *syn))
}

// ---------------------------------------------------------------------------
// Column bindings
// ---------------------------------------------------------------------------

/// Source-column index per canonical field after synonym resolution.
struct ColumnBindings {
    name: Option<usize>,
    state: Option<usize>,
    description: Option<usize>,
    popular_attractions: Option<usize>,
    image_url: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnBindings {
    fn resolve(slugs: &[String]) -> Self {
        ColumnBindings {
            name: resolve_column(slugs, NAME_SYNONYMS),
            state: resolve_column(slugs, STATE_SYNONYMS),
            description: resolve_column(slugs, DESCRIPTION_SYNONYMS),
            popular_attractions: resolve_column(slugs, ATTRACTIONS_SYNONYMS),
            image_url: resolve_column(slugs, IMAGE_URL_SYNONYMS),
            latitude: resolve_column(slugs, LATITUDE_SYNONYMS),
            longitude: resolve_column(slugs, LONGITUDE_SYNONYMS),
        }
    }

    /// Canonical names of required fields that failed to bind, in schema
    /// order. Latitude and longitude are optional and never appear here.
    fn missing_required(&self) -> Vec<String> {
        [
            ("name", self.name),
            ("state", self.state),
            ("description", self.description),
            ("popular_attractions", self.popular_attractions),
            ("image_url", self.image_url),
        ]
        .into_iter()
        .filter(|(_, bound)| bound.is_none())
        .map(|(field, _)| field.to_string())
        .collect()
    }

    /// Build one record from a raw row, or `None` when the row has no usable
    /// name or state and must be dropped.
    fn record_from(&self, row: &csv::StringRecord) -> Option<DestinationRecord> {
        let name = text_cell(row, self.name?)?;
        let state = text_cell(row, self.state?)?;

        Some(DestinationRecord {
            name,
            state,
            description: self.description.and_then(|idx| text_cell(row, idx)),
            popular_attractions: self.popular_attractions.and_then(|idx| text_cell(row, idx)),
            image_url: self.image_url.and_then(|idx| text_cell(row, idx)),
            latitude: coord_cell(row, self.latitude),
            longitude: coord_cell(row, self.longitude),
        })
    }
}

/// A trimmed, non-empty text cell; blank and missing cells are `None`.
fn text_cell(row: &csv::StringRecord, idx: usize) -> Option<String> {
    let value = row.get(idx)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Per-cell numeric coercion: anything that does not parse as a finite float
/// becomes `None` instead of failing the load. Non-finite values are rejected
/// so a `nan` cell can never become a marker position.
fn coord_cell(row: &csv::StringRecord, idx: Option<usize>) -> Option<f64> {
    row.get(idx?)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a destinations table from a CSV file, tolerating the header
/// variations real files show up with.
///
/// Normalization pipeline, in order:
/// 1. read as UTF-8, stripping a leading byte-order-mark;
/// 2. slug every header (trim, lowercase, spaces → underscores);
/// 3. bind canonical fields through the synonym lists above;
/// 4. require name, state, description, popular_attractions and image_url
///    to be bound — otherwise [`LoadError::MissingColumns`];
/// 5. drop rows whose name or state is blank;
/// 6. coerce latitude/longitude per cell, recovering to `None` on failure.
///
/// Unknown columns are kept in the table's `source_columns` for diagnostics
/// but are otherwise ignored. A header-only file loads as an empty table.
pub fn load(path: &Path) -> Result<DestinationTable, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Unknown(format!("{}: {err}", path.display())),
    })?;

    // A UTF-8 BOM would otherwise survive into the first header slug.
    let body = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    if body.trim().is_empty() {
        return Err(LoadError::EmptyOrInvalid(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let slugs: Vec<String> = reader
        .headers()
        .map_err(|_| LoadError::EmptyOrInvalid(path.to_path_buf()))?
        .iter()
        .map(slug)
        .collect();

    let bindings = ColumnBindings::resolve(&slugs);
    let missing = bindings.missing_required();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            missing,
            available: slugs,
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        // Structural errors (ragged rows, broken quoting) mean the file is
        // not well-formed delimited text.
        let row = row.map_err(|_| LoadError::EmptyOrInvalid(path.to_path_buf()))?;
        if let Some(record) = bindings.record_from(&row) {
            records.push(record);
        }
    }

    Ok(DestinationTable::from_records(records, slugs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file.flush().expect("flush temp csv");
        file
    }

    fn load_str(contents: &str) -> Result<DestinationTable, LoadError> {
        load(csv_file(contents).path())
    }

    #[test]
    fn canonical_headers_load_directly() {
        let table = load_str(
            "name,state,description,popular_attractions,image_url,latitude,longitude\n\
             Taj Mahal,Uttar Pradesh,Iconic mausoleum,sunrise view,http://x/img.jpg,27.1751,78.0421\n",
        )
        .expect("load");

        assert_eq!(table.len(), 1);
        let rec = &table.records[0];
        assert_eq!(rec.name, "Taj Mahal");
        assert_eq!(rec.state, "Uttar Pradesh");
        assert_eq!(rec.description.as_deref(), Some("Iconic mausoleum"));
        assert_eq!(rec.popular_attractions.as_deref(), Some("sunrise view"));
        assert_eq!(rec.image_url.as_deref(), Some("http://x/img.jpg"));
        assert_eq!(rec.latitude, Some(27.1751));
        assert_eq!(rec.longitude, Some(78.0421));
    }

    #[test]
    fn alternate_headers_bind_to_canonical_fields() {
        // Every column spelled as a synonym, none as the canonical name.
        let table = load_str(
            "Destination,Region,About,Attraction,Photo,Lat,Lng\n\
             Taj Mahal,Uttar Pradesh,Iconic mausoleum,Taj Mahal;sunrise view,http://x/img.jpg,27.1751,78.0421\n",
        )
        .expect("load");

        assert_eq!(table.len(), 1);
        let rec = &table.records[0];
        assert_eq!(rec.name, "Taj Mahal");
        assert_eq!(rec.state, "Uttar Pradesh");
        assert_eq!(rec.description.as_deref(), Some("Iconic mausoleum"));
        assert_eq!(rec.popular_attractions.as_deref(), Some("Taj Mahal;sunrise view"));
        assert_eq!(rec.image_url.as_deref(), Some("http://x/img.jpg"));
        assert_eq!(rec.latitude, Some(27.1751));
        assert_eq!(rec.longitude, Some(78.0421));
    }

    #[test]
    fn every_synonym_spelling_resolves() {
        let fields: [(&str, &[&str]); 7] = [
            ("name", NAME_SYNONYMS),
            ("state", STATE_SYNONYMS),
            ("description", DESCRIPTION_SYNONYMS),
            ("popular_attractions", ATTRACTIONS_SYNONYMS),
            ("image_url", IMAGE_URL_SYNONYMS),
            ("latitude", LATITUDE_SYNONYMS),
            ("longitude", LONGITUDE_SYNONYMS),
        ];

        for (field, synonyms) in fields {
            for syn in synonyms {
                // Uppercased and padded: binding must go through the slug.
                let decorated = format!(" {} ", syn.to_uppercase());
                let headers: Vec<String> = fields
                    .iter()
                    .map(|(f, _)| {
                        if f == &field {
                            decorated.clone()
                        } else {
                            f.to_string()
                        }
                    })
                    .collect();

                let contents = format!(
                    "{}\nTaj Mahal,Uttar Pradesh,Iconic mausoleum,sunrise view,http://x/img.jpg,27.1751,78.0421\n",
                    headers.join(",")
                );
                let table = load_str(&contents)
                    .unwrap_or_else(|e| panic!("{field} via {syn:?} failed: {e}"));
                let rec = &table.records[0];

                match field {
                    "name" => assert_eq!(rec.name, "Taj Mahal"),
                    "state" => assert_eq!(rec.state, "Uttar Pradesh"),
                    "description" => {
                        assert_eq!(rec.description.as_deref(), Some("Iconic mausoleum"))
                    }
                    "popular_attractions" => {
                        assert_eq!(rec.popular_attractions.as_deref(), Some("sunrise view"))
                    }
                    "image_url" => {
                        assert_eq!(rec.image_url.as_deref(), Some("http://x/img.jpg"))
                    }
                    "latitude" => assert_eq!(rec.latitude, Some(27.1751)),
                    "longitude" => assert_eq!(rec.longitude, Some(78.0421)),
                    other => unreachable!("unexpected field {other}"),
                }
            }
        }
    }

    #[test]
    fn headers_with_spaces_slug_to_underscores() {
        let table = load_str(
            "Name,State,Description,Popular Attractions,Image URL\n\
             Hampi,Karnataka,Ruined temple city,Virupaksha Temple,http://x/h.jpg\n",
        )
        .expect("load");

        let rec = &table.records[0];
        assert_eq!(rec.popular_attractions.as_deref(), Some("Virupaksha Temple"));
        assert_eq!(rec.image_url.as_deref(), Some("http://x/h.jpg"));
    }

    #[test]
    fn missing_state_column_is_reported() {
        let err = load_str(
            "name,description,popular_attractions,image_url\n\
             Goa,Beaches,Baga Beach,http://x/g.jpg\n",
        )
        .expect_err("must fail");

        match err {
            LoadError::MissingColumns { missing, available } => {
                assert_eq!(missing, vec!["state"]);
                assert_eq!(
                    available,
                    vec!["name", "description", "popular_attractions", "image_url"]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn all_missing_required_fields_are_listed() {
        let err = load_str("ticket_price,opening_hours\n100,9-5\n").expect_err("must fail");

        match err {
            LoadError::MissingColumns { missing, available } => {
                assert_eq!(
                    missing,
                    vec![
                        "name",
                        "state",
                        "description",
                        "popular_attractions",
                        "image_url"
                    ]
                );
                assert_eq!(available, vec!["ticket_price", "opening_hours"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn rows_without_name_or_state_are_dropped_in_order() {
        let table = load_str(
            "name,state,description,popular_attractions,image_url\n\
             Jaipur,Rajasthan,Pink city,Hawa Mahal,\n\
             ,Rajasthan,ghost row,x,\n\
             Udaipur,   ,city of lakes,x,\n\
             Alleppey,Kerala,Backwaters,Houseboats,\n",
        )
        .expect("load");

        let names: Vec<&str> = table.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Jaipur", "Alleppey"]);
    }

    #[test]
    fn bad_coordinates_become_null_not_errors() {
        let table = load_str(
            "name,state,description,popular_attractions,image_url,latitude,longitude\n\
             A,S,d,a,u,abc,78.0\n\
             B,S,d,a,u,,78.1\n\
             C,S,d,a,u,nan,78.2\n\
             D,S,d,a,u,27.5,78.3\n",
        )
        .expect("load");

        assert_eq!(table.len(), 4, "rows with bad coordinates stay in the table");
        assert_eq!(table.records[0].latitude, None);
        assert_eq!(table.records[1].latitude, None);
        assert_eq!(table.records[2].latitude, None, "non-finite values are rejected");
        assert_eq!(table.records[3].latitude, Some(27.5));

        // Bad latitude still leaves the record without a map position.
        assert_eq!(table.records[0].position(), None);
        assert_eq!(table.records[3].position(), Some((27.5, 78.3)));
    }

    #[test]
    fn utf8_bom_is_stripped_from_first_header() {
        let table = load_str(
            "\u{feff}name,state,description,popular_attractions,image_url\n\
             Varanasi,Uttar Pradesh,Ghats on the Ganges,Dashashwamedh Ghat,\n",
        )
        .expect("load");

        assert_eq!(table.records[0].name, "Varanasi");
        assert_eq!(table.source_columns[0], "name");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let absent = dir.path().join("absent.csv");

        match load(&absent) {
            Err(LoadError::NotFound(path)) => assert_eq!(path, absent),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_empty_or_invalid() {
        assert!(matches!(load_str(""), Err(LoadError::EmptyOrInvalid(_))));
        assert!(matches!(load_str("  \n \n"), Err(LoadError::EmptyOrInvalid(_))));
        assert!(matches!(load_str("\u{feff}"), Err(LoadError::EmptyOrInvalid(_))));
    }

    #[test]
    fn header_only_file_loads_as_empty_table() {
        let table = load_str("name,state,description,popular_attractions,image_url\n")
            .expect("a file with headers but no rows is valid");

        assert!(table.is_empty());
        assert!(table.regions.is_empty());
    }

    #[test]
    fn ragged_rows_are_invalid() {
        let err = load_str(
            "name,state,description,popular_attractions,image_url\n\
             A,S,d,a,u,extra-field\n",
        )
        .expect_err("ragged row must fail");

        assert!(matches!(err, LoadError::EmptyOrInvalid(_)));
    }

    #[test]
    fn first_listed_synonym_wins_when_aliases_coexist() {
        // "name" outranks "destination" regardless of column order…
        let table = load_str(
            "destination,name,state,description,popular_attractions,image_url\n\
             WRONG,RIGHT,S,d,a,u\n",
        )
        .expect("load");
        assert_eq!(table.records[0].name, "RIGHT");

        // …and "region" outranks "province" even when province comes first.
        let table = load_str(
            "province,region,name,description,popular_attractions,image_url\n\
             WRONG,RIGHT,N,d,a,u\n",
        )
        .expect("load");
        assert_eq!(table.records[0].state, "RIGHT");
    }

    #[test]
    fn unknown_columns_are_ignored_but_reported() {
        let table = load_str(
            "name,state,description,popular_attractions,image_url,Entry Fee\n\
             Mysore Palace,Karnataka,Royal residence,Light show,,200\n",
        )
        .expect("load");

        assert_eq!(table.records[0].name, "Mysore Palace");
        assert!(table.source_columns.contains(&"entry_fee".to_string()));
    }

    #[test]
    fn quoted_cells_keep_embedded_commas() {
        let table = load_str(
            "name,state,description,popular_attractions,image_url\n\
             Udaipur,Rajasthan,City of lakes,\"City Palace, Lake Pichola\",\n",
        )
        .expect("load");

        let rec = &table.records[0];
        assert_eq!(rec.popular_attractions.as_deref(), Some("City Palace, Lake Pichola"));
        assert_eq!(rec.attractions(), vec!["City Palace", "Lake Pichola"]);
    }

    #[test]
    fn loading_twice_yields_identical_tables() {
        let file = csv_file(
            "name,state,description,popular_attractions,image_url,latitude,longitude\n\
             Jaipur,Rajasthan,Pink city,Hawa Mahal,http://x/j.jpg,26.9124,75.7873\n\
             Goa,Goa,Beaches,Baga Beach,,15.2993,74.1240\n",
        );

        let first = load(file.path()).expect("first load");
        let second = load(file.path()).expect("second load");
        assert_eq!(first, second);
    }

    #[test]
    fn blank_optional_cells_become_none() {
        let table = load_str(
            "name,state,description,popular_attractions,image_url\n\
             Rishikesh,Uttarakhand,   ,  , \n",
        )
        .expect("load");

        let rec = &table.records[0];
        assert_eq!(rec.description, None);
        assert_eq!(rec.popular_attractions, None);
        assert_eq!(rec.image_url, None);
    }
}

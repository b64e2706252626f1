//! Test helpers for writing CLI input documents.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// A temporary directory holding CLI input documents.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) const CATALOGUE_JSON: &str = r#"[
  {"_id": "bali", "name": "Bali", "country": "Indonesia",
   "climate": 5, "budget": 2, "adventure": 4, "culture": 5, "nature": 5, "nightlife": 4,
   "averageRating": 4.5, "totalReviews": 1250},
  {"_id": "reykjavik", "name": "Reykjavik", "country": "Iceland",
   "climate": 1, "budget": 4, "adventure": 5, "culture": 3, "nature": 5, "nightlife": 3,
   "averageRating": 4.6, "totalReviews": 640},
  {"_id": "ibiza", "name": "Ibiza", "country": "Spain",
   "climate": 4, "budget": 4, "adventure": 2, "culture": 2, "nature": 3, "nightlife": 5,
   "averageRating": 4.1, "totalReviews": 300}
]"#;

pub(super) const BALI_RATINGS_JSON: &str = r#"{"ratings": {
  "climate": 5, "budget": 2, "adventure": 4, "culture": 5, "nature": 5, "nightlife": 4
}}"#;

pub(super) const SURVEY_JSON: &str = r#"{"survey": {
  "budget": "Budget",
  "travelStyle": ["Adventure"],
  "interests": ["Hiking", "Nature"],
  "preferredClimate": "Cold"
}}"#;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::criteria::{CriteriaStore, PersistedCriteria, CRITERIA_KEY};
use crate::catalog::paginate::PageSize;
use crate::error::CatalogResult;

const VIEW_KEY: &str = "view";
const PAGE_SIZE_KEY: &str = "itemsPerPage";

/// Card grid or one product per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

/// Display settings that outlive a single catalog visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPreferences {
    pub view: ViewMode,
    pub page_size: PageSize,
}

/// The SessionStore manages the SQLite key-value table that backs
/// persisted filter criteria and display preferences.
pub struct SessionStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl SessionStore {
    /// Open (or create) `session.db` inside `data_dir`.
    pub fn open(data_dir: &Path) -> CatalogResult<Self> {
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("session.db");
        let conn = Connection::open(&db_path)?;

        info!("Session store opened at {}", db_path.display());

        let store = SessionStore {
            conn,
            db_path: Some(db_path),
        };
        store.init_schema()?;

        Ok(store)
    }

    /// A store that lives only as long as the process
    pub fn open_in_memory() -> CatalogResult<Self> {
        let store = SessionStore {
            conn: Connection::open_in_memory()?,
            db_path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> CatalogResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL,
                updated_at      INTEGER NOT NULL
            )",
            [],
        )?;

        debug!("Session schema initialized");

        Ok(())
    }

    /// Path to the database file, None for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn get(&self, key: &str) -> CatalogResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> CatalogResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> CatalogResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Saved view mode and page size. Unknown or missing values use defaults.
    pub fn load_preferences(&self) -> DisplayPreferences {
        let mut prefs = DisplayPreferences::default();

        match self.get(VIEW_KEY) {
            Ok(Some(raw)) => match ViewMode::parse(&raw) {
                Some(view) => prefs.view = view,
                None => warn!("Ignoring saved view mode {raw:?}"),
            },
            Ok(None) => {}
            Err(e) => warn!("Failed to read view mode: {e}"),
        }

        match self.get(PAGE_SIZE_KEY) {
            Ok(Some(raw)) => match raw.parse().ok().and_then(PageSize::from_count) {
                Some(size) => prefs.page_size = size,
                None => warn!("Ignoring saved page size {raw:?}"),
            },
            Ok(None) => {}
            Err(e) => warn!("Failed to read page size: {e}"),
        }

        prefs
    }

    pub fn save_view_mode(&self, view: ViewMode) -> CatalogResult<()> {
        self.set(VIEW_KEY, view.as_str())
    }

    pub fn save_page_size(&self, size: PageSize) -> CatalogResult<()> {
        self.set(PAGE_SIZE_KEY, &size.get().to_string())
    }
}

impl CriteriaStore for SessionStore {
    fn load(&self) -> CatalogResult<Option<PersistedCriteria>> {
        match self.get(CRITERIA_KEY)? {
            Some(json) => Ok(Some(PersistedCriteria::from_json(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, criteria: &PersistedCriteria) -> CatalogResult<()> {
        self.set(CRITERIA_KEY, &criteria.to_json()?)
    }

    fn clear(&self) -> CatalogResult<()> {
        self.remove(CRITERIA_KEY)
    }
}

// Implement Debug for better error messages
impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

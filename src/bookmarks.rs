use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Persisted set of bookmarked employee IDs. Every mutation writes the
/// full set back to disk before returning, so a later reader in the
/// same session never observes a partial state.
pub struct BookmarkStore {
    ids: HashSet<u64>,
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct StoredBookmarks {
    version: u32,
    bookmarked_ids: Vec<u64>,
}

impl BookmarkStore {
    pub fn open() -> Result<Self> {
        Self::open_at(Self::default_path())
    }

    /// Hydrates from the file at `path`. A missing, unreadable, or
    /// malformed file yields the empty set; losing bookmarks is
    /// lower-impact than refusing to start.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ids = Self::hydrate(&path);
        Ok(Self { ids, path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "roster") {
            proj_dirs.data_dir().join("bookmarks.json")
        } else {
            PathBuf::from("bookmarks.json")
        }
    }

    fn hydrate(path: &Path) -> HashSet<u64> {
        let Ok(raw) = std::fs::read_to_string(path) else {
            return HashSet::new();
        };
        match serde_json::from_str::<StoredBookmarks>(&raw) {
            Ok(stored) => stored.bookmarked_ids.into_iter().collect(),
            Err(_) => HashSet::new(),
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut ids: Vec<u64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        let stored = StoredBookmarks {
            version: 1,
            bookmarked_ids: ids,
        };
        let json = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write bookmarks to {}", self.path.display()))
    }

    pub fn is_bookmarked(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Inserts `id` if absent. No-op if already bookmarked. A failed
    /// write rolls the insertion back so memory and disk stay in step.
    pub fn add(&mut self, id: u64) -> Result<()> {
        if self.ids.insert(id) {
            if let Err(e) = self.save() {
                self.ids.remove(&id);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Removes `id` if present. No-op otherwise. A failed write rolls
    /// the removal back.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        if self.ids.remove(&id) {
            if let Err(e) = self.save() {
                self.ids.insert(id);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Removes if present, adds otherwise. Returns true if the id is
    /// bookmarked after the call.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        if self.is_bookmarked(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.ids.is_empty() {
            return Ok(());
        }
        let previous = std::mem::take(&mut self.ids);
        if let Err(e) = self.save() {
            self.ids = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bookmarked IDs in ascending order.
    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::history::MonthlyRecord;

const HISTORY_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub records: Vec<MonthlyRecord>,
}

/// Everything currently on durable storage, grouped by FIDE ID. Loaded once
/// at batch start, merged in memory per player, written back once at the end.
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    players: HashMap<String, PlayerEntry>,
}

impl HistoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_for(&self, fide_id: &str) -> &[MonthlyRecord] {
        self.players
            .get(fide_id)
            .map(|entry| entry.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn player_name(&self, fide_id: &str) -> Option<&str> {
        self.players.get(fide_id)?.name.as_deref()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Upserts records for one player, keyed on the month-end date: replace
    /// when the month already exists (the new value wins), append otherwise.
    /// Other players and other months are untouched.
    pub fn merge(&mut self, fide_id: &str, player_name: Option<&str>, records: &[MonthlyRecord]) {
        let entry = self.players.entry(fide_id.to_string()).or_default();
        if let Some(name) = player_name.map(str::trim).filter(|n| !n.is_empty()) {
            entry.name = Some(name.to_string());
        }
        for record in records {
            match entry.records.iter_mut().find(|r| r.date == record.date) {
                Some(existing) => *existing = record.clone(),
                None => entry.records.push(record.clone()),
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    players: HashMap<String, PlayerEntry>,
}

/// Flat-file store for the history index. The path comes in at construction;
/// nothing here touches the environment.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is a normal first run and yields an empty index. A file
    /// that exists but is not the expected versioned layout is refused:
    /// merging on top of unrecognized data could lose recorded history.
    pub fn load(&self) -> Result<HistoryIndex> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HistoryIndex::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read history file {}", self.path.display()));
            }
        };
        let file: HistoryFile = serde_json::from_str(&raw).with_context(|| {
            format!(
                "history file {} is not in the expected layout",
                self.path.display()
            )
        })?;
        if file.version != HISTORY_VERSION {
            bail!(
                "history file {} has unsupported version {} (expected {})",
                self.path.display(),
                file.version,
                HISTORY_VERSION
            );
        }
        Ok(HistoryIndex {
            players: file.players,
        })
    }

    /// Full rewrite of the index, one persisted row per (player, month-end
    /// date). Written to a temp file first and swapped into place.
    pub fn save(&self, index: &HistoryIndex) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            let _ = fs::create_dir_all(parent);
        }
        let file = HistoryFile {
            version: HISTORY_VERSION,
            players: index.players.clone(),
        };
        let json = serde_json::to_string(&file).context("serialize history index")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("write history file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("swap history file {}", self.path.display()))?;
        Ok(())
    }
}

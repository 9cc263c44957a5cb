use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::change_detect::detect_new;
use crate::fetch::fetch_profile;
use crate::fide_id;
use crate::history::{MonthlyRecord, convert_history};
use crate::profile::{self, CurrentRatings};
use crate::store::HistoryIndex;

/// Everything learned about one player in a run: the cleaned history, plus
/// the subset of months that were not previously stored.
#[derive(Debug, Clone)]
pub struct PlayerOutcome {
    pub fide_id: String,
    pub player_name: String,
    pub current: CurrentRatings,
    pub history: Vec<MonthlyRecord>,
    pub new_months: Vec<MonthlyRecord>,
}

/// Reads FIDE IDs from a text file, one per line, blank lines skipped.
pub fn read_ids_file(path: &Path) -> Result<Vec<String>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read id file {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Processes a batch of IDs against the loaded history index. One player is
/// fully handled (fetch, convert, detect, merge) before the next begins;
/// per-player failures are collected as messages and never abort the batch.
pub fn process_batch(ids: &[String], index: &mut HistoryIndex) -> (Vec<PlayerOutcome>, Vec<String>) {
    let mut outcomes = Vec::new();
    let mut errors = Vec::new();
    for id in ids {
        match process_player(id, index) {
            Ok(outcome) => outcomes.push(outcome),
            Err(message) => errors.push(message),
        }
    }
    (outcomes, errors)
}

fn process_player(id: &str, index: &mut HistoryIndex) -> Result<PlayerOutcome, String> {
    if !fide_id::validate(id) {
        return Err(format!("Invalid FIDE ID format: {id} (skipped)"));
    }

    let html = match fetch_profile(id) {
        Ok(Some(html)) => html,
        Ok(None) => return Err(format!("Player not found (FIDE ID: {id}) (skipped)")),
        Err(err) => return Err(format!("Network error for FIDE ID {id}: {err:#} (skipped)")),
    };

    let player_name = profile::extract_player_name(&html).unwrap_or_default();
    let current = profile::extract_current_ratings(&html);
    let history = convert_history(profile::extract_history_rows(&html));

    if player_name.is_empty() && current.is_empty() && history.is_empty() {
        return Err(format!(
            "Unable to extract data from FIDE profile (FIDE ID: {id}) (skipped)"
        ));
    }

    // Detect against the stored state first, then merge so the next run sees
    // these months as known.
    let new_months = detect_new(index, id, &history);
    index.merge(id, Some(&player_name), &history);

    Ok(PlayerOutcome {
        fide_id: id.to_string(),
        player_name,
        current,
        history,
        new_months,
    })
}

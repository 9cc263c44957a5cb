use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::RawHistoryRow;

/// FIDE publishes the history table with Portuguese month abbreviations.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// The canonical unit of history: one player-month, keyed by the last
/// calendar day of that month. A re-observed month produces a new record that
/// replaces the old one in the store; records are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub date: NaiveDate,
    pub standard: Option<u32>,
    pub rapid: Option<u32>,
    pub blitz: Option<u32>,
}

/// Parses an "Abbrev/YYYY" month token into the last calendar day of that
/// month. The last day is the canonical timestamp because the source freezes
/// a month's rating once the month closes. Anything malformed is `None`.
pub fn parse_month_token(token: &str) -> Option<NaiveDate> {
    let (abbrev, year) = token.trim().split_once('/')?;
    let month = MONTH_ABBREVS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbrev.trim()))? as u32
        + 1;
    let year: i32 = year.trim().parse().ok()?;
    month_end(year, month)
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt()
}

/// Collapses rows that denote the same month, keeping the first (topmost)
/// occurrence. Tokens are compared by the month they parse to, so spelling
/// variants like "Jun/2025" and "JUN/2025" count as the same month and at
/// most one record per date reaches the converter. Unparseable tokens are
/// compared verbatim. Relative order of the surviving rows is preserved.
pub fn dedupe_rows(rows: Vec<RawHistoryRow>) -> Vec<RawHistoryRow> {
    let mut seen_dates = HashSet::new();
    let mut seen_raw = HashSet::new();
    rows.into_iter()
        .filter(|row| match parse_month_token(&row.month_token) {
            Some(date) => seen_dates.insert(date),
            None => seen_raw.insert(row.month_token.clone()),
        })
        .collect()
}

/// Turns raw table rows into clean monthly records: dedupe, then parse each
/// surviving month token. Rows that fail to parse are dropped, never an
/// error; order stays most-recent-first as extracted.
pub fn convert_history(rows: Vec<RawHistoryRow>) -> Vec<MonthlyRecord> {
    dedupe_rows(rows)
        .into_iter()
        .filter_map(|row| {
            let date = parse_month_token(&row.month_token)?;
            Some(MonthlyRecord {
                date,
                standard: row.standard,
                rapid: row.rapid,
                blitz: row.blitz,
            })
        })
        .collect()
}

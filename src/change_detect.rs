use std::collections::HashSet;

use chrono::NaiveDate;

use crate::history::MonthlyRecord;
use crate::store::HistoryIndex;

/// Returns the scraped records whose month-end date is not yet stored for
/// this player, in scraped order. A first run (no prior entry) returns the
/// whole scraped history, so a cold start captures everything. A month whose
/// rating values changed but whose date is already stored is not "new" -
/// only newly appearing months trigger downstream action.
pub fn detect_new(
    index: &HistoryIndex,
    fide_id: &str,
    scraped: &[MonthlyRecord],
) -> Vec<MonthlyRecord> {
    let prior: HashSet<NaiveDate> = index
        .records_for(fide_id)
        .iter()
        .map(|record| record.date)
        .collect();
    scraped
        .iter()
        .filter(|record| !prior.contains(&record.date))
        .cloned()
        .collect()
}

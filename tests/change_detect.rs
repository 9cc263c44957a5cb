use chrono::NaiveDate;

use fide_monitor::change_detect::detect_new;
use fide_monitor::history::MonthlyRecord;
use fide_monitor::store::HistoryIndex;

fn month_end(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn record(date: NaiveDate, standard: u32) -> MonthlyRecord {
    MonthlyRecord {
        date,
        standard: Some(standard),
        rapid: None,
        blitz: None,
    }
}

#[test]
fn first_run_returns_entire_history() {
    let index = HistoryIndex::new();
    let scraped = vec![
        record(month_end(2025, 5, 31), 1800),
        record(month_end(2025, 4, 30), 1790),
        record(month_end(2025, 3, 31), 1780),
    ];
    assert_eq!(detect_new(&index, "12345678", &scraped), scraped);
}

#[test]
fn known_months_are_not_new_even_when_values_differ() {
    let mut index = HistoryIndex::new();
    let scraped = vec![
        record(month_end(2025, 5, 31), 1800),
        record(month_end(2025, 4, 30), 1790),
    ];
    // Stored values differ from the scrape; dates are what counts.
    index.merge(
        "12345678",
        None,
        &[
            record(month_end(2025, 5, 31), 1700),
            record(month_end(2025, 4, 30), 1690),
        ],
    );
    assert!(detect_new(&index, "12345678", &scraped).is_empty());
}

#[test]
fn gap_fill_preserves_scraped_order() {
    let mut index = HistoryIndex::new();
    index.merge("12345678", None, &[record(month_end(2025, 3, 31), 1780)]);

    let scraped = vec![
        record(month_end(2025, 5, 31), 1800),
        record(month_end(2025, 4, 30), 1790),
        record(month_end(2025, 3, 31), 1780),
    ];
    let new_months = detect_new(&index, "12345678", &scraped);
    assert_eq!(new_months, scraped[..2].to_vec());
}

#[test]
fn other_players_history_does_not_mask_new_months() {
    let mut index = HistoryIndex::new();
    index.merge("99990000", None, &[record(month_end(2025, 5, 31), 2200)]);

    let scraped = vec![record(month_end(2025, 5, 31), 1800)];
    assert_eq!(detect_new(&index, "12345678", &scraped), scraped);
}

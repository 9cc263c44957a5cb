use chrono::NaiveDate;

use fide_monitor::history::MonthlyRecord;
use fide_monitor::notify::{compose_rating_email, render_new_months};

fn record(
    year: i32,
    month: u32,
    day: u32,
    standard: Option<u32>,
    rapid: Option<u32>,
    blitz: Option<u32>,
) -> MonthlyRecord {
    MonthlyRecord {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
        standard,
        rapid,
        blitz,
    }
}

#[test]
fn email_diffs_the_two_most_recent_months() {
    let history = vec![
        record(2025, 11, 30, Some(2450), Some(2310), Some(1900)),
        record(2025, 10, 31, Some(2440), Some(2300), Some(1890)),
    ];
    let (subject, body) = compose_rating_email("Alice Smith", "12345678", &history);

    assert_eq!(subject, "Your FIDE Rating Update - Alice Smith");
    assert!(body.starts_with("Dear Alice Smith,"));
    assert!(body.contains("Standard Rating: 2440 → 2450"));
    assert!(body.contains("Rapid Rating: 2300 → 2310"));
    assert!(body.contains("Blitz Rating: 1890 → 1900"));
    assert!(body.contains("FIDE ID: 12345678"));
    assert!(body.contains("Profile: https://ratings.fide.com/profile/12345678"));

    // Categories render in alphabetical order.
    let blitz_at = body.find("Blitz Rating:").unwrap();
    let rapid_at = body.find("Rapid Rating:").unwrap();
    let standard_at = body.find("Standard Rating:").unwrap();
    assert!(blitz_at < rapid_at && rapid_at < standard_at);
}

#[test]
fn single_month_shows_current_ratings() {
    let history = vec![record(2025, 11, 30, Some(2450), None, Some(1900))];
    let (_, body) = compose_rating_email("Alice Smith", "12345678", &history);
    assert!(body.contains("Standard Rating: 2450"));
    assert!(body.contains("Rapid Rating: unrated"));
    assert!(body.contains("Blitz Rating: 1900"));
    assert!(!body.contains("→"));
}

#[test]
fn unrated_categories_render_as_unrated_in_diffs() {
    let history = vec![
        record(2025, 11, 30, Some(1800), Some(1850), None),
        record(2025, 10, 31, None, Some(1840), None),
    ];
    let (_, body) = compose_rating_email("Bob Jones", "87654321", &history);
    assert!(body.contains("Standard Rating: unrated → 1800"));
    assert!(body.contains("Rapid Rating: 1840 → 1850"));
    assert!(body.contains("Blitz Rating: unrated → unrated"));
}

#[test]
fn new_month_report_lists_every_record_in_order() {
    let new_months = vec![
        record(2025, 11, 30, Some(1800), Some(1884), Some(1800)),
        record(2025, 6, 30, Some(1750), None, Some(1700)),
    ];
    let rendered = render_new_months("Alice Smith", "12345678", &new_months);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "New rating months for Alice Smith (12345678):");
    assert!(lines[1].contains("2025-11-30"));
    assert!(lines[2].contains("2025-06-30"));
    assert!(lines[2].contains("rapid=unrated"));
}

#[test]
fn new_month_report_falls_back_to_id_without_a_name() {
    let new_months = vec![record(2025, 11, 30, Some(1800), None, None)];
    let rendered = render_new_months("", "12345678", &new_months);
    assert!(rendered.starts_with("New rating months for 12345678 (12345678):"));
}

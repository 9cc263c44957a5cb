use chrono::Local;

use crate::batch::PlayerOutcome;
use crate::profile::CurrentRatings;

/// Single-player output block.
pub fn format_ratings_block(current: &CurrentRatings) -> String {
    format!(
        "Standard: {}\nRapid: {}\nBlitz: {}",
        rating_or_unrated(current.standard),
        rating_or_unrated(current.rapid),
        rating_or_unrated(current.blitz)
    )
}

/// Tabular batch output with the current local date stamped on every row.
pub fn format_console_table(outcomes: &[PlayerOutcome]) -> String {
    if outcomes.is_empty() {
        return "No player data to display.\n".to_string();
    }

    let today = Local::now().date_naive().to_string();
    let header = format!(
        "{:<12} {:<12} {:<40} {:<9} {:<6} {}",
        "Date", "FIDE ID", "Player Name", "Standard", "Rapid", "Blitz"
    );
    let separator = "-".repeat(header.len());

    let mut lines = vec![header, separator];
    for outcome in outcomes {
        let name = display_name(&outcome.player_name);
        lines.push(format!(
            "{today:<12} {:<12} {name:<40} {:<9} {:<6} {}",
            outcome.fide_id,
            rating_or_unrated(outcome.current.standard),
            rating_or_unrated(outcome.current.rapid),
            rating_or_unrated(outcome.current.blitz)
        ));
    }
    lines.join("\n") + "\n"
}

fn display_name(name: &str) -> String {
    if name.is_empty() {
        return "Unknown".to_string();
    }
    if name.chars().count() > 40 {
        let mut truncated: String = name.chars().take(37).collect();
        truncated.push_str("...");
        return truncated;
    }
    name.to_string()
}

fn rating_or_unrated(rating: Option<u32>) -> String {
    rating.map_or_else(|| "Unrated".to_string(), |r| r.to_string())
}

use crate::fide_id;
use crate::history::MonthlyRecord;

/// Composes the rating-update email for one player. With two or more history
/// entries the body shows the per-category change between the two most recent
/// months; with a single entry it shows that month's ratings. Categories are
/// listed in alphabetical order for stable output.
pub fn compose_rating_email(
    player_name: &str,
    id: &str,
    history: &[MonthlyRecord],
) -> (String, String) {
    let subject = format!("Your FIDE Rating Update - {player_name}");

    let mut lines = vec![
        format!("Dear {player_name},"),
        String::new(),
        "Your FIDE ratings have been updated. Here are the changes:".to_string(),
        String::new(),
    ];

    match history {
        [current, previous, ..] => {
            for (label, old, new) in [
                ("Blitz", previous.blitz, current.blitz),
                ("Rapid", previous.rapid, current.rapid),
                ("Standard", previous.standard, current.standard),
            ] {
                lines.push(format!(
                    "{label} Rating: {} → {}",
                    rating_or_unrated(old),
                    rating_or_unrated(new)
                ));
            }
        }
        [only] => {
            lines.push(format!("Standard Rating: {}", rating_or_unrated(only.standard)));
            lines.push(format!("Rapid Rating: {}", rating_or_unrated(only.rapid)));
            lines.push(format!("Blitz Rating: {}", rating_or_unrated(only.blitz)));
        }
        [] => {}
    }

    lines.extend([
        String::new(),
        format!("FIDE ID: {id}"),
        format!("Profile: {}", fide_id::profile_url(id)),
        String::new(),
        "Best regards,".to_string(),
        "FIDE Rating Monitor".to_string(),
    ]);

    (subject, lines.join("\n"))
}

/// Renders a change set as "new month discovered" lines. Callers skip players
/// whose change set is empty.
pub fn render_new_months(player_name: &str, id: &str, new_months: &[MonthlyRecord]) -> String {
    let who = if player_name.is_empty() { id } else { player_name };
    let mut lines = vec![format!("New rating months for {who} ({id}):")];
    for record in new_months {
        lines.push(format!(
            "  {}  standard={} rapid={} blitz={}",
            record.date,
            rating_or_unrated(record.standard),
            rating_or_unrated(record.rapid),
            rating_or_unrated(record.blitz)
        ));
    }
    lines.join("\n")
}

fn rating_or_unrated(rating: Option<u32>) -> String {
    rating.map_or_else(|| "unrated".to_string(), |r| r.to_string())
}

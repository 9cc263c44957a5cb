use scraper::{ElementRef, Html, Selector};

/// One row of the published rating-history table, before cleaning.
/// The month token is kept verbatim (e.g. "Nov/2025").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHistoryRow {
    pub month_token: String,
    pub standard: Option<u32>,
    pub rapid: Option<u32>,
    pub blitz: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentRatings {
    pub standard: Option<u32>,
    pub rapid: Option<u32>,
    pub blitz: Option<u32>,
}

impl CurrentRatings {
    pub fn is_empty(&self) -> bool {
        self.standard.is_none() && self.rapid.is_none() && self.blitz.is_none()
    }
}

/// Extracts the rating-history table as published, most-recent-first.
/// No table, or a table with no usable rows, yields an empty vec; rows
/// without a month token are dropped individually.
pub fn extract_history_rows(html: &str) -> Vec<RawHistoryRow> {
    let document = Html::parse_document(html);
    let table_sel =
        Selector::parse("table.profile-table_chart-table").expect("history table selector");
    let row_sel = Selector::parse("tr").expect("row selector");
    let cell_sel = Selector::parse("td").expect("cell selector");

    let Some(table) = document.select(&table_sel).next() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for tr in table.select(&row_sel) {
        let cells: Vec<String> = tr.select(&cell_sel).map(element_text).collect();
        // Header rows use <th> and come out empty here.
        let Some(token) = cells.first().map(|c| c.trim()).filter(|c| !c.is_empty()) else {
            continue;
        };
        rows.push(RawHistoryRow {
            month_token: token.to_string(),
            standard: cells.get(1).and_then(|c| parse_rating_text(c)),
            rapid: cells.get(2).and_then(|c| parse_rating_text(c)),
            blitz: cells.get(3).and_then(|c| parse_rating_text(c)),
        });
    }
    rows
}

pub fn extract_current_ratings(html: &str) -> CurrentRatings {
    let document = Html::parse_document(html);
    CurrentRatings {
        // FIDE's own markup spells it "standart".
        standard: first_rating(&document, "div.profile-standart p"),
        rapid: first_rating(&document, "div.profile-rapid p"),
        blitz: first_rating(&document, "div.profile-blitz p"),
    }
}

/// Player name from `h1.player-title`, falling back to any `h1`, then to the
/// page title stripped of " - ..." / " | ..." suffixes.
pub fn extract_player_name(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    for selector in ["h1.player-title", "h1"] {
        let sel = Selector::parse(selector).expect("name selector");
        if let Some(el) = document.select(&sel).next() {
            let name = element_text(el);
            if !name.trim().is_empty() {
                return Some(name.trim().to_string());
            }
        }
    }
    let title_sel = Selector::parse("title").expect("title selector");
    let title = element_text(document.select(&title_sel).next()?);
    let name = title
        .split(" - ")
        .next()
        .unwrap_or("")
        .split(" | ")
        .next()
        .unwrap_or("")
        .trim()
        .to_string();
    if name.is_empty() { None } else { Some(name) }
}

fn first_rating(document: &Html, selector: &str) -> Option<u32> {
    let sel = Selector::parse(selector).expect("rating selector");
    // The first <p> inside the rating div carries the value (or "Not rated").
    let p = document.select(&sel).next()?;
    parse_rating_text(&element_text(p))
}

/// Pulls a plausible rating out of a text cell: the first 3-4 digit figure in
/// 0..=3000. Empty cells, dashes and "Not rated"/"Unrated" markers are absent
/// values, not errors.
fn parse_rating_text(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "—" || trimmed == "-" {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower == "not rated" || lower == "unrated" {
        return None;
    }

    let mut run = String::new();
    for ch in trimmed.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if !run.is_empty() {
            break;
        }
    }
    if (3..=4).contains(&run.len()) {
        let value: u32 = run.parse().ok()?;
        if value <= 3000 {
            return Some(value);
        }
    }
    None
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}

use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;

use crate::batch::PlayerOutcome;
use crate::fetch::http_client;
use crate::history::MonthlyRecord;

const API_TIMEOUT_SECS: u64 = 5;
const MAX_RETRIES: u32 = 1;

/// Outbound API target. Posting is an optional feature: both variables must
/// be configured, and a half-configured pair is reported and disabled.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub token: String,
}

impl ApiConfig {
    pub fn from_env() -> Option<Self> {
        let endpoint = env_trimmed("FIDE_RATINGS_API_ENDPOINT");
        let token = env_trimmed("API_TOKEN");
        match (endpoint, token) {
            (Some(endpoint), Some(token)) => Some(Self { endpoint, token }),
            (Some(_), None) => {
                eprintln!(
                    "Warning: FIDE_RATINGS_API_ENDPOINT is set but API_TOKEN is missing - API posting disabled"
                );
                None
            }
            (None, Some(_)) => {
                eprintln!(
                    "Warning: API_TOKEN is set but FIDE_RATINGS_API_ENDPOINT is missing - API posting disabled"
                );
                None
            }
            (None, None) => None,
        }
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// One monthly record mapped field-for-field into the outbound payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingUpdate<'a> {
    pub date: NaiveDate,
    pub fide_id: &'a str,
    pub player_name: &'a str,
    pub standard_rating: Option<u32>,
    pub rapid_rating: Option<u32>,
    pub blitz_rating: Option<u32>,
}

impl<'a> RatingUpdate<'a> {
    pub fn from_record(record: &MonthlyRecord, fide_id: &'a str, player_name: &'a str) -> Self {
        Self {
            date: record.date,
            fide_id,
            player_name,
            standard_rating: record.standard,
            rapid_rating: record.rapid,
            blitz_rating: record.blitz,
        }
    }
}

/// Posts one rating update. Timeouts, connection failures and 5xx responses
/// are retried once; 4xx responses are final. Failures are logged, never
/// propagated.
pub fn post_rating(config: &ApiConfig, update: &RatingUpdate<'_>) -> bool {
    let client = match http_client() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: API client unavailable: {err:#}");
            return false;
        }
    };

    for attempt in 0..=MAX_RETRIES {
        let sent = client
            .post(&config.endpoint)
            .header("Authorization", format!("Token {}", config.token))
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .json(update)
            .send();
        match sent {
            Ok(response) if response.status().is_success() => return true,
            Ok(response) => {
                let status = response.status();
                eprintln!(
                    "Error: API returned {status} for FIDE ID {}",
                    update.fide_id
                );
                if status.is_client_error() || attempt == MAX_RETRIES {
                    return false;
                }
            }
            Err(err) => {
                eprintln!(
                    "Error: API request failed for FIDE ID {}: {err} (attempt {}/{})",
                    update.fide_id,
                    attempt + 1,
                    MAX_RETRIES + 1
                );
                if attempt == MAX_RETRIES {
                    return false;
                }
            }
        }
    }
    false
}

/// Posts every record in each player's change set; players with no new
/// months are skipped. Returns (posted, failed) counts for the summary.
pub fn send_batch_updates(config: &ApiConfig, outcomes: &[PlayerOutcome]) -> (usize, usize) {
    let mut posted = 0;
    let mut failed = 0;
    for outcome in outcomes {
        if outcome.new_months.is_empty() {
            continue;
        }
        let mut player_posted = 0;
        let mut player_failed = 0;
        for record in &outcome.new_months {
            let update = RatingUpdate::from_record(record, &outcome.fide_id, &outcome.player_name);
            if post_rating(config, &update) {
                player_posted += 1;
            } else {
                player_failed += 1;
            }
        }
        eprintln!(
            "{}",
            player_summary(
                &outcome.player_name,
                &outcome.fide_id,
                player_posted,
                player_failed
            )
        );
        posted += player_posted;
        failed += player_failed;
    }
    (posted, failed)
}

fn player_summary(player_name: &str, fide_id: &str, posted: usize, failed: usize) -> String {
    if failed == 0 {
        format!("API updates posted for {player_name} ({fide_id}) - {posted} months")
    } else {
        format!("API updates for {player_name} ({fide_id}): {posted} posted, {failed} failed")
    }
}

use std::process::ExitCode;

use anyhow::{Result, bail};

use fide_monitor::batch::{self, PlayerOutcome};
use fide_monitor::config::Config;
use fide_monitor::fetch;
use fide_monitor::fide_id;
use fide_monitor::notify;
use fide_monitor::profile;
use fide_monitor::ratings_api::{self, ApiConfig};
use fide_monitor::report;
use fide_monitor::store::HistoryStore;

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    match std::env::args().nth(1) {
        Some(id) => run_single(&id),
        None => run_batch(),
    }
}

/// Single-player mode: fetch one profile and print its current ratings.
/// No persistence, no change detection.
fn run_single(id: &str) -> ExitCode {
    if !fide_id::validate(id) {
        eprintln!("Error: Invalid FIDE ID format. Must be numeric (4-10 digits).");
        return ExitCode::from(2);
    }

    let html = match fetch::fetch_profile(id) {
        Ok(Some(html)) => html,
        Ok(None) => {
            eprintln!("Error: Player not found (FIDE ID: {id})");
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::from(1);
        }
    };

    let current = profile::extract_current_ratings(&html);
    if current.is_empty() {
        eprintln!("Error: Unable to extract ratings from FIDE profile (FIDE ID: {id})");
        return ExitCode::from(1);
    }
    println!("{}", report::format_ratings_block(&current));
    ExitCode::SUCCESS
}

fn run_batch() -> ExitCode {
    match run_batch_inner() {
        Ok(successes) if successes > 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run_batch_inner() -> Result<usize> {
    let config = Config::from_env();
    let store = HistoryStore::new(&config.history_path);
    // A structurally incompatible history file aborts here, before any merge.
    let mut index = store.load()?;

    let ids = batch::read_ids_file(&config.ids_file)?;
    if ids.is_empty() {
        bail!(
            "input file {} is empty or contains no FIDE IDs",
            config.ids_file.display()
        );
    }

    println!("Processing FIDE IDs from file: {}\n", config.ids_file.display());
    let (outcomes, errors) = batch::process_batch(&ids, &mut index);
    store.save(&index)?;

    print!("{}", report::format_console_table(&outcomes));
    print_notifications(&outcomes);

    if let Some(api) = ApiConfig::from_env() {
        let (posted, failed) = ratings_api::send_batch_updates(&api, &outcomes);
        if posted + failed > 0 {
            println!("API updates: {posted} posted, {failed} failed");
        }
    }

    for error in &errors {
        eprintln!("Error: {error}");
    }
    println!("History written to: {}", store.path().display());
    println!(
        "Processed {} IDs successfully, {} errors",
        outcomes.len(),
        errors.len()
    );
    Ok(outcomes.len())
}

/// Prints the new-month list and the composed notification email for every
/// player whose change set is non-empty; the surrounding deployment delivers
/// the emails. Players without new months are skipped silently.
fn print_notifications(outcomes: &[PlayerOutcome]) {
    for outcome in outcomes {
        if outcome.new_months.is_empty() {
            continue;
        }
        println!();
        println!(
            "{}",
            notify::render_new_months(&outcome.player_name, &outcome.fide_id, &outcome.new_months)
        );
        let (subject, body) =
            notify::compose_rating_email(&outcome.player_name, &outcome.fide_id, &outcome.history);
        println!("Subject: {subject}");
        println!("{body}");
    }
}

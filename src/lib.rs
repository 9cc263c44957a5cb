//! Scrapes FIDE chess profiles, normalizes the published monthly rating
//! history and tracks which months are new since the last run.

pub mod batch;
pub mod change_detect;
pub mod config;
pub mod fetch;
pub mod fide_id;
pub mod history;
pub mod notify;
pub mod profile;
pub mod ratings_api;
pub mod report;
pub mod store;

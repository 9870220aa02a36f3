//! Domain core of the ANCHRD League football-jobs marketplace: the listing
//! catalog and its filter, the talent and club onboarding wizards, the club
//! dashboard, and the key-value persistence they share.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod onboarding;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;

pub use errors::{AppError, Result};

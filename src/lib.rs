pub mod commands;
pub mod directions;
pub mod models;
pub mod places;
pub mod reviews;
pub mod routing;
pub mod settings;
pub mod storage;
pub mod store;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use directions::{DirectionsController, DirectionsState};
use models::{Place, Review, SavedLocation};
use places::PlaceCatalog;
use settings::{Settings, SettingsStore};
use store::{ChangeNotifier, LocalStore, SessionContext, StoreEvent};

pub struct AppState {
    pub catalog: PlaceCatalog,
    pub store: LocalStore,
    pub directions: DirectionsController,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self> {
        let storage = settings
            .storage
            .open()
            .context("failed to open session storage")?;

        Ok(Self {
            catalog: PlaceCatalog::default(),
            store: LocalStore::new(
                SessionContext::new(storage),
                ChangeNotifier::new(settings.notification_capacity),
            ),
            directions: DirectionsController::new(settings.origin, settings.route.clone()),
        })
    }
}

/// What one scripted session leaves behind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub session_id: String,
    pub session_started_at: DateTime<Utc>,
    pub identity: String,
    pub pins: Vec<String>,
    pub search_results: Vec<String>,
    pub place: Place,
    pub reviews: Vec<Review>,
    pub saved: Vec<SavedLocation>,
    pub directions: DirectionsState,
    pub events: Vec<StoreEvent>,
}

/// Drive one session the way the map UI would: search, open a place,
/// review it, vote, save it and ask for directions.
pub fn walkthrough(state: &AppState, query: &str) -> Result<SessionReport, String> {
    let mut events = state.store.subscribe();

    let hits = commands::search_places(state, query)?;
    let place = hits
        .first()
        .cloned()
        .ok_or_else(|| format!("No places match '{query}'"))?;

    commands::get_reviews(state, &place.id)?;
    let review = commands::submit_review(state, &place.id, 5, "Smooth espresso and friendly staff.")?;
    if let Some(seeded) = commands::get_reviews(state, &place.id)?.last() {
        commands::toggle_helpful(state, &seeded.id)?;
    }
    if let Some(review) = review {
        commands::edit_review(
            state,
            &place.id,
            &review.id,
            4,
            "Smooth espresso, friendly staff, long line at noon.",
        )?;
    }
    commands::toggle_saved_location(state, &place.id)?;
    let directions = commands::get_directions(state, &place.id)?;

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }

    Ok(SessionReport {
        session_id: state.store.session().id().to_string(),
        session_started_at: state.store.session().started_at(),
        identity: commands::get_current_user(state)?,
        pins: commands::list_places(state)?
            .into_iter()
            .map(|p| p.id)
            .collect(),
        search_results: hits.iter().map(|p| p.name.clone()).collect(),
        reviews: commands::get_reviews(state, &place.id)?,
        saved: commands::get_saved_locations(state)?,
        place,
        directions,
        events: seen,
    })
}

pub fn run() -> Result<()> {
    let debug_mode = std::env::var("PLACEMARK_DEBUG")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::new()
        .filter_level(if debug_mode {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    log::info!("Placemark starting up...");

    let settings = match std::env::var_os("PLACEMARK_SETTINGS") {
        Some(path) => SettingsStore::new(PathBuf::from(path))?.settings(),
        None => Settings::default(),
    };

    let state = AppState::new(&settings)?;
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Blue Bottle".to_string());

    let report = walkthrough(&state, &query).map_err(|err| anyhow::anyhow!(err))?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

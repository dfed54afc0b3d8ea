//! UI-facing commands. Each maps failures to a display string.

use crate::{
    directions::DirectionsState,
    models::{Place, Review, SavedLocation},
    reviews::{ReviewBoard, ReviewDraft},
    AppState,
};

fn find_place(state: &AppState, place_id: &str) -> Result<Place, String> {
    state
        .catalog
        .get(place_id)
        .cloned()
        .ok_or_else(|| format!("Unknown place '{place_id}'"))
}

/// Every place, for the map pins.
pub fn list_places(state: &AppState) -> Result<Vec<Place>, String> {
    Ok(state.catalog.all().to_vec())
}

pub fn search_places(state: &AppState, query: &str) -> Result<Vec<Place>, String> {
    Ok(state.catalog.search(query).into_iter().cloned().collect())
}

pub fn get_place(state: &AppState, place_id: &str) -> Result<Place, String> {
    find_place(state, place_id)
}

pub fn get_current_user(state: &AppState) -> Result<String, String> {
    Ok(state.store.current_identity())
}

pub fn get_reviews(state: &AppState, place_id: &str) -> Result<Vec<Review>, String> {
    find_place(state, place_id)?;
    Ok(ReviewBoard::open(&state.store, place_id).reviews())
}

pub fn submit_review(
    state: &AppState,
    place_id: &str,
    rating: u8,
    text: &str,
) -> Result<Option<Review>, String> {
    find_place(state, place_id)?;
    let draft = ReviewDraft::new(rating, text).map_err(|e| e.to_string())?;
    Ok(ReviewBoard::open(&state.store, place_id).submit(&draft))
}

pub fn edit_review(
    state: &AppState,
    place_id: &str,
    review_id: &str,
    rating: u8,
    text: &str,
) -> Result<bool, String> {
    let draft = ReviewDraft::new(rating, text).map_err(|e| e.to_string())?;
    ReviewBoard::open(&state.store, place_id)
        .edit(review_id, &draft)
        .map_err(|e| e.to_string())
}

pub fn delete_review(state: &AppState, place_id: &str, review_id: &str) -> Result<bool, String> {
    ReviewBoard::open(&state.store, place_id)
        .delete(review_id)
        .map_err(|e| e.to_string())
}

pub fn toggle_helpful(state: &AppState, review_id: &str) -> Result<bool, String> {
    Ok(state.store.toggle_helpful(review_id))
}

pub fn get_saved_locations(state: &AppState) -> Result<Vec<SavedLocation>, String> {
    Ok(state.store.list_saved())
}

pub fn toggle_saved_location(state: &AppState, place_id: &str) -> Result<bool, String> {
    let place = find_place(state, place_id)?;
    Ok(state.store.toggle_saved(&place))
}

pub fn remove_saved_location(state: &AppState, place_id: &str) -> Result<bool, String> {
    Ok(state.store.unsave(place_id))
}

pub fn get_directions(state: &AppState, place_id: &str) -> Result<DirectionsState, String> {
    let place = find_place(state, place_id)?;
    Ok(state.directions.start(&place))
}

pub fn stop_directions(state: &AppState) -> Result<bool, String> {
    Ok(state.directions.stop())
}

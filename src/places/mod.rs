pub mod catalog;

use crate::models::Place;

pub use catalog::default_places;

/// Read-only set of places backing the map pins and the search box.
#[derive(Debug, Clone)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl Default for PlaceCatalog {
    fn default() -> Self {
        Self::new(default_places())
    }
}

impl PlaceCatalog {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }

    pub fn get(&self, place_id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == place_id)
    }

    /// Case-insensitive substring match over name, category and
    /// neighborhood. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Place> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.places
            .iter()
            .filter(|place| {
                [&place.name, &place.category, &place.neighborhood]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_place_has_a_full_week_with_one_today() {
        for place in default_places() {
            assert_eq!(place.timings.len(), 7, "{}", place.id);
            assert_eq!(
                place.timings.iter().filter(|t| t.is_today).count(),
                1,
                "{}",
                place.id
            );
            assert!(place.today().is_some());
        }
    }

    #[test]
    fn place_ids_are_unique() {
        let places = default_places();
        let mut ids: Vec<_> = places.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), places.len());
    }

    #[test]
    fn positions_and_ratings_are_in_range() {
        for place in default_places() {
            assert!((0.0..=100.0).contains(&place.position.x));
            assert!((0.0..=100.0).contains(&place.position.y));
            assert!((0.0..=5.0).contains(&place.rating));
        }
    }

    #[test]
    fn search_matches_name_category_and_neighborhood() {
        let catalog = PlaceCatalog::default();

        let by_name: Vec<_> = catalog.search("blue bottle").iter().map(|p| p.id.clone()).collect();
        assert_eq!(by_name, vec!["blue-bottle-coffee"]);

        let by_category = catalog.search("BAKERY");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, "tartine-bakery");

        let by_neighborhood = catalog.search("mission");
        assert_eq!(by_neighborhood.len(), 2);
    }

    #[test]
    fn blank_search_returns_nothing() {
        let catalog = PlaceCatalog::default();
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("zzz-no-such-place").is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = PlaceCatalog::default();
        assert_eq!(catalog.get("ferry-building").map(|p| p.name.as_str()), Some("Ferry Building Marketplace"));
        assert!(catalog.get("missing").is_none());
    }
}

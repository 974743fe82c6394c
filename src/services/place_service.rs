// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Queries over a loaded catalog, independent of HTTP and of the file system

use crate::errors::GuideError;
use crate::models::Place;
use std::cmp::Ordering;
use std::collections::BTreeSet;

pub struct PlaceService;

impl PlaceService {
    /// All places in file order
    pub fn get_all(places: Vec<Place>) -> Vec<Place> {
        places
    }

    /// First place whose slug equals `slug` exactly
    pub fn get_by_slug(places: Vec<Place>, slug: &str) -> Result<Place, GuideError> {
        places
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| GuideError::NotFound("Place not found".to_string()))
    }

    /// Places whose category equals `category` ignoring case
    /// DOCUMENTATION: An empty result is an error since categories come from the places themselves
    pub fn get_by_category(places: Vec<Place>, category: &str) -> Result<Vec<Place>, GuideError> {
        let matching: Vec<Place> = places
            .into_iter()
            .filter(|p| p.in_category(category))
            .collect();

        if matching.is_empty() {
            return Err(GuideError::NotFound(format!(
                "No places found in category '{}'",
                category
            )));
        }

        Ok(matching)
    }

    /// Distinct categories, sorted
    pub fn get_categories(places: &[Place]) -> Vec<String> {
        places
            .iter()
            .map(|p| p.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Case-insensitive substring search over name, description, location and category
    /// DOCUMENTATION: An empty query matches everything; `category`, when non-empty, must match exactly
    pub fn search(places: Vec<Place>, query: &str, category: Option<&str>) -> Vec<Place> {
        let needle = query.to_lowercase();
        // "" is the "all categories" choice of the search form
        let category = category.filter(|c| !c.is_empty());

        places
            .into_iter()
            .filter(|p| p.matches_text(&needle))
            .filter(|p| category.map_or(true, |c| p.in_category(c)))
            .collect()
    }

    /// The `limit` best rated places
    /// DOCUMENTATION: Stable sort, so equal ratings keep catalog order; NaN ratings go last
    pub fn get_featured(mut places: Vec<Place>, limit: usize) -> Vec<Place> {
        places.sort_by(|a, b| match (a.rating.is_nan(), b.rating.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        });
        places.truncate(limit);
        places
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i64, slug: &str, name: &str, category: &str, rating: f64) -> Place {
        Place {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            category: category.to_string(),
            description: format!("{} in Ayodhya", name),
            image: format!("images/{}.jpg", slug),
            rating,
            location: "Ayodhya, Uttar Pradesh".to_string(),
            coordinates: (26.79, 82.19),
            timings: "6:00 AM - 9:00 PM".to_string(),
            entry_fee: "Free".to_string(),
            best_time: "October to March".to_string(),
            history: None,
            tips: None,
            gallery: None,
        }
    }

    fn two_place_catalog() -> Vec<Place> {
        vec![
            place(1, "ram-temple", "Shri Ram Mandir", "Temple", 4.8),
            place(2, "sarayu-ghats", "Sarayu Ghats", "Cultural", 4.5),
        ]
    }

    fn catalog() -> Vec<Place> {
        vec![
            place(1, "ram-temple", "Shri Ram Mandir", "Temple", 4.8),
            place(2, "hanuman-garhi", "Hanuman Garhi", "Temple", 4.7),
            place(3, "guptar-ghat", "Guptar Ghat", "Ghat", 4.3),
            place(4, "ram-ki-paidi", "Ram Ki Paidi", "Ghat", 4.6),
            place(5, "tulsi-smarak", "Tulsi Smarak Bhawan", "Museum", 4.1),
            place(6, "kanak-bhawan", "Kanak Bhawan", "Temple", 4.6),
            place(7, "gulab-bari", "Gulab Bari", "Heritage", 4.2),
        ]
    }

    #[test]
    fn test_get_all_preserves_order() {
        let slugs: Vec<String> = PlaceService::get_all(catalog())
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs[0], "ram-temple");
        assert_eq!(slugs[6], "gulab-bari");
    }

    #[test]
    fn test_get_by_slug_finds_every_place() {
        for expected in catalog() {
            let found = PlaceService::get_by_slug(catalog(), &expected.slug).unwrap();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_get_by_slug_is_case_sensitive() {
        assert!(matches!(
            PlaceService::get_by_slug(catalog(), "Ram-Temple"),
            Err(GuideError::NotFound(_))
        ));
        assert!(PlaceService::get_by_slug(catalog(), "ayodhya-fort").is_err());
    }

    #[test]
    fn test_get_by_slug_returns_first_duplicate() {
        let mut places = catalog();
        places.push(place(99, "ram-temple", "Duplicate", "Temple", 1.0));

        let found = PlaceService::get_by_slug(places, "ram-temple").unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn test_categories_distinct_and_sorted() {
        let categories = PlaceService::get_categories(&catalog());
        assert_eq!(categories, vec!["Ghat", "Heritage", "Museum", "Temple"]);
        assert!(PlaceService::get_categories(&[]).is_empty());
    }

    #[test]
    fn test_get_by_category_ignores_case() {
        let temples = PlaceService::get_by_category(catalog(), "tEmPlE").unwrap();
        let ids: Vec<i64> = temples.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 6]);
    }

    #[test]
    fn test_get_by_category_requires_exact_match() {
        assert!(PlaceService::get_by_category(catalog(), "Temples").is_err());
        assert!(PlaceService::get_by_category(catalog(), "Gh").is_err());
        assert!(PlaceService::get_by_category(Vec::new(), "Temple").is_err());
    }

    #[test]
    fn test_search_matches_any_text_field() {
        let by_name = PlaceService::search(catalog(), "BHAWAN", None);
        assert_eq!(by_name.len(), 2);

        let by_location = PlaceService::search(catalog(), "uttar pradesh", None);
        assert_eq!(by_location.len(), 7);

        let by_category = PlaceService::search(catalog(), "museum", None);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].slug, "tulsi-smarak");

        assert!(PlaceService::search(catalog(), "fort", None).is_empty());
    }

    #[test]
    fn test_search_with_category_restriction() {
        let results = PlaceService::search(catalog(), "ram", Some("ghat"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "ram-ki-paidi");

        assert!(PlaceService::search(catalog(), "ram", Some("Museum")).is_empty());
    }

    #[test]
    fn test_empty_category_does_not_filter() {
        let unfiltered = PlaceService::search(catalog(), "ram", None);
        let empty_category = PlaceService::search(catalog(), "ram", Some(""));

        assert_eq!(unfiltered.len(), 2);
        assert_eq!(empty_category, unfiltered);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(PlaceService::search(catalog(), "", None).len(), 7);
        assert_eq!(PlaceService::search(catalog(), "", Some("Temple")).len(), 3);
    }

    #[test]
    fn test_featured_sorted_descending() {
        let featured = PlaceService::get_featured(catalog(), 5);
        assert_eq!(featured.len(), 5);
        assert!(featured.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert_eq!(featured[0].slug, "ram-temple");
    }

    #[test]
    fn test_featured_ties_keep_catalog_order() {
        let featured = PlaceService::get_featured(catalog(), 4);
        let slugs: Vec<&str> = featured.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["ram-temple", "hanuman-garhi", "ram-ki-paidi", "kanak-bhawan"]
        );
    }

    #[test]
    fn test_featured_small_catalog_returns_all() {
        assert_eq!(PlaceService::get_featured(two_place_catalog(), 5).len(), 2);
        assert!(PlaceService::get_featured(Vec::new(), 5).is_empty());
    }

    #[test]
    fn test_featured_nan_rating_goes_last() {
        let mut places = two_place_catalog();
        places.insert(0, place(3, "unrated", "Unrated", "Temple", f64::NAN));

        let featured = PlaceService::get_featured(places, 3);
        assert_eq!(featured[2].slug, "unrated");
    }

    #[test]
    fn test_two_place_scenario() {
        let temple = PlaceService::get_by_category(two_place_catalog(), "temple").unwrap();
        assert_eq!(temple.len(), 1);
        assert_eq!(temple[0].slug, "ram-temple");

        assert!(PlaceService::get_by_category(two_place_catalog(), "fort").is_err());

        let results = PlaceService::search(two_place_catalog(), "temple", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].slug, "ram-temple");

        let featured = PlaceService::get_featured(two_place_catalog(), 1);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].slug, "ram-temple");
    }
}

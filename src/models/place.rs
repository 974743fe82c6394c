// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines the catalog record and the request/response bodies of place endpoints

use serde::{Deserialize, Serialize};

/// One attraction of the catalog
/// DOCUMENTATION: Maps directly to an object of the places JSON file
/// The same shape is returned by the API, so field names follow the file (camelCase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Numeric identifier, unique within the catalog
    pub id: i64,

    pub name: String,

    /// URL-safe lookup key used by `/api/places/{slug}`
    pub slug: String,

    /// Free-text category: Temple, Cultural, Ghat, ...
    pub category: String,

    pub description: String,

    /// Path or URL of the primary image
    pub image: String,

    /// Only used for ordering; no range is enforced
    pub rating: f64,

    pub location: String,

    /// (latitude, longitude)
    pub coordinates: (f64, f64),

    pub timings: String,

    pub entry_fee: String,

    pub best_time: String,

    #[serde(default)]
    pub history: Option<String>,

    #[serde(default)]
    pub tips: Option<Vec<String>>,

    #[serde(default)]
    pub gallery: Option<Vec<String>>,
}

impl Place {
    /// Case-insensitive exact category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Whether an already lowercased needle occurs in one of the searchable fields
    pub fn matches_text(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.location, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Body of POST /api/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; an empty string matches every place
    pub query: String,

    /// Optional exact category restriction
    #[serde(default)]
    pub category: Option<String>,
}

/// Response of POST /api/search
/// DOCUMENTATION: Echoes the request as it was sent, not normalized
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub category: Option<String>,
    pub results: Vec<Place>,
    pub total: usize,
}

/// Response of GET /api/places/category/{category}
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPlacesResponse {
    pub category: String,
    pub places: Vec<Place>,
    pub total: usize,
}

/// Response of GET /api/categories
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Response of GET /api/places/featured
#[derive(Debug, Serialize, Deserialize)]
pub struct FeaturedResponse {
    pub featured_places: Vec<Place>,
    pub total: usize,
}

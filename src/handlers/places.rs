// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Load the catalog, call the query service, return responses

use crate::config::Config;
use crate::errors::GuideError;
use crate::models::{
    CategoriesResponse, CategoryPlacesResponse, FeaturedResponse, SearchRequest, SearchResponse,
};
use crate::services::{CatalogLoader, PlaceService};
use actix_web::{web, HttpResponse, Responder};

/// GET /api/places
/// List every place in catalog order
pub async fn list_places(loader: web::Data<CatalogLoader>) -> impl Responder {
    let places = PlaceService::get_all(loader.load().await);
    HttpResponse::Ok().json(places)
}

/// GET /api/places/{slug}
pub async fn get_place(
    loader: web::Data<CatalogLoader>,
    path: web::Path<String>,
) -> Result<impl Responder, GuideError> {
    let slug = path.into_inner();
    let place = PlaceService::get_by_slug(loader.load().await, &slug)?;
    Ok(HttpResponse::Ok().json(place))
}

/// GET /api/categories
pub async fn list_categories(loader: web::Data<CatalogLoader>) -> impl Responder {
    let places = loader.load().await;
    HttpResponse::Ok().json(CategoriesResponse {
        categories: PlaceService::get_categories(&places),
    })
}

/// GET /api/places/category/{category}
/// 404 when no place carries the category
pub async fn places_by_category(
    loader: web::Data<CatalogLoader>,
    path: web::Path<String>,
) -> Result<impl Responder, GuideError> {
    let category = path.into_inner();
    let places = PlaceService::get_by_category(loader.load().await, &category)?;

    Ok(HttpResponse::Ok().json(CategoryPlacesResponse {
        total: places.len(),
        category,
        places,
    }))
}

/// GET /api/places/featured
/// Top rated places, `featured_limit` of them at most
pub async fn featured_places(
    loader: web::Data<CatalogLoader>,
    config: web::Data<Config>,
) -> impl Responder {
    let featured = PlaceService::get_featured(loader.load().await, config.featured_limit);

    HttpResponse::Ok().json(FeaturedResponse {
        total: featured.len(),
        featured_places: featured,
    })
}

/// POST /api/search
/// Free-text search with an optional category filter
pub async fn search_places(
    loader: web::Data<CatalogLoader>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    let SearchRequest { query, category } = req.into_inner();
    let results = PlaceService::search(loader.load().await, &query, category.as_deref());

    log::debug!(
        "Search '{}' (category: {:?}) matched {} places",
        query,
        category,
        results.len()
    );

    HttpResponse::Ok().json(SearchResponse {
        query,
        category,
        total: results.len(),
        results,
    })
}

/// Configuration for place routes
/// Fixed segments are registered before `{slug}` so they are not taken for slugs
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/places", web::get().to(list_places))
        .route("/api/places/featured", web::get().to(featured_places))
        .route(
            "/api/places/category/{category}",
            web::get().to(places_by_category),
        )
        .route("/api/places/{slug}", web::get().to(get_place))
        .route("/api/categories", web::get().to(list_categories))
        .route("/api/search", web::post().to(search_places));
}

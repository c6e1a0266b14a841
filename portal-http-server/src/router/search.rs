use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use portal_lib::core::search::{self as search_core, SearchTab};
use portal_lib::error::PortalError;

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub active_tab: Option<String>,
}

/**
 * Faceted search across all seven entity types
 *
 * # Arguments
 * @param query: web::Query<SearchQuery> - The free-text query and optional tab hint
 *
 * # Returns
 * @return HttpResponse - Per-type result lists and the resolved active tab
 */
#[get("/search")]
pub async fn search(query: web::Query<SearchQuery>) -> Result<HttpResponse, PortalError> {
    let results = search_core::run_search(
        query.query.as_deref().unwrap_or(""),
        query.active_tab.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(results))
}

#[derive(Deserialize, Debug)]
pub struct LoadMoreQuery {
    pub query: Option<String>,
    pub offset: Option<u64>,
}

/**
 * Next page of matches for one entity type
 *
 * # Arguments
 * @param path: web::Path<String> - The entity type tab name
 * @param query: web::Query<LoadMoreQuery> - The query and offset
 *
 * # Returns
 * @return HttpResponse - The page slice and total match count
 */
#[get("/search/{entity_type}/more")]
pub async fn load_more(
    path: web::Path<String>,
    query: web::Query<LoadMoreQuery>,
) -> Result<HttpResponse, PortalError> {
    let entity_type = path.into_inner();
    let tab = SearchTab::parse(&entity_type)
        .ok_or_else(|| PortalError::NotFound(format!("Unknown entity type '{}'", entity_type)))?;
    let page = search_core::load_more(
        tab,
        query.query.as_deref().unwrap_or(""),
        query.offset.unwrap_or(0),
    )
    .await?;
    Ok(HttpResponse::Ok().json(page))
}

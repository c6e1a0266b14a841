use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use portal_database::database::lookups::StatusFilter;
use portal_database::models::lookups::LookupExtras;
use portal_lib::core::lookups;
use portal_lib::error::PortalError;

#[derive(Deserialize, Debug)]
pub struct ListQuery {
    pub status: Option<String>,
}

/**
 * List one admin-managed lookup table
 *
 * # Arguments
 * @param path: web::Path<String> - The table slug
 * @param query: web::Query<ListQuery> - Optional status filter (all/active/inactive)
 *
 * # Returns
 * @return HttpResponse - The rows in id order
 */
#[get("/lookups/{slug}")]
pub async fn list(
    path: web::Path<String>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, PortalError> {
    let table = lookups::resolve_table(&path.into_inner())?;
    let filter = StatusFilter::parse(query.status.as_deref().unwrap_or("all"));
    let items = lookups::list(table, filter).await?;
    Ok(HttpResponse::Ok().json(items))
}

#[derive(Deserialize, Debug)]
pub struct AddBody {
    pub name: String,
    pub equipment_type_id: Option<i32>,
}

/**
 * Add an item to a lookup table, reactivating a soft-disabled row with
 * the same name instead of duplicating it
 *
 * # Arguments
 * @param path: web::Path<String> - The table slug
 * @param body: web::Json<AddBody> - The item name plus extra columns for tables that need them
 *
 * # Returns
 * @return HttpResponse - The outcome, a user-facing message, and the affected row
 */
#[post("/lookups/{slug}")]
pub async fn add(
    path: web::Path<String>,
    body: web::Json<AddBody>,
) -> Result<HttpResponse, PortalError> {
    let table = lookups::resolve_table(&path.into_inner())?;
    let extras = LookupExtras {
        equipment_type_id: body.equipment_type_id,
    };
    let response = lookups::add(table, &body.name, &extras).await?;
    Ok(HttpResponse::Ok().json(response))
}

/**
 * Toggle one lookup row between Active and Inactive. Not retry-safe:
 * each call flips again.
 *
 * # Arguments
 * @param path: web::Path<(String, i32)> - The table slug and row id
 *
 * # Returns
 * @return HttpResponse - The new status
 */
#[post("/lookups/{slug}/{item_id}/toggle")]
pub async fn toggle_status(path: web::Path<(String, i32)>) -> Result<HttpResponse, PortalError> {
    let (slug, item_id) = path.into_inner();
    let table = lookups::resolve_table(&slug)?;
    let response = lookups::toggle(table, item_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {

    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_unregistered_slug_is_404_before_any_db_access() {
        let app = test::init_service(App::new().service(list).service(add).service(toggle_status))
            .await;

        let req = test::TestRequest::get()
            .uri("/lookups/no_such_table")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/lookups/no_such_table")
            .set_json(serde_json::json!({ "name": "X" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/lookups/no_such_table/1/toggle")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}

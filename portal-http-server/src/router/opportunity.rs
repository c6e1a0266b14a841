use actix_web::{get, post, put, web, HttpResponse};
use serde::Deserialize;

use portal_database::database::opportunities::{
    create_opportunity, get_opportunities, get_opportunity, update_opportunity_status,
};
use portal_database::models::RecordStatus;
use portal_lib::core::auth::AuthedUser;
use portal_lib::error::PortalError;

#[derive(Deserialize, Debug)]
pub struct ListQuery {
    pub active_only: Option<bool>,
    pub query: Option<String>,
}

/**
 * List opportunity postings, newest first
 *
 * # Arguments
 * @param query: web::Query<ListQuery> - active_only filter plus an optional free-text query
 *
 * # Returns
 * @return HttpResponse - The matching postings
 */
#[get("/opportunities")]
pub async fn all_opportunities(query: web::Query<ListQuery>) -> Result<HttpResponse, PortalError> {
    let postings =
        get_opportunities(query.active_only.unwrap_or(true), query.query.as_deref()).await?;
    Ok(HttpResponse::Ok().json(postings))
}

#[get("/opportunities/{id}")]
pub async fn single(path: web::Path<i32>) -> Result<HttpResponse, PortalError> {
    let id = path.into_inner();
    match get_opportunity(id).await? {
        Some(posting) => Ok(HttpResponse::Ok().json(posting)),
        None => Err(PortalError::NotFound(format!("Opportunity {} not found", id))),
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateBody {
    pub title: String,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/**
 * Create an opportunity posting. Only PIs and Admins may post.
 *
 * # Arguments
 * @param user: AuthedUser - The authenticated caller
 * @param body: web::Json<CreateBody> - The posting fields
 *
 * # Returns
 * @return HttpResponse - The stored posting
 */
#[post("/opportunities")]
pub async fn create(
    user: AuthedUser,
    body: web::Json<CreateBody>,
) -> Result<HttpResponse, PortalError> {
    if !user.0.role.can_post_opportunities() {
        return Err(PortalError::Authorization(
            "Only PIs may post opportunities".to_string(),
        ));
    }
    let title = body.title.trim().to_string();
    if title.is_empty() {
        return Err(PortalError::Validation("Title is required.".to_string()));
    }
    let body = body.into_inner();
    let posting =
        create_opportunity(title, body.domain, body.description, body.keywords, user.0.sub).await?;
    Ok(HttpResponse::Ok().json(posting))
}

#[derive(Deserialize, Debug)]
pub struct StatusBody {
    pub status: RecordStatus,
}

/**
 * Open or close a posting. Allowed for the poster and for Admins.
 *
 * # Arguments
 * @param user: AuthedUser - The authenticated caller
 * @param path: web::Path<i32> - The posting id
 * @param body: web::Json<StatusBody> - The new status
 *
 * # Returns
 * @return HttpResponse - The updated posting
 */
#[put("/opportunities/{id}/status")]
pub async fn update_status(
    user: AuthedUser,
    path: web::Path<i32>,
    body: web::Json<StatusBody>,
) -> Result<HttpResponse, PortalError> {
    let id = path.into_inner();
    let existing = get_opportunity(id)
        .await?
        .ok_or_else(|| PortalError::NotFound(format!("Opportunity {} not found", id)))?;
    if existing.posted_by != user.0.sub && !user.0.role.is_admin() {
        return Err(PortalError::Authorization(
            "Only the poster or an Admin may change this posting".to_string(),
        ));
    }
    let updated = update_opportunity_status(id, body.status).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[cfg(test)]
mod tests {

    use super::*;
    use actix_web::{test, App};
    use portal_database::setup_test_environment;
    use portal_lib::core::auth::{issue_token, Role};
    use serial_test::serial;

    fn bearer(role: Role, user_id: i32) -> String {
        format!("Bearer {}", issue_token(user_id, role).unwrap())
    }

    #[actix_web::test]
    #[serial]
    async fn test_posting_requires_pi_or_admin() {
        setup_test_environment().await;
        let app = test::init_service(App::new().service(create)).await;

        let body = serde_json::json!({ "title": "Field assistant" });

        let req = test::TestRequest::post()
            .uri("/opportunities")
            .insert_header(("Authorization", bearer(Role::Student, 7)))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/opportunities")
            .insert_header(("Authorization", bearer(Role::Pi, 7)))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    #[serial]
    async fn test_status_change_is_owner_or_admin_only() {
        setup_test_environment().await;
        let app =
            test::init_service(App::new().service(create).service(update_status)).await;

        let req = test::TestRequest::post()
            .uri("/opportunities")
            .insert_header(("Authorization", bearer(Role::Pi, 3)))
            .set_json(serde_json::json!({ "title": "Wet lab rotation" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let posted: serde_json::Value = test::read_body_json(resp).await;
        let id = posted["id"].as_i64().unwrap();

        let close = serde_json::json!({ "status": "Inactive" });

        let req = test::TestRequest::put()
            .uri(&format!("/opportunities/{}/status", id))
            .insert_header(("Authorization", bearer(Role::Pi, 4)))
            .set_json(&close)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::FORBIDDEN);

        let req = test::TestRequest::put()
            .uri(&format!("/opportunities/{}/status", id))
            .insert_header(("Authorization", bearer(Role::Admin, 99)))
            .set_json(&close)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let updated: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(updated["status"], "Inactive");
    }

    #[actix_web::test]
    #[serial]
    async fn test_missing_posting_is_404() {
        setup_test_environment().await;
        let app = test::init_service(App::new().service(single)).await;

        let req = test::TestRequest::get()
            .uri("/opportunities/9999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}

use chrono::Utc;
use sea_orm::{entity::*, query::*, DbErr};

use crate::database::search::search_condition;
use crate::get_database_connection;
use crate::models::opportunities::{ActiveModel, Column, Entity as Opportunity, Model as OpportunityModel};
use crate::models::RecordStatus;

/**
 * Get opportunities from the database, newest first
 *
 * # Arguments
 * @param active_only: bool - Whether to return only Active postings
 * @param query: Option<&str> - Optional free-text filter over title, domain, description and keywords
 *
 * # Returns
 * @return Result<Vec<OpportunityModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_opportunities(
    active_only: bool,
    query: Option<&str>,
) -> Result<Vec<OpportunityModel>, DbErr> {
    let conn = get_database_connection().await?;
    let mut select = Opportunity::find().order_by_desc(Column::CreatedAt);
    if active_only {
        select = select.filter(Column::Status.eq(RecordStatus::Active));
    }
    if let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) {
        select = select.filter(search_condition::<Opportunity>(query));
    }
    select.all(&conn).await
}

/**
 * Get one opportunity by id
 *
 * # Arguments
 * @param id: i32 - The opportunity id
 *
 * # Returns
 * @return Result<Option<OpportunityModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_opportunity(id: i32) -> Result<Option<OpportunityModel>, DbErr> {
    let conn = get_database_connection().await?;
    Opportunity::find_by_id(id).one(&conn).await
}

/**
 * Create an opportunity posting
 *
 * # Arguments
 * @param title: String - The posting title
 * @param domain: Option<String> - The research/industry domain
 * @param description: Option<String> - The long description
 * @param keywords: Option<String> - Comma-separated keywords
 * @param posted_by: i32 - The posting user's id
 *
 * # Returns
 * @return Result<OpportunityModel, sea_orm::DbErr> - The result of the operation
 */
pub async fn create_opportunity(
    title: String,
    domain: Option<String>,
    description: Option<String>,
    keywords: Option<String>,
    posted_by: i32,
) -> Result<OpportunityModel, DbErr> {
    let conn = get_database_connection().await?;
    let now = Utc::now();
    let new_opportunity = ActiveModel {
        title: Set(title),
        domain: Set(domain),
        description: Set(description),
        keywords: Set(keywords),
        status: Set(RecordStatus::Active),
        posted_by: Set(posted_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    new_opportunity.insert(&conn).await
}

/**
 * Update the status of an opportunity
 *
 * # Arguments
 * @param id: i32 - The opportunity id
 * @param status: RecordStatus - The new status
 *
 * # Returns
 * @return Result<OpportunityModel, sea_orm::DbErr> - The result of the operation
 */
pub async fn update_opportunity_status(
    id: i32,
    status: RecordStatus,
) -> Result<OpportunityModel, DbErr> {
    let conn = get_database_connection().await?;
    let existing = get_opportunity(id).await?;
    if let Some(opportunity_model) = existing {
        let mut opportunity_active_model = opportunity_model.into_active_model();
        opportunity_active_model.status = Set(status);
        opportunity_active_model.updated_at = Set(Utc::now());
        opportunity_active_model.update(&conn).await
    } else {
        Err(DbErr::Custom("Opportunity not found".to_string()))
    }
}

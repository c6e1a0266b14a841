use serde::Serialize;

use portal_database::database::lookups::{self as lookups_db, AddOutcome, LookupTable, StatusFilter};
use portal_database::models::lookups::{LookupExtras, LookupItem};
use portal_database::models::RecordStatus;

use crate::error::PortalError;

/**
 * Resolve a URL slug against the static table registry
 *
 * # Arguments
 * @param slug: &str - The slug from the admin URL
 *
 * # Returns
 * @return Result<LookupTable, PortalError> - The table, or NotFound for an unregistered slug
 */
pub fn resolve_table(slug: &str) -> Result<LookupTable, PortalError> {
    LookupTable::from_slug(slug)
        .ok_or_else(|| PortalError::NotFound(format!("Unsupported table '{}'", slug)))
}

/**
 * List one lookup table for the admin settings page
 */
pub async fn list(
    table: LookupTable,
    filter: StatusFilter,
) -> Result<Vec<LookupItem>, PortalError> {
    Ok(lookups_db::list_lookup(table, filter).await?)
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub outcome: AddOutcome,
    pub message: String,
    pub item: LookupItem,
}

/**
 * Add a name to a lookup table, translating the outcome into the
 * confirmation or warning message the admin sees
 */
pub async fn add(
    table: LookupTable,
    name: &str,
    extras: &LookupExtras,
) -> Result<AddResponse, PortalError> {
    let result = lookups_db::add_lookup(table, name, extras).await?;
    let message = match result.outcome {
        AddOutcome::Added => format!("'{}' added successfully.", result.item.name),
        AddOutcome::Reactivated => format!("'{}' reactivated successfully.", result.item.name),
        AddOutcome::Duplicate => format!("'{}' already exists.", result.item.name),
    };
    Ok(AddResponse {
        outcome: result.outcome,
        message,
        item: result.item,
    })
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub new_status: RecordStatus,
    pub message: String,
}

/**
 * Flip one row's status and report the new value
 */
pub async fn toggle(table: LookupTable, item_id: i32) -> Result<ToggleResponse, PortalError> {
    let new_status = lookups_db::toggle_lookup_status(table, item_id).await?;
    Ok(ToggleResponse {
        success: true,
        new_status,
        message: "Status updated successfully".to_string(),
    })
}

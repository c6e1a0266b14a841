use std::fmt::Display;

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use serde::Serialize;

use crate::get_database_connection;
use crate::models::lookups::{LookupEntity, LookupExtras, LookupItem};
use crate::models::RecordStatus;

/**
 * Errors the lookup scaffold can surface. Duplicate adds are not an
 * error; they come back as an AddOutcome instead.
 */
#[derive(Debug)]
pub enum LookupError {
    Validation(String),
    NotFound(String),
    Db(DbErr),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Validation(e) => write!(f, "Validation: {}", e),
            LookupError::NotFound(e) => write!(f, "NotFound: {}", e),
            LookupError::Db(e) => write!(f, "Database: {}", e),
        }
    }
}

impl From<DbErr> for LookupError {
    fn from(e: DbErr) -> Self {
        LookupError::Db(e)
    }
}

/**
 * Status filter accepted by the list operation. Anything that is not
 * "active" or "inactive" lists everything.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOutcome {
    Added,
    Reactivated,
    Duplicate,
}

/// What an add request did, plus the row it landed on. Duplicate adds
/// carry the already-active row and mutate nothing.
#[derive(Debug)]
pub struct AddResult {
    pub outcome: AddOutcome,
    pub item: LookupItem,
}

/**
 * The static endpoint-to-table registry. Every admin-managed lookup
 * table is a variant here; a slug that does not resolve through
 * from_slug is rejected before any database access. Adding a table
 * means adding a variant, so an unmapped table is a compile error, not
 * a runtime surprise.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    CurrentDesignations,
    Sectors,
    EquipmentTypes,
    DealingCategories,
    FundingAgencies,
    TeamPositions,
    OpportunityTypes,
    OpportunityDomains,
    CompensationCurrencies,
    CsrFundCategories,
    InterestAreas,
    InstituteOwnerships,
    InstituteTypes,
    AdminSettingDepartments,
    Degrees,
    Publishers,
    SkillTypes,
    ResearchAreas,
    UserTypes,
    AccountStatuses,
    VerificationStatuses,
    ProfileTypes,
    VisibilitySettings,
    Genders,
    ResearchProfiles,
    CurrentStatuses,
    TeamSizes,
    AnnualTurnovers,
    WarrantyStatuses,
    WorkingStatuses,
    ProjectStatuses,
    TeamStatuses,
    OpportunityEligibilities,
    OpportunityStatuses,
    Durations,
    CompensationTypes,
    ApplicationStatuses,
    MessageStatuses,
    NotificationTypes,
    NotificationReadStatuses,
    CsrAvailabilities,
    InstituteAutonomous,
    CurrentlyPursuingOptions,
    CurrentlyWorkingOptions,
    TrlLevels,
    IpStatuses,
    LicensingIntents,
    ProficiencyLevels,
}

impl LookupTable {
    pub const ALL: &'static [LookupTable] = &[
        LookupTable::CurrentDesignations,
        LookupTable::Sectors,
        LookupTable::EquipmentTypes,
        LookupTable::DealingCategories,
        LookupTable::FundingAgencies,
        LookupTable::TeamPositions,
        LookupTable::OpportunityTypes,
        LookupTable::OpportunityDomains,
        LookupTable::CompensationCurrencies,
        LookupTable::CsrFundCategories,
        LookupTable::InterestAreas,
        LookupTable::InstituteOwnerships,
        LookupTable::InstituteTypes,
        LookupTable::AdminSettingDepartments,
        LookupTable::Degrees,
        LookupTable::Publishers,
        LookupTable::SkillTypes,
        LookupTable::ResearchAreas,
        LookupTable::UserTypes,
        LookupTable::AccountStatuses,
        LookupTable::VerificationStatuses,
        LookupTable::ProfileTypes,
        LookupTable::VisibilitySettings,
        LookupTable::Genders,
        LookupTable::ResearchProfiles,
        LookupTable::CurrentStatuses,
        LookupTable::TeamSizes,
        LookupTable::AnnualTurnovers,
        LookupTable::WarrantyStatuses,
        LookupTable::WorkingStatuses,
        LookupTable::ProjectStatuses,
        LookupTable::TeamStatuses,
        LookupTable::OpportunityEligibilities,
        LookupTable::OpportunityStatuses,
        LookupTable::Durations,
        LookupTable::CompensationTypes,
        LookupTable::ApplicationStatuses,
        LookupTable::MessageStatuses,
        LookupTable::NotificationTypes,
        LookupTable::NotificationReadStatuses,
        LookupTable::CsrAvailabilities,
        LookupTable::InstituteAutonomous,
        LookupTable::CurrentlyPursuingOptions,
        LookupTable::CurrentlyWorkingOptions,
        LookupTable::TrlLevels,
        LookupTable::IpStatuses,
        LookupTable::LicensingIntents,
        LookupTable::ProficiencyLevels,
    ];

    /// URL slug and human display name for the admin pages.
    fn meta(&self) -> (&'static str, &'static str) {
        match self {
            LookupTable::CurrentDesignations => ("current_designations", "Current Designations"),
            LookupTable::Sectors => ("sectors", "Sectors"),
            LookupTable::EquipmentTypes => ("equipment_types", "Equipment Types"),
            LookupTable::DealingCategories => ("dealing_categories", "Dealing Categories"),
            LookupTable::FundingAgencies => ("funding_agencies", "Funding Agencies"),
            LookupTable::TeamPositions => ("team_positions", "Team Positions"),
            LookupTable::OpportunityTypes => ("opportunity_types", "Opportunity Types"),
            LookupTable::OpportunityDomains => ("opportunity_domains", "Opportunity Domains"),
            LookupTable::CompensationCurrencies => {
                ("compensation_currencies", "Compensation Currencies")
            }
            LookupTable::CsrFundCategories => ("csr_fund_categories", "CSR Fund Categories"),
            LookupTable::InterestAreas => ("interest_areas", "Interest Areas"),
            LookupTable::InstituteOwnerships => ("institute_ownerships", "Institute Ownerships"),
            LookupTable::InstituteTypes => ("institute_types", "Institute Types"),
            LookupTable::AdminSettingDepartments => ("departments", "Departments"),
            LookupTable::Degrees => ("degrees", "Degrees"),
            LookupTable::Publishers => ("publishers", "Publishers"),
            LookupTable::SkillTypes => ("skill_types", "Skill Types"),
            LookupTable::ResearchAreas => ("research_areas", "Research Areas"),
            LookupTable::UserTypes => ("user_types", "User Types"),
            LookupTable::AccountStatuses => ("account_statuses", "Account Statuses"),
            LookupTable::VerificationStatuses => {
                ("verification_statuses", "Verification Statuses")
            }
            LookupTable::ProfileTypes => ("profile_types", "Profile Types"),
            LookupTable::VisibilitySettings => ("visibility_settings", "Visibility Settings"),
            LookupTable::Genders => ("genders", "Genders"),
            LookupTable::ResearchProfiles => ("research_profiles", "Research Profiles"),
            LookupTable::CurrentStatuses => ("current_statuses", "Current Statuses"),
            LookupTable::TeamSizes => ("team_sizes", "Team Sizes"),
            LookupTable::AnnualTurnovers => ("annual_turnovers", "Annual Turnovers"),
            LookupTable::WarrantyStatuses => ("warranty_statuses", "Warranty Statuses"),
            LookupTable::WorkingStatuses => ("working_statuses", "Working Statuses"),
            LookupTable::ProjectStatuses => ("project_statuses", "Project Statuses"),
            LookupTable::TeamStatuses => ("team_statuses", "Team Statuses"),
            LookupTable::OpportunityEligibilities => {
                ("opportunity_eligibilities", "Opportunity Eligibilities")
            }
            LookupTable::OpportunityStatuses => ("opportunity_statuses", "Opportunity Statuses"),
            LookupTable::Durations => ("durations", "Durations"),
            LookupTable::CompensationTypes => ("compensation_types", "Compensation Types"),
            LookupTable::ApplicationStatuses => ("application_statuses", "Application Statuses"),
            LookupTable::MessageStatuses => ("message_statuses", "Message Statuses"),
            LookupTable::NotificationTypes => ("notification_types", "Notification Types"),
            LookupTable::NotificationReadStatuses => {
                ("notification_read_statuses", "Notification Read Statuses")
            }
            LookupTable::CsrAvailabilities => ("csr_availabilities", "CSR Availabilities"),
            LookupTable::InstituteAutonomous => ("institute_autonomous", "Institute Autonomous"),
            LookupTable::CurrentlyPursuingOptions => {
                ("currently_pursuing_options", "Currently Pursuing Options")
            }
            LookupTable::CurrentlyWorkingOptions => {
                ("currently_working_options", "Currently Working Options")
            }
            LookupTable::TrlLevels => ("trl_levels", "TRL Levels"),
            LookupTable::IpStatuses => ("ip_statuses", "IP Statuses"),
            LookupTable::LicensingIntents => ("licensing_intents", "Licensing Intents"),
            LookupTable::ProficiencyLevels => ("proficiency_levels", "Proficiency Levels"),
        }
    }

    pub fn slug(&self) -> &'static str {
        self.meta().0
    }

    pub fn display_name(&self) -> &'static str {
        self.meta().1
    }

    /**
     * Resolve a URL slug to its table, or None for anything outside the
     * registry.
     */
    pub fn from_slug(slug: &str) -> Option<Self> {
        LookupTable::ALL.iter().copied().find(|t| t.slug() == slug)
    }
}

/// Expands to a match over every registered table, binding the chosen
/// table's entity type to the given identifier inside the body.
macro_rules! with_lookup_entity {
    ($table:expr, $entity:ident => $body:expr) => {
        match $table {
            LookupTable::CurrentDesignations => {
                use crate::models::lookups::current_designations::Entity as $entity;
                $body
            }
            LookupTable::Sectors => {
                use crate::models::lookups::sectors::Entity as $entity;
                $body
            }
            LookupTable::EquipmentTypes => {
                use crate::models::lookups::equipment_types::Entity as $entity;
                $body
            }
            LookupTable::DealingCategories => {
                use crate::models::lookups::dealing_categories::Entity as $entity;
                $body
            }
            LookupTable::FundingAgencies => {
                use crate::models::lookups::funding_agencies::Entity as $entity;
                $body
            }
            LookupTable::TeamPositions => {
                use crate::models::lookups::team_positions::Entity as $entity;
                $body
            }
            LookupTable::OpportunityTypes => {
                use crate::models::lookups::opportunity_types::Entity as $entity;
                $body
            }
            LookupTable::OpportunityDomains => {
                use crate::models::lookups::opportunity_domains::Entity as $entity;
                $body
            }
            LookupTable::CompensationCurrencies => {
                use crate::models::lookups::compensation_currencies::Entity as $entity;
                $body
            }
            LookupTable::CsrFundCategories => {
                use crate::models::lookups::csr_fund_categories::Entity as $entity;
                $body
            }
            LookupTable::InterestAreas => {
                use crate::models::lookups::interest_areas::Entity as $entity;
                $body
            }
            LookupTable::InstituteOwnerships => {
                use crate::models::lookups::institute_ownerships::Entity as $entity;
                $body
            }
            LookupTable::InstituteTypes => {
                use crate::models::lookups::institute_types::Entity as $entity;
                $body
            }
            LookupTable::AdminSettingDepartments => {
                use crate::models::lookups::admin_setting_departments::Entity as $entity;
                $body
            }
            LookupTable::Degrees => {
                use crate::models::lookups::degrees::Entity as $entity;
                $body
            }
            LookupTable::Publishers => {
                use crate::models::lookups::publishers::Entity as $entity;
                $body
            }
            LookupTable::SkillTypes => {
                use crate::models::lookups::skill_types::Entity as $entity;
                $body
            }
            LookupTable::ResearchAreas => {
                use crate::models::lookups::research_areas::Entity as $entity;
                $body
            }
            LookupTable::UserTypes => {
                use crate::models::lookups::user_types::Entity as $entity;
                $body
            }
            LookupTable::AccountStatuses => {
                use crate::models::lookups::account_statuses::Entity as $entity;
                $body
            }
            LookupTable::VerificationStatuses => {
                use crate::models::lookups::verification_statuses::Entity as $entity;
                $body
            }
            LookupTable::ProfileTypes => {
                use crate::models::lookups::profile_types::Entity as $entity;
                $body
            }
            LookupTable::VisibilitySettings => {
                use crate::models::lookups::visibility_settings::Entity as $entity;
                $body
            }
            LookupTable::Genders => {
                use crate::models::lookups::genders::Entity as $entity;
                $body
            }
            LookupTable::ResearchProfiles => {
                use crate::models::lookups::research_profiles::Entity as $entity;
                $body
            }
            LookupTable::CurrentStatuses => {
                use crate::models::lookups::current_statuses::Entity as $entity;
                $body
            }
            LookupTable::TeamSizes => {
                use crate::models::lookups::team_sizes::Entity as $entity;
                $body
            }
            LookupTable::AnnualTurnovers => {
                use crate::models::lookups::annual_turnovers::Entity as $entity;
                $body
            }
            LookupTable::WarrantyStatuses => {
                use crate::models::lookups::warranty_statuses::Entity as $entity;
                $body
            }
            LookupTable::WorkingStatuses => {
                use crate::models::lookups::working_statuses::Entity as $entity;
                $body
            }
            LookupTable::ProjectStatuses => {
                use crate::models::lookups::project_statuses::Entity as $entity;
                $body
            }
            LookupTable::TeamStatuses => {
                use crate::models::lookups::team_statuses::Entity as $entity;
                $body
            }
            LookupTable::OpportunityEligibilities => {
                use crate::models::lookups::opportunity_eligibilities::Entity as $entity;
                $body
            }
            LookupTable::OpportunityStatuses => {
                use crate::models::lookups::opportunity_statuses::Entity as $entity;
                $body
            }
            LookupTable::Durations => {
                use crate::models::lookups::durations::Entity as $entity;
                $body
            }
            LookupTable::CompensationTypes => {
                use crate::models::lookups::compensation_types::Entity as $entity;
                $body
            }
            LookupTable::ApplicationStatuses => {
                use crate::models::lookups::application_statuses::Entity as $entity;
                $body
            }
            LookupTable::MessageStatuses => {
                use crate::models::lookups::message_statuses::Entity as $entity;
                $body
            }
            LookupTable::NotificationTypes => {
                use crate::models::lookups::notification_types::Entity as $entity;
                $body
            }
            LookupTable::NotificationReadStatuses => {
                use crate::models::lookups::notification_read_statuses::Entity as $entity;
                $body
            }
            LookupTable::CsrAvailabilities => {
                use crate::models::lookups::csr_availabilities::Entity as $entity;
                $body
            }
            LookupTable::InstituteAutonomous => {
                use crate::models::lookups::institute_autonomous::Entity as $entity;
                $body
            }
            LookupTable::CurrentlyPursuingOptions => {
                use crate::models::lookups::currently_pursuing_options::Entity as $entity;
                $body
            }
            LookupTable::CurrentlyWorkingOptions => {
                use crate::models::lookups::currently_working_options::Entity as $entity;
                $body
            }
            LookupTable::TrlLevels => {
                use crate::models::lookups::trl_levels::Entity as $entity;
                $body
            }
            LookupTable::IpStatuses => {
                use crate::models::lookups::ip_statuses::Entity as $entity;
                $body
            }
            LookupTable::LicensingIntents => {
                use crate::models::lookups::licensing_intents::Entity as $entity;
                $body
            }
            LookupTable::ProficiencyLevels => {
                use crate::models::lookups::proficiency_levels::Entity as $entity;
                $body
            }
        }
    };
}

/**
 * Case-insensitive name lookup within one table
 */
async fn find_by_name<E>(
    conn: &DatabaseConnection,
    name: &str,
) -> Result<Option<E::Model>, DbErr>
where
    E: LookupEntity,
{
    E::find()
        .filter(Expr::expr(Func::lower(Expr::col(E::name_column()))).eq(name.to_lowercase()))
        .one(conn)
        .await
}

/**
 * List every row of one table, filtered by status if requested, ordered
 * by id ascending. These tables are small and bounded by admin input,
 * so there is no pagination.
 */
async fn list_items<E>(filter: StatusFilter) -> Result<Vec<LookupItem>, LookupError>
where
    E: LookupEntity,
{
    let conn = get_database_connection().await?;
    let mut select = E::find().order_by_asc(E::id_column());
    match filter {
        StatusFilter::Active => {
            select = select.filter(E::status_column().eq(RecordStatus::Active));
        }
        StatusFilter::Inactive => {
            select = select.filter(E::status_column().eq(RecordStatus::Inactive));
        }
        StatusFilter::All => {}
    }
    let rows = select.all(&conn).await?;
    Ok(rows.into_iter().map(E::to_item).collect())
}

/**
 * Insert-or-reactivate for one table. The name is matched case
 * insensitively: an Inactive match is reactivated, an Active match is a
 * duplicate and nothing is written, otherwise a new Active row goes in.
 *
 * Two concurrent adds of the same name can race past the existence
 * check; for an admin-facing tool that is an accepted benign race.
 */
async fn add_item<E>(name: &str, extras: &LookupExtras) -> Result<AddResult, LookupError>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<<E as LookupEntity>::ActiveModel>,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(LookupError::Validation("Name cannot be empty.".to_string()));
    }

    let conn = get_database_connection().await?;
    let now = Utc::now();

    match find_by_name::<E>(&conn, name).await? {
        Some(existing) => {
            if E::status_of(&existing) == RecordStatus::Inactive {
                let item = E::reactivate(existing, extras, now)?;
                let updated = item.update(&conn).await?;
                Ok(AddResult {
                    outcome: AddOutcome::Reactivated,
                    item: E::to_item(updated),
                })
            } else {
                Ok(AddResult {
                    outcome: AddOutcome::Duplicate,
                    item: E::to_item(existing),
                })
            }
        }
        None => {
            let item = E::new_item(name.to_string(), extras, now)?;
            let inserted = item.insert(&conn).await?;
            Ok(AddResult {
                outcome: AddOutcome::Added,
                item: E::to_item(inserted),
            })
        }
    }
}

/**
 * Flip one row's status. Two calls flip twice; callers must not retry
 * blindly.
 */
async fn toggle_item_status<E>(item_id: i32) -> Result<RecordStatus, LookupError>
where
    E: LookupEntity,
    E::Model: IntoActiveModel<<E as LookupEntity>::ActiveModel>,
{
    let conn = get_database_connection().await?;
    let existing = E::find()
        .filter(E::id_column().eq(item_id))
        .one(&conn)
        .await?
        .ok_or_else(|| LookupError::NotFound(format!("Item {} not found", item_id)))?;
    let (item, new_status) = E::flip_status(existing, Utc::now());
    item.update(&conn).await?;
    Ok(new_status)
}

/**
 * List the rows of a registered lookup table
 *
 * # Arguments
 * @param table: LookupTable - The target table
 * @param filter: StatusFilter - all, active or inactive
 *
 * # Returns
 * @return Result<Vec<LookupItem>, LookupError> - The rows in id order
 */
pub async fn list_lookup(
    table: LookupTable,
    filter: StatusFilter,
) -> Result<Vec<LookupItem>, LookupError> {
    with_lookup_entity!(table, E => list_items::<E>(filter).await)
}

/**
 * Add a name to a registered lookup table, reactivating a soft-disabled
 * row of the same name instead of duplicating it
 *
 * # Arguments
 * @param table: LookupTable - The target table
 * @param name: &str - The new item name
 * @param extras: &LookupExtras - Extra columns for tables that need them
 *
 * # Returns
 * @return Result<AddResult, LookupError> - The outcome and the affected row
 */
pub async fn add_lookup(
    table: LookupTable,
    name: &str,
    extras: &LookupExtras,
) -> Result<AddResult, LookupError> {
    with_lookup_entity!(table, E => add_item::<E>(name, extras).await)
}

/**
 * Toggle one row of a registered lookup table between Active and
 * Inactive
 *
 * # Arguments
 * @param table: LookupTable - The target table
 * @param item_id: i32 - The row id
 *
 * # Returns
 * @return Result<RecordStatus, LookupError> - The status after the flip
 */
pub async fn toggle_lookup_status(
    table: LookupTable,
    item_id: i32,
) -> Result<RecordStatus, LookupError> {
    with_lookup_entity!(table, E => toggle_item_status::<E>(item_id).await)
}

/**
 * Create every registered lookup table. Used by the schema setup for
 * tests and local bootstrap.
 */
pub async fn create_lookup_tables(conn: &DatabaseConnection) -> Result<(), DbErr> {
    for table in LookupTable::ALL {
        with_lookup_entity!(*table, E => crate::setup::create_table::<E>(conn).await?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::setup_test_environment;
    use serial_test::serial;

    #[test]
    fn test_every_slug_round_trips() {
        for table in LookupTable::ALL {
            assert_eq!(LookupTable::from_slug(table.slug()), Some(*table));
            assert!(!table.display_name().is_empty());
        }
    }

    #[test]
    fn test_slugs_are_distinct() {
        let mut slugs: Vec<&str> = LookupTable::ALL.iter().map(|t| t.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), LookupTable::ALL.len());
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        assert_eq!(LookupTable::from_slug("no_such_table"), None);
        assert_eq!(LookupTable::from_slug(""), None);
    }

    #[test]
    fn test_status_filter_parse_defaults_to_all() {
        assert_eq!(StatusFilter::parse("active"), StatusFilter::Active);
        assert_eq!(StatusFilter::parse("inactive"), StatusFilter::Inactive);
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }

    #[tokio::test]
    #[serial]
    async fn test_add_then_list() {
        setup_test_environment().await;

        let result = add_lookup(LookupTable::Sectors, "Biotech", &LookupExtras::default())
            .await
            .unwrap();
        assert_eq!(result.outcome, AddOutcome::Added);
        assert_eq!(result.item.name, "Biotech");
        assert_eq!(result.item.status, RecordStatus::Active);

        let all = list_lookup(LookupTable::Sectors, StatusFilter::All)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_active_name_is_rejected() {
        setup_test_environment().await;

        add_lookup(LookupTable::Sectors, "Biotech", &LookupExtras::default())
            .await
            .unwrap();
        let result = add_lookup(LookupTable::Sectors, "biotech", &LookupExtras::default())
            .await
            .unwrap();
        assert_eq!(result.outcome, AddOutcome::Duplicate);

        let all = list_lookup(LookupTable::Sectors, StatusFilter::All)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_inactive_name_is_reactivated_not_duplicated() {
        setup_test_environment().await;

        let added = add_lookup(LookupTable::Sectors, "Biotech", &LookupExtras::default())
            .await
            .unwrap();
        let new_status = toggle_lookup_status(LookupTable::Sectors, added.item.id)
            .await
            .unwrap();
        assert_eq!(new_status, RecordStatus::Inactive);

        let result = add_lookup(LookupTable::Sectors, "BIOTECH", &LookupExtras::default())
            .await
            .unwrap();
        assert_eq!(result.outcome, AddOutcome::Reactivated);
        assert_eq!(result.item.id, added.item.id);
        assert_eq!(result.item.status, RecordStatus::Active);

        let all = list_lookup(LookupTable::Sectors, StatusFilter::All)
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_and_whitespace_names_are_rejected() {
        setup_test_environment().await;

        for bad in ["", "   "] {
            let result = add_lookup(LookupTable::Sectors, bad, &LookupExtras::default()).await;
            assert!(matches!(result, Err(LookupError::Validation(_))));
        }

        let all = list_lookup(LookupTable::Sectors, StatusFilter::All)
            .await
            .unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_toggle_is_a_pure_flip() {
        setup_test_environment().await;

        let added = add_lookup(
            LookupTable::CurrentDesignations,
            "Assistant Professor",
            &LookupExtras::default(),
        )
        .await
        .unwrap();

        let first = toggle_lookup_status(LookupTable::CurrentDesignations, added.item.id)
            .await
            .unwrap();
        assert_eq!(first, RecordStatus::Inactive);

        let second = toggle_lookup_status(LookupTable::CurrentDesignations, added.item.id)
            .await
            .unwrap();
        assert_eq!(second, RecordStatus::Active);

        let all = list_lookup(LookupTable::CurrentDesignations, StatusFilter::All)
            .await
            .unwrap();
        assert_eq!(all[0].name, "Assistant Professor");
        assert_eq!(all[0].status, RecordStatus::Active);
    }

    #[tokio::test]
    #[serial]
    async fn test_toggle_unknown_id_is_not_found() {
        setup_test_environment().await;

        let result = toggle_lookup_status(LookupTable::Sectors, 9999).await;
        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_status_filters() {
        setup_test_environment().await;

        let first = add_lookup(LookupTable::Degrees, "PhD", &LookupExtras::default())
            .await
            .unwrap();
        add_lookup(LookupTable::Degrees, "MSc", &LookupExtras::default())
            .await
            .unwrap();
        toggle_lookup_status(LookupTable::Degrees, first.item.id)
            .await
            .unwrap();

        let active = list_lookup(LookupTable::Degrees, StatusFilter::Active)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "MSc");

        let inactive = list_lookup(LookupTable::Degrees, StatusFilter::Inactive)
            .await
            .unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name, "PhD");

        let all = list_lookup(LookupTable::Degrees, StatusFilter::All)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_dealing_category_requires_equipment_type() {
        setup_test_environment().await;

        let missing = add_lookup(
            LookupTable::DealingCategories,
            "Microscopes",
            &LookupExtras::default(),
        )
        .await;
        assert!(matches!(missing, Err(LookupError::Validation(_))));

        let equipment = add_lookup(
            LookupTable::EquipmentTypes,
            "Imaging",
            &LookupExtras::default(),
        )
        .await
        .unwrap();

        let extras = LookupExtras {
            equipment_type_id: Some(equipment.item.id),
        };
        let added = add_lookup(LookupTable::DealingCategories, "Microscopes", &extras)
            .await
            .unwrap();
        assert_eq!(added.outcome, AddOutcome::Added);
        assert_eq!(added.item.equipment_type_id, Some(equipment.item.id));
    }

    #[tokio::test]
    #[serial]
    async fn test_names_are_stored_trimmed() {
        setup_test_environment().await;

        let result = add_lookup(LookupTable::Sectors, "  Agritech  ", &LookupExtras::default())
            .await
            .unwrap();
        assert_eq!(result.item.name, "Agritech");

        let dup = add_lookup(LookupTable::Sectors, "agritech", &LookupExtras::default())
            .await
            .unwrap();
        assert_eq!(dup.outcome, AddOutcome::Duplicate);
    }
}

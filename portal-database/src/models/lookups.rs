use sea_orm::entity::prelude::*;
use sea_orm::ActiveModelBehavior;
use serde::{Deserialize, Serialize};

use super::RecordStatus;
use crate::database::lookups::LookupError;

/**
 * Extra columns accepted by the generic add operation. Only the
 * dealing_categories table consumes any of these today; every other
 * table ignores them.
 */
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupExtras {
    pub equipment_type_id: Option<i32>,
}

/**
 * Uniform row shape every lookup table renders to at the web boundary,
 * regardless of which concrete table it came from.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupItem {
    pub id: i32,
    pub name: String,
    pub status: RecordStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type_id: Option<i32>,
}

/**
 * Implemented once per admin-managed lookup table. The generic
 * list/add/toggle operations in database::lookups are written against
 * this trait instead of any concrete entity.
 */
pub trait LookupEntity: EntityTrait {
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn status_column() -> Self::Column;
    fn status_of(model: &Self::Model) -> RecordStatus;

    /// Build a fresh Active row. Tables with required extra columns
    /// validate them here.
    fn new_item(
        name: String,
        extras: &LookupExtras,
        now: DateTimeUtc,
    ) -> Result<<Self as LookupEntity>::ActiveModel, LookupError>;

    /// Turn an Inactive row back into an Active one, applying any extra
    /// column updates the add request carried.
    fn reactivate(
        model: Self::Model,
        extras: &LookupExtras,
        now: DateTimeUtc,
    ) -> Result<<Self as LookupEntity>::ActiveModel, LookupError>;

    /// Flip Active<->Inactive, touching only status and updated_at.
    fn flip_status(
        model: Self::Model,
        now: DateTimeUtc,
    ) -> (<Self as LookupEntity>::ActiveModel, RecordStatus);

    fn to_item(model: Self::Model) -> LookupItem;
}

/**
 * Defines one lookup table entity with the common id/name/status/
 * timestamps shape and wires it into the LookupEntity trait.
 */
macro_rules! lookup_table {
    ($module:ident, $table_name:literal) => {
        pub mod $module {
            use sea_orm::entity::prelude::*;
            use sea_orm::{IntoActiveModel, Set};
            use serde::{Deserialize, Serialize};

            use crate::database::lookups::LookupError;
            use crate::models::lookups::{LookupEntity, LookupExtras, LookupItem};
            use crate::models::RecordStatus;

            #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
            #[sea_orm(table_name = $table_name)]
            pub struct Model {
                #[sea_orm(primary_key)]
                pub id: i32,
                pub name: String,
                pub status: RecordStatus,
                pub created_at: DateTimeUtc,
                pub updated_at: DateTimeUtc,
            }

            #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
            pub enum Relation {}

            impl ActiveModelBehavior for ActiveModel {}

            impl LookupEntity for Entity {
                type ActiveModel = ActiveModel;

                fn id_column() -> Column {
                    Column::Id
                }

                fn name_column() -> Column {
                    Column::Name
                }

                fn status_column() -> Column {
                    Column::Status
                }

                fn status_of(model: &Model) -> RecordStatus {
                    model.status
                }

                fn new_item(
                    name: String,
                    _extras: &LookupExtras,
                    now: DateTimeUtc,
                ) -> Result<ActiveModel, LookupError> {
                    Ok(ActiveModel {
                        name: Set(name),
                        status: Set(RecordStatus::Active),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    })
                }

                fn reactivate(
                    model: Model,
                    _extras: &LookupExtras,
                    now: DateTimeUtc,
                ) -> Result<ActiveModel, LookupError> {
                    let mut item = model.into_active_model();
                    item.status = Set(RecordStatus::Active);
                    item.updated_at = Set(now);
                    Ok(item)
                }

                fn flip_status(model: Model, now: DateTimeUtc) -> (ActiveModel, RecordStatus) {
                    let new_status = model.status.flipped();
                    let mut item = model.into_active_model();
                    item.status = Set(new_status);
                    item.updated_at = Set(now);
                    (item, new_status)
                }

                fn to_item(model: Model) -> LookupItem {
                    LookupItem {
                        id: model.id,
                        name: model.name,
                        status: model.status,
                        created_at: model.created_at,
                        updated_at: model.updated_at,
                        equipment_type_id: None,
                    }
                }
            }
        }
    };
}

lookup_table!(current_designations, "current_designations");
lookup_table!(sectors, "sectors");
lookup_table!(equipment_types, "equipment_types");
lookup_table!(funding_agencies, "funding_agencies");
lookup_table!(team_positions, "team_positions");
lookup_table!(opportunity_types, "opportunity_types");
lookup_table!(opportunity_domains, "opportunity_domains");
lookup_table!(compensation_currencies, "compensation_currencies");
lookup_table!(csr_fund_categories, "csr_fund_categories");
lookup_table!(interest_areas, "interest_areas");
lookup_table!(institute_ownerships, "institute_ownerships");
lookup_table!(institute_types, "institute_types");
lookup_table!(admin_setting_departments, "admin_setting_departments");
lookup_table!(degrees, "degrees");
lookup_table!(publishers, "publishers");
lookup_table!(skill_types, "skill_types");
lookup_table!(research_areas, "research_areas");
lookup_table!(user_types, "user_types");
lookup_table!(account_statuses, "account_statuses");
lookup_table!(verification_statuses, "verification_statuses");
lookup_table!(profile_types, "profile_types");
lookup_table!(visibility_settings, "visibility_settings");
lookup_table!(genders, "genders");
lookup_table!(research_profiles, "research_profiles");
lookup_table!(current_statuses, "current_statuses");
lookup_table!(team_sizes, "team_sizes");
lookup_table!(annual_turnovers, "annual_turnovers");
lookup_table!(warranty_statuses, "warranty_statuses");
lookup_table!(working_statuses, "working_statuses");
lookup_table!(project_statuses, "project_statuses");
lookup_table!(team_statuses, "team_statuses");
lookup_table!(opportunity_eligibilities, "opportunity_eligibilities");
lookup_table!(opportunity_statuses, "opportunity_statuses");
lookup_table!(durations, "durations");
lookup_table!(compensation_types, "compensation_types");
lookup_table!(application_statuses, "application_statuses");
lookup_table!(message_statuses, "message_statuses");
lookup_table!(notification_types, "notification_types");
lookup_table!(notification_read_statuses, "notification_read_statuses");
lookup_table!(csr_availabilities, "csr_availabilities");
lookup_table!(institute_autonomous, "institute_autonomous");
lookup_table!(currently_pursuing_options, "currently_pursuing_options");
lookup_table!(currently_working_options, "currently_working_options");
lookup_table!(trl_levels, "trl_levels");
lookup_table!(ip_statuses, "ip_statuses");
lookup_table!(licensing_intents, "licensing_intents");
lookup_table!(proficiency_levels, "proficiency_levels");

/**
 * Dealing categories are the one lookup table with an extra column: a
 * required reference to an equipment type. Written out by hand instead
 * of through the macro so the reference is validated on add.
 */
pub mod dealing_categories {
    use sea_orm::entity::prelude::*;
    use sea_orm::{IntoActiveModel, Set};
    use serde::{Deserialize, Serialize};

    use crate::database::lookups::LookupError;
    use crate::models::lookups::{LookupEntity, LookupExtras, LookupItem};
    use crate::models::RecordStatus;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
    #[sea_orm(table_name = "dealing_categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub status: RecordStatus,
        pub equipment_type_id: Option<i32>,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::equipment_types::Entity",
            from = "Column::EquipmentTypeId",
            to = "super::equipment_types::Column::Id"
        )]
        EquipmentType,
    }

    impl Related<super::equipment_types::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::EquipmentType.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl LookupEntity for Entity {
        type ActiveModel = ActiveModel;

        fn id_column() -> Column {
            Column::Id
        }

        fn name_column() -> Column {
            Column::Name
        }

        fn status_column() -> Column {
            Column::Status
        }

        fn status_of(model: &Model) -> RecordStatus {
            model.status
        }

        fn new_item(
            name: String,
            extras: &LookupExtras,
            now: DateTimeUtc,
        ) -> Result<ActiveModel, LookupError> {
            let equipment_type_id = extras.equipment_type_id.ok_or_else(|| {
                LookupError::Validation("Name and equipment type are required.".to_string())
            })?;
            Ok(ActiveModel {
                name: Set(name),
                status: Set(RecordStatus::Active),
                equipment_type_id: Set(Some(equipment_type_id)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
        }

        fn reactivate(
            model: Model,
            extras: &LookupExtras,
            now: DateTimeUtc,
        ) -> Result<ActiveModel, LookupError> {
            let equipment_type_id = extras.equipment_type_id.ok_or_else(|| {
                LookupError::Validation("Name and equipment type are required.".to_string())
            })?;
            let mut item = model.into_active_model();
            item.status = Set(RecordStatus::Active);
            item.equipment_type_id = Set(Some(equipment_type_id));
            item.updated_at = Set(now);
            Ok(item)
        }

        fn flip_status(model: Model, now: DateTimeUtc) -> (ActiveModel, RecordStatus) {
            let new_status = model.status.flipped();
            let mut item = model.into_active_model();
            item.status = Set(new_status);
            item.updated_at = Set(now);
            (item, new_status)
        }

        fn to_item(model: Model) -> LookupItem {
            LookupItem {
                id: model.id,
                name: model.name,
                status: model.status,
                created_at: model.created_at,
                updated_at: model.updated_at,
                equipment_type_id: model.equipment_type_id,
            }
        }
    }
}

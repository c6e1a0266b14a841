use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::search::{SearchField, Searchable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "research_facilities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pi_profile_id: Option<i32>,
    pub equipment_name: String,
    pub make: Option<String>,
    pub model: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pi_profiles::Entity",
        from = "Column::PiProfileId",
        to = "super::pi_profiles::Column::Id"
    )]
    PiProfile,
}

impl Related<super::pi_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PiProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn search_fields() -> Vec<SearchField<Column>> {
        vec![
            SearchField::text(Column::EquipmentName),
            SearchField::text(Column::Make),
            SearchField::text(Column::Model),
        ]
    }
}

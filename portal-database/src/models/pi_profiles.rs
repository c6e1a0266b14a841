use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::search::{SearchField, Searchable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "pi_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub department: Option<String>,
    pub affiliation: Option<String>,
    pub affiliation_short: Option<String>,
    pub location: Option<String>,
    pub current_designation: Option<String>,
    pub current_focus: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn search_fields() -> Vec<SearchField<Column>> {
        vec![
            // The name field alone matches with all spaces stripped from
            // both the stored value and the query, so "John Doe" and
            // "JohnDoe" are equivalent. This applies to no other field.
            SearchField::squashed(Column::Name),
            SearchField::text(Column::Department),
            SearchField::text(Column::Affiliation),
            SearchField::text(Column::AffiliationShort),
            SearchField::text(Column::Location),
            SearchField::text(Column::CurrentDesignation),
            SearchField::text(Column::CurrentFocus),
        ]
    }
}

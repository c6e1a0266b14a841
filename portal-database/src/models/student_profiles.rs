use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::search::{SearchField, Searchable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub affiliation: Option<String>,
    pub research_interests: Option<String>,
    pub degree_program: Option<String>,
    pub skills: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn search_fields() -> Vec<SearchField<Column>> {
        vec![
            SearchField::text(Column::Name),
            SearchField::text(Column::Affiliation),
            SearchField::text(Column::ResearchInterests),
        ]
    }
}

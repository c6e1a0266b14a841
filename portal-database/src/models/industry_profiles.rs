use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::search::{SearchField, Searchable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "industry_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: Option<String>,
    pub vision: Option<String>,
    pub sector: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn search_fields() -> Vec<SearchField<Column>> {
        vec![
            SearchField::text(Column::CompanyName),
            SearchField::text(Column::Vision),
            SearchField::text(Column::Sector),
        ]
    }
}

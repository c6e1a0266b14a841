use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::search::{SearchField, Searchable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "publications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub authors: String,
    pub keywords: Option<String>,
    pub publication_year: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn search_fields() -> Vec<SearchField<Column>> {
        vec![
            SearchField::text(Column::Title),
            SearchField::text(Column::Authors),
            SearchField::text(Column::Keywords),
        ]
    }
}

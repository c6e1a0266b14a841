use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::RecordStatus;
use crate::database::search::{SearchField, Searchable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "opportunities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub status: RecordStatus,
    pub posted_by: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Searchable for Entity {
    fn search_fields() -> Vec<SearchField<Column>> {
        vec![
            SearchField::text(Column::Title),
            SearchField::text(Column::Domain),
            SearchField::text(Column::Description),
            SearchField::text(Column::Keywords),
        ]
    }
}

pub mod industry_profiles;
pub mod lookups;
pub mod opportunities;
pub mod pi_profiles;
pub mod publications;
pub mod research_facilities;
pub mod student_profiles;
pub mod technologies;
pub mod vendor_profiles;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/**
 * Two-value lifecycle status shared by opportunities and every
 * admin-managed lookup table. Stored as a string column; rows are only
 * ever soft-disabled, never deleted.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
pub enum RecordStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

impl RecordStatus {
    pub fn flipped(self) -> Self {
        match self {
            RecordStatus::Active => RecordStatus::Inactive,
            RecordStatus::Inactive => RecordStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_flip_round_trip() {
        assert_eq!(RecordStatus::Active.flipped(), RecordStatus::Inactive);
        assert_eq!(RecordStatus::Inactive.flipped(), RecordStatus::Active);
        assert_eq!(RecordStatus::Active.flipped().flipped(), RecordStatus::Active);
    }
}

pub mod lookups;
pub mod opportunities;
pub mod search;

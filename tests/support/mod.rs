pub mod builders;
pub mod fixtures;

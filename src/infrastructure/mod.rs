pub mod conversion;
pub mod observability;
pub mod staging;

mod temp_staging_area;

pub use temp_staging_area::{TempStagedFile, TempStagingArea};

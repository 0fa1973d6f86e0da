mod radar_error;
mod store_error;

pub use radar_error::{RadarError, RadarResult};
pub use store_error::StoreError;

pub use crate::point::GeoPoint;
pub use crate::record::ElementRecord;

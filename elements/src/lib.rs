pub mod point;
pub mod prelude;
pub mod record;

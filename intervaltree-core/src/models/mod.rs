pub mod coordinate;
pub mod interval;
pub mod payload;
pub mod query;

// re-export for cleaner imports
pub use self::coordinate::Coordinate;
pub use self::interval::Interval;
pub use self::payload::Payload;
pub use self::query::Query;

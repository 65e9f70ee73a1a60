mod api;
mod course;
mod equipment;
mod error;
pub mod geo;
mod model;
mod plan;
mod units;
pub mod wind;

pub use api::*;
pub use course::*;
pub use equipment::*;
pub use error::*;
pub use geo::GeoPoint;
pub use model::*;
pub use plan::*;
pub use units::*;
pub use wind::{WindComponents, WindVector};

//! Shared test mocks and fixtures for the Celestial Mirror reading engine.

mod clock;
mod fixtures;
mod gateway;
mod location;

pub use clock::FixedClock;
pub use fixtures::valid_report_json;
pub use gateway::{CannedGateway, EmptyGateway, FailingGateway};
pub use location::{FailingLocator, FixedLocator, HangingLocator};

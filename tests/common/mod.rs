//! Common test utilities and helpers
#![allow(dead_code)]

pub mod mock_services;
pub mod test_fixtures;

pub use mock_services::RecordingRunner;
pub use test_fixtures::AppsFixture;

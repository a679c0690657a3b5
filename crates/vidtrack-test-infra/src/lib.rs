//! Fixtures shared by the workspace's tests.

pub mod csv;
pub mod error;
pub mod logs;

pub use csv::CsvFixture;
pub use error::{Result, TestInfraError};
pub use logs::LogCapture;

pub mod alert;
pub mod chat;
pub mod float;
pub mod measurement;
pub mod metrics;
pub mod ocean;
pub mod profile;
pub mod region;
pub mod trend;

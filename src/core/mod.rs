pub mod briefing;
pub mod dashboard;
pub mod query;
pub mod responder;
pub mod state;
pub mod stats;

pub mod alerts;
pub mod chat;
pub mod compare;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod floats;
pub mod init;
pub mod measurements;
pub mod oceans;
pub mod profile;
pub mod prompts;
pub mod regions;
pub mod stats;

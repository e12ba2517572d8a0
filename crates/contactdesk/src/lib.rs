//! Contact Desk - summarizes customer messages and drafts replies with a hosted LLM.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod prompt;
pub mod response;
pub mod server;
pub mod submission;

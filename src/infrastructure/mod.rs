pub mod credentials;
pub mod llm;
pub mod observability;
pub mod persistence;

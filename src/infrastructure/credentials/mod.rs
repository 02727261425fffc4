mod env_credential_provider;
mod static_credential_provider;

pub use env_credential_provider::EnvCredentialProvider;
pub use static_credential_provider::StaticCredentialProvider;

pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

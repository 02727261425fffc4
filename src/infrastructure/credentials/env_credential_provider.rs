use crate::application::ports::CredentialProvider;

/// Reads the API key from the process environment on every lookup, so a
/// changed value is picked up without a restart.
pub struct EnvCredentialProvider {
    variable: String,
}

impl EnvCredentialProvider {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn name(&self) -> &str {
        &self.variable
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.variable)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

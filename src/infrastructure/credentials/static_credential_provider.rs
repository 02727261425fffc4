use crate::application::ports::CredentialProvider;

use super::DEFAULT_API_KEY_ENV;

/// A fixed credential, for tests and scaffold mode.
pub struct StaticCredentialProvider {
    name: String,
    api_key: Option<String>,
}

impl StaticCredentialProvider {
    pub fn configured(api_key: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_API_KEY_ENV.to_string(),
            api_key: Some(api_key.into()),
        }
    }

    pub fn absent() -> Self {
        Self {
            name: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }
}

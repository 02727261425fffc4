/// Source of the model API key, consulted on every extraction.
pub trait CredentialProvider: Send + Sync {
    /// Name the credential is configured under, used in error messages.
    fn name(&self) -> &str;

    fn api_key(&self) -> Option<String>;
}

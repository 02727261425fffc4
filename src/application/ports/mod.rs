mod credential_provider;
mod generative_model;
mod repository_error;
mod request_repository;

pub use credential_provider::CredentialProvider;
pub use generative_model::{
    ContentPart, GenerationConfig, GenerativeModel, GenerativeModelError, ModelContent,
    ModelRequest,
};
pub use repository_error::RepositoryError;
pub use request_repository::RequestRepository;

mod in_memory_request_repository;

pub use in_memory_request_repository::{InMemoryRequestRepository, seed_requests};

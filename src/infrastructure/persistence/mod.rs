mod repositories;

pub use repositories::{InMemoryRequestRepository, seed_requests};

mod store;
mod memory_store;
mod redis_service;
mod repository;
pub mod auth;
pub mod policy;

pub use store::{DocumentStore, connect};
pub use memory_store::MemoryStore;
pub use redis_service::RedisService;
pub use repository::{Document, Repository};
pub use auth::{hash_password, SignedToken, TokenSigner};

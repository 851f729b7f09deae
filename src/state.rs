use std::sync::Arc;
use crate::{
    config::Config,
    services::{DocumentStore, Repository, TokenSigner},
};

// Everything a handler needs, fixed at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub signer: TokenSigner,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, signer: TokenSigner, config: Config) -> Self {
        Self {
            repo: Repository::new(store),
            signer,
            config: Arc::new(config),
        }
    }
}

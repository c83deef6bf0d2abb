//! Shared application state handed to every request handler.

use crate::service::SongService;

/// Router state: the service over the store pool and the provider client.
/// Cloned per handler invocation; all fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: SongService,
}

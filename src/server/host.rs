//! Server host for transport-agnostic API exposure
//!
//! The host owns everything the exposures need: the document store, the
//! registry of entity descriptors and the credential resolver.

use crate::core::auth::CredentialResolver;
use crate::core::store::DocumentStore;
use crate::server::descriptor::register_entities;
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
/// let host = Arc::new(ServerHost::new(store));
/// let app = RestExposure::build_router(host, vec![])?;
/// ```
pub struct ServerHost {
    /// Shared document store
    pub store: Arc<dyn DocumentStore>,

    /// Entity registry for CRUD routes
    pub entity_registry: EntityRegistry,

    /// Resolver behind the login check route
    pub resolver: CredentialResolver,
}

impl ServerHost {
    /// Build a host exposing every registrar entity over `store`
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let mut entity_registry = EntityRegistry::new();
        register_entities(&mut entity_registry, &store);

        Self {
            resolver: CredentialResolver::new(store.clone()),
            entity_registry,
            store,
        }
    }

    /// Get entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}

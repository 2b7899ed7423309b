//! Entity registry for managing entity descriptors and their CRUD routes

use axum::Router;
use std::collections::HashMap;

/// Trait that describes how to build routes for an entity
///
/// Each record type (user, student, faculty, ...) is exposed through a
/// descriptor providing its list / add / update / delete routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name used in routes (e.g., "faculty")
    fn entity_type(&self) -> &str;

    /// The collection backing the entity (e.g., "tbl_Faculty")
    fn collection(&self) -> &str;

    /// Build the CRUD routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET  /api/{entity}/getlist
    /// - POST /api/{entity}/add-{entity}
    /// - POST /api/{entity}/update-{entity}
    /// - POST /api/{entity}/delete-{entity}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities exposed by the server
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is used as the key; registering the same type
    /// twice replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.descriptors.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Get the collection behind an entity type
    pub fn collection_of(&self, entity_type: &str) -> Option<&str> {
        self.descriptors.get(entity_type).map(|d| d.collection())
    }
}

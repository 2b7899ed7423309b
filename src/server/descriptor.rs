//! Generic descriptor exposing any [`Entity`] through the CRUD routes

use super::entity_registry::{EntityDescriptor, EntityRegistry};
use super::handlers;
use crate::core::entity::Entity;
use crate::core::service::EntityService;
use crate::core::store::DocumentStore;
use crate::entities::{Faculty, Major, Student, Teacher, User};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Route descriptor backed by an [`EntityService`]
pub struct CrudDescriptor<E: Entity> {
    service: EntityService<E>,
}

impl<E: Entity> CrudDescriptor<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            service: EntityService::new(store),
        }
    }
}

impl<E: Entity> EntityDescriptor for CrudDescriptor<E> {
    fn entity_type(&self) -> &str {
        E::resource_name()
    }

    fn collection(&self) -> &str {
        E::collection()
    }

    fn build_routes(&self) -> Router {
        let resource = E::resource_name();

        Router::new()
            .route(&format!("/api/{resource}/getlist"), get(handlers::list::<E>))
            .route(
                &format!("/api/{resource}/add-{resource}"),
                post(handlers::add::<E>),
            )
            .route(
                &format!("/api/{resource}/update-{resource}"),
                post(handlers::update::<E>),
            )
            .route(
                &format!("/api/{resource}/delete-{resource}"),
                post(handlers::delete::<E>),
            )
            .with_state(self.service.clone())
    }
}

/// Register the five registrar entities over one store
pub fn register_entities(registry: &mut EntityRegistry, store: &Arc<dyn DocumentStore>) {
    registry.register(Box::new(CrudDescriptor::<User>::new(store.clone())));
    registry.register(Box::new(CrudDescriptor::<Student>::new(store.clone())));
    registry.register(Box::new(CrudDescriptor::<Teacher>::new(store.clone())));
    registry.register(Box::new(CrudDescriptor::<Major>::new(store.clone())));
    registry.register(Box::new(CrudDescriptor::<Faculty>::new(store.clone())));
}

//! # Resource Registry
//!
//! An in-memory side table built at registration time. Each resource route maps to the
//! handlers it answers and the metadata declared on each of them, so one registry serves
//! as both the [`ResourceFactory`] and the [`MetadataReader`].

use crate::error::{ActionError, Result};
use crate::metadata::{ActionMetadata, HandlerMetadata, HandlerRef, MetadataReader, TargetMetadata};
use crate::method::RequestMethod;
use crate::resource::{ResourceFactory, ResourceHandle, ResourceUri};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

/// Declaration of one resource: its route and per-verb handler metadata.
#[derive(Debug, Clone)]
pub struct ResourceDecl {
    route: String,
    handlers: IndexMap<RequestMethod, HandlerMetadata>,
}

impl ResourceDecl {
    /// `route` is `scheme://host/path`; any query part is ignored on lookup.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            handlers: IndexMap::new(),
        }
    }

    pub fn on(mut self, method: RequestMethod, metadata: HandlerMetadata) -> Self {
        self.handlers.insert(method, metadata);
        self
    }

    pub fn route(&self) -> &str {
        &self.route
    }
}

/// Registered resources, keyed by route.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    resources: HashMap<String, ResourceDecl>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource, replacing any previous declaration of the same route.
    pub fn register(&mut self, decl: ResourceDecl) -> Result<()> {
        let route = ResourceUri::parse(&decl.route)
            .map_err(|e| ActionError::InvalidMetadata(e.to_string()))?
            .route();
        debug!(%route, handlers = decl.handlers.len(), "Registered resource");
        self.resources.insert(route, decl);
        Ok(())
    }

    pub fn with(mut self, decl: ResourceDecl) -> Result<Self> {
        self.register(decl)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn handler(&self, handler: &HandlerRef) -> Option<&HandlerMetadata> {
        self.resources
            .get(&handler.route)
            .and_then(|decl| decl.handlers.get(&handler.method))
    }
}

impl ResourceFactory for ResourceRegistry {
    fn new_instance(&self, uri: &str) -> Result<ResourceHandle> {
        let parsed = ResourceUri::parse(uri)?;
        let decl = self
            .resources
            .get(&parsed.route())
            .ok_or_else(|| ActionError::unresolvable(uri, "resource not found"))?;
        let methods: Vec<_> = decl.handlers.keys().copied().collect();
        Ok(ResourceHandle::new(parsed, methods))
    }
}

impl MetadataReader for ResourceRegistry {
    fn declared_actions(&self, handler: &HandlerRef) -> Result<Vec<ActionMetadata>> {
        Ok(self
            .handler(handler)
            .map(|meta| meta.actions.clone())
            .unwrap_or_default())
    }

    fn declared_fields_name_title(&self, handler: &HandlerRef) -> Result<TargetMetadata> {
        self.handler(handler)
            .map(HandlerMetadata::target)
            .ok_or_else(|| ActionError::HandlerNotFound {
                route: handler.route.clone(),
                handler: handler.method.handler_name().to_string(),
            })
    }

    fn declared_parameters(&self, handler: &HandlerRef) -> Result<Vec<String>> {
        Ok(self
            .handler(handler)
            .map(|meta| meta.params.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::FieldMetadata;

    fn registry() -> ResourceRegistry {
        ResourceRegistry::new()
            .with(
                ResourceDecl::new("app://self/child").on(
                    RequestMethod::Get,
                    HandlerMetadata::new()
                        .params(["id"])
                        .name("child-link")
                        .title("Child")
                        .field(FieldMetadata::new("id", "hidden", "{?id}")),
                ),
            )
            .unwrap()
    }

    #[test]
    fn test_new_instance_ignores_query() {
        let handle = registry().new_instance("app://self/child?id=5").unwrap();
        assert_eq!(handle.uri().query(), Some("id=5"));
        assert!(handle.handler(RequestMethod::Get).is_ok());
        assert!(handle.handler(RequestMethod::Post).is_err());
    }

    #[test]
    fn test_new_instance_unknown_route() {
        let err = registry().new_instance("app://self/missing").unwrap_err();
        assert!(matches!(err, ActionError::TargetUnresolvable { .. }));
    }

    #[test]
    fn test_new_instance_malformed_uri() {
        let err = registry().new_instance("not a uri").unwrap_err();
        assert!(err.is_unresolvable());
    }

    #[test]
    fn test_target_metadata() {
        let target = registry()
            .declared_fields_name_title(&HandlerRef::new("app://self/child", RequestMethod::Get))
            .unwrap();
        assert_eq!(target.name.as_deref(), Some("child-link"));
        assert_eq!(target.title.as_deref(), Some("Child"));
        assert_eq!(target.fields.len(), 1);
    }

    #[test]
    fn test_unknown_handler_declares_nothing() {
        let reg = registry();
        let unknown = HandlerRef::new("app://self/child", RequestMethod::Delete);
        assert!(reg.declared_actions(&unknown).unwrap().is_empty());
        assert!(reg.declared_parameters(&unknown).unwrap().is_empty());
        assert!(reg.declared_fields_name_title(&unknown).unwrap_err().is_unresolvable());
    }

    #[test]
    fn test_register_replaces_route() {
        let mut reg = registry();
        reg.register(ResourceDecl::new("app://self/child").on(RequestMethod::Post, HandlerMetadata::new()))
            .unwrap();
        assert_eq!(reg.len(), 1);
        let handle = reg.new_instance("app://self/child").unwrap();
        assert!(handle.handler(RequestMethod::Get).is_err());
        assert!(handle.handler(RequestMethod::Post).is_ok());
    }

    #[test]
    fn test_register_rejects_relative_route() {
        let err = ResourceRegistry::new()
            .register(ResourceDecl::new("/child"))
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidMetadata(_)));
    }
}

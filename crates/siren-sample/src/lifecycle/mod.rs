//! # System Lifecycle & Wiring
//!
//! [`SirenSystem`] is the "dependency injection container" of the sample: it registers
//! every resource's metadata in one [`ResourceRegistry`], hands that registry to the
//! [`ActionInterceptor`] as both metadata reader and resource factory, and routes
//! requests to the matching handler.
//!
//! ```rust,ignore
//! let system = SirenSystem::new()?;
//! let ro = system.request(RequestMethod::Get, "app://self/root", vec![json!("5")]).await?;
//! println!("{}", serde_json::to_string_pretty(&ro.body)?);
//! ```

use crate::error::SampleError;
use crate::resources::{child, root, widget, Child, Root, Widget};
use serde_json::Value;
use siren_actions::{
    ActionError, ActionInterceptor, Invocation, RequestMethod, ResourceHandler, ResourceObject,
    ResourceRegistry, Result,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

type Handler = Arc<dyn ResourceHandler<Error = SampleError>>;

/// The sample resource graph, wired and ready to serve requests.
pub struct SirenSystem {
    interceptor: ActionInterceptor<Arc<ResourceRegistry>, Arc<ResourceRegistry>>,
    handlers: HashMap<String, Handler>,
}

impl SirenSystem {
    /// Registers the sample resources and wires the interceptor.
    pub fn new() -> Result<Self> {
        let registry = ResourceRegistry::new()
            .with(root::decl()?)?
            .with(child::decl())?
            .with(widget::decl())?;
        info!(resources = registry.len(), "Registry ready");

        let registry = Arc::new(registry);
        let mut handlers: HashMap<String, Handler> = HashMap::new();
        handlers.insert(root::ROUTE.to_string(), Arc::new(Root));
        handlers.insert(child::ROUTE.to_string(), Arc::new(Child));
        handlers.insert(widget::ROUTE.to_string(), Arc::new(Widget));

        Ok(Self {
            interceptor: ActionInterceptor::new(registry.clone(), registry),
            handlers,
        })
    }

    /// Sends `method uri` with positional `arguments` through the interceptor.
    pub async fn request(
        &self,
        method: RequestMethod,
        uri: &str,
        arguments: Vec<Value>,
    ) -> Result<ResourceObject> {
        let resource = ResourceObject::at(uri)?;
        let handler = self
            .handlers
            .get(&resource.uri.route())
            .ok_or_else(|| ActionError::unresolvable(uri, "no handler registered"))?;

        self.interceptor
            .invoke(handler.as_ref(), Invocation::new(method, resource, arguments))
            .await
    }
}

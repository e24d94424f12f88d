//! # Action Interceptor
//!
//! The glue between a resource handler call and the [`ActionResolver`].
//!
//! An [`Invocation`] carries the verb, the invoking resource and the positional
//! arguments. [`ActionInterceptor::invoke`]:
//!
//! 1. Pairs the arguments with the handler's declared parameter names.
//! 2. Resolves the handler's declared actions and appends them to the resource body.
//! 3. Proceeds to the handler, which may further modify the body (e.g. embed children),
//!    and returns the resulting resource.
//!
//! ```rust
//! use async_trait::async_trait;
//! use serde_json::json;
//! use siren_actions::{
//!     ActionInterceptor, ActionMetadata, HandlerMetadata, Invocation, NamedParameters,
//!     RequestMethod, ResourceDecl, ResourceHandler, ResourceObject, ResourceRegistry,
//! };
//!
//! struct Root;
//!
//! #[async_trait]
//! impl ResourceHandler for Root {
//!     type Error = std::convert::Infallible;
//!
//!     async fn on_request(
//!         &self,
//!         _method: RequestMethod,
//!         mut resource: ResourceObject,
//!         _params: &NamedParameters,
//!     ) -> Result<ResourceObject, Self::Error> {
//!         resource.set("one", 1);
//!         Ok(resource)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = ResourceRegistry::new()
//!         .with(ResourceDecl::new("app://self/root").on(
//!             RequestMethod::Get,
//!             HandlerMetadata::new()
//!                 .params(["id"])
//!                 .action(ActionMetadata::new("/child{?id}", "get").unwrap()),
//!         ))
//!         .unwrap()
//!         .with(ResourceDecl::new("app://self/child").on(
//!             RequestMethod::Get,
//!             HandlerMetadata::new().name("child-link"),
//!         ))
//!         .unwrap();
//!
//!     let interceptor = ActionInterceptor::new(&registry, &registry);
//!     let invocation = Invocation::new(
//!         RequestMethod::Get,
//!         ResourceObject::at("app://self/root").unwrap(),
//!         vec![json!("5")],
//!     );
//!     let ro = interceptor.invoke(&Root, invocation).await.unwrap();
//!
//!     assert_eq!(ro.body["one"], 1);
//!     assert_eq!(ro.actions().unwrap()[0].href, "/child?id=5");
//! }
//! ```

use crate::error::{ActionError, Result};
use crate::metadata::{HandlerRef, MetadataReader};
use crate::method::RequestMethod;
use crate::params::NamedParameters;
use crate::resolver::ActionResolver;
use crate::resource::{ResourceFactory, ResourceObject};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// A resource's request handlers.
///
/// The handler receives the resource with its actions already attached and returns it,
/// possibly modified.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn on_request(
        &self,
        method: RequestMethod,
        resource: ResourceObject,
        params: &NamedParameters,
    ) -> std::result::Result<ResourceObject, Self::Error>;
}

/// One intercepted handler call.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub method: RequestMethod,
    pub resource: ResourceObject,
    pub arguments: Vec<Value>,
}

impl Invocation {
    pub fn new(method: RequestMethod, resource: ResourceObject, arguments: Vec<Value>) -> Self {
        Self {
            method,
            resource,
            arguments,
        }
    }
}

/// Attaches declared actions to a resource before its handler runs.
#[derive(Debug, Clone)]
pub struct ActionInterceptor<R, F> {
    resolver: ActionResolver<R, F>,
}

impl<R: MetadataReader, F: ResourceFactory> ActionInterceptor<R, F> {
    pub fn new(reader: R, factory: F) -> Self {
        Self {
            resolver: ActionResolver::new(reader, factory),
        }
    }

    pub fn resolver(&self) -> &ActionResolver<R, F> {
        &self.resolver
    }

    /// Pairs `arguments` with the declared parameter names of `invoked`.
    pub fn named_arguments(
        &self,
        invoked: &HandlerRef,
        arguments: Vec<Value>,
    ) -> Result<NamedParameters> {
        let names = self.resolver.reader().declared_parameters(invoked)?;
        Ok(NamedParameters::bind(names, arguments))
    }

    #[instrument(skip_all, fields(uri = %invocation.resource.uri, method = %invocation.method))]
    pub async fn invoke<H: ResourceHandler + ?Sized>(
        &self,
        handler: &H,
        invocation: Invocation,
    ) -> Result<ResourceObject> {
        let Invocation {
            method,
            mut resource,
            arguments,
        } = invocation;
        let invoked = HandlerRef::new(resource.uri.route(), method);

        let params = self.named_arguments(&invoked, arguments)?;
        debug!(count = params.len(), "Named arguments bound");

        self.resolver
            .resolve_and_attach(&invoked, &mut resource, &params)?;
        info!(handler = %invoked, "Proceeding");

        handler
            .on_request(method, resource, &params)
            .await
            .map_err(|e| ActionError::Handler(Box::new(e)))
    }
}

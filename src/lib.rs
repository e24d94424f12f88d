//! # Siren Actions
//!
//! Declarative hypermedia actions for resource responses, in the style of the
//! [Siren](https://github.com/kevinswiber/siren) format.
//!
//! A resource handler declares the actions it offers ([`ActionMetadata`]); each action
//! points at another resource whose handler declares how the action looks to a client
//! (name, title, input fields). When the handler is invoked, the declared actions are
//! resolved and appended to the response body under `siren.actions`:
//!
//! ```json
//! {
//!   "siren": {
//!     "actions": [
//!       {"name": "child-link", "title": "Child", "method": "GET", "href": "/child?id=5",
//!        "fields": [{"name": "id", "type": "hidden", "value": "5"}]}
//!     ]
//!   }
//! }
//! ```
//!
//! ## Module Tour
//!
//! ### 1. Declarations ([`metadata`], [`method`], [`registry`])
//! - **Role**: Describe handlers and the actions they offer as plain data.
//! - **Key items**: [`HandlerMetadata`], [`ResourceRegistry`], [`MetadataReader`].
//!
//! ### 2. The Engine ([`resolver`], [`template`])
//! - **Role**: Resolve each declared action against its target and build the descriptor.
//! - **Key items**: [`ActionResolver`], [`template::expand`],
//!   [`template::substitute_as_query`].
//!
//! ### 3. The Glue ([`interceptor`])
//! - **Role**: Recover named arguments from a handler call, attach actions, then proceed.
//! - **Key items**: [`ActionInterceptor`], [`ResourceHandler`].
//!
//! ### 4. Testing ([`mock`])
//! [`mock::MockFactory`] replaces the resource factory with an expectation queue.
//!
//! ## Error Handling
//!
//! A target that cannot be resolved only drops its own action: the resource still renders
//! with the remaining actions. Malformed declarations abort the call. See [`ActionError`].

pub mod descriptor;
pub mod error;
pub mod interceptor;
pub mod metadata;
pub mod method;
pub mod mock;
pub mod params;
pub mod registry;
pub mod resolver;
pub mod resource;
pub mod template;
pub mod tracing;

pub use descriptor::{ActionDescriptor, FieldDescriptor};
pub use error::{ActionError, Result};
pub use interceptor::{ActionInterceptor, Invocation, ResourceHandler};
pub use metadata::{
    ActionMetadata, FieldMetadata, HandlerMetadata, HandlerRef, MetadataReader, TargetMetadata,
};
pub use method::RequestMethod;
pub use params::NamedParameters;
pub use registry::{ResourceDecl, ResourceRegistry};
pub use resolver::{ActionResolver, Resolution};
pub use resource::{ResourceFactory, ResourceHandle, ResourceObject, ResourceUri};

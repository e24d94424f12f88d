//! # Resources
//!
//! - [`ResourceUri`]: a parsed resource address (`app://self/child?id=5`).
//! - [`ResourceObject`]: the invoking resource whose body receives the actions.
//! - [`ResourceHandle`]: a transient instance of an action target, only kept while its
//!   metadata is read.
//! - [`ResourceFactory`]: turns a URI into a [`ResourceHandle`].

use crate::descriptor::ActionDescriptor;
use crate::error::{ActionError, Result};
use crate::metadata::HandlerRef;
use crate::method::RequestMethod;
use serde_json::{Map, Value};
use std::fmt;
use url::Url;

/// Body key of the hypermedia namespace.
pub const SIREN_KEY: &str = "siren";
/// Key of the action list inside the hypermedia namespace.
pub const ACTIONS_KEY: &str = "actions";

/// A parsed resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUri {
    url: Url,
}

impl ResourceUri {
    /// Parses an absolute resource URI. Malformed input means the target cannot be resolved.
    pub fn parse(uri: &str) -> Result<Self> {
        Url::parse(uri)
            .map(|url| Self { url })
            .map_err(|e| ActionError::unresolvable(uri, e.to_string()))
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// `scheme://host`, the prefix inherited by root-relative action sources.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme(), self.host())
    }

    /// `scheme://host/path`, the key handlers are registered under.
    pub fn route(&self) -> String {
        format!("{}{}", self.origin(), self.path())
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The invoking resource and its response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceObject {
    pub uri: ResourceUri,
    pub body: Map<String, Value>,
}

impl ResourceObject {
    pub fn new(uri: ResourceUri) -> Self {
        Self {
            uri,
            body: Map::new(),
        }
    }

    pub fn at(uri: &str) -> Result<Self> {
        Ok(Self::new(ResourceUri::parse(uri)?))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.body.insert(key.into(), value.into());
    }

    /// Appends a descriptor to `siren.actions`, creating the namespace on first use.
    pub fn attach_action(&mut self, descriptor: &ActionDescriptor) -> Result<()> {
        let value = serde_json::to_value(descriptor)?;

        let siren = self
            .body
            .entry(SIREN_KEY)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| ActionError::BodyShape(format!("`{SIREN_KEY}` is not an object")))?;

        siren
            .entry(ACTIONS_KEY)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| {
                ActionError::BodyShape(format!("`{SIREN_KEY}.{ACTIONS_KEY}` is not an array"))
            })?
            .push(value);
        Ok(())
    }

    /// The attached actions, read back as typed descriptors.
    pub fn actions(&self) -> Result<Vec<ActionDescriptor>> {
        match self.body.get(SIREN_KEY).and_then(|siren| siren.get(ACTIONS_KEY)) {
            Some(actions) => Ok(serde_json::from_value(actions.clone())?),
            None => Ok(Vec::new()),
        }
    }
}

/// A transiently instantiated action target.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    uri: ResourceUri,
    methods: Vec<RequestMethod>,
}

impl ResourceHandle {
    pub fn new(uri: ResourceUri, methods: impl IntoIterator<Item = RequestMethod>) -> Self {
        Self {
            uri,
            methods: methods.into_iter().collect(),
        }
    }

    pub fn uri(&self) -> &ResourceUri {
        &self.uri
    }

    /// The handler answering `method`, if the resource has one.
    pub fn handler(&self, method: RequestMethod) -> Result<HandlerRef> {
        if self.methods.contains(&method) {
            Ok(HandlerRef::new(self.uri.route(), method))
        } else {
            Err(ActionError::HandlerNotFound {
                route: self.uri.route(),
                handler: method.handler_name().to_string(),
            })
        }
    }
}

/// Instantiates resources from URIs.
///
/// Fails with a [`ActionError::TargetUnresolvable`] when the URI does not name a resource.
pub trait ResourceFactory {
    fn new_instance(&self, uri: &str) -> Result<ResourceHandle>;
}

impl<F: ResourceFactory + ?Sized> ResourceFactory for &F {
    fn new_instance(&self, uri: &str) -> Result<ResourceHandle> {
        (**self).new_instance(uri)
    }
}

impl<F: ResourceFactory + ?Sized> ResourceFactory for std::sync::Arc<F> {
    fn new_instance(&self, uri: &str) -> Result<ResourceHandle> {
        (**self).new_instance(uri)
    }
}

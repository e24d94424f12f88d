//! The entry resource. Its `GET` handler offers a link to a child and a widget form.

use crate::error::SampleError;
use async_trait::async_trait;
use serde_json::json;
use siren_actions::{
    ActionMetadata, HandlerMetadata, NamedParameters, RequestMethod, ResourceDecl,
    ResourceHandler, ResourceObject, Result,
};

pub const ROUTE: &str = "app://self/root";

/// Declared metadata of `app://self/root`.
///
/// `/archive` is declared but never registered, so it never shows up in a response.
pub fn decl() -> Result<ResourceDecl> {
    Ok(ResourceDecl::new(ROUTE).on(
        RequestMethod::Get,
        HandlerMetadata::new()
            .params(["id"])
            .action(ActionMetadata::new("/child{?id}", "get")?)
            .action(ActionMetadata::new("/widgets{?id}", "post")?)
            .action(ActionMetadata::new("/archive{?id}", "get")?),
    ))
}

pub struct Root;

#[async_trait]
impl ResourceHandler for Root {
    type Error = SampleError;

    async fn on_request(
        &self,
        method: RequestMethod,
        mut resource: ResourceObject,
        _params: &NamedParameters,
    ) -> std::result::Result<ResourceObject, Self::Error> {
        match method {
            RequestMethod::Get => {
                resource.set("one", 1);
                resource.set("two", json!({"tree": 3}));
                Ok(resource)
            }
            other => Err(SampleError::MethodNotAllowed(other.to_string())),
        }
    }
}

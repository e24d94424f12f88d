//! A child resource addressed by `id`.

use crate::error::SampleError;
use async_trait::async_trait;
use siren_actions::{
    FieldMetadata, HandlerMetadata, NamedParameters, RequestMethod, ResourceDecl,
    ResourceHandler, ResourceObject,
};

pub const ROUTE: &str = "app://self/child";

pub fn decl() -> ResourceDecl {
    ResourceDecl::new(ROUTE).on(
        RequestMethod::Get,
        HandlerMetadata::new()
            .params(["id"])
            .name("child-link")
            .title("Child")
            .field(FieldMetadata::new("id", "hidden", "{?id}")),
    )
}

pub struct Child;

#[async_trait]
impl ResourceHandler for Child {
    type Error = SampleError;

    async fn on_request(
        &self,
        method: RequestMethod,
        mut resource: ResourceObject,
        params: &NamedParameters,
    ) -> Result<ResourceObject, Self::Error> {
        if method != RequestMethod::Get {
            return Err(SampleError::MethodNotAllowed(method.to_string()));
        }
        let id = params
            .get("id")
            .and_then(NamedParameters::text)
            .ok_or_else(|| SampleError::InvalidArgument("id is required".to_string()))?;
        resource.set("id", id.into_owned());
        resource.set("tree", 3);
        Ok(resource)
    }
}

//! Widgets: listed with `GET`, created with `POST`.
//!
//! The `POST` handler is the target of the root's "create widget" action, so it declares
//! the form fields a client has to fill in.

use crate::error::SampleError;
use async_trait::async_trait;
use siren_actions::{
    FieldMetadata, HandlerMetadata, NamedParameters, RequestMethod, ResourceDecl,
    ResourceHandler, ResourceObject,
};
use tracing::info;

pub const ROUTE: &str = "app://self/widgets";

pub fn decl() -> ResourceDecl {
    ResourceDecl::new(ROUTE)
        .on(RequestMethod::Get, HandlerMetadata::new().params(["id"]))
        .on(
            RequestMethod::Post,
            HandlerMetadata::new()
                .params(["id", "qty"])
                .name("create-widget")
                .title("Create Widget")
                .field(FieldMetadata::new("id", "hidden", "{?id}"))
                .field(FieldMetadata::new("qty", "number", "1")),
        )
}

pub struct Widget;

#[async_trait]
impl ResourceHandler for Widget {
    type Error = SampleError;

    async fn on_request(
        &self,
        method: RequestMethod,
        mut resource: ResourceObject,
        params: &NamedParameters,
    ) -> Result<ResourceObject, Self::Error> {
        match method {
            RequestMethod::Get => {
                resource.set("widgets", serde_json::Value::Array(Vec::new()));
                Ok(resource)
            }
            RequestMethod::Post => {
                let qty = params
                    .get("qty")
                    .and_then(serde_json::Value::as_u64)
                    .filter(|qty| *qty > 0)
                    .ok_or_else(|| {
                        SampleError::InvalidArgument("qty must be a positive integer".to_string())
                    })?;
                info!(qty, "Widget created");
                resource.set("qty", qty);
                Ok(resource)
            }
            other => Err(SampleError::MethodNotAllowed(other.to_string())),
        }
    }
}

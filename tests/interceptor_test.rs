use async_trait::async_trait;
use serde_json::{json, Value};
use siren_actions::{
    ActionError, ActionInterceptor, ActionMetadata, FieldMetadata, HandlerMetadata, Invocation,
    NamedParameters, RequestMethod, ResourceDecl, ResourceHandler, ResourceObject,
    ResourceRegistry,
};
use std::sync::Arc;

// --- Test Resources ---

/// Embeds the arguments it received, so tests can see the named parameters.
struct Root;

#[async_trait]
impl ResourceHandler for Root {
    type Error = std::convert::Infallible;

    async fn on_request(
        &self,
        _method: RequestMethod,
        mut resource: ResourceObject,
        params: &NamedParameters,
    ) -> Result<ResourceObject, Self::Error> {
        resource.set("one", 1);
        resource.set("params", serde_json::to_value(params).unwrap_or(Value::Null));
        Ok(resource)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("root exploded")]
struct Exploded;

struct FailingRoot;

#[async_trait]
impl ResourceHandler for FailingRoot {
    type Error = Exploded;

    async fn on_request(
        &self,
        _method: RequestMethod,
        _resource: ResourceObject,
        _params: &NamedParameters,
    ) -> Result<ResourceObject, Self::Error> {
        Err(Exploded)
    }
}

fn registry() -> Arc<ResourceRegistry> {
    let registry = ResourceRegistry::new()
        .with(
            ResourceDecl::new("app://self/root").on(
                RequestMethod::Get,
                HandlerMetadata::new()
                    .params(["id", "qty"])
                    .action(ActionMetadata::new("/child{?id}", "get").unwrap())
                    .action(ActionMetadata::new("/gone", "get").unwrap()),
            ),
        )
        .unwrap()
        .with(
            ResourceDecl::new("app://self/child").on(
                RequestMethod::Get,
                HandlerMetadata::new()
                    .name("child-link")
                    .title("Child")
                    .field(FieldMetadata::new("id", "hidden", "{?id}")),
            ),
        )
        .unwrap();
    Arc::new(registry)
}

fn get_root(arguments: Vec<Value>) -> Invocation {
    Invocation::new(
        RequestMethod::Get,
        ResourceObject::at("app://self/root").unwrap(),
        arguments,
    )
}

// --- Tests ---

#[tokio::test]
async fn test_invoke_attaches_actions_then_proceeds() {
    let registry = registry();
    let interceptor = ActionInterceptor::new(registry.clone(), registry);

    let ro = interceptor
        .invoke(&Root, get_root(vec![json!("5"), json!(2)]))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&ro.body).unwrap(),
        json!({
            "siren": {"actions": [{
                "name": "child-link",
                "title": "Child",
                "method": "GET",
                "href": "/child?id=5",
                "fields": [{"name": "id", "type": "hidden", "value": "5"}]
            }]},
            "one": 1,
            "params": {"id": "5", "qty": 2}
        })
    );
}

#[tokio::test]
async fn test_named_arguments_are_positional() {
    let registry = registry();
    let interceptor = ActionInterceptor::new(registry.clone(), registry);
    let invoked = siren_actions::HandlerRef::new("app://self/root", RequestMethod::Get);

    let params = interceptor
        .named_arguments(&invoked, vec![json!("a")])
        .unwrap();
    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("id", &json!("a")), ("qty", &Value::Null)]);
}

#[tokio::test]
async fn test_missing_argument_drops_placeholder_from_target_uri() {
    let registry = registry();
    let interceptor = ActionInterceptor::new(registry.clone(), registry);

    let ro = interceptor.invoke(&Root, get_root(vec![])).await.unwrap();

    // The target still resolves (the placeholder is dropped), but the literal href
    // substitution renders the missing value as empty.
    let actions = ro.actions().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].href, "/child?id=");
    assert_eq!(actions[0].fields[0].value, "");
}

#[tokio::test]
async fn test_handler_without_metadata_is_passed_through() {
    let registry = registry();
    let interceptor = ActionInterceptor::new(registry.clone(), registry);
    let invocation = Invocation::new(
        RequestMethod::Post,
        ResourceObject::at("app://self/unregistered").unwrap(),
        vec![json!(1)],
    );

    let ro = interceptor.invoke(&Root, invocation).await.unwrap();
    assert!(ro.actions().unwrap().is_empty());
    assert_eq!(ro.body["params"], json!({}));
}

#[tokio::test]
async fn test_handler_error_is_wrapped() {
    let registry = registry();
    let interceptor = ActionInterceptor::new(registry.clone(), registry);

    let err = interceptor
        .invoke(&FailingRoot, get_root(vec![json!("5")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::Handler(_)));
    assert_eq!(err.to_string(), "Handler error: root exploded");
}

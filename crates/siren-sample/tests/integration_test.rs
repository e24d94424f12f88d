use serde_json::json;
use siren_actions::{ActionError, RequestMethod};
use siren_sample::lifecycle::SirenSystem;

/// Full end-to-end test: root request with every declared action resolved or skipped.
#[tokio::test]
async fn test_root_renders_with_actions() {
    let system = SirenSystem::new().expect("Failed to build system");

    let root = system
        .request(RequestMethod::Get, "app://self/root", vec![json!("5")])
        .await
        .expect("Root request failed");

    // Handler output survives next to the actions.
    assert_eq!(root.body["one"], 1);
    assert_eq!(root.body["two"], json!({"tree": 3}));

    // `/archive` is not registered, so only two of the three declared actions remain.
    assert_eq!(
        root.body["siren"]["actions"],
        json!([
            {
                "name": "child-link",
                "title": "Child",
                "method": "GET",
                "href": "/child?id=5",
                "fields": [{"name": "id", "type": "hidden", "value": "5"}]
            },
            {
                "name": "create-widget",
                "title": "Create Widget",
                "method": "POST",
                "href": "/widgets?id=5",
                "fields": [
                    {"name": "id", "type": "hidden", "value": "5"},
                    {"name": "qty", "type": "number", "value": "1"}
                ]
            }
        ])
    );
}

/// Following an action's href reaches the target handler.
#[tokio::test]
async fn test_follow_child_action() {
    let system = SirenSystem::new().unwrap();

    let child = system
        .request(RequestMethod::Get, "app://self/child?id=5", vec![json!("5")])
        .await
        .unwrap();

    assert_eq!(child.body["id"], "5");
    assert_eq!(child.body["tree"], 3);
    assert!(child.actions().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_widget_form() {
    let system = SirenSystem::new().unwrap();

    let created = system
        .request(RequestMethod::Post, "app://self/widgets", vec![json!("5"), json!(4)])
        .await
        .unwrap();
    assert_eq!(created.body["qty"], 4);

    let err = system
        .request(RequestMethod::Post, "app://self/widgets", vec![json!("5")])
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::Handler(_)));
}

#[tokio::test]
async fn test_unknown_resource() {
    let system = SirenSystem::new().unwrap();

    let err = system
        .request(RequestMethod::Get, "app://self/nowhere", vec![])
        .await
        .unwrap_err();
    assert!(err.is_unresolvable());
}

#[tokio::test]
async fn test_repeated_requests_render_identically() {
    let system = SirenSystem::new().unwrap();

    let first = system
        .request(RequestMethod::Get, "app://self/root", vec![json!("9")])
        .await
        .unwrap();
    let second = system
        .request(RequestMethod::Get, "app://self/root", vec![json!("9")])
        .await
        .unwrap();

    assert_eq!(first.actions().unwrap(), second.actions().unwrap());
    assert_eq!(first.actions().unwrap().len(), 2);
}

//! Resolved, ready-to-serialize action descriptors.

use serde::{Deserialize, Serialize};

/// One resolved hypermedia action, as it appears under `siren.actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub method: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_hint: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_parts_are_omitted() {
        let descriptor = ActionDescriptor {
            name: None,
            title: None,
            method: "GET".into(),
            href: "/child".into(),
            fields: vec![],
        };
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"method": "GET", "href": "/child"})
        );
    }

    #[test]
    fn test_key_order() {
        let descriptor = ActionDescriptor {
            name: Some("child-link".into()),
            title: Some("Child".into()),
            method: "GET".into(),
            href: "/child?id=5".into(),
            fields: vec![FieldDescriptor {
                name: "id".into(),
                type_hint: "hidden".into(),
                value: "5".into(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"name":"child-link","title":"Child","method":"GET","href":"/child?id=5","fields":[{"name":"id","type":"hidden","value":"5"}]}"#
        );
    }
}

//! # Handler Metadata
//!
//! Declarative data attached to resource handlers. A handler can play two roles:
//!
//! - **Invoked handler**: it declares [`ActionMetadata`] entries pointing at other
//!   resources, plus the names of its own parameters.
//! - **Action target**: it declares the `Name`, `Title` and [`FieldMetadata`] that end up
//!   in the descriptor of any action pointing at it.
//!
//! Metadata lives in plain data ([`HandlerMetadata`]) registered alongside each handler
//! and is read back through the [`MetadataReader`] trait.

use crate::error::{ActionError, Result};
use crate::method::RequestMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One declared action: where it points and which verb it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawActionMetadata")]
pub struct ActionMetadata {
    pub src: String,
    pub method: RequestMethod,
}

impl ActionMetadata {
    /// Builds an action declaration, rejecting an empty `src` or an unknown verb.
    pub fn new(src: impl Into<String>, method: &str) -> Result<Self> {
        let action = Self::with_method(src, method.parse()?);
        action.validate()?;
        Ok(action)
    }

    /// Unchecked constructor; the resolver still rejects an empty `src`.
    pub fn with_method(src: impl Into<String>, method: RequestMethod) -> Self {
        Self {
            src: src.into(),
            method,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.src.is_empty() {
            return Err(ActionError::InvalidMetadata(
                "action src must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawActionMetadata {
    src: String,
    method: RequestMethod,
}

impl TryFrom<RawActionMetadata> for ActionMetadata {
    type Error = ActionError;

    fn try_from(raw: RawActionMetadata) -> Result<Self> {
        let action = Self::with_method(raw.src, raw.method);
        action.validate()?;
        Ok(action)
    }
}

/// One declared input field of an action target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub type_hint: String,
    pub value: String,
}

impl FieldMetadata {
    pub fn new(
        name: impl Into<String>,
        type_hint: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_hint: type_hint.into(),
            value: value.into(),
        }
    }
}

/// Name/Title/Field metadata read off an action target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetMetadata {
    pub name: Option<String>,
    pub title: Option<String>,
    pub fields: Vec<FieldMetadata>,
}

/// Everything declared on one handler, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerMetadata {
    pub params: Vec<String>,
    pub actions: Vec<ActionMetadata>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub fields: Vec<FieldMetadata>,
}

impl HandlerMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn action(mut self, action: ActionMetadata) -> Self {
        self.actions.push(action);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn field(mut self, field: FieldMetadata) -> Self {
        self.fields.push(field);
        self
    }

    pub fn target(&self) -> TargetMetadata {
        TargetMetadata {
            name: self.name.clone(),
            title: self.title.clone(),
            fields: self.fields.clone(),
        }
    }
}

/// Identity of one handler: the resource route plus the verb it answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef {
    pub route: String,
    pub method: RequestMethod,
}

impl HandlerRef {
    pub fn new(route: impl Into<String>, method: RequestMethod) -> Self {
        Self {
            route: route.into(),
            method,
        }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.route, self.method.handler_name())
    }
}

/// Read access to declared handler metadata.
///
/// Implementations must return entries in declaration order.
pub trait MetadataReader {
    /// Actions declared on `handler`. A handler without metadata declares none.
    fn declared_actions(&self, handler: &HandlerRef) -> Result<Vec<ActionMetadata>>;

    /// Name, title and fields declared on an action target.
    fn declared_fields_name_title(&self, handler: &HandlerRef) -> Result<TargetMetadata>;

    /// Parameter names of `handler`, in signature order.
    fn declared_parameters(&self, handler: &HandlerRef) -> Result<Vec<String>>;
}

impl<R: MetadataReader + ?Sized> MetadataReader for &R {
    fn declared_actions(&self, handler: &HandlerRef) -> Result<Vec<ActionMetadata>> {
        (**self).declared_actions(handler)
    }

    fn declared_fields_name_title(&self, handler: &HandlerRef) -> Result<TargetMetadata> {
        (**self).declared_fields_name_title(handler)
    }

    fn declared_parameters(&self, handler: &HandlerRef) -> Result<Vec<String>> {
        (**self).declared_parameters(handler)
    }
}

impl<R: MetadataReader + ?Sized> MetadataReader for std::sync::Arc<R> {
    fn declared_actions(&self, handler: &HandlerRef) -> Result<Vec<ActionMetadata>> {
        (**self).declared_actions(handler)
    }

    fn declared_fields_name_title(&self, handler: &HandlerRef) -> Result<TargetMetadata> {
        (**self).declared_fields_name_title(handler)
    }

    fn declared_parameters(&self, handler: &HandlerRef) -> Result<Vec<String>> {
        (**self).declared_parameters(handler)
    }
}

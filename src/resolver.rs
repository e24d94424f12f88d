//! # Action Resolver
//!
//! Turns the [`ActionMetadata`] declared on an invoked handler into
//! [`ActionDescriptor`]s and appends them to the invoking resource's body.
//!
//! ## Resolution of one action
//!
//! 1. A root-relative `src` (`/child{?id}`) inherits `scheme://host` from the invoking
//!    resource; anything else is used as-is.
//! 2. The qualified template is expanded against the named parameters. The result only
//!    serves to instantiate the target and is never used as `href`.
//! 3. The target is instantiated through the [`ResourceFactory`] and the handler for the
//!    declared verb is looked up.
//! 4. The target handler's Name/Title/Field metadata fills the descriptor. `href` is the
//!    *original* `src` with `{?key}` replaced by literal `?key=value` text.
//!
//! ## Failure policy
//!
//! A target that cannot be resolved drops that one action and the loop moves on. Every
//! other error aborts the invocation, including a declaration with an empty `src`.

use crate::descriptor::{ActionDescriptor, FieldDescriptor};
use crate::error::Result;
use crate::metadata::{ActionMetadata, HandlerRef, MetadataReader};
use crate::params::NamedParameters;
use crate::resource::{ResourceFactory, ResourceObject, ResourceUri};
use crate::template;
use tracing::debug;

/// Outcome of resolving a single declared action.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(ActionDescriptor),
    Unresolvable,
}

/// Resolves declared actions against injected metadata and resource collaborators.
#[derive(Debug, Clone)]
pub struct ActionResolver<R, F> {
    reader: R,
    factory: F,
}

impl<R: MetadataReader, F: ResourceFactory> ActionResolver<R, F> {
    pub fn new(reader: R, factory: F) -> Self {
        Self { reader, factory }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Resolves every action declared on `invoked` and appends the descriptors to
    /// `resource`'s `siren.actions`, in declaration order.
    pub fn resolve_and_attach(
        &self,
        invoked: &HandlerRef,
        resource: &mut ResourceObject,
        params: &NamedParameters,
    ) -> Result<()> {
        for descriptor in self.resolve(invoked, &resource.uri, params)? {
            resource.attach_action(&descriptor)?;
        }
        Ok(())
    }

    /// Resolves every action declared on `invoked` without touching any body.
    pub fn resolve(
        &self,
        invoked: &HandlerRef,
        origin: &ResourceUri,
        params: &NamedParameters,
    ) -> Result<Vec<ActionDescriptor>> {
        let declared = self.reader.declared_actions(invoked)?;
        let mut descriptors = Vec::with_capacity(declared.len());

        for action in &declared {
            match self.resolve_action(action, origin, params)? {
                Resolution::Resolved(descriptor) => descriptors.push(descriptor),
                Resolution::Unresolvable => continue,
            }
        }

        debug!(
            handler = %invoked,
            declared = declared.len(),
            resolved = descriptors.len(),
            "Actions resolved"
        );
        Ok(descriptors)
    }

    /// Resolves one declared action. Unresolvable targets become
    /// [`Resolution::Unresolvable`]; any other failure is returned as an error.
    pub fn resolve_action(
        &self,
        action: &ActionMetadata,
        origin: &ResourceUri,
        params: &NamedParameters,
    ) -> Result<Resolution> {
        match self.build_descriptor(action, origin, params) {
            Ok(descriptor) => Ok(Resolution::Resolved(descriptor)),
            Err(e) if e.is_unresolvable() => Ok(Resolution::Unresolvable),
            Err(e) => Err(e),
        }
    }

    fn build_descriptor(
        &self,
        action: &ActionMetadata,
        origin: &ResourceUri,
        params: &NamedParameters,
    ) -> Result<ActionDescriptor> {
        action.validate()?;
        let qualified = qualify(&action.src, origin);
        let target_uri = template::expand(&qualified, params);
        debug!(src = %action.src, %target_uri, method = %action.method, "Resolving action");

        // Scoped to this block: the target is only needed while its metadata is read.
        let target = {
            let instance = self.factory.new_instance(&target_uri)?;
            let handler = instance.handler(action.method)?;
            self.reader.declared_fields_name_title(&handler)?
        };

        let fields = target
            .fields
            .into_iter()
            .map(|field| FieldDescriptor {
                value: template::substitute_first(&field.value, params),
                name: field.name,
                type_hint: field.type_hint,
            })
            .collect();

        Ok(ActionDescriptor {
            name: target.name,
            title: target.title,
            method: action.method.as_str().to_string(),
            href: template::substitute_as_query(&action.src, params),
            fields,
        })
    }
}

/// Prefixes a root-relative `src` with the invoking resource's `scheme://host`.
pub fn qualify(src: &str, origin: &ResourceUri) -> String {
    if src.starts_with('/') {
        format!("{}{}", origin.origin(), src)
    } else {
        src.to_string()
    }
}

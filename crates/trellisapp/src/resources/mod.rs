//! # Resource Types
//!
//! Concrete resource types are thin declarations over the generic
//! [`Resource`]: a constant [`ResourceSpec`] (fields, key mapping, read-only
//! set, rules, relations) and a typed wrapper with named accessors.
//!
//! Adding a resource type means adding a spec here and listing it in
//! [`ALL`], which seeds the process-wide registry.

use serde_json::Value;

use crate::attributes::ResourceSpec;
use crate::client::Client;
use crate::error::{Result, TrellisError};
use crate::resource::Resource;

/// Declare the typed wrapper for a resource spec.
macro_rules! resource_type {
    ($(#[$meta:meta])* $name:ident, $spec:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(crate::resource::Resource);

        impl crate::resources::ResourceType for $name {
            const SPEC: &'static crate::attributes::ResourceSpec = &$spec;

            fn from_resource(resource: crate::resource::Resource) -> Self {
                Self(resource)
            }

            fn resource(&self) -> &crate::resource::Resource {
                &self.0
            }

            fn resource_mut(&mut self) -> &mut crate::resource::Resource {
                &mut self.0
            }

            fn into_resource(self) -> crate::resource::Resource {
                self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}

pub mod action;
pub mod board;
pub mod card;
pub mod member;
pub mod notification;
pub mod organization;

pub use action::Action;
pub use board::Board;
pub use card::Card;
pub use member::{AvatarSize, Member};
pub use notification::Notification;
pub use organization::Organization;

/// Every built-in resource declaration.
pub static ALL: &[&ResourceSpec] = &[
    &member::MEMBER,
    &board::BOARD,
    &card::CARD,
    &organization::ORGANIZATION,
    &notification::NOTIFICATION,
    &action::ACTION,
];

/// A typed wrapper around a [`Resource`] of one kind.
pub trait ResourceType: Sized {
    const SPEC: &'static ResourceSpec;

    /// Wrap without checking the kind. Use [`ResourceType::try_from_resource`]
    /// for resources of unknown origin.
    fn from_resource(resource: Resource) -> Self;

    fn resource(&self) -> &Resource;

    fn resource_mut(&mut self) -> &mut Resource;

    fn into_resource(self) -> Resource;

    fn try_from_resource(resource: Resource) -> Result<Self> {
        if resource.kind() != Self::SPEC.kind {
            return Err(TrellisError::configuration(format!(
                "expected a {}, got a {}",
                Self::SPEC.kind,
                resource.kind()
            )));
        }
        Ok(Self::from_resource(resource))
    }

    /// Fetch by opaque identifier or natural key.
    fn find<C: Client + ?Sized>(client: &C, id_or_key: &str) -> Result<Self> {
        Resource::find(client, Self::SPEC, id_or_key).map(Self::from_resource)
    }

    fn from_json(payload: &Value) -> Result<Self> {
        Resource::from_json(Self::SPEC, payload).map(Self::from_resource)
    }

    fn id(&self) -> Option<&str> {
        self.resource().id()
    }
}

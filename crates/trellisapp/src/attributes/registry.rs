//! Process-wide registry of resource declarations.
//!
//! Registration happens once, when [`registry()`] is first touched. After
//! that the registry is read-only and shared by every resource instance.

use once_cell::sync::Lazy;

use super::spec::{ResourceKind, ResourceSpec};
use crate::error::{Result, TrellisError};
use crate::resources;

static REGISTRY: Lazy<AttributeRegistry> = Lazy::new(|| {
    let mut registry = AttributeRegistry::new();
    for &spec in resources::ALL {
        if let Err(e) = registry.register(spec) {
            panic!("invalid built-in resource declaration: {e}");
        }
    }
    registry
});

/// The shared registry holding every built-in resource type.
pub fn registry() -> &'static AttributeRegistry {
    &REGISTRY
}

#[derive(Debug, Default)]
pub struct AttributeRegistry {
    specs: Vec<&'static ResourceSpec>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource type. Each kind can be registered once.
    ///
    /// Rejects declarations that repeat an attribute name, or that name an
    /// undeclared attribute as identifier, natural key or update parameter,
    /// or whose relation default filter is not one of its legal filters.
    pub fn register(&mut self, spec: &'static ResourceSpec) -> Result<()> {
        if self.specs.iter().any(|s| s.kind == spec.kind) {
            return Err(TrellisError::configuration(format!(
                "resource type `{}` is already registered",
                spec.kind
            )));
        }

        for (i, attr) in spec.attributes.iter().enumerate() {
            if spec.attributes[..i].iter().any(|a| a.name == attr.name) {
                return Err(TrellisError::configuration(format!(
                    "attribute `{}` is declared twice on `{}`",
                    attr.name, spec.kind
                )));
            }
        }

        let referenced = [spec.identifier, spec.natural_key]
            .into_iter()
            .chain(spec.update_params.iter().map(|p| p.attribute));
        for name in referenced {
            if spec.attribute(name).is_none() {
                return Err(undeclared(spec.kind, name));
            }
        }

        for rel in spec.relations {
            if let Some(default) = rel.default_filter {
                if !rel.filters.contains(&default) {
                    return Err(TrellisError::configuration(format!(
                        "default filter `{default}` of `{}.{}` is not a legal filter",
                        spec.kind, rel.name
                    )));
                }
            }
        }

        self.specs.push(spec);
        Ok(())
    }

    pub fn spec(&self, kind: ResourceKind) -> Result<&'static ResourceSpec> {
        self.specs
            .iter()
            .copied()
            .find(|s| s.kind == kind)
            .ok_or_else(|| {
                TrellisError::configuration(format!("resource type `{kind}` is not registered"))
            })
    }

    pub fn is_read_only(&self, kind: ResourceKind, name: &str) -> Result<bool> {
        let spec = self.spec(kind)?;
        spec.attribute(name)
            .map(|attr| attr.read_only)
            .ok_or_else(|| undeclared(kind, name))
    }

    /// Attribute names of `kind`, in declaration order.
    pub fn all_names(&self, kind: ResourceKind) -> Result<Vec<&'static str>> {
        let spec = self.spec(kind)?;
        Ok(spec.attributes.iter().map(|attr| attr.name).collect())
    }
}

pub(crate) fn undeclared(kind: ResourceKind, name: &str) -> TrellisError {
    TrellisError::configuration(format!("`{name}` is not a declared attribute of `{kind}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttributeSpec, RelationSpec, UpdateParam};

    static DUPLICATE_ATTRS: ResourceSpec = ResourceSpec {
        kind: ResourceKind::Card,
        path: "cards",
        attributes: &[AttributeSpec::text("id"), AttributeSpec::text("id")],
        identifier: "id",
        natural_key: "id",
        update_params: &[],
        relations: &[],
    };

    static BAD_UPDATE_PARAM: ResourceSpec = ResourceSpec {
        kind: ResourceKind::Card,
        path: "cards",
        attributes: &[AttributeSpec::text("id")],
        identifier: "id",
        natural_key: "id",
        update_params: &[UpdateParam::new("name", "name")],
        relations: &[],
    };

    static BAD_DEFAULT_FILTER: ResourceSpec = ResourceSpec {
        kind: ResourceKind::Card,
        path: "cards",
        attributes: &[AttributeSpec::text("id")],
        identifier: "id",
        natural_key: "id",
        update_params: &[],
        relations: &[RelationSpec::filtered(
            "actions",
            ResourceKind::Action,
            &["all"],
            "open",
        )],
    };

    #[test]
    fn builtin_registry_has_every_kind() {
        let reg = registry();
        for kind in [
            ResourceKind::Member,
            ResourceKind::Board,
            ResourceKind::Card,
            ResourceKind::Organization,
            ResourceKind::Notification,
            ResourceKind::Action,
        ] {
            assert_eq!(reg.spec(kind).unwrap().kind, kind);
        }
    }

    #[test]
    fn member_read_only_flags() {
        let reg = registry();
        for name in ["id", "username", "avatar_id", "url"] {
            assert!(reg.is_read_only(ResourceKind::Member, name).unwrap());
        }
        for name in ["full_name", "bio"] {
            assert!(!reg.is_read_only(ResourceKind::Member, name).unwrap());
        }
    }

    #[test]
    fn all_names_keeps_declaration_order() {
        assert_eq!(
            registry().all_names(ResourceKind::Member).unwrap(),
            vec!["id", "username", "full_name", "avatar_id", "bio", "url"]
        );
    }

    #[test]
    fn undeclared_name_is_a_configuration_error() {
        let err = registry()
            .is_read_only(ResourceKind::Member, "email")
            .unwrap_err();
        assert!(matches!(err, TrellisError::Configuration(_)));
    }

    #[test]
    fn registering_a_kind_twice_fails() {
        let mut reg = AttributeRegistry::new();
        reg.register(&crate::resources::member::MEMBER).unwrap();
        let err = reg.register(&crate::resources::member::MEMBER).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn unregistered_kind_is_a_configuration_error() {
        let reg = AttributeRegistry::new();
        assert!(matches!(
            reg.spec(ResourceKind::Board),
            Err(TrellisError::Configuration(_))
        ));
    }

    #[test]
    fn duplicate_attribute_is_rejected() {
        let err = AttributeRegistry::new().register(&DUPLICATE_ATTRS).unwrap_err();
        assert!(err.to_string().contains("declared twice"));
    }

    #[test]
    fn update_param_must_name_a_declared_attribute() {
        let err = AttributeRegistry::new().register(&BAD_UPDATE_PARAM).unwrap_err();
        assert!(err.to_string().contains("`name` is not a declared attribute"));
    }

    #[test]
    fn default_filter_must_be_legal() {
        let err = AttributeRegistry::new()
            .register(&BAD_DEFAULT_FILTER)
            .unwrap_err();
        assert!(err.to_string().contains("not a legal filter"));
    }
}

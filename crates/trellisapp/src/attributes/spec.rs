//! Attribute and resource specifications.
//!
//! This module defines the schema for resources: which attributes they
//! hold, how those map to keys in the service's JSON, which are read-only,
//! and which related collections can be reached from them.

use std::fmt;

use crate::validation::Rule;

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Text,
    Bool,
    Integer,
    Timestamp,
    /// List of strings (e.g., `member_ids`)
    List,
}

/// Every resource type the model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Member,
    Board,
    Card,
    Organization,
    Notification,
    Action,
}

impl ResourceKind {
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Member => "member",
            ResourceKind::Board => "board",
            ResourceKind::Card => "card",
            ResourceKind::Organization => "organization",
            ResourceKind::Notification => "notification",
            ResourceKind::Action => "action",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// Local attribute name (e.g., "full_name")
    pub name: &'static str,

    /// Key in the service's JSON (e.g., "fullName")
    pub remote_key: &'static str,

    pub kind: AttributeKind,

    /// Read-only attributes can only be written by `update_fields`.
    pub read_only: bool,

    /// Validation rules, evaluated in declaration order.
    pub rules: &'static [Rule],
}

impl AttributeSpec {
    /// Create a writable attribute with no rules.
    pub const fn new(name: &'static str, remote_key: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            remote_key,
            kind,
            read_only: false,
            rules: &[],
        }
    }

    /// Text attribute whose remote key equals its local name.
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, name, AttributeKind::Text)
    }

    /// Mark the attribute as read-only.
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Attach validation rules.
    pub const fn rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }
}

/// A request parameter sent by a partial update, and the attribute it reads.
#[derive(Debug, Clone, Copy)]
pub struct UpdateParam {
    pub param: &'static str,
    pub attribute: &'static str,
}

impl UpdateParam {
    pub const fn new(param: &'static str, attribute: &'static str) -> Self {
        Self { param, attribute }
    }
}

/// A related collection reachable from a resource.
///
/// Fetched from `/<owner path>/<owner key>/<name>`.
#[derive(Debug, Clone)]
pub struct RelationSpec {
    pub name: &'static str,
    pub target: ResourceKind,

    /// Legal values for the `filter` option. Empty when the relation takes
    /// no filter.
    pub filters: &'static [&'static str],

    /// Filter applied when the caller gives none.
    pub default_filter: Option<&'static str>,
}

impl RelationSpec {
    /// Relation that takes no filter.
    pub const fn new(name: &'static str, target: ResourceKind) -> Self {
        Self {
            name,
            target,
            filters: &[],
            default_filter: None,
        }
    }

    /// Relation with a set of legal filter values and a default.
    pub const fn filtered(
        name: &'static str,
        target: ResourceKind,
        filters: &'static [&'static str],
        default_filter: &'static str,
    ) -> Self {
        Self {
            name,
            target,
            filters,
            default_filter: Some(default_filter),
        }
    }

    pub fn accepts_filter(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Declaration of one resource type.
///
/// This is static data: concrete resource types define one of these and
/// the generic [`Resource`](crate::resource::Resource) does the rest.
#[derive(Debug)]
pub struct ResourceSpec {
    pub kind: ResourceKind,

    /// Path segment on the service (e.g., "members")
    pub path: &'static str,

    /// Attributes in declaration order.
    pub attributes: &'static [AttributeSpec],

    /// Attribute holding the opaque identifier. Non-empty means persisted.
    pub identifier: &'static str,

    /// Attribute used to address the resource in update and relation
    /// requests (e.g., a member's username).
    pub natural_key: &'static str,

    /// The fixed parameter set a partial update sends.
    pub update_params: &'static [UpdateParam],

    pub relations: &'static [RelationSpec],
}

impl ResourceSpec {
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&'static RelationSpec> {
        self.relations.iter().find(|rel| rel.name == name)
    }

    /// Whether the attribute is sent by a partial update.
    pub fn is_update_param(&self, attribute: &str) -> bool {
        self.update_params
            .iter()
            .any(|param| param.attribute == attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THING_ATTRIBUTES: &[AttributeSpec] = &[
        AttributeSpec::text("id").read_only(),
        AttributeSpec::new("display", "displayName", AttributeKind::Text),
        AttributeSpec::new("closed", "closed", AttributeKind::Bool),
    ];

    static THING: ResourceSpec = ResourceSpec {
        kind: ResourceKind::Board,
        path: "things",
        attributes: THING_ATTRIBUTES,
        identifier: "id",
        natural_key: "id",
        update_params: &[UpdateParam::new("displayName", "display")],
        relations: &[RelationSpec::filtered(
            "cards",
            ResourceKind::Card,
            &["open", "all"],
            "open",
        )],
    };

    #[test]
    fn builder_sets_flags() {
        let spec = AttributeSpec::text("id").read_only();
        assert!(spec.read_only);
        assert_eq!(spec.remote_key, "id");
        assert_eq!(spec.kind, AttributeKind::Text);
        assert!(spec.rules.is_empty());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(THING.attribute("display").unwrap().remote_key, "displayName");
        assert_eq!(THING.attribute("closed").unwrap().kind, AttributeKind::Bool);
        assert!(THING.attribute("nonexistent").is_none());
    }

    #[test]
    fn relation_lookup_and_filters() {
        let rel = THING.relation("cards").unwrap();
        assert!(rel.accepts_filter());
        assert_eq!(rel.default_filter, Some("open"));
        assert!(THING.relation("boards").is_none());
        assert!(!RelationSpec::new("actions", ResourceKind::Action).accepts_filter());
    }

    #[test]
    fn update_params_are_reported() {
        assert!(THING.is_update_param("display"));
        assert!(!THING.is_update_param("closed"));
    }
}

//! Attribute validation.
//!
//! Rules are declared per attribute on the resource spec and evaluated in
//! declaration order. Every violation is collected so callers can report
//! all problems at once.
//!
//! Supported rules:
//! - **Presence**: value must be non-empty after trimming
//! - **Length**: character count (items, for lists) within an inclusive
//!   range; either bound may be omitted. An absent value has length 0.

use std::fmt;

use crate::attributes::AttrValue;
use crate::resource::Resource;

/// A validation rule attached to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Presence,
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
}

impl Rule {
    pub const fn presence() -> Self {
        Rule::Presence
    }

    pub const fn min_length(min: usize) -> Self {
        Rule::Length {
            min: Some(min),
            max: None,
        }
    }

    pub const fn max_length(max: usize) -> Self {
        Rule::Length {
            min: None,
            max: Some(max),
        }
    }

    /// Check a single value against this rule.
    pub fn check(&self, value: &AttrValue) -> Option<ViolationKind> {
        match *self {
            Rule::Presence => value.is_blank().then_some(ViolationKind::Blank),
            Rule::Length { min, max } => {
                // Kinds without a length are outside the rule's reach.
                let actual = value.length()?;
                if let Some(min) = min.filter(|&min| actual < min) {
                    return Some(ViolationKind::TooShort { min, actual });
                }
                if let Some(max) = max.filter(|&max| actual > max) {
                    return Some(ViolationKind::TooLong { max, actual });
                }
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value is missing or whitespace only
    Blank,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
}

/// One failed rule on one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub attribute: &'static str,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn is_presence(&self) -> bool {
        self.kind == ViolationKind::Blank
    }

    pub fn is_length(&self) -> bool {
        matches!(
            self.kind,
            ViolationKind::TooShort { .. } | ViolationKind::TooLong { .. }
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Blank => write!(f, "{} can't be blank", self.attribute),
            ViolationKind::TooShort { min, actual } => write!(
                f,
                "{} is too short (minimum is {}, got {})",
                self.attribute, min, actual
            ),
            ViolationKind::TooLong { max, actual } => write!(
                f,
                "{} is too long (maximum is {}, got {})",
                self.attribute, max, actual
            ),
        }
    }
}

/// Ordered list of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Violations recorded against one attribute.
    pub fn on(&self, attribute: &str) -> impl Iterator<Item = &Violation> + '_ {
        let attribute = attribute.to_string();
        self.0.iter().filter(move |v| v.attribute == attribute)
    }

    fn partition<F: Fn(&Violation) -> bool>(self, keep: F) -> (Violations, Violations) {
        let (kept, rest) = self.0.into_iter().partition(|v| keep(v));
        (Violations(kept), Violations(rest))
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Evaluate every rule of every attribute of `resource`.
pub fn validate(resource: &Resource) -> Violations {
    let mut violations = Vec::new();
    for (attr, value) in resource.attributes() {
        for rule in attr.rules {
            if let Some(kind) = rule.check(value) {
                violations.push(Violation {
                    attribute: attr.name,
                    kind,
                });
            }
        }
    }
    Violations(violations)
}

/// Split the result of [`validate`] into what `save` enforces and what is
/// advisory.
///
/// Enforced: violations on attributes that carry a presence rule, or that
/// a partial update actually sends. Everything else is never transmitted,
/// so its violations cannot block the update.
pub fn validate_for_save(resource: &Resource) -> (Violations, Violations) {
    let spec = resource.spec();
    validate(resource).partition(|v| {
        let required = spec
            .attribute(v.attribute)
            .is_some_and(|attr| attr.rules.contains(&Rule::Presence));
        required || spec.is_update_param(v.attribute)
    })
}

/// The violations [`Resource::save`](crate::resource::Resource::save)
/// refuses to send.
pub fn validate_enforced(resource: &Resource) -> Violations {
    validate_for_save(resource).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::member::MEMBER;
    use serde_json::json;

    #[test]
    fn presence_rejects_blank_values() {
        assert_eq!(
            Rule::presence().check(&AttrValue::Null),
            Some(ViolationKind::Blank)
        );
        assert_eq!(
            Rule::presence().check(&AttrValue::Text("  \t".into())),
            Some(ViolationKind::Blank)
        );
        assert_eq!(Rule::presence().check(&AttrValue::Text("ada".into())), None);
    }

    #[test]
    fn min_length_boundaries_are_inclusive() {
        let rule = Rule::min_length(4);
        assert_eq!(
            rule.check(&AttrValue::Text("Ada".into())),
            Some(ViolationKind::TooShort { min: 4, actual: 3 })
        );
        assert_eq!(rule.check(&AttrValue::Text("Adah".into())), None);
    }

    #[test]
    fn max_length_boundaries_are_inclusive() {
        let rule = Rule::max_length(5);
        assert_eq!(rule.check(&AttrValue::Text("12345".into())), None);
        assert_eq!(
            rule.check(&AttrValue::Text("123456".into())),
            Some(ViolationKind::TooLong { max: 5, actual: 6 })
        );
    }

    #[test]
    fn absent_value_fails_minimum_but_passes_maximum() {
        assert!(Rule::min_length(4).check(&AttrValue::Null).is_some());
        assert!(Rule::max_length(16384).check(&AttrValue::Null).is_none());
    }

    #[test]
    fn length_ignores_kinds_without_length() {
        assert_eq!(Rule::min_length(4).check(&AttrValue::Bool(true)), None);
    }

    #[test]
    fn violation_display() {
        let blank = Violation {
            attribute: "username",
            kind: ViolationKind::Blank,
        };
        assert_eq!(blank.to_string(), "username can't be blank");

        let short = Violation {
            attribute: "full_name",
            kind: ViolationKind::TooShort { min: 4, actual: 2 },
        };
        assert_eq!(
            short.to_string(),
            "full_name is too short (minimum is 4, got 2)"
        );
        assert!(short.is_length());
        assert!(!short.is_presence());
    }

    #[test]
    fn violations_display_joins_messages() {
        let violations = Violations(vec![
            Violation {
                attribute: "id",
                kind: ViolationKind::Blank,
            },
            Violation {
                attribute: "bio",
                kind: ViolationKind::TooLong { max: 1, actual: 2 },
            },
        ]);
        assert_eq!(
            violations.to_string(),
            "id can't be blank; bio is too long (maximum is 1, got 2)"
        );
        assert_eq!(violations.on("bio").count(), 1);
    }

    #[test]
    fn save_enforces_required_and_transmitted_attributes() {
        let mut member = Resource::from_json(
            &MEMBER,
            &json!({"id": "5f1", "username": "ada", "fullName": "Ada Lovelace"}),
        )
        .unwrap();
        member.set("full_name", "Al").unwrap();
        member.set("bio", "x".repeat(16385)).unwrap();

        let (enforced, advisory) = validate_for_save(&member);
        assert_eq!(enforced.len(), 2);
        assert!(advisory.is_empty());
        assert_eq!(validate_enforced(&member), enforced);
    }

    #[test]
    fn missing_username_is_enforced() {
        let member = Resource::from_json(&MEMBER, &json!({"id": "5f1", "fullName": "Ada Lovelace"}))
            .unwrap();
        let enforced = validate_enforced(&member);
        assert_eq!(enforced.len(), 1);
        assert!(enforced.on("username").all(Violation::is_presence));
    }
}

//! Actions record activity: a card created, a comment added, a board renamed.

use chrono::{DateTime, Utc};

use crate::attributes::{AttributeKind, AttributeSpec, ResourceKind, ResourceSpec};

pub const ACTION: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Action,
    path: "actions",
    attributes: &[
        AttributeSpec::text("id").read_only(),
        AttributeSpec::new("kind", "type", AttributeKind::Text).read_only(),
        AttributeSpec::new("date", "date", AttributeKind::Timestamp).read_only(),
        AttributeSpec::new("member_creator_id", "idMemberCreator", AttributeKind::Text).read_only(),
    ],
    identifier: "id",
    natural_key: "id",
    update_params: &[],
    relations: &[],
};

resource_type!(Action, ACTION);

impl Action {
    /// Action type, e.g. `createCard`.
    pub fn kind(&self) -> Option<&str> {
        self.0.text("kind")
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.0.get("date").ok().and_then(|v| v.as_timestamp())
    }

    pub fn member_creator_id(&self) -> Option<&str> {
        self.0.text("member_creator_id")
    }
}

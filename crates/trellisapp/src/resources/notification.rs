//! Notifications delivered to a member.

use chrono::{DateTime, Utc};

use crate::attributes::{AttributeKind, AttributeSpec, ResourceKind, ResourceSpec};

pub const NOTIFICATION: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Notification,
    path: "notifications",
    attributes: &[
        AttributeSpec::text("id").read_only(),
        AttributeSpec::new("kind", "type", AttributeKind::Text).read_only(),
        AttributeSpec::new("unread", "unread", AttributeKind::Bool),
        AttributeSpec::new("date", "date", AttributeKind::Timestamp).read_only(),
        AttributeSpec::new("member_creator_id", "idMemberCreator", AttributeKind::Text).read_only(),
    ],
    identifier: "id",
    natural_key: "id",
    update_params: &[],
    relations: &[],
};

resource_type!(Notification, NOTIFICATION);

impl Notification {
    /// Notification type, e.g. `addedToCard`.
    pub fn kind(&self) -> Option<&str> {
        self.0.text("kind")
    }

    pub fn is_unread(&self) -> bool {
        self.0
            .get("unread")
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.0.get("date").ok().and_then(|v| v.as_timestamp())
    }

    pub fn member_creator_id(&self) -> Option<&str> {
        self.0.text("member_creator_id")
    }
}

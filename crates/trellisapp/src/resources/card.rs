//! Cards are the items on a board's lists.

use chrono::{DateTime, Utc};

use crate::attributes::{AttributeKind, AttributeSpec, RelationSpec, ResourceKind, ResourceSpec};
use crate::validation::Rule;

use super::member::ACTION_FILTERS;

const REQUIRED: &[Rule] = &[Rule::presence()];
const NAME_RULES: &[Rule] = &[Rule::presence(), Rule::max_length(16384)];

pub const CARD: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Card,
    path: "cards",
    attributes: &[
        AttributeSpec::text("id").read_only().rules(REQUIRED),
        AttributeSpec::new("short_id", "idShort", AttributeKind::Integer).read_only(),
        AttributeSpec::text("name").rules(NAME_RULES),
        AttributeSpec::new("description", "desc", AttributeKind::Text),
        AttributeSpec::new("closed", "closed", AttributeKind::Bool),
        AttributeSpec::text("url").read_only(),
        AttributeSpec::new("board_id", "idBoard", AttributeKind::Text),
        AttributeSpec::new("list_id", "idList", AttributeKind::Text),
        AttributeSpec::new("member_ids", "idMembers", AttributeKind::List),
        AttributeSpec::new("due", "due", AttributeKind::Timestamp),
    ],
    identifier: "id",
    natural_key: "id",
    update_params: &[],
    relations: &[
        RelationSpec::new("members", ResourceKind::Member),
        RelationSpec::filtered("actions", ResourceKind::Action, ACTION_FILTERS, "all"),
    ],
};

resource_type!(Card, CARD);

impl Card {
    pub fn short_id(&self) -> Option<i64> {
        self.0.get("short_id").ok().and_then(|v| v.as_integer())
    }

    pub fn name(&self) -> Option<&str> {
        self.0.text("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.0.text("description")
    }

    pub fn is_closed(&self) -> bool {
        self.0
            .get("closed")
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn url(&self) -> Option<&str> {
        self.0.text("url")
    }

    pub fn board_id(&self) -> Option<&str> {
        self.0.text("board_id")
    }

    pub fn list_id(&self) -> Option<&str> {
        self.0.text("list_id")
    }

    pub fn member_ids(&self) -> &[String] {
        self.0
            .get("member_ids")
            .ok()
            .and_then(|v| v.as_list())
            .unwrap_or_default()
    }

    pub fn due(&self) -> Option<DateTime<Utc>> {
        self.0.get("due").ok().and_then(|v| v.as_timestamp())
    }
}

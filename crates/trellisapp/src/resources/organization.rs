//! Organizations (teams) group members and boards.

use crate::association::{AssociationOptions, AssociationProxy};
use crate::attributes::{AttributeKind, AttributeSpec, RelationSpec, ResourceKind, ResourceSpec};
use crate::client::Client;
use crate::error::Result;
use crate::validation::Rule;

use super::board::MEMBER_FILTERS;
use super::member::BOARD_FILTERS;

const REQUIRED: &[Rule] = &[Rule::presence()];

pub const ORGANIZATION: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Organization,
    path: "organizations",
    attributes: &[
        AttributeSpec::text("id").read_only().rules(REQUIRED),
        AttributeSpec::text("name").read_only().rules(REQUIRED),
        AttributeSpec::new("display_name", "displayName", AttributeKind::Text),
        AttributeSpec::new("description", "desc", AttributeKind::Text),
        AttributeSpec::text("url").read_only(),
    ],
    identifier: "id",
    natural_key: "name",
    update_params: &[],
    relations: &[
        RelationSpec::filtered("boards", ResourceKind::Board, BOARD_FILTERS, "all"),
        RelationSpec::filtered("members", ResourceKind::Member, MEMBER_FILTERS, "all"),
    ],
};

resource_type!(Organization, ORGANIZATION);

impl Organization {
    /// Short unique name used in URLs.
    pub fn name(&self) -> Option<&str> {
        self.0.text("name")
    }

    pub fn display_name(&self) -> Option<&str> {
        self.0.text("display_name")
    }

    pub fn description(&self) -> Option<&str> {
        self.0.text("description")
    }

    pub fn url(&self) -> Option<&str> {
        self.0.text("url")
    }

    pub fn boards<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "boards", options)
    }

    pub fn members<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "members", options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockClient;
    use crate::resources::ResourceType;
    use serde_json::json;

    #[test]
    fn boards_are_addressed_by_name() {
        let client = MockClient::new();
        client.on_get("/organizations/analytical/boards", json!([{"id": "b1", "name": "Engine"}]));
        let mut org = Organization::from_json(&json!({
            "id": "o1",
            "name": "analytical",
            "displayName": "Analytical Society"
        }))
        .unwrap();

        assert_eq!(org.display_name(), Some("Analytical Society"));
        let boards = org.boards(&client, &AssociationOptions::new()).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards.filter(), Some("all"));
    }
}

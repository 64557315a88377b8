//! Boards hold lists of cards.

use crate::association::{AssociationOptions, AssociationProxy};
use crate::attributes::{AttributeKind, AttributeSpec, RelationSpec, ResourceKind, ResourceSpec};
use crate::client::Client;
use crate::error::Result;
use crate::validation::Rule;

use super::member::CARD_FILTERS;

const REQUIRED: &[Rule] = &[Rule::presence()];

pub const MEMBER_FILTERS: &[&str] = &["none", "normal", "admins", "owners", "all"];

pub const BOARD: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Board,
    path: "boards",
    attributes: &[
        AttributeSpec::text("id").read_only().rules(REQUIRED),
        AttributeSpec::text("name").rules(REQUIRED),
        AttributeSpec::new("description", "desc", AttributeKind::Text),
        AttributeSpec::new("closed", "closed", AttributeKind::Bool),
        AttributeSpec::text("url").read_only(),
        AttributeSpec::new("organization_id", "idOrganization", AttributeKind::Text).read_only(),
    ],
    identifier: "id",
    natural_key: "id",
    update_params: &[],
    relations: &[
        RelationSpec::filtered("cards", ResourceKind::Card, CARD_FILTERS, "open"),
        RelationSpec::filtered("members", ResourceKind::Member, MEMBER_FILTERS, "all"),
    ],
};

resource_type!(
    /// A board, as listed under a member or organization.
    Board,
    BOARD
);

impl Board {
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

    pub fn organization_id(&self) -> Option<&str> {
        self.0.text("organization_id")
    }

    /// Cards on the board. Filter default: `open`.
    pub fn cards<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "cards", options)
    }

    /// Members of the board. Filter default: `all`.
    pub fn members<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "members", options)
    }
}

//! A member is a user of the service.

use crate::association::{AssociationOptions, AssociationProxy};
use crate::attributes::{
    AttributeKind, AttributeSpec, RelationSpec, ResourceKind, ResourceSpec, UpdateParam,
};
use crate::client::Client;
use crate::error::Result;
use crate::resource::SaveOutcome;
use crate::validation::Rule;

use super::ResourceType;

const AVATAR_BASE_URL: &str = "https://trello-avatars.s3.amazonaws.com";

pub const BOARD_FILTERS: &[&str] = &[
    "none",
    "members",
    "organization",
    "public",
    "open",
    "closed",
    "all",
];
pub const CARD_FILTERS: &[&str] = &["none", "open", "closed", "all"];
pub const ORGANIZATION_FILTERS: &[&str] = &["none", "members", "public", "all"];
pub const ACTION_FILTERS: &[&str] = &[
    "all",
    "createBoard",
    "updateBoard",
    "createCard",
    "updateCard",
    "commentCard",
    "addMemberToCard",
];

const REQUIRED: &[Rule] = &[Rule::presence()];
const FULL_NAME_RULES: &[Rule] = &[Rule::min_length(4)];
const BIO_RULES: &[Rule] = &[Rule::max_length(16384)];

pub const MEMBER: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Member,
    path: "members",
    attributes: &[
        AttributeSpec::text("id").read_only().rules(REQUIRED),
        AttributeSpec::text("username").read_only().rules(REQUIRED),
        AttributeSpec::new("full_name", "fullName", AttributeKind::Text)
            .rules(FULL_NAME_RULES),
        AttributeSpec::new("avatar_id", "avatarHash", AttributeKind::Text).read_only(),
        AttributeSpec::text("bio").rules(BIO_RULES),
        AttributeSpec::text("url").read_only(),
    ],
    identifier: "id",
    natural_key: "username",
    // The member update endpoint takes these two fields and nothing else.
    update_params: &[
        UpdateParam::new("displayName", "full_name"),
        UpdateParam::new("bio", "bio"),
    ],
    relations: &[
        RelationSpec::filtered("boards", ResourceKind::Board, BOARD_FILTERS, "all"),
        RelationSpec::filtered("cards", ResourceKind::Card, CARD_FILTERS, "open"),
        RelationSpec::filtered(
            "organizations",
            ResourceKind::Organization,
            ORGANIZATION_FILTERS,
            "all",
        ),
        RelationSpec::new("notifications", ResourceKind::Notification),
        RelationSpec::filtered("actions", ResourceKind::Action, ACTION_FILTERS, "all"),
    ],
};

/// Avatar image variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    /// 170x170
    #[default]
    Large,
    /// 30x30
    Small,
}

impl AvatarSize {
    pub fn pixels(self) -> u32 {
        match self {
            AvatarSize::Large => 170,
            AvatarSize::Small => 30,
        }
    }
}

resource_type!(
    /// A user of the service.
    ///
    /// `id`, `username`, `avatar_id` and `url` are read-only. Only
    /// `full_name` and `bio` can be changed and saved back.
    Member,
    MEMBER
);

impl Member {
    pub fn username(&self) -> Option<&str> {
        self.0.text("username")
    }

    pub fn full_name(&self) -> Option<&str> {
        self.0.text("full_name")
    }

    pub fn avatar_id(&self) -> Option<&str> {
        self.0.text("avatar_id")
    }

    pub fn bio(&self) -> Option<&str> {
        self.0.text("bio")
    }

    pub fn url(&self) -> Option<&str> {
        self.0.text("url")
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> Result<()> {
        self.0.set("full_name", full_name.into())
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) -> Result<()> {
        self.0.set("bio", bio.into())
    }

    /// URL of the avatar image. Pure string construction, no request.
    pub fn avatar_url(&self, size: AvatarSize) -> String {
        format!(
            "{}/{}/{}.png",
            AVATAR_BASE_URL,
            self.avatar_id().unwrap_or_default(),
            size.pixels()
        )
    }

    /// Boards the member belongs to. Filter default: `all`.
    pub fn boards<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "boards", options)
    }

    /// Cards the member is assigned to. Filter default: `open`.
    pub fn cards<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "cards", options)
    }

    /// Organizations the member is part of. Filter default: `all`.
    pub fn organizations<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "organizations", options)
    }

    pub fn notifications<C: Client + ?Sized>(&mut self, client: &C) -> Result<&AssociationProxy> {
        self.0
            .association(client, "notifications", &AssociationOptions::default())
    }

    /// Recent activity by the member. Filter default: `all`.
    pub fn actions<C: Client + ?Sized>(
        &mut self,
        client: &C,
        options: &AssociationOptions,
    ) -> Result<&AssociationProxy> {
        self.0.association(client, "actions", options)
    }

    /// Send display name and bio back to the service.
    ///
    /// See [`Resource::save`](crate::resource::Resource::save).
    pub fn save<C: Client + ?Sized>(&mut self, client: &C) -> Result<SaveOutcome> {
        self.resource_mut().save(client)
    }
}

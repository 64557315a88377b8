//! # API Facade
//!
//! A thin facade over the model, and the single entry point the CLI uses.
//! Each method performs one user-facing operation and returns typed
//! resources; rendering is left to the caller.
//!
//! ## Generic Over Client
//!
//! `TrellisApi<C: Client>` is generic over the transport:
//! - Production: `TrellisApi<HttpClient>`
//! - Testing: `TrellisApi<MockClient>`
//!
//! Tests here verify dispatch: the right path, filter and body reach the
//! client. Model behavior is tested in the model modules.

use crate::association::AssociationOptions;
use crate::client::http::HttpClient;
use crate::client::Client;
use crate::config::TrellisConfig;
use crate::error::Result;
use crate::resource::SaveOutcome;
use crate::resources::{
    Action, AvatarSize, Board, Card, Member, Notification, Organization, ResourceType,
};

/// Writable member fields. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberUpdate {
    pub full_name: Option<String>,
    pub bio: Option<String>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.bio.is_none()
    }
}

pub struct TrellisApi<C: Client> {
    client: C,
}

impl TrellisApi<HttpClient> {
    /// Build an API over HTTP from loaded configuration.
    pub fn from_config(config: &TrellisConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::from_config(config)?))
    }
}

impl<C: Client> TrellisApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch a member by id or username (`me` for the token's owner).
    pub fn member(&self, id_or_username: &str) -> Result<Member> {
        Member::find(&self.client, id_or_username)
    }

    pub fn member_boards(&self, id_or_username: &str, filter: Option<&str>) -> Result<Vec<Board>> {
        let mut member = self.member(id_or_username)?;
        let items = member.boards(&self.client, &options(filter))?.typed()?;
        Ok(items)
    }

    pub fn member_cards(&self, id_or_username: &str, filter: Option<&str>) -> Result<Vec<Card>> {
        let mut member = self.member(id_or_username)?;
        let items = member.cards(&self.client, &options(filter))?.typed()?;
        Ok(items)
    }

    pub fn member_organizations(
        &self,
        id_or_username: &str,
        filter: Option<&str>,
    ) -> Result<Vec<Organization>> {
        let mut member = self.member(id_or_username)?;
        let items = member.organizations(&self.client, &options(filter))?.typed()?;
        Ok(items)
    }

    pub fn member_notifications(&self, id_or_username: &str) -> Result<Vec<Notification>> {
        let mut member = self.member(id_or_username)?;
        let items = member.notifications(&self.client)?.typed()?;
        Ok(items)
    }

    pub fn member_actions(&self, id_or_username: &str, filter: Option<&str>) -> Result<Vec<Action>> {
        let mut member = self.member(id_or_username)?;
        let items = member.actions(&self.client, &options(filter))?.typed()?;
        Ok(items)
    }

    /// Fetch a member, apply `update` and save it.
    ///
    /// Returns the member as the service sent it back.
    pub fn update_member(
        &self,
        id_or_username: &str,
        update: &MemberUpdate,
    ) -> Result<(Member, SaveOutcome)> {
        let mut member = self.member(id_or_username)?;
        if let Some(full_name) = &update.full_name {
            member.set_full_name(full_name.as_str())?;
        }
        if let Some(bio) = &update.bio {
            member.set_bio(bio.as_str())?;
        }
        let outcome = member.save(&self.client)?;
        Ok((member, outcome))
    }

    pub fn avatar_url(&self, id_or_username: &str, size: AvatarSize) -> Result<String> {
        Ok(self.member(id_or_username)?.avatar_url(size))
    }
}

fn options(filter: Option<&str>) -> AssociationOptions {
    AssociationOptions {
        filter: filter.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{Method, MockClient};
    use crate::error::TrellisError;
    use serde_json::{json, Value};

    fn ada() -> Value {
        json!({
            "id": "5f1",
            "username": "ada",
            "fullName": "Ada Lovelace",
            "avatarHash": "abc123",
            "bio": "math",
            "url": "https://x/ada"
        })
    }

    fn api() -> TrellisApi<MockClient> {
        let client = MockClient::new();
        client.on_get("/members/ada", ada());
        TrellisApi::new(client)
    }

    #[test]
    fn member_boards_forwards_filter() {
        let api = api();
        api.client().on_get_with(
            "/members/ada/boards",
            &[("filter", "open")],
            json!([{"id": "b1", "name": "Engine"}]),
        );

        let boards = api.member_boards("ada", Some("open")).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name(), Some("Engine"));
    }

    #[test]
    fn member_cards_default_to_open() {
        let api = api();
        api.client()
            .on_get_with("/members/ada/cards", &[("filter", "open")], json!([]));
        assert!(api.member_cards("ada", None).unwrap().is_empty());
    }

    #[test]
    fn illegal_filter_never_reaches_the_relation() {
        let api = api();
        let err = api.member_organizations("ada", Some("closed")).unwrap_err();
        assert!(matches!(err, TrellisError::Configuration(_)));
        assert_eq!(api.client().count(Method::Get, "/members/ada/organizations"), 0);
    }

    #[test]
    fn notifications_send_no_filter() {
        let api = api();
        api.client().on_get(
            "/members/ada/notifications",
            json!([{"id": "n1", "type": "addedToCard", "unread": true}]),
        );
        let notifications = api.member_notifications("ada").unwrap();
        assert!(notifications[0].is_unread());
        assert!(api.client().last_request().unwrap().query.is_empty());
    }

    #[test]
    fn update_member_sends_partial_update() {
        let api = api();
        let mut updated = ada();
        updated["bio"] = json!("poetical science");
        api.client().on_put("/members/ada", updated);

        let update = MemberUpdate {
            bio: Some("poetical science".into()),
            ..Default::default()
        };
        let (member, outcome) = api.update_member("ada", &update).unwrap();
        assert_eq!(outcome, SaveOutcome::Updated);
        assert_eq!(member.bio(), Some("poetical science"));
        assert_eq!(member.resource().previously_changed(), &["bio"]);
        assert_eq!(
            api.client().last_request().unwrap().body,
            Some(json!({"displayName": "Ada Lovelace", "bio": "poetical science"}))
        );
    }

    #[test]
    fn update_member_refuses_short_name() {
        let api = api();
        let update = MemberUpdate {
            full_name: Some("Al".into()),
            ..Default::default()
        };
        let err = api.update_member("ada", &update).unwrap_err();
        assert!(err.violations().is_some());
        assert_eq!(api.client().count(Method::Put, "/members/ada"), 0);
    }

    #[test]
    fn avatar_url_uses_avatar_hash() {
        assert_eq!(
            api().avatar_url("ada", AvatarSize::Small).unwrap(),
            "https://trello-avatars.s3.amazonaws.com/abc123/30.png"
        );
    }
}

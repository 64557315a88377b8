use serde_json::json;
use trellisapp::association::AssociationOptions;
use trellisapp::client::mock::{Method, MockClient};
use trellisapp::resources::{Board, Card, Member, Organization, ResourceType};
use trellisapp::TrellisError;

fn setup() -> (MockClient, Member) {
    let client = MockClient::new();
    client.on_get(
        "/members/ada",
        json!({"id": "5f1", "username": "ada", "fullName": "Ada Lovelace"}),
    );
    let member = Member::find(&client, "ada").unwrap();
    (client, member)
}

#[test]
fn test_boards_fetched_once_per_filter() {
    let (client, mut member) = setup();
    client.on_get(
        "/members/ada/boards",
        json!([{"id": "b1", "name": "Engine"}, {"id": "b2", "name": "Notes"}]),
    );

    let options = AssociationOptions::new();
    let first: Vec<Board> = member.boards(&client, &options).unwrap().typed().unwrap();
    let second: Vec<Board> = member.boards(&client, &options).unwrap().typed().unwrap();

    assert_eq!(client.count(Method::Get, "/members/ada/boards"), 1);
    let names = |boards: &[Board]| -> Vec<String> {
        boards.iter().filter_map(|b| b.name()).map(str::to_string).collect()
    };
    assert_eq!(names(&first), vec!["Engine", "Notes"]);
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_different_filters_fetch_independently() {
    let (client, mut member) = setup();
    client
        .on_get_with(
            "/members/ada/cards",
            &[("filter", "open")],
            json!([{"id": "c1", "name": "Gears"}]),
        )
        .on_get_with(
            "/members/ada/cards",
            &[("filter", "closed")],
            json!([{"id": "c2", "name": "Punch cards", "closed": true}]),
        );

    let open: Vec<Card> = member
        .cards(&client, &AssociationOptions::new())
        .unwrap()
        .typed()
        .unwrap();
    let closed: Vec<Card> = member
        .cards(&client, &AssociationOptions::new().filter("closed"))
        .unwrap()
        .typed()
        .unwrap();

    assert_eq!(open[0].name(), Some("Gears"));
    assert!(closed[0].is_closed());
    assert_eq!(client.count(Method::Get, "/members/ada/cards"), 2);
}

#[test]
fn test_organizations_keep_server_order() {
    let (client, mut member) = setup();
    client.on_get(
        "/members/ada/organizations",
        json!([
            {"id": "o2", "name": "royal", "displayName": "Royal Society"},
            {"id": "o1", "name": "analytical", "displayName": "Analytical Society"}
        ]),
    );
    let orgs: Vec<Organization> = member
        .organizations(&client, &AssociationOptions::new())
        .unwrap()
        .typed()
        .unwrap();
    let names: Vec<_> = orgs.iter().map(|o| o.name().unwrap()).collect();
    assert_eq!(names, vec!["royal", "analytical"]);
}

#[test]
fn test_illegal_filter_is_rejected_before_request() {
    let (client, mut member) = setup();
    let err = member
        .boards(&client, &AssociationOptions::new().filter("starred"))
        .unwrap_err();
    assert!(matches!(err, TrellisError::Configuration(_)));
    assert_eq!(client.count(Method::Get, "/members/ada/boards"), 0);
}

#[test]
fn test_cache_lives_with_the_resource() {
    let (client, mut member) = setup();
    client.on_get("/members/ada/notifications", json!([]));

    member.notifications(&client).unwrap();
    let mut copy = Member::find(&client, "ada").unwrap();
    copy.notifications(&client).unwrap();
    member.notifications(&client).unwrap();

    assert_eq!(client.count(Method::Get, "/members/ada/notifications"), 2);
}

#[test]
fn test_transport_failure_propagates() {
    let (client, mut member) = setup();
    client.fail_with(Some(401), "invalid token");
    let err = member
        .actions(&client, &AssociationOptions::new())
        .unwrap_err();
    assert!(err.to_string().contains("invalid token"));
}

//! # Rendering
//!
//! Turns typed resources into the strings the CLI prints. Nothing here
//! does I/O; `commands.rs` prints what these functions return.
//!
//! In JSON mode every renderer serializes the resources with their local
//! attribute names (`full_name`, not `fullName`). Text mode is one line
//! per item, and lists print a "No ... found." line when empty.

use chrono::{DateTime, Utc};
use serde::Serialize;
use trellisapp::resource::SaveOutcome;
use trellisapp::resources::{
    Action, Board, Card, Member, Notification, Organization, ResourceType,
};

use super::setup::OutputMode;
use super::styles;

pub fn render_member(
    member: &Member,
    avatar_url: &str,
    mode: OutputMode,
) -> anyhow::Result<String> {
    if mode == OutputMode::Json {
        return to_json(member);
    }

    let mut out = String::new();
    let name = member.full_name().unwrap_or("(no name)");
    out.push_str(&format!(
        "{} {}\n",
        styles::TITLE.apply_to(name),
        styles::MUTED.apply_to(format!("@{}", member.username().unwrap_or_default()))
    ));
    for (label, value) in [
        ("id", member.id()),
        ("bio", member.bio()),
        ("url", member.url()),
        ("avatar", Some(avatar_url)),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            out.push_str(&format!("  {:<8}{}\n", styles::LABEL.apply_to(label), value));
        }
    }
    Ok(out)
}

pub fn render_boards(boards: &[Board], mode: OutputMode) -> anyhow::Result<String> {
    render_list(boards, "boards", mode, |board| {
        let mut line = board.name().unwrap_or_default().to_string();
        if board.is_closed() {
            line.push_str(&format!(" {}", styles::CLOSED.apply_to("[closed]")));
        }
        let id = board.id().unwrap_or_default();
        line.push_str(&format!("  {}", styles::MUTED.apply_to(id)));
        line
    })
}

pub fn render_cards(
    cards: &[Card],
    mode: OutputMode,
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    render_list(cards, "cards", mode, |card| {
        let mut line = match card.short_id() {
            Some(n) => format!("{} ", styles::MUTED.apply_to(format!("#{n}"))),
            None => String::new(),
        };
        line.push_str(card.name().unwrap_or_default());
        if card.is_closed() {
            line.push_str(&format!(" {}", styles::CLOSED.apply_to("[closed]")));
        }
        if let Some(due) = card.due() {
            line.push_str(&format!("  due {}", styles::TIME.apply_to(relative(due, now))));
        }
        line
    })
}

pub fn render_organizations(orgs: &[Organization], mode: OutputMode) -> anyhow::Result<String> {
    render_list(orgs, "organizations", mode, |org| {
        let name = org.name().unwrap_or_default();
        format!(
            "{} {}",
            org.display_name().unwrap_or(name),
            styles::MUTED.apply_to(format!("({name})"))
        )
    })
}

pub fn render_notifications(
    notifications: &[Notification],
    mode: OutputMode,
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    render_list(notifications, "notifications", mode, |n| {
        let marker = if n.is_unread() {
            styles::UNREAD.apply_to("●").to_string()
        } else {
            " ".to_string()
        };
        let mut line = format!("{marker} {}", n.kind().unwrap_or_default());
        if let Some(date) = n.date() {
            line.push_str(&format!("  {}", styles::TIME.apply_to(relative(date, now))));
        }
        line
    })
}

pub fn render_actions(
    actions: &[Action],
    mode: OutputMode,
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    render_list(actions, "actions", mode, |action| {
        let mut line = action.kind().unwrap_or_default().to_string();
        if let Some(date) = action.date() {
            line.push_str(&format!("  {}", styles::TIME.apply_to(relative(date, now))));
        }
        line
    })
}

pub fn render_update(
    member: &Member,
    outcome: SaveOutcome,
    mode: OutputMode,
) -> anyhow::Result<String> {
    if mode == OutputMode::Json {
        return to_json(member);
    }
    let who = member.username().unwrap_or_default();
    Ok(match outcome {
        SaveOutcome::Updated => {
            format!("{}\n", styles::SUCCESS.apply_to(format!("Updated @{who}")))
        }
        SaveOutcome::NotPersisted => format!(
            "{}\n",
            styles::WARNING.apply_to(format!("@{who} is not persisted; nothing sent"))
        ),
    })
}

pub fn render_avatar(url: &str, mode: OutputMode) -> anyhow::Result<String> {
    if mode == OutputMode::Json {
        return to_json(&serde_json::json!({ "avatar_url": url }));
    }
    Ok(format!("{url}\n"))
}

fn render_list<T: Serialize>(
    items: &[T],
    noun: &str,
    mode: OutputMode,
    line: impl Fn(&T) -> String,
) -> anyhow::Result<String> {
    if mode == OutputMode::Json {
        return to_json(items);
    }
    if items.is_empty() {
        return Ok(format!("No {noun} found.\n"));
    }
    Ok(items.iter().map(|item| format!("{}\n", line(item))).collect())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

fn relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let formatter = timeago::Formatter::new();
    match now.signed_duration_since(timestamp).to_std() {
        Ok(elapsed) => formatter.convert(elapsed),
        // In the future (e.g. a due date)
        Err(_) => {
            let ahead = timestamp.signed_duration_since(now).to_std().unwrap_or_default();
            format!("in {}", formatter.convert(ahead).trim_end_matches(" ago"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        console::set_colors_enabled(false);
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn ada() -> Member {
        Member::from_json(&json!({
            "id": "5f1",
            "username": "ada",
            "fullName": "Ada Lovelace",
            "bio": "math"
        }))
        .unwrap()
    }

    #[test]
    fn test_member_text() {
        now();
        let out = render_member(&ada(), "https://a/abc/170.png", OutputMode::Text).unwrap();
        assert!(out.starts_with("Ada Lovelace @ada\n"));
        assert!(out.contains("bio     math"));
        assert!(out.contains("avatar  https://a/abc/170.png"));
        assert!(!out.contains("url "));
    }

    #[test]
    fn test_member_json_uses_local_names() {
        let out = render_member(&ada(), "", OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["full_name"], json!("Ada Lovelace"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render_boards(&[], OutputMode::Text).unwrap(), "No boards found.\n");
        assert_eq!(render_boards(&[], OutputMode::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_boards_text() {
        now();
        let boards = vec![
            Board::from_json(&json!({"id": "b1", "name": "Engine"})).unwrap(),
            Board::from_json(&json!({"id": "b2", "name": "Notes", "closed": true})).unwrap(),
        ];
        let out = render_boards(&boards, OutputMode::Text).unwrap();
        assert_eq!(out, "Engine  b1\nNotes [closed]  b2\n");
    }

    #[test]
    fn test_notifications_text() {
        let now = now();
        let date = (now - Duration::hours(2)).to_rfc3339();
        let notifications = vec![Notification::from_json(
            &json!({"id": "n1", "type": "addedToCard", "unread": true, "date": date}),
        )
        .unwrap()];
        let out = render_notifications(&notifications, OutputMode::Text, now).unwrap();
        assert_eq!(out, "● addedToCard  2 hours ago\n");
    }

    #[test]
    fn test_due_in_future() {
        let now = now();
        assert_eq!(relative(now + Duration::days(3), now), "in 3 days");
    }

    #[test]
    fn test_update_text() {
        now();
        let out = render_update(&ada(), SaveOutcome::Updated, OutputMode::Text).unwrap();
        assert_eq!(out, "Updated @ada\n");
    }
}

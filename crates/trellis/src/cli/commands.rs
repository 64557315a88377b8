//! # CLI Layer
//!
//! The only place in the workspace that:
//! - Knows about stdout and stderr
//! - Loads configuration and starts logging
//! - Builds the HTTP-backed API
//!
//! ## Flow
//!
//! 1. **Parse**: clap turns arguments into [`Cli`]
//! 2. **Configure**: [`TrellisConfig`] from env, file and defaults
//! 3. **Log**: stderr logging at the configured level
//! 4. **Dispatch**: one API call per command, rendered per `--output`

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use log::debug;
use trellisapp::api::{MemberUpdate, TrellisApi};
use trellisapp::client::Client;
use trellisapp::config::TrellisConfig;
use trellisapp::resources::AvatarSize;

use super::logging::init_logging;
use super::render;
use super::setup::{Cli, Commands, MemberCommands, OutputMode};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TrellisConfig::load_from(Some(path.as_path()))
            .with_context(|| format!("loading {}", path.display()))?,
        None => TrellisConfig::load()?,
    };
    init_logging(&config.log_level, cli.verbose)?;
    debug!("event=config api_base_url={}", config.api_base_url);

    let api = TrellisApi::from_config(&config)?;
    let Commands::Member { action } = cli.command;
    let output = dispatch(&api, action, cli.output)?;
    print!("{output}");
    Ok(())
}

fn dispatch<C: Client>(
    api: &TrellisApi<C>,
    command: MemberCommands,
    mode: OutputMode,
) -> anyhow::Result<String> {
    let now = Utc::now();
    match command {
        MemberCommands::Show { who } => {
            let member = api.member(&who.member)?;
            render::render_member(&member, &member.avatar_url(AvatarSize::Large), mode)
        }
        MemberCommands::Boards { who, filter } => {
            render::render_boards(&api.member_boards(&who.member, filter.as_deref())?, mode)
        }
        MemberCommands::Cards { who, filter } => render::render_cards(
            &api.member_cards(&who.member, filter.as_deref())?,
            mode,
            now,
        ),
        MemberCommands::Orgs { who, filter } => render::render_organizations(
            &api.member_organizations(&who.member, filter.as_deref())?,
            mode,
        ),
        MemberCommands::Notifications { who } => {
            render::render_notifications(&api.member_notifications(&who.member)?, mode, now)
        }
        MemberCommands::Actions { who, filter } => render::render_actions(
            &api.member_actions(&who.member, filter.as_deref())?,
            mode,
            now,
        ),
        MemberCommands::Update {
            who,
            full_name,
            bio,
        } => {
            let update = MemberUpdate { full_name, bio };
            if update.is_empty() {
                anyhow::bail!("nothing to update: pass --full-name and/or --bio");
            }
            let (member, outcome) = api.update_member(&who.member, &update)?;
            render::render_update(&member, outcome, mode)
        }
        MemberCommands::Avatar { who, small } => {
            let size = if small {
                AvatarSize::Small
            } else {
                AvatarSize::Large
            };
            render::render_avatar(&api.avatar_url(&who.member, size)?, mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::setup::MemberArg;
    use serde_json::json;
    use trellisapp::client::mock::{Method, MockClient};

    fn api() -> TrellisApi<MockClient> {
        console::set_colors_enabled(false);
        let client = MockClient::new();
        client.on_get(
            "/members/ada",
            json!({
                "id": "5f1",
                "username": "ada",
                "fullName": "Ada Lovelace",
                "avatarHash": "abc"
            }),
        );
        TrellisApi::new(client)
    }

    fn who() -> MemberArg {
        MemberArg {
            member: "ada".to_string(),
        }
    }

    #[test]
    fn test_avatar_dispatch() {
        let out = dispatch(
            &api(),
            MemberCommands::Avatar {
                who: who(),
                small: true,
            },
            OutputMode::Text,
        )
        .unwrap();
        assert_eq!(out, "https://trello-avatars.s3.amazonaws.com/abc/30.png\n");
    }

    #[test]
    fn test_boards_dispatch_forwards_filter() {
        let api = api();
        api.client().on_get_with(
            "/members/ada/boards",
            &[("filter", "closed")],
            json!([{"id": "b9", "name": "Archive", "closed": true}]),
        );
        let out = dispatch(
            &api,
            MemberCommands::Boards {
                who: who(),
                filter: Some("closed".into()),
            },
            OutputMode::Text,
        )
        .unwrap();
        assert_eq!(out, "Archive [closed]  b9\n");
    }

    #[test]
    fn test_empty_update_is_refused() {
        let api = api();
        let err = dispatch(
            &api,
            MemberCommands::Update {
                who: who(),
                full_name: None,
                bio: None,
            },
            OutputMode::Text,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nothing to update"));
        assert_eq!(api.client().request_count(), 0);
    }

    #[test]
    fn test_update_reports_validation() {
        let api = api();
        let err = dispatch(
            &api,
            MemberCommands::Update {
                who: who(),
                full_name: Some("Al".into()),
                bio: None,
            },
            OutputMode::Text,
        )
        .unwrap_err();
        assert!(err.to_string().contains("full_name is too short"));
        assert_eq!(api.client().count(Method::Put, "/members/ada"), 0);
    }
}

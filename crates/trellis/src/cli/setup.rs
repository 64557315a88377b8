use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    bin_name = "trellis",
    version,
    disable_help_subcommand = true,
    after_help = "Credentials are read from TRELLO_DEVELOPER_KEY and TRELLO_MEMBER_TOKEN,\nor from trellis.toml in the config directory."
)]
#[command(about = "Inspect and update Trello members", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputMode::Text, global = true, help_heading = "Options")]
    pub output: OutputMode,

    /// Config file (defaults to trellis.toml in the config directory)
    #[arg(long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Members: profile, boards, cards and more
    #[command(alias = "m")]
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct MemberArg {
    /// Member id or username
    #[arg(default_value = "me")]
    pub member: String,
}

#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// Show a member's profile
    #[command(display_order = 1)]
    Show {
        #[command(flatten)]
        who: MemberArg,
    },

    /// List a member's boards
    #[command(display_order = 2)]
    Boards {
        #[command(flatten)]
        who: MemberArg,

        /// none, members, organization, public, open, closed, all
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// List a member's cards
    #[command(display_order = 3)]
    Cards {
        #[command(flatten)]
        who: MemberArg,

        /// none, open, closed, all
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// List a member's organizations
    #[command(alias = "organizations", display_order = 4)]
    Orgs {
        #[command(flatten)]
        who: MemberArg,

        /// none, members, public, all
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// List a member's notifications
    #[command(display_order = 5)]
    Notifications {
        #[command(flatten)]
        who: MemberArg,
    },

    /// List a member's recent actions
    #[command(display_order = 6)]
    Actions {
        #[command(flatten)]
        who: MemberArg,

        /// Action type, or all
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Update display name and/or bio
    #[command(display_order = 7)]
    Update {
        #[command(flatten)]
        who: MemberArg,

        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Print the avatar image URL
    #[command(display_order = 8)]
    Avatar {
        #[command(flatten)]
        who: MemberArg,

        /// 30px instead of 170px
        #[arg(long)]
        small: bool,
    },
}

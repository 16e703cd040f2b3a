use clap::{Args, Parser, Subcommand, ValueEnum};
use scrumboard_domain::SortField;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrumboard")]
#[command(about = "Command-line client for a scrumboard service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the board service (or set SCRUMBOARD_URL)
    #[arg(long, global = true, env = "SCRUMBOARD_URL")]
    pub url: Option<String>,

    /// Path to the session file (or set SCRUMBOARD_SESSION)
    #[arg(long, global = true, value_name = "FILE", env = "SCRUMBOARD_SESSION")]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Profile of the logged-in user
    Profile(ProfileCommand),
    /// Locally stored session
    Session(SessionCommand),
    /// Log out and forget the stored session
    Logout,
    /// Show the tag colour catalog
    Tags,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Load the board and print lists, cards and panels
    Show,
    /// Print the flattened card view, filtered and sorted
    Cards(CardViewArgs),
}

#[derive(Args)]
pub struct CardViewArgs {
    /// Only cards with this tag colour, one of those listed by `tags`
    #[arg(long)]
    pub tag: Option<String>,
    /// Only cards whose title or description contains this text
    #[arg(long)]
    pub query: Option<String>,
    /// Only cards belonging to this list id
    #[arg(long)]
    pub list: Option<i64>,
    #[arg(long, value_enum, default_value_t = SortArg::StoryPoints)]
    pub sort: SortArg,
    /// Smallest first instead of largest first
    #[arg(long)]
    pub ascending: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    StoryPoints,
    BusinessValue,
    Created,
    Updated,
    Title,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::StoryPoints => SortField::StoryPoints,
            SortArg::BusinessValue => SortField::BusinessValue,
            SortArg::Created => SortField::Created,
            SortArg::Updated => SortField::Updated,
            SortArg::Title => SortField::Title,
        }
    }
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Create a new list at the end of the board
    Create {
        #[arg(long)]
        name: String,
    },
    /// Delete the list at a board position
    Delete {
        /// Zero-based position of the list on the board
        #[arg(long)]
        index: usize,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Create a card at the end of a list
    Create {
        /// Zero-based position of the target list on the board
        #[arg(long)]
        list_index: usize,
        #[arg(long)]
        title: String,
    },
}

// Profile commands
#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile
    Show,
    /// Change one profile field and save the profile
    Set(ProfileSetArgs),
}

#[derive(Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub field: String,
    /// New value; parsed as JSON when possible, otherwise sent as a string
    #[arg(long, required_unless_present = "clear")]
    pub value: Option<String>,
    /// Set the field to null
    #[arg(long, conflicts_with = "value")]
    pub clear: bool,
}

// Session commands
#[derive(Args)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub action: SessionAction,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Store the current user record
    Set {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        username: Option<String>,
        /// API token sent as `Authorization: Token <TOKEN>`
        #[arg(long)]
        token: Option<String>,
    },
    /// Print the stored current user record
    Show,
}

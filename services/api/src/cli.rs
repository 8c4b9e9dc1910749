use crate::infra::parse_filter;
use crate::render::{run_browse, run_completion, run_kinds, run_recommend};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use venture_directory::error::AppError;
use venture_directory::{DirectoryQuery, EntityKind, SortDirection};

#[derive(Parser, Debug)]
#[command(
    name = "Venture Directory",
    about = "Browse and serve the startup ecosystem directory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the directories with their filters and sort keys
    Kinds,
    /// Search, filter and page through one directory
    Browse(BrowseArgs),
    /// Show the featured strip for one directory
    Recommend(RecommendArgs),
    /// Score a profile draft stored as a JSON file
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct BrowseArgs {
    /// Directory to browse (startups, investors, mentors, ...)
    pub(crate) kind: EntityKind,
    /// Case-insensitive search term
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Facet filter as name=value1,value2 (repeatable)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub(crate) filters: Vec<(String, Vec<String>)>,
    /// Boolean flag that must hold, e.g. featured (repeatable)
    #[arg(long = "flag")]
    pub(crate) flags: Vec<String>,
    /// Sort key, e.g. rating, name, newest
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// asc or desc; defaults to the sort key's natural direction
    #[arg(long, value_parser = parse_direction)]
    pub(crate) direction: Option<SortDirection>,
    /// 1-based page number
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub(crate) page: i64,
}

impl BrowseArgs {
    pub(crate) fn query(&self) -> DirectoryQuery {
        let mut query = DirectoryQuery::new().page(self.page);
        if let Some(search) = &self.search {
            query = query.search(search.as_str());
        }
        for (name, values) in &self.filters {
            query = query.filter(name.as_str(), values.iter().cloned());
        }
        for flag in &self.flags {
            query = query.flag(flag.as_str(), true);
        }
        if let Some(sort) = &self.sort {
            query = query.sort_by(sort.as_str(), self.direction);
        }
        query
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Directory to recommend from
    pub(crate) kind: EntityKind,
    /// Number of records (defaults to APP_RECOMMENDATION_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct CompletionArgs {
    /// Directory the draft belongs to
    pub(crate) kind: EntityKind,
    /// JSON file holding the draft fields
    #[arg(long)]
    pub(crate) draft: PathBuf,
}

fn parse_direction(raw: &str) -> Result<SortDirection, String> {
    SortDirection::parse(raw).ok_or_else(|| format!("'{raw}' is not asc or desc"))
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Kinds => run_kinds(),
        Command::Browse(args) => run_browse(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Completion(args) => run_completion(args),
    }
}

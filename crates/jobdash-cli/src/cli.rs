use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jobdash")]
#[command(about = "A terminal dashboard for job-listing posts", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Content API base URL, e.g. https://host/wp-json/wp/v2
    #[arg(long, env = "JOBDASH_BASE_URL")]
    pub base_url: Option<String>,

    /// Posts fetched per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Only show posts published within the last N days
    #[arg(long, value_name = "N")]
    pub days: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One-shot search, printed as JSON
    Search {
        /// Query string (empty lists the newest posts)
        query: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

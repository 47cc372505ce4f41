use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use game_catalog::catalog::{DEFAULT_RECENT_LIMIT, DEFAULT_TOP_RATED_LIMIT};
use game_catalog::{CatalogStore, Game, GameFilter, GameId, LoadStatus, Source, StatisticsPanel};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Catalog load failed: {0}")]
    LoadFailed(String),

    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "game-catalog")]
#[command(about = "Search, filter and summarize a game catalog loaded from a JSON resource")]
struct Cli {
    /// URL or path of the catalog document
    #[arg(
        long,
        global = true,
        default_value = "assets/data/juegos.json",
        env = "GAME_CATALOG_SOURCE"
    )]
    source: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Fail when the catalog cannot be loaded instead of showing an empty catalog
    #[arg(long, global = true)]
    strict: bool,

    /// Log filter directive written to stderr
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show aggregate statistics
    Stats,

    /// List games, optionally filtered
    List(FilterArgs),

    /// Show one game by identifier
    Get {
        /// Game identifier
        id: GameId,
    },

    /// Search name, developer and category (case-insensitive)
    Search {
        /// Search term
        term: String,
    },

    /// Highest-rated games
    TopRated {
        /// Maximum number of games
        #[arg(long, default_value_t = DEFAULT_TOP_RATED_LIMIT)]
        limit: usize,
    },

    /// Most recently released games
    Recent {
        /// Maximum number of games
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Category (case-insensitive exact match)
    #[arg(long)]
    category: Option<String>,

    /// Platform the game must run on
    #[arg(long)]
    platform: Option<String>,

    /// Only free games
    #[arg(long, conflicts_with = "paid")]
    free: bool,

    /// Only paid games
    #[arg(long)]
    paid: bool,

    /// Minimum rating
    #[arg(long)]
    min_rating: Option<f64>,

    /// Minimum price (inclusive)
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum price (inclusive)
    #[arg(long)]
    max_price: Option<f64>,
}

impl From<FilterArgs> for GameFilter {
    fn from(args: FilterArgs) -> Self {
        let is_free = match (args.free, args.paid) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        GameFilter {
            category: args.category,
            platform: args.platform,
            is_free,
            min_rating: args.min_rating,
            min_price: args.min_price,
            max_price: args.max_price,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_new(&cli.log_level).map_err(|e| AppError::LogFilter(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = CatalogStore::new();
    match store.load(&Source::parse(&cli.source)).await {
        LoadStatus::Failed { reason } if cli.strict => return Err(AppError::LoadFailed(reason)),
        LoadStatus::Failed { reason } => {
            eprintln!("Warning: catalog unavailable ({}), showing an empty catalog", reason);
        }
        _ => {}
    }

    match cli.command {
        Commands::Stats => {
            let panel = StatisticsPanel::init(&store);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(panel.statistics())?);
            } else {
                println!("{}", panel);
            }
        }
        Commands::List(args) => {
            print_games(&store.filter(args.into()).current(), cli.json)?;
        }
        Commands::Get { id } => {
            let game = store
                .find_by_id(id)
                .current()
                .ok_or(AppError::GameNotFound(id))?;
            print_games(std::slice::from_ref(&game), cli.json)?;
        }
        Commands::Search { term } => {
            print_games(&store.search(term).current(), cli.json)?;
        }
        Commands::TopRated { limit } => {
            print_games(&store.top_rated(limit).current(), cli.json)?;
        }
        Commands::Recent { limit } => {
            print_games(&store.most_recent(limit).current(), cli.json)?;
        }
    }

    Ok(())
}

fn print_games(games: &[Game], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(games)?);
        return Ok(());
    }

    if games.is_empty() {
        println!("(no games)");
        return Ok(());
    }

    for game in games {
        let price = if game.is_free {
            "free".to_string()
        } else {
            format!("{:.2}", game.price)
        };
        println!(
            "{:>4}  {:<32} {:<20} {:<16} {:>4.1}  {:>8}  {}  [{}]",
            game.id,
            game.name,
            game.developer,
            game.category,
            game.rating,
            price,
            game.release_date,
            game.platforms.join(", ")
        );
    }

    Ok(())
}

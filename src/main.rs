use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use groceries::{logging, paths, Category};

mod commands;

#[derive(Parser)]
#[command(name = "groceries", author, version = env!("CARGO_PKG_VERSION"), about = "Track groceries and recipes in a local JSON file", long_about = None)]
struct Cli {
    /// Print debug logs to stderr (GROCERIES_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the per-user default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the groceries database
    Init {
        /// Database file location (prompted for when omitted)
        #[arg(short = 'd', long = "db-path", value_name = "PATH")]
        db_path: Option<PathBuf>,
    },

    /// Add a new grocery with a CATEGORY
    Add {
        /// Grocery name, may span several words
        #[arg(required = true)]
        name: Vec<String>,

        /// Grocery category
        #[arg(short, long, value_enum, ignore_case = true)]
        category: Category,
    },

    /// Remove a grocery item using its GROCERY_ID
    Remove {
        /// Position shown by `groceries list`
        #[arg(value_name = "GROCERY_ID")]
        id: usize,

        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all grocery items
    Clear {
        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List all groceries in bank
    List,

    /// Manage the recipe bank
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
}

#[derive(Subcommand)]
enum RecipeCommands {
    /// Add a new recipe with a LINK
    Add {
        /// Recipe name, may span several words
        #[arg(required = true)]
        name: Vec<String>,

        /// Where the recipe lives
        #[arg(short, long)]
        link: String,
    },

    /// Remove a recipe using its RECIPE_ID
    Remove {
        /// Position shown by `groceries recipe list`
        #[arg(value_name = "RECIPE_ID")]
        id: usize,

        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all recipes
    Clear {
        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List all recipes in bank
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let config_path = cli.config.unwrap_or_else(paths::config_path);

    let exit_code = match cli.command {
        Commands::Init { db_path } => commands::init::execute(&config_path, db_path)?,
        Commands::Add { name, category } => {
            commands::grocery::add(&config_path, &name, category)?
        }
        Commands::Remove { id, force } => commands::grocery::remove(&config_path, id, force)?,
        Commands::Clear { force } => commands::grocery::clear(&config_path, force)?,
        Commands::List => commands::grocery::list(&config_path)?,
        Commands::Recipe { command } => match command {
            RecipeCommands::Add { name, link } => {
                commands::recipe::add(&config_path, &name, &link)?
            }
            RecipeCommands::Remove { id, force } => {
                commands::recipe::remove(&config_path, id, force)?
            }
            RecipeCommands::Clear { force } => commands::recipe::clear(&config_path, force)?,
            RecipeCommands::List => commands::recipe::list(&config_path)?,
        },
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

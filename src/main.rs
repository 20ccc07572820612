use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::path::PathBuf;

use recipe_finder::{
    config::load_config_from, view, FilterQuery, ImageSource, LoadPolicy, RecipeFinder,
};

/// Find recipes by the ingredients you have
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recipe catalog (file path or http(s) URL); overrides the config file
    #[arg(short, long, env = "RECIPE_FINDER_CATALOG")]
    catalog: Option<String>,

    /// What to do when the catalog cannot be loaded
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Configuration file name (extension optional)
    #[arg(long, default_value = "recipe-finder")]
    config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the diagnostics trail after the result
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search by comma-separated ingredients
    Search { ingredients: String },
    /// Search names and ingredients, optionally filtered by region and type
    Filter {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(short, long, default_value = "")]
        region: String,
        #[arg(short = 't', long = "type", default_value = "")]
        recipe_type: String,
    },
    /// Show one recipe by id
    Show { id: String },
    /// Detect ingredients in an image and search for them
    Upload { image: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Fallback,
    KeepPrevious,
}

impl From<PolicyArg> for LoadPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Fallback => LoadPolicy::Fallback,
            PolicyArg::KeepPrevious => LoadPolicy::KeepPrevious,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let mut config = load_config_from(&args.config)?;
    if let Some(catalog) = args.catalog {
        config.catalog.source = catalog;
    }
    if let Some(policy) = args.policy {
        config.catalog.policy = policy.into();
    }
    debug!("Using configuration: {:?}", config);

    let mut finder = RecipeFinder::builder().config(config).build().await?;

    let output = match args.command {
        Command::Search { ingredients } => {
            let result = finder.search(&ingredients).await;
            render_search(args.format, &result)
        }
        Command::Filter {
            search,
            region,
            recipe_type,
        } => {
            let query = FilterQuery::new(&search, &region, &recipe_type);
            let result = finder.filter(&query).await;
            render_search(args.format, &result)
        }
        Command::Show { id } => {
            let result = finder.detail(&id).await;
            match args.format {
                Format::Text => view::text::render_detail(&result),
                Format::Html => view::html::render_detail(&result),
            }
        }
        Command::Upload { image } => {
            let source = ImageSource::Path(image.to_string_lossy().into_owned());
            let result = finder.search_from_image(&source).await?;
            format!(
                "Ingredients: {}\n\n{}",
                result.query,
                render_search(args.format, &result.view)
            )
        }
    };

    println!("{}", output);

    if args.verbose && finder.diagnostics().is_visible() {
        eprintln!();
        for entry in finder.diagnostics().entries() {
            eprintln!("{}", entry);
        }
    }

    Ok(())
}

fn render_search(format: Format, result: &view::SearchView) -> String {
    match format {
        Format::Text => view::text::render_search(result),
        Format::Html => view::html::render_search(result),
    }
}

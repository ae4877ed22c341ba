use clap::{Parser, Subcommand};
use domain_products::{
    CreateProduct, FilterByWeight, ListProducts, ProductId, ProductRequest, WeightToleranceCheck,
};
use std::io::{self, Write};

use crate::app::App;
use crate::render;

#[derive(Parser, Debug)]
#[command(name = "weight-control")]
#[command(version, about = "Track products by weight and check them against tolerance ranges.")]
pub struct CommandLine {
    /// SQLite connection string, overrides DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Do not insert the sample product into an empty database
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List stored products
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        skip: Option<u64>,
        #[arg(long)]
        take: Option<u64>,
    },
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        /// Kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,
    },
    /// List products weighing between min and max kilograms
    Filter {
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },
    /// Check a product's weight against a tolerance range
    Check {
        #[arg(long)]
        id: ProductId,
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<Commands> for ProductRequest {
    fn from(command: Commands) -> Self {
        match command {
            Commands::List { skip, take } => ListProducts { skip, take }.into(),
            Commands::Add { name, weight } => CreateProduct::new(name, weight).into(),
            Commands::Filter { min, max } => FilterByWeight {
                min_weight: min,
                max_weight: max,
            }
            .into(),
            Commands::Check { id, min, max } => WeightToleranceCheck {
                product_id: id,
                min_weight: min,
                max_weight: max,
            }
            .into(),
        }
    }
}

/// Execute one subcommand and print its outcome; returns whether it succeeded
pub async fn run_command(
    app: &App,
    command: Commands,
    json: bool,
    out: &mut impl Write,
) -> io::Result<bool> {
    let result = app.execute(command.into()).await;

    if json {
        render::json(out, &result)?;
    } else {
        render::result(out, &result)?;
    }

    Ok(result.is_ok())
}

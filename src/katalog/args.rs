use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "katalog")]
#[command(about = "Product catalog manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The form fields. Everything stays a raw string so that validation (and
/// its per-field messages) happens in the core, not in the argument parser.
#[derive(Args, Debug, Default)]
pub struct ProductFields {
    /// Product name (3-50 characters, unique)
    #[arg(long)]
    pub name: Option<String>,

    /// Optional description (max. 200 characters)
    #[arg(long)]
    pub description: Option<String>,

    /// Price, a positive number (e.g. 15000)
    #[arg(long)]
    pub price: Option<String>,

    /// Category value (see `katalog categories`)
    #[arg(long)]
    pub category: Option<String>,

    /// Release date, YYYY-MM-DD, not in the future
    #[arg(long)]
    pub release_date: Option<String>,

    /// Stock count, a non-negative integer
    #[arg(long)]
    pub stock: Option<String>,

    /// Mark the product as active (the default for new products)
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Mark the product as inactive
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product to the catalog
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// List the catalog
    #[command(alias = "ls")]
    List,

    /// Edit a product; unspecified fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Row number from `katalog list`
        row: usize,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product (asks for confirmation)
    #[command(alias = "rm")]
    Delete {
        /// Row number from `katalog list`
        row: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the valid category values
    Categories,
}

use clap::{Args, Subcommand, ValueEnum};
use shoplite::{
    context::ClientContext,
    domain::{
        categories::CategoryId,
        products::{ProductId, ProductSearch, SortDirection},
    },
};

use crate::{cli::describe, output};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List the whole catalogue
    List,

    /// Show one product
    Get { id: ProductId },

    /// Search the catalogue
    Search(SearchArgs),

    /// Delete a product (admin)
    Delete { id: ProductId },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Self::Asc,
            Direction::Desc => Self::Desc,
        }
    }
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Free-text keyword
    #[arg(long)]
    keyword: Option<String>,

    /// Product name
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    category_id: Option<CategoryId>,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    /// Field to sort by, e.g. price or createdAt
    #[arg(long)]
    sort_by: Option<String>,

    #[arg(long, value_enum)]
    sort_direction: Option<Direction>,
}

impl From<SearchArgs> for ProductSearch {
    fn from(args: SearchArgs) -> Self {
        Self {
            keyword: args.keyword,
            name: args.name,
            category_id: args.category_id,
            min_price: args.min_price,
            max_price: args.max_price,
            sort_by: args.sort_by,
            sort_direction: args.sort_direction.map(Into::into),
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CategoriesSubcommand {
    /// List categories
    List {
        /// Only categories shown in the storefront
        #[arg(long)]
        active: bool,
    },

    /// Show one category
    Get { id: CategoryId },
}

pub(crate) async fn run_products(
    ctx: &ClientContext,
    command: ProductsCommand,
) -> Result<(), String> {
    let products = match command.command {
        ProductsSubcommand::List => ctx.products.list_products().await,
        ProductsSubcommand::Get { id } => ctx
            .products
            .get_product(id)
            .await
            .map(|product| vec![product]),
        ProductsSubcommand::Search(args) => ctx.products.search_products(args.into()).await,
        ProductsSubcommand::Delete { id } => {
            ctx.products
                .delete_product(id)
                .await
                .map_err(|error| describe("failed to delete product", &error))?;

            println!("deleted product {id}");

            return Ok(());
        }
    }
    .map_err(|error| describe("failed to load products", &error))?;

    if products.is_empty() {
        println!("no products found");
    }

    for product in &products {
        output::product(product);
    }

    Ok(())
}

pub(crate) async fn run_categories(
    ctx: &ClientContext,
    command: CategoriesCommand,
) -> Result<(), String> {
    let categories = match command.command {
        CategoriesSubcommand::List { active: true } => {
            ctx.categories.list_active_categories().await
        }
        CategoriesSubcommand::List { active: false } => ctx.categories.list_categories().await,
        CategoriesSubcommand::Get { id } => ctx
            .categories
            .get_category(id)
            .await
            .map(|category| vec![category]),
    }
    .map_err(|error| describe("failed to load categories", &error))?;

    for category in &categories {
        output::category(category);
    }

    Ok(())
}

use std::{error::Error, sync::Arc};

use clap::{Parser, Subcommand};
use shoplite::{
    context::ClientContext,
    session::{FileStorage, Session},
};

use crate::{
    config::{ApiConfig, LoggingConfig},
    navigator::TerminalNavigator,
};

mod account;
mod cart;
mod catalog;
mod orders;
mod payments;
mod reviews;
mod wishlist;

#[derive(Debug, Parser)]
#[command(name = "shoplite", about = "ShopLite storefront and admin client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub api: ApiConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login(account::LoginArgs),

    /// Create an account and store the session
    Signup(account::SignupArgs),

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Ask the backend whether the stored session is still valid
    Validate,

    Products(catalog::ProductsCommand),
    Categories(catalog::CategoriesCommand),
    Cart(cart::CartCommand),
    Orders(orders::OrdersCommand),
    Reviews(reviews::ReviewsCommand),
    Wishlist(wishlist::WishlistCommand),
    Payments(payments::PaymentsCommand),
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if arguments cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let ctx = ClientContext::connect(
            &self.api.client_config(),
            self.api.console(),
            Arc::new(FileStorage::new(self.api.session_dir.clone())),
            Arc::new(TerminalNavigator),
        )
        .map_err(|error| describe("failed to start client", &error))?;

        match self.command {
            Commands::Login(args) => account::login(&ctx, args).await,
            Commands::Signup(args) => account::signup(&ctx, args).await,
            Commands::Logout => account::logout(&ctx),
            Commands::Whoami => account::whoami(&ctx),
            Commands::Validate => account::validate(&ctx).await,
            Commands::Products(command) => catalog::run_products(&ctx, command).await,
            Commands::Categories(command) => catalog::run_categories(&ctx, command).await,
            Commands::Cart(command) => cart::run(&ctx, command).await,
            Commands::Orders(command) => orders::run(&ctx, command).await,
            Commands::Reviews(command) => reviews::run(&ctx, command).await,
            Commands::Wishlist(command) => wishlist::run(&ctx, command).await,
            Commands::Payments(command) => payments::run(&ctx, command).await,
        }
    }
}

/// The logged-in session, or a hint to log in.
fn require_session(ctx: &ClientContext) -> Result<Session, String> {
    ctx.sessions()
        .current()
        .ok_or_else(|| "not logged in; run `shoplite login` first".to_string())
}

/// `context: error: source: source ...`
fn describe(context: &str, error: &dyn Error) -> String {
    let mut message = format!("{context}: {error}");
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }

    message
}

use clap::{Args, Subcommand};
use shoplite::{
    context::ClientContext,
    domain::{products::ProductId, wishlist::Toggled},
};

use crate::{
    cli::{describe, require_session},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct WishlistCommand {
    #[command(subcommand)]
    command: WishlistSubcommand,
}

#[derive(Debug, Subcommand)]
enum WishlistSubcommand {
    /// Show the wishlist
    List,

    /// Add a product, or remove it if already present
    Toggle { product_id: ProductId },

    /// Check whether a product is on the wishlist
    Check { product_id: ProductId },

    /// Count wishlist entries
    Count,
}

pub(crate) async fn run(ctx: &ClientContext, command: WishlistCommand) -> Result<(), String> {
    let user = require_session(ctx)?.id;

    match command.command {
        WishlistSubcommand::List => {
            let entries = ctx
                .wishlist
                .user_wishlist(&user)
                .await
                .map_err(|error| describe("failed to load wishlist", &error))?;

            if entries.is_empty() {
                println!("wishlist is empty");
            }

            for entry in &entries {
                output::wishlist_entry(entry);
            }
        }
        WishlistSubcommand::Toggle { product_id } => {
            let toggled = ctx
                .wishlist
                .toggle(&user, product_id)
                .await
                .map_err(|error| describe("failed to update wishlist", &error))?;

            match toggled {
                Toggled::Added => println!("added product {product_id} to wishlist"),
                Toggled::Removed => println!("removed product {product_id} from wishlist"),
            }
        }
        WishlistSubcommand::Check { product_id } => {
            let present = ctx
                .wishlist
                .contains(&user, product_id)
                .await
                .map_err(|error| describe("failed to check wishlist", &error))?;

            println!("in_wishlist: {present}");
        }
        WishlistSubcommand::Count => {
            let count = ctx
                .wishlist
                .count(&user)
                .await
                .map_err(|error| describe("failed to count wishlist", &error))?;

            println!("count: {count}");
        }
    }

    Ok(())
}

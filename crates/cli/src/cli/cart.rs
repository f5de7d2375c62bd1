use clap::{Args, Subcommand};
use shoplite::{
    context::ClientContext,
    domain::{
        cart::{AddToCart, CartItemId},
        products::ProductId,
    },
};

use crate::{
    cli::{describe, require_session},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart
    Show,

    /// Add a product to the cart
    Add {
        product_id: ProductId,

        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Change the quantity of a cart line
    Update { id: CartItemId, quantity: u32 },

    /// Remove a cart line
    Remove { id: CartItemId },

    /// Empty the cart
    Clear,
}

pub(crate) async fn run(ctx: &ClientContext, command: CartCommand) -> Result<(), String> {
    let user = require_session(ctx)?.id;

    match command.command {
        CartSubcommand::Show => {
            let items = ctx
                .cart
                .cart_items(&user)
                .await
                .map_err(|error| describe("failed to load cart", &error))?;

            if items.is_empty() {
                println!("cart is empty");
                return Ok(());
            }

            for item in &items {
                output::cart_item(item);
            }

            let total = ctx
                .cart
                .total(&user)
                .await
                .map_err(|error| describe("failed to load cart total", &error))?;

            println!("total: {total}");
        }
        CartSubcommand::Add {
            product_id,
            quantity,
        } => {
            let item = ctx
                .cart
                .add_to_cart(AddToCart {
                    user_id: user,
                    product_id,
                    quantity,
                })
                .await
                .map_err(|error| describe("failed to add to cart", &error))?;

            output::cart_item(&item);
        }
        CartSubcommand::Update { id, quantity } => {
            let item = ctx
                .cart
                .update_quantity(id, quantity)
                .await
                .map_err(|error| describe("failed to update cart", &error))?;

            output::cart_item(&item);
        }
        CartSubcommand::Remove { id } => {
            ctx.cart
                .remove_from_cart(id)
                .await
                .map_err(|error| describe("failed to remove cart line", &error))?;

            println!("removed cart line {id}");
        }
        CartSubcommand::Clear => {
            ctx.cart
                .clear_cart(&user)
                .await
                .map_err(|error| describe("failed to clear cart", &error))?;

            println!("cart cleared");
        }
    }

    Ok(())
}

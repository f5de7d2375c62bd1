use clap::{Args, Subcommand};
use shoplite::{
    context::ClientContext,
    domain::orders::{OrderId, OrderStatus},
};

use crate::{
    cli::{describe, require_session},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List the logged-in user's orders
    List,

    /// Show one order
    Get { id: OrderId },

    /// List every order (admin)
    All,

    /// List orders in a status (admin)
    Status {
        #[arg(value_parser = parse_status)]
        status: OrderStatus,
    },

    /// Move an order to a new status (admin)
    SetStatus {
        id: OrderId,

        #[arg(value_parser = parse_status)]
        status: OrderStatus,
    },

    /// Cancel an order
    Cancel { id: OrderId },

    /// Confirm a paid order
    Confirm { id: OrderId },
}

fn parse_status(raw: &str) -> Result<OrderStatus, String> {
    OrderStatus::ALL
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(raw))
        .ok_or_else(|| format!("unknown order status `{raw}`"))
}

pub(crate) async fn run(ctx: &ClientContext, command: OrdersCommand) -> Result<(), String> {
    let orders = match command.command {
        OrdersSubcommand::List => {
            let user = require_session(ctx)?.id;

            ctx.orders.user_orders(&user).await
        }
        OrdersSubcommand::Get { id } => ctx.orders.get_order(id).await.map(|order| vec![order]),
        OrdersSubcommand::All => ctx.orders.all_orders().await,
        OrdersSubcommand::Status { status } => ctx.orders.orders_by_status(status).await,
        OrdersSubcommand::SetStatus { id, status } => ctx
            .orders
            .update_status(id, status)
            .await
            .map(|order| vec![order]),
        OrdersSubcommand::Confirm { id } => {
            ctx.orders.confirm_order(id).await.map(|order| vec![order])
        }
        OrdersSubcommand::Cancel { id } => {
            ctx.orders
                .cancel_order(id)
                .await
                .map_err(|error| describe("failed to cancel order", &error))?;

            println!("cancelled order {id}");

            return Ok(());
        }
    }
    .map_err(|error| describe("order request failed", &error))?;

    if orders.is_empty() {
        println!("no orders found");
    }

    for order in &orders {
        output::order(order);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_ignores_case() {
        assert_eq!(parse_status("shipped"), Ok(OrderStatus::Shipped));
        assert_eq!(parse_status("CANCELLED"), Ok(OrderStatus::Cancelled));
        assert!(parse_status("lost").is_err());
    }
}

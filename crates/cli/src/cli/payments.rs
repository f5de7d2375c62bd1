use clap::{Args, Subcommand};
use shoplite::{
    context::ClientContext,
    domain::payments::{PaymentFailure, PaymentId},
};

use crate::{
    cli::{describe, require_session},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct PaymentsCommand {
    #[command(subcommand)]
    command: PaymentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PaymentsSubcommand {
    /// Print the payment widget client key
    ClientKey,

    /// List the logged-in user's payments
    History,

    /// Show one payment
    Show { id: PaymentId },

    /// Confirm a payment after the widget's success redirect
    Confirm {
        #[arg(long)]
        payment_key: String,

        #[arg(long)]
        order_id: String,

        #[arg(long)]
        amount: f64,
    },

    /// Report a failed payment from the widget's fail redirect
    Fail {
        #[arg(long)]
        code: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        order_id: String,
    },

    /// Cancel an approved payment
    Cancel {
        payment_key: String,

        #[arg(long)]
        reason: String,
    },
}

pub(crate) async fn run(ctx: &ClientContext, command: PaymentsCommand) -> Result<(), String> {
    match command.command {
        PaymentsSubcommand::ClientKey => {
            println!("client_key: {}", ctx.payments.client_key().await);
        }
        PaymentsSubcommand::History => {
            let user = require_session(ctx)?.id;

            let payments = ctx
                .payments
                .payment_history(&user)
                .await
                .map_err(|error| describe("failed to load payments", &error))?;

            if payments.is_empty() {
                println!("no payments found");
            }

            for payment in &payments {
                output::payment(payment);
            }
        }
        PaymentsSubcommand::Show { id } => {
            let payment = ctx
                .payments
                .payment_detail(id)
                .await
                .map_err(|error| describe("failed to load payment", &error))?;

            output::payment(&payment);
        }
        PaymentsSubcommand::Confirm {
            payment_key,
            order_id,
            amount,
        } => {
            let payment = ctx
                .payments
                .confirm_payment(&payment_key, &order_id, amount)
                .await
                .map_err(|error| describe("failed to confirm payment", &error))?;

            output::payment(&payment);
        }
        PaymentsSubcommand::Fail {
            code,
            message,
            order_id,
        } => {
            ctx.payments
                .report_failure(PaymentFailure {
                    code,
                    message,
                    order_id,
                })
                .await
                .map_err(|error| describe("failed to report payment failure", &error))?;

            println!("payment failure recorded");
        }
        PaymentsSubcommand::Cancel {
            payment_key,
            reason,
        } => {
            let payment = ctx
                .payments
                .cancel_payment(&payment_key, &reason)
                .await
                .map_err(|error| describe("failed to cancel payment", &error))?;

            output::payment(&payment);
        }
    }

    Ok(())
}

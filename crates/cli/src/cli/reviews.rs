use clap::{Args, Subcommand};
use shoplite::{
    context::ClientContext,
    domain::{
        products::ProductId,
        reviews::{PageRequest, ReviewFilter, ReviewId, ReviewRequest},
    },
};

use crate::{cli::describe, output};

#[derive(Debug, Args)]
pub(crate) struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReviewsSubcommand {
    /// List a product's reviews
    List {
        product_id: ProductId,

        #[arg(long, default_value_t = 0)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        size: u32,

        /// Only reviews with this many stars
        #[arg(long)]
        rating: Option<u8>,
    },

    /// Show a product's rating summary
    Summary { product_id: ProductId },

    /// List your own reviews
    Mine,

    /// Review a product
    Write {
        product_id: ProductId,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        #[arg(long)]
        comment: String,
    },

    /// Delete one of your reviews
    Delete { id: ReviewId },

    Like { id: ReviewId },

    Unlike { id: ReviewId },

    /// Report a review to moderators
    Report {
        id: ReviewId,

        #[arg(long)]
        reason: String,
    },
}

pub(crate) async fn run(ctx: &ClientContext, command: ReviewsCommand) -> Result<(), String> {
    match command.command {
        ReviewsSubcommand::List {
            product_id,
            page,
            size,
            rating,
        } => {
            let paging = PageRequest { page, size };

            let reviews = match rating {
                Some(rating) => {
                    let filter = ReviewFilter {
                        rating: Some(rating),
                        ..ReviewFilter::default()
                    };

                    ctx.reviews
                        .filtered_reviews(product_id, filter, paging)
                        .await
                }
                None => ctx.reviews.product_reviews(product_id, paging).await,
            }
            .map_err(|error| describe("failed to load reviews", &error))?;

            output::review_page(&reviews);
        }
        ReviewsSubcommand::Summary { product_id } => {
            let summary = ctx
                .reviews
                .review_summary(product_id)
                .await
                .map_err(|error| describe("failed to load review summary", &error))?;

            output::review_summary(&summary);
        }
        ReviewsSubcommand::Mine => {
            let reviews = ctx
                .reviews
                .my_reviews()
                .await
                .map_err(|error| describe("failed to load your reviews", &error))?;

            for review in &reviews {
                output::review(review);
            }
        }
        ReviewsSubcommand::Write {
            product_id,
            rating,
            comment,
        } => {
            let review = ctx
                .reviews
                .create_review(product_id, ReviewRequest { rating, comment })
                .await
                .map_err(|error| describe("failed to write review", &error))?;

            output::review(&review);
        }
        ReviewsSubcommand::Delete { id } => {
            ctx.reviews
                .delete_review(id)
                .await
                .map_err(|error| describe("failed to delete review", &error))?;

            println!("deleted review {id}");
        }
        ReviewsSubcommand::Like { id } => {
            let review = ctx
                .reviews
                .like_review(id)
                .await
                .map_err(|error| describe("failed to like review", &error))?;

            output::review(&review);
        }
        ReviewsSubcommand::Unlike { id } => {
            let review = ctx
                .reviews
                .unlike_review(id)
                .await
                .map_err(|error| describe("failed to unlike review", &error))?;

            output::review(&review);
        }
        ReviewsSubcommand::Report { id, reason } => {
            ctx.reviews
                .report_review(id, &reason)
                .await
                .map_err(|error| describe("failed to report review", &error))?;

            println!("reported review {id}");
        }
    }

    Ok(())
}

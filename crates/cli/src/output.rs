//! Terminal rendering of client models.

use std::fmt::Display;

use shoplite::{
    domain::{
        cart::CartItem,
        categories::Category,
        orders::Order,
        payments::Payment,
        products::Product,
        reviews::{Review, ReviewPage, ReviewSummary},
        wishlist::WishlistEntry,
    },
    session::Session,
};

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

pub(crate) fn session(session: &Session) {
    println!("user_id: {}", session.id);
    println!("username: {}", session.username);
    println!("email: {}", session.email);
    println!("role: {}", session.role);
}

pub(crate) fn product(product: &Product) {
    println!("id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", product.price);
    println!(
        "category: {}",
        or_dash(
            product
                .category
                .as_ref()
                .map(|category| category.name.as_str())
                .or(product.category_name.as_deref())
        )
    );
    println!("stock: {}", or_dash(product.stock_quantity));
    println!("rating: {}", or_dash(product.average_rating));
    println!();
}

pub(crate) fn category(category: &Category) {
    println!("id: {}", category.id);
    println!("name: {}", category.name);
    println!("description: {}", or_dash(category.description.as_deref()));
    println!("active: {}", or_dash(category.is_active));
    println!();
}

pub(crate) fn cart_item(item: &CartItem) {
    println!("cart_item_id: {}", item.id);
    println!("product_id: {}", item.product_id);
    println!("product: {}", or_dash(item.product_name.as_deref()));
    println!("quantity: {}", item.quantity);
    println!("subtotal: {}", item.subtotal());
    println!();
}

pub(crate) fn order(order: &Order) {
    println!("order_id: {}", order.id);
    println!("order_number: {}", or_dash(order.order_number.as_deref()));
    println!("status: {}", order.status);
    println!("total_amount: {}", order.total_amount);
    println!("items: {}", order.order_items.len());
    println!("created_at: {}", or_dash(order.created_at));
    println!();
}

pub(crate) fn review(review: &Review) {
    println!("review_id: {}", review.id);
    println!("rating: {}", review.rating);
    println!("author: {}", or_dash(review.username.as_deref()));
    println!("comment: {}", or_dash(review.comment.as_deref()));
    println!("likes: {}", or_dash(review.like_count));
    println!();
}

pub(crate) fn review_page(page: &ReviewPage) {
    println!(
        "page {} of {} ({} reviews)",
        page.current_page + 1,
        page.total_pages.max(1),
        page.total_elements
    );
    println!();

    for item in &page.reviews {
        review(item);
    }
}

pub(crate) fn review_summary(summary: &ReviewSummary) {
    println!("average_rating: {:.1}", summary.average_rating);
    println!("total_reviews: {}", summary.total_reviews);

    for (stars, count) in summary.rating_counts.iter().rev() {
        println!("{stars}_stars: {count}");
    }
}

pub(crate) fn wishlist_entry(entry: &WishlistEntry) {
    println!("wishlist_id: {}", entry.id);

    if let Some(product) = entry.product.as_ref() {
        println!("product_id: {}", product.id);
        println!("product: {}", product.name);
        println!("price: {}", product.price);
    }

    println!();
}

pub(crate) fn payment(payment: &Payment) {
    println!("payment_id: {}", payment.id);
    println!("order: {}", or_dash(payment.order_id_string.as_deref()));
    println!("amount: {}", payment.amount);
    println!(
        "status: {}",
        or_dash(payment.status.map(|status| format!("{status:?}")))
    );
    println!("approved_at: {}", or_dash(payment.approved_at));
    println!("failure_reason: {}", or_dash(payment.failure_reason.as_deref()));
    println!();
}

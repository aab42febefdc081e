use crate::app::AppContext;
use crate::ports::{CartStore, CatalogClient, Notifier};

/// Execute the show command: print the cart entries and the running total.
pub fn execute<C, S, N>(ctx: &AppContext<C, S, N>)
where
    C: CatalogClient,
    S: CartStore,
    N: Notifier,
{
    let cart = ctx.service().cart();

    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    for entry in cart.entries() {
        println!(
            "{:>6}  {}  {} x {:.2} = {:.2}",
            entry.product.id,
            entry.product.title,
            entry.amount,
            entry.product.price,
            entry.product.price * f64::from(entry.amount)
        );
    }
    println!("Total: {:.2}", cart.total());
}

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{CartStore, CatalogClient, Notifier};

/// Execute the remove command: drop the entry for `product_id`.
///
/// Removing a product that is not in the cart is an expected rejection and
/// uses the same wording as any other removal failure.
pub fn execute<C, S, N>(ctx: &mut AppContext<C, S, N>, product_id: u64) -> Result<(), AppError>
where
    C: CatalogClient,
    S: CartStore,
    N: Notifier,
{
    match ctx.service_mut().remove_product(product_id) {
        Ok(()) => {
            ctx.notifier().info(&format!("Removed product {product_id}"));
            Ok(())
        }
        Err(err) => {
            ctx.notifier().error("Failed to remove product");
            Err(err)
        }
    }
}

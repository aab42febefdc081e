use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{CartStore, CatalogClient, Notifier};

/// Execute the add command: put one unit of `product_id` in the cart.
///
/// Failures are reported through the notifier in the storefront's wording;
/// the returned error only signals the process outcome.
pub fn execute<C, S, N>(ctx: &mut AppContext<C, S, N>, product_id: u64) -> Result<(), AppError>
where
    C: CatalogClient,
    S: CartStore,
    N: Notifier,
{
    match ctx.service_mut().add_product(product_id) {
        Ok(()) => {
            let amount = ctx.service().cart().amount_of(product_id);
            ctx.notifier().info(&format!("Added product {product_id} (amount {amount})"));
            Ok(())
        }
        Err(err) => {
            ctx.notifier().error(describe(&err));
            Err(err)
        }
    }
}

fn describe(err: &AppError) -> &'static str {
    match err {
        AppError::OutOfStock { .. } => "Requested quantity exceeds available stock",
        _ => "Failed to add product",
    }
}

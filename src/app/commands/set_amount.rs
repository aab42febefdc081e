use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{CartStore, CatalogClient, Notifier};

/// Execute the set command: replace the amount of `product_id` with an
/// absolute value.
///
/// Amounts below 1 and products absent from the cart are rejections;
/// dropping an entry goes through the remove command instead.
pub fn execute<C, S, N>(
    ctx: &mut AppContext<C, S, N>,
    product_id: u64,
    amount: u32,
) -> Result<(), AppError>
where
    C: CatalogClient,
    S: CartStore,
    N: Notifier,
{
    match ctx.service_mut().update_product_amount(product_id, amount) {
        Ok(()) => {
            ctx.notifier().info(&format!("Set product {product_id} to amount {amount}"));
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
        _ => "Failed to change product quantity",
    }
}

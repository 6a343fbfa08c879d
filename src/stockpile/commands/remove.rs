use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::repository::StockRepository;
use crate::store::TableBackend;
use uuid::Uuid;

/// Remove an item entirely.
pub fn remove_item<B: TableBackend>(repo: &mut StockRepository<B>, id: Uuid) -> Result<CmdResult> {
    let item = repo.get_item(id)?.ok_or(StockError::ItemNotFound(id))?;
    repo.remove_item(id).into_result()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully removed the item '{}'.",
        item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}

/// Take `quantity` units out of an item, keeping the item itself.
///
/// Asking for more than is in stock is rejected without writing anything.
pub fn remove_quantity<B: TableBackend>(
    repo: &mut StockRepository<B>,
    id: Uuid,
    quantity: i64,
) -> Result<CmdResult> {
    if quantity <= 0 {
        return Err(StockError::Validation(
            "Quantity must be a positive whole number".to_string(),
        ));
    }

    let mut item = repo.get_item(id)?.ok_or(StockError::ItemNotFound(id))?;
    if quantity > item.quantity {
        return Err(StockError::Validation(
            "The quantity to remove is greater than the current quantity.".to_string(),
        ));
    }

    item.quantity -= quantity;
    repo.update_item(item.clone()).into_result()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully updated the item '{}'.",
        item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}

use crate::commands::{group, CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Item;
use crate::repository::StockRepository;
use crate::store::TableBackend;
use uuid::Uuid;

/// Add `quantity` of `name` to the inventory, under the named group if given.
///
/// A missing group is created first. The item is then stocked as in [`stock`].
pub fn run<B: TableBackend>(
    repo: &mut StockRepository<B>,
    name: &str,
    quantity: i64,
    group_name: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let group_id = match group_name {
        Some(group_name) => {
            let (group, ensured) = group::ensure(repo, group_name)?;
            result.merge(ensured);
            Some(group.id)
        }
        None => None,
    };

    result.merge(stock(repo, name, quantity, group_id)?);
    Ok(result)
}

/// Restock the item with this name in this group, or create it if there is none.
pub fn stock<B: TableBackend>(
    repo: &mut StockRepository<B>,
    name: &str,
    quantity: i64,
    group_id: Option<Uuid>,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StockError::Validation(
            "Item name cannot be empty".to_string(),
        ));
    }
    if quantity <= 0 {
        return Err(StockError::Validation(
            "Quantity must be a positive whole number".to_string(),
        ));
    }

    let existing = repo
        .list_items()?
        .into_iter()
        .find(|i| i.name == name && i.group_id == group_id);

    let mut result = CmdResult::default();
    let item = match existing {
        Some(mut item) => {
            item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                StockError::Validation(format!("Quantity of '{}' would overflow", name))
            })?;
            repo.update_item(item.clone()).into_result()?;
            result.add_message(CmdMessage::success(format!(
                "Successfully updated the item '{}'.",
                item.name
            )));
            item
        }
        None => {
            let item = Item::new(name, quantity, group_id);
            repo.add_item(item.clone()).into_result()?;
            result.add_message(CmdMessage::success(format!(
                "Successfully added the item '{}'.",
                item.name
            )));
            item
        }
    };

    result.affected_items.push(item);
    Ok(result)
}

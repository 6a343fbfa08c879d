use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::StockRepository;
use crate::store::TableBackend;

/// Item views, optionally restricted to the group with this name.
///
/// An unknown group yields an empty listing and a warning, not an error.
pub fn items<B: TableBackend>(
    repo: &StockRepository<B>,
    group_name: Option<&str>,
) -> Result<CmdResult> {
    let Some(group_name) = group_name else {
        return Ok(CmdResult::default().with_listed_items(repo.list_item_views(None)?));
    };

    match repo.find_group_by_name(group_name)? {
        Some(group) => {
            Ok(CmdResult::default().with_listed_items(repo.list_item_views(Some(group.id))?))
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning(format!(
                "Group '{}' does not exist",
                group_name
            )));
            Ok(result)
        }
    }
}

pub fn groups<B: TableBackend>(repo: &StockRepository<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_groups(repo.list_groups()?))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::StockRepository;
use crate::store::TableBackend;

/// Empty both tables. Items go first; if that fails, groups are left alone.
pub fn run<B: TableBackend>(repo: &mut StockRepository<B>) -> Result<CmdResult> {
    repo.clear_items().into_result()?;
    repo.clear_groups().into_result()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Successfully cleared all items and groups.",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn clears_everything() {
        let mut repo = StockRepository::in_memory();
        add::run(&mut repo, "Mouse", 5, Some("Peripherals")).unwrap();

        run(&mut repo).unwrap();
        assert!(repo.list_items().unwrap().is_empty());
        assert!(repo.list_groups().unwrap().is_empty());
        assert_eq!(repo.items_backend().contents(), Some(String::new()));
    }

    #[test]
    fn item_failure_keeps_groups() {
        let mut repo = StockRepository::in_memory();
        add::run(&mut repo, "Mouse", 5, Some("Peripherals")).unwrap();
        repo.items_backend().set_simulate_write_error(true);

        assert!(run(&mut repo).is_err());
        assert_eq!(repo.list_groups().unwrap().len(), 1);
    }
}

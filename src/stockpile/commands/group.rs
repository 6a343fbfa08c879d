use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Group;
use crate::repository::StockRepository;
use crate::store::TableBackend;

/// Create a new group. Fails if a group with the same name already exists.
pub fn create<B: TableBackend>(repo: &mut StockRepository<B>, name: &str) -> Result<CmdResult> {
    let name = validate_name(name)?;
    if repo.find_group_by_name(name)?.is_some() {
        return Err(StockError::Validation(format!(
            "The group '{}' already exists.",
            name
        )));
    }

    let group = Group::new(name);
    repo.add_group(group.clone()).into_result()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Group '{}' added.", name)));
    result.affected_groups.push(group);
    Ok(result)
}

/// Look a group up by name, creating it when absent.
///
/// The returned group is always re-read from the store after any write.
pub fn ensure<B: TableBackend>(
    repo: &mut StockRepository<B>,
    name: &str,
) -> Result<(Group, CmdResult)> {
    let name = validate_name(name)?;
    let mut result = CmdResult::default();

    if repo.find_group_by_name(name)?.is_none() {
        let created = create(repo, name)?;
        result.merge(created);
        result.messages = vec![CmdMessage::info(format!(
            "Group does not exist, created group '{}'",
            name
        ))];
    }

    let group = repo
        .find_group_by_name(name)?
        .ok_or_else(|| StockError::GroupNotFound(name.to_string()))?;
    Ok((group, result))
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StockError::Validation(
            "Group name cannot be empty".to_string(),
        ));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_group() {
        let mut repo = StockRepository::in_memory();
        let result = create(&mut repo, "Peripherals").unwrap();

        assert_eq!(result.affected_groups.len(), 1);
        let groups = repo.list_groups().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Peripherals");
    }

    #[test]
    fn refuses_duplicate_name() {
        let mut repo = StockRepository::in_memory();
        create(&mut repo, "Tools").unwrap();

        let err = create(&mut repo, "Tools").unwrap_err();
        assert!(matches!(err, StockError::Validation(_)));
        assert_eq!(repo.list_groups().unwrap().len(), 1);
    }

    #[test]
    fn refuses_blank_name() {
        let mut repo = StockRepository::in_memory();
        assert!(matches!(
            create(&mut repo, "   "),
            Err(StockError::Validation(_))
        ));
        assert!(repo.list_groups().unwrap().is_empty());
    }

    #[test]
    fn ensure_reuses_existing_group() {
        let mut repo = StockRepository::in_memory();
        let created = create(&mut repo, "Tools").unwrap().affected_groups[0].clone();

        let (group, result) = ensure(&mut repo, "Tools").unwrap();
        assert_eq!(group, created);
        assert!(result.messages.is_empty());
        assert_eq!(repo.list_groups().unwrap().len(), 1);
    }

    #[test]
    fn ensure_creates_missing_group() {
        let mut repo = StockRepository::in_memory();
        let (group, result) = ensure(&mut repo, "Cables").unwrap();

        assert_eq!(group.name, "Cables");
        assert_eq!(result.affected_groups, vec![group.clone()]);
        assert!(result.messages[0].content.contains("created group 'Cables'"));
        assert_eq!(repo.list_groups().unwrap(), vec![group]);
    }
}

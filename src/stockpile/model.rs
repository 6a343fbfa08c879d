use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group label shown for ungrouped items and for references to removed groups.
pub const NO_GROUP_LABEL: &str = "None";

/// A typed row of one of the persisted tables.
///
/// `COLUMNS` is the header row, in the same order serde writes the fields.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Uuid;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub group_id: Option<Uuid>,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: i64, group_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            group_id,
        }
    }
}

impl Record for Item {
    const COLUMNS: &'static [&'static str] = &["Id", "Name", "Quantity", "GroupId"];

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Record for Group {
    const COLUMNS: &'static [&'static str] = &["Id", "Name"];

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Read-only projection of an item with its group resolved to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub group: String,
}

impl ItemView {
    pub fn join(item: &Item, groups: &[Group], placeholder: &str) -> Self {
        let group = item
            .group_id
            .and_then(|gid| groups.iter().find(|g| g.id == gid))
            .map(|g| g.name.clone())
            .unwrap_or_else(|| placeholder.to_string());
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            group,
        }
    }

    /// One-line label used when picking an item from a list.
    pub fn choice_label(&self) -> String {
        format!("{} - x{} {} ({})", self.id, self.quantity, self.name, self.group)
    }
}

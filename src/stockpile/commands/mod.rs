//! # Command Layer
//!
//! Inventory operations shared by the one-shot CLI and the interactive menu.
//! Each command takes the repository, does its reads and writes, and returns a
//! [`CmdResult`] describing what changed. Nothing here touches the terminal.

use crate::model::{Group, Item, ItemView};

pub mod add;
pub mod clear;
pub mod group;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub affected_groups: Vec<Group>,
    pub listed_items: Vec<ItemView>,
    pub listed_groups: Vec<Group>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<ItemView>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_listed_groups(mut self, groups: Vec<Group>) -> Self {
        self.listed_groups = groups;
        self
    }

    /// Fold another result's effects and messages into this one, after ours.
    pub fn merge(&mut self, other: CmdResult) {
        self.affected_items.extend(other.affected_items);
        self.affected_groups.extend(other.affected_groups);
        self.listed_items.extend(other.listed_items);
        self.listed_groups.extend(other.listed_groups);
        self.messages.extend(other.messages);
    }
}

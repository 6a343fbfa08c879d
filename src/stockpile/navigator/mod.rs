//! # Page Navigator
//!
//! The interactive menu is a loop over [`Page`] values. Each page function
//! draws itself, runs its prompts, does its work through the command layer,
//! and returns the page to show next. `Menu` is where every page goes back to;
//! `Exit` ends the loop.
//!
//! Adding an item can detour through group creation. The add-group page is
//! handed a [`Continuation`] holding the name and quantity already typed, and
//! returns it as its next page, so add-item picks up where it left off. The
//! detour goes back through [`Navigator::run`] like any other transition and
//! never nests calls.
//!
//! Escape inside a page drops back to the menu without writing anything.
//! Recoverable errors are shown, gated, and also lead back to the menu. An
//! interruption (Ctrl-C) ends the session cleanly.

use crate::error::{Result, StockError};
use crate::repository::StockRepository;
use crate::store::TableBackend;
use crate::ui::keys::KeySource;
use crate::ui::prompt::ContinuePrompt;
use crate::ui::styles::STOCK_THEME;
use crate::ui::Screen;
use std::io::Write;
use tracing::debug;

pub mod pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Menu,
    AddItem,
    AddGroup,
    RemoveItem,
    ListItems,
    ClearAll,
    Exit,
}

/// Menu entries, in display order.
pub const MENU_ENTRIES: [PageId; 6] = [
    PageId::AddItem,
    PageId::AddGroup,
    PageId::RemoveItem,
    PageId::ListItems,
    PageId::ClearAll,
    PageId::Exit,
];

impl PageId {
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Menu => "Menu",
            PageId::AddItem => "Add Item",
            PageId::AddGroup => "Add Group",
            PageId::RemoveItem => "Remove Item",
            PageId::ListItems => "List Items",
            PageId::ClearAll => "Clear All",
            PageId::Exit => "Exit",
        }
    }
}

/// Name and quantity collected by the add-item page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: i64,
}

/// Where to go once a detour finishes, and what to bring along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continuation {
    pub resume: PageId,
    pub draft: ItemDraft,
}

impl Continuation {
    pub fn into_page(self) -> Page {
        match self.resume {
            PageId::AddItem => Page::AddItem(Some(self.draft)),
            other => Page::open(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Menu,
    AddItem(Option<ItemDraft>),
    AddGroup(Option<Continuation>),
    RemoveItem,
    ListItems,
    ClearAll,
    Exit,
}

impl Page {
    /// A fresh page with nothing carried over.
    pub fn open(id: PageId) -> Self {
        match id {
            PageId::Menu => Page::Menu,
            PageId::AddItem => Page::AddItem(None),
            PageId::AddGroup => Page::AddGroup(None),
            PageId::RemoveItem => Page::RemoveItem,
            PageId::ListItems => Page::ListItems,
            PageId::ClearAll => Page::ClearAll,
            PageId::Exit => Page::Exit,
        }
    }

    pub fn id(&self) -> PageId {
        match self {
            Page::Menu => PageId::Menu,
            Page::AddItem(_) => PageId::AddItem,
            Page::AddGroup(_) => PageId::AddGroup,
            Page::RemoveItem => PageId::RemoveItem,
            Page::ListItems => PageId::ListItems,
            Page::ClearAll => PageId::ClearAll,
            Page::Exit => PageId::Exit,
        }
    }
}

/// Everything a page works with. Built once per session.
pub struct Context<'a, B: TableBackend, K: KeySource, W: Write> {
    pub repo: &'a mut StockRepository<B>,
    pub screen: Screen<K, W>,
}

pub struct Navigator<'a, B: TableBackend, K: KeySource, W: Write> {
    ctx: Context<'a, B, K, W>,
}

impl<'a, B: TableBackend, K: KeySource, W: Write> Navigator<'a, B, K, W> {
    pub fn new(repo: &'a mut StockRepository<B>, screen: Screen<K, W>) -> Self {
        Self {
            ctx: Context { repo, screen },
        }
    }

    pub fn into_screen(self) -> Screen<K, W> {
        self.ctx.screen
    }

    /// Run pages until `Exit` is chosen or the session is interrupted.
    pub fn run(&mut self) -> Result<()> {
        let mut page = Page::Menu;
        loop {
            debug!(page = ?page.id(), "showing page");
            let shown = match page {
                Page::Exit => return Ok(()),
                Page::Menu => pages::menu(&mut self.ctx),
                Page::AddItem(draft) => pages::add_item(&mut self.ctx, draft),
                Page::AddGroup(next) => pages::add_group(&mut self.ctx, next),
                Page::RemoveItem => pages::remove_item(&mut self.ctx),
                Page::ListItems => pages::list_items(&mut self.ctx),
                Page::ClearAll => pages::clear_all(&mut self.ctx),
            };

            page = match shown {
                Ok(next) => next,
                Err(StockError::Interrupted) => {
                    debug!("session interrupted");
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => match self.report(&e) {
                    Ok(()) => Page::Menu,
                    Err(StockError::Interrupted) => return Ok(()),
                    Err(other) => return Err(other),
                },
                Err(e) => return Err(e),
            };
        }
    }

    fn report(&mut self, error: &StockError) -> Result<()> {
        debug!(error = %error, "page failed");
        let screen = &mut self.ctx.screen;
        screen.newline()?;
        screen.line(&STOCK_THEME.error.apply_to(error.to_string()).to_string())?;
        ContinuePrompt.show(screen)
    }
}

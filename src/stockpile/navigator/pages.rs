//! One function per page. Each returns the page to show next.

use super::{Context, Continuation, ItemDraft, Page, PageId, MENU_ENTRIES};
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::Item;
use crate::store::TableBackend;
use crate::ui::keys::KeySource;
use crate::ui::prompt::{ConfirmPrompt, ContinuePrompt, QuantityPrompt, TextPrompt};
use crate::ui::select::SelectPrompt;
use crate::ui::styles::STOCK_THEME;
use crate::ui::table::Table;
use crate::ui::Screen;
use console::Style;
use std::io::Write;

const APP_TITLE: &str = "Inventory System";
const CREATE_GROUP: &str = "Create a new group";
const CANCEL: &str = "Cancel...";
const NO_ITEMS: &str = "No items found.";

pub fn menu<B: TableBackend, K: KeySource, W: Write>(ctx: &mut Context<B, K, W>) -> Result<Page> {
    header(&mut ctx.screen, PageId::Menu.title(), &STOCK_THEME.heading)?;

    let items = ctx.repo.items_location();
    let groups = ctx.repo.groups_location();
    let screen = &mut ctx.screen;
    field(screen, "Items file", &items.display().to_string())?;
    field(screen, "Groups file", &groups.display().to_string())?;

    let entries = MENU_ENTRIES.iter().map(|p| p.title().to_string()).collect();
    match SelectPrompt::new("Select an option", entries).show(screen)? {
        Some(i) => Ok(Page::open(MENU_ENTRIES[i])),
        None => Ok(Page::Menu),
    }
}

/// Collect an item and add it, or restock the matching one.
///
/// With a draft (coming back from group creation) the name and quantity are
/// shown rather than asked for again.
pub fn add_item<B: TableBackend, K: KeySource, W: Write>(
    ctx: &mut Context<B, K, W>,
    draft: Option<ItemDraft>,
) -> Result<Page> {
    header(&mut ctx.screen, PageId::AddItem.title(), &STOCK_THEME.heading)?;

    let draft = match draft {
        Some(draft) => {
            field(&mut ctx.screen, "Name", &draft.name)?;
            field(&mut ctx.screen, "Quantity", &draft.quantity.to_string())?;
            draft
        }
        None => {
            let Some(name) = TextPrompt::new("Enter the name of the item:").show(&mut ctx.screen)?
            else {
                return Ok(Page::Menu);
            };
            let Some(quantity) =
                QuantityPrompt::new("Enter the quantity of the item:").show(&mut ctx.screen)?
            else {
                return Ok(Page::Menu);
            };
            ItemDraft { name, quantity }
        }
    };

    let groups = ctx.repo.list_groups()?;
    let mut choices: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
    choices.push(CREATE_GROUP.to_string());

    let Some(choice) = SelectPrompt::new("Select a group", choices).show(&mut ctx.screen)? else {
        return Ok(Page::Menu);
    };
    if choice == groups.len() {
        return Ok(Page::AddGroup(Some(Continuation {
            resume: PageId::AddItem,
            draft,
        })));
    }

    let picked = &groups[choice];
    let group = ctx
        .repo
        .get_group(picked.id)?
        .ok_or_else(|| StockError::GroupNotFound(picked.name.clone()))?;

    let result = commands::add::stock(ctx.repo, &draft.name, draft.quantity, Some(group.id))?;
    show_result(ctx, &result)?;
    ContinuePrompt.show(&mut ctx.screen)?;
    Ok(Page::Menu)
}

pub fn add_group<B: TableBackend, K: KeySource, W: Write>(
    ctx: &mut Context<B, K, W>,
    next: Option<Continuation>,
) -> Result<Page> {
    header(&mut ctx.screen, PageId::AddGroup.title(), &STOCK_THEME.heading)?;

    let Some(name) = TextPrompt::new("Enter the name of the group:").show(&mut ctx.screen)? else {
        return Ok(Page::Menu);
    };

    match commands::group::create(ctx.repo, &name) {
        Ok(result) => {
            messages(&mut ctx.screen, &result.messages)?;
            for group in &result.affected_groups {
                field(&mut ctx.screen, "Group ID", &group.id.to_string())?;
                field(&mut ctx.screen, "Name", &group.name)?;
            }
        }
        Err(StockError::Validation(reason)) => {
            messages(
                &mut ctx.screen,
                &[
                    CmdMessage::error(reason),
                    CmdMessage::error("Failed to add the group."),
                ],
            )?;
        }
        Err(e) => return Err(e),
    }

    ContinuePrompt.show(&mut ctx.screen)?;
    Ok(next.map(Continuation::into_page).unwrap_or(Page::Menu))
}

pub fn remove_item<B: TableBackend, K: KeySource, W: Write>(
    ctx: &mut Context<B, K, W>,
) -> Result<Page> {
    header(&mut ctx.screen, PageId::RemoveItem.title(), &STOCK_THEME.heading)?;

    let views = ctx.repo.list_item_views(None)?;
    if views.is_empty() {
        messages(&mut ctx.screen, &[CmdMessage::warning(NO_ITEMS)])?;
        ContinuePrompt.show(&mut ctx.screen)?;
        return Ok(Page::Menu);
    }

    let mut choices: Vec<String> = views.iter().map(|v| v.choice_label()).collect();
    choices.push(CANCEL.to_string());
    let view = match SelectPrompt::new("Select an item to remove", choices).show(&mut ctx.screen)? {
        Some(i) if i < views.len() => &views[i],
        _ => return Ok(Page::Menu),
    };

    let actions = vec![
        "Remove the item".to_string(),
        "Remove a specific quantity".to_string(),
        CANCEL.to_string(),
    ];
    let result = match SelectPrompt::new("What would you like to do?", actions).show(&mut ctx.screen)? {
        Some(0) => commands::remove::remove_item(ctx.repo, view.id)?,
        Some(1) => {
            let Some(quantity) =
                QuantityPrompt::new("Enter the quantity to remove:").show(&mut ctx.screen)?
            else {
                return Ok(Page::Menu);
            };
            commands::remove::remove_quantity(ctx.repo, view.id, quantity)?
        }
        _ => return Ok(Page::Menu),
    };

    show_result(ctx, &result)?;
    ContinuePrompt.show(&mut ctx.screen)?;
    Ok(Page::Menu)
}

pub fn list_items<B: TableBackend, K: KeySource, W: Write>(
    ctx: &mut Context<B, K, W>,
) -> Result<Page> {
    header(&mut ctx.screen, PageId::ListItems.title(), &STOCK_THEME.heading)?;

    let views = ctx.repo.list_item_views(None)?;
    if views.is_empty() {
        messages(&mut ctx.screen, &[CmdMessage::warning(NO_ITEMS)])?;
    } else {
        for line in Table::inventory(&views).render() {
            ctx.screen.line(&line)?;
        }
    }

    ContinuePrompt.show(&mut ctx.screen)?;
    Ok(Page::Menu)
}

pub fn clear_all<B: TableBackend, K: KeySource, W: Write>(
    ctx: &mut Context<B, K, W>,
) -> Result<Page> {
    header(&mut ctx.screen, PageId::ClearAll.title(), &STOCK_THEME.danger_heading)?;

    let confirmed = ConfirmPrompt::new("Are you sure you want to clear all items and groups?")
        .show(&mut ctx.screen)?;
    if confirmed {
        let result = commands::clear::run(ctx.repo)?;
        messages(&mut ctx.screen, &result.messages)?;
    } else {
        messages(&mut ctx.screen, &[CmdMessage::warning("Operation cancelled.")])?;
    }

    ContinuePrompt.show(&mut ctx.screen)?;
    Ok(Page::Menu)
}

fn header<K: KeySource, W: Write>(screen: &mut Screen<K, W>, title: &str, style: &Style) -> Result<()> {
    let rule = "─".repeat(APP_TITLE.chars().count() + 2);
    let border = &STOCK_THEME.border;
    screen.clear()?;
    screen.line(&border.apply_to(format!("┌{}┐", rule)).to_string())?;
    screen.line(&format!(
        "{} {} {}",
        border.apply_to("│"),
        STOCK_THEME.banner.apply_to(APP_TITLE),
        border.apply_to("│")
    ))?;
    screen.line(&border.apply_to(format!("└{}┘", rule)).to_string())?;
    screen.line(&style.apply_to(title).to_string())
}

fn field<K: KeySource, W: Write>(screen: &mut Screen<K, W>, label: &str, value: &str) -> Result<()> {
    screen.line(&format!("{} {}", STOCK_THEME.label.apply_to(format!("{}:", label)), value))
}

fn messages<K: KeySource, W: Write>(screen: &mut Screen<K, W>, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        screen.line(&STOCK_THEME.message(message))?;
    }
    Ok(())
}

fn show_result<B: TableBackend, K: KeySource, W: Write>(
    ctx: &mut Context<B, K, W>,
    result: &CmdResult,
) -> Result<()> {
    ctx.screen.newline()?;
    messages(&mut ctx.screen, &result.messages)?;
    for item in &result.affected_items {
        show_item(ctx, item)?;
    }
    Ok(())
}

fn show_item<B: TableBackend, K: KeySource, W: Write>(ctx: &mut Context<B, K, W>, item: &Item) -> Result<()> {
    let view = ctx.repo.join_item(item)?;
    field(&mut ctx.screen, "Item ID", &view.id.to_string())?;
    field(&mut ctx.screen, "Name", &view.name)?;
    field(&mut ctx.screen, "Quantity", &view.quantity.to_string())?;
    field(&mut ctx.screen, "Group", &view.group)
}

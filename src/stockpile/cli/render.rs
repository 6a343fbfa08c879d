//! Plain stdout output for the one-shot commands.

use stockpile::commands::CmdMessage;
use stockpile::ui::styles::STOCK_THEME;
use stockpile::ui::table::Table;

pub const NO_ITEMS: &str = "No items found.";
pub const NO_GROUPS: &str = "No groups found.";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", STOCK_THEME.message(message));
    }
}

/// Print the table, or `empty` when it has no rows.
pub fn print_table(table: &Table, empty: &str) {
    if table.is_empty() {
        println!("{}", STOCK_THEME.warning.apply_to(empty));
        return;
    }
    for line in table.render() {
        println!("{}", line);
    }
}

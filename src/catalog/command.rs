pub mod add_item_cmd;
pub mod list_items_cmd;

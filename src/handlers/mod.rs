pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod not_found;
pub mod patch;
pub mod replace;

pub use create::create_item;
pub use delete::delete_item;
pub use get::find_item;
pub use list::find_items;
pub use not_found::route_not_found;
pub use patch::patch_item;
pub use replace::replace_item;

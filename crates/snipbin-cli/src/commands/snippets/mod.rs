pub mod create;
pub mod get;
pub mod list;

pub use create::handle_create;
pub use get::handle_get;
pub use list::handle_list;

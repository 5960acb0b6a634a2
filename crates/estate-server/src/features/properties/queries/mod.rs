pub mod get;
pub mod list;

pub use get::GetPropertyQuery;
pub use list::ListPropertiesQuery;

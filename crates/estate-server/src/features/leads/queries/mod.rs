pub mod get;
pub mod list;

pub use get::GetLeadQuery;
pub use list::{LeadListItem, ListLeadsQuery};

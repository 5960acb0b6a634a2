pub mod list;

pub use list::ListContactsQuery;

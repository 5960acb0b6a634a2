pub mod list;

pub use list::ListActivityLogsQuery;

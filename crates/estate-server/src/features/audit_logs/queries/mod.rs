pub mod list;

pub use list::ListAuditLogsQuery;

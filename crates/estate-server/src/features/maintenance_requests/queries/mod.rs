pub mod list;

pub use list::ListMaintenanceRequestsQuery;

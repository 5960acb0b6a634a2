pub mod list;

pub use list::ListNotificationsQuery;

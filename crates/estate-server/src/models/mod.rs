//! Domain entity records
//!
//! Plain data records persisted through the unit of work. Every entity
//! carries the shared base fields (identity assigned on first save, creation
//! timestamp, last-modified timestamp and soft-delete flag where the domain
//! uses them) and registers its auditable scalar fields explicitly in its
//! `Entity` impl. Audit snapshot keys keep the platform's historical
//! PascalCase field names.

pub mod activity_log;
pub mod blog;
pub mod contact;
pub mod favorite;
pub mod lead;
pub mod maintenance_request;
pub mod notification;
pub mod property;

pub use activity_log::ActivityLog;
pub use blog::Blog;
pub use contact::Contact;
pub use favorite::Favorite;
pub use lead::Lead;
pub use maintenance_request::MaintenanceRequest;
pub use notification::Notification;
pub use property::Property;

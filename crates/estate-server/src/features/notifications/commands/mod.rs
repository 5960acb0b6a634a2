pub mod create;
pub mod mark_read;

pub use create::CreateNotificationCommand;
pub use mark_read::MarkNotificationReadCommand;

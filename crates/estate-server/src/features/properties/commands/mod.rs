pub mod create;
pub mod delete;
pub mod update;

pub use create::CreatePropertyCommand;
pub use delete::DeletePropertyCommand;
pub use update::UpdatePropertyCommand;

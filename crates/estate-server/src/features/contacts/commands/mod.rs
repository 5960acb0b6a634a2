pub mod create;

pub use create::CreateContactCommand;

pub mod create;
pub mod update_status;

pub use create::CreateLeadCommand;
pub use update_status::UpdateLeadStatusCommand;

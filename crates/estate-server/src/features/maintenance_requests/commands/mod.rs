pub mod create;
pub mod update_status;

pub use create::CreateMaintenanceRequestCommand;
pub use update_status::UpdateMaintenanceStatusCommand;

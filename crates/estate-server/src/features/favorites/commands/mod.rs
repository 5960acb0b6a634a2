pub mod add;
pub mod remove;

pub use add::AddFavoriteCommand;
pub use remove::RemoveFavoriteCommand;

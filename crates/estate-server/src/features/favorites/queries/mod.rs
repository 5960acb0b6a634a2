pub mod list;

pub use list::{FavoriteListItem, ListFavoritesQuery};

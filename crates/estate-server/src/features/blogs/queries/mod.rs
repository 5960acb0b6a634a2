pub mod get;
pub mod list;

pub use get::GetBlogQuery;
pub use list::ListBlogsQuery;

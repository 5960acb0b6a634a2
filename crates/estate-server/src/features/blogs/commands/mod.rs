pub mod create;

pub use create::CreateBlogCommand;

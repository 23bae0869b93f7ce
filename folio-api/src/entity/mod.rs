pub mod prelude;

pub mod blog_posts;
pub mod comments;
pub mod photos;
pub mod reactions;

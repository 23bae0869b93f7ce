pub use super::blog_posts::Entity as BlogPosts;
pub use super::comments::Entity as Comments;
pub use super::photos::Entity as Photos;
pub use super::reactions::Entity as Reactions;

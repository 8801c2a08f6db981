//! Domain controllers: the only validation authority between the
//! presentation layer and the repository.

pub mod comments;
pub mod tasks;

pub use comments::CommentController;
pub use tasks::TaskController;

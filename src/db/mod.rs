pub mod admins;
pub mod comments;
pub mod likes;
pub mod projects;

pub mod blog;
pub mod cv;
pub mod projects;
pub mod recipes;

pub mod todo;
pub mod view;

pub mod compare;
pub mod save;

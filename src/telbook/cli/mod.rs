pub mod print;
pub mod prompt;

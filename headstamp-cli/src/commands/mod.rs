pub mod hook;
pub mod preview;

mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod lint;
pub mod render;

pub use command_result::*;

pub mod binary;
pub mod helper;

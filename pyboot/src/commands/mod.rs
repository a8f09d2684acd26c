pub mod env;
pub mod init;

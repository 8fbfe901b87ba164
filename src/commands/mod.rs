pub mod init;
pub mod version;

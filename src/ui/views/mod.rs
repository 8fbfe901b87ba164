pub mod config;
pub mod detection;
pub mod init;
pub mod version;

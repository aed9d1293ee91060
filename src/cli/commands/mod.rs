pub mod config;
pub mod export;
pub mod grid;
pub mod init;
pub mod route;
pub mod summary;

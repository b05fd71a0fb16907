#[cfg(windows)]
pub mod debug;
pub mod doctor;
pub mod init;
pub mod parse;

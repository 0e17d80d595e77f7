pub mod docs;
pub mod init;
pub mod login;

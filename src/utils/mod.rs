pub mod extract_user;
pub mod jwt;

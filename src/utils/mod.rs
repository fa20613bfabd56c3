pub mod session;
pub mod urls;

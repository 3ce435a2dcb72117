#[cfg(feature = "ssr")]
pub mod connection;
#[cfg(feature = "ssr")]
pub mod repository;

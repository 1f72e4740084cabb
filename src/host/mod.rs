pub(crate) mod compare;
pub(crate) mod config;
pub(crate) mod handler;
pub mod page;

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod document;
pub mod pages;
pub mod selection;

#[cfg(feature = "csr")]
pub use app::App;

//! # client
//!
//! Leptos UI for the portfolio page. Rendered on the server by the `server`
//! crate through `leptos_axum`; nothing here needs a browser.
//!
//! This crate contains the static page content, the presentational
//! components, the page assembly, and the HTML document shell.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;

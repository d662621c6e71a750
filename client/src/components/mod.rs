//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless: each one maps its props straight to markup and
//! reads no context. The page assembly in `pages::index` feeds them content.

pub mod badge;
pub mod bio_line;
pub mod project_card;

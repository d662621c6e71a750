//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the static content and delegates rendering details to
//! `components`.

pub mod index;

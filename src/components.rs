//! Reusable HTML components for page generation
//!
//! Maud component functions for the portfolio page: layout wrapper, site
//! header, command palette dialog and footer.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod palette;

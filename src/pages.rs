//! Page generation modules
//!
//! The site is a single page; its generator composes the shared components
//! with rendered sections and the network diagram.

pub mod index;

//! Helpers shared by every feature slice

pub mod pagination;
pub mod validation;

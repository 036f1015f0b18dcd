//! Business logic services for listing site content.

pub mod administration;
pub mod gallery;
pub mod listing;
pub mod normalize;
pub mod updates;

//! Database rows, request bodies and view-models for the listed content.

pub mod administration;
pub mod media;
pub mod pagination;
pub mod update;

//! Projection module - "what would it be worth today" estimate at a flat
//! annual return.

mod projection_model;
mod projection_service;

pub use projection_model::{Projection, ProjectionInput};
pub use projection_service::{estimate, months_between};

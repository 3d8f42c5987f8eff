//! Domain model for the report presenter.

pub mod elements;
pub mod presenter;
pub mod view;

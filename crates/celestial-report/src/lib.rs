//! Celestial Mirror — Report Presenter.
//!
//! Holds the local UI state of a displayed report (selected time scope,
//! hovered element, open action) and projects it, together with the report,
//! into display content. Nothing here triggers a fetch.

pub mod domain;

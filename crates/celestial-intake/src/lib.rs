//! Celestial Mirror — Input Collector.
//!
//! A sequential wizard that gathers name, birth date, and birth time and
//! hands the finished profile to the reading cycle.

pub mod domain;

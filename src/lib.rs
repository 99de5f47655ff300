//! Next Wave: career and education decision support.
//!
//! Program catalog, selection rules, cost projection and the pathway
//! gateway, driven by three wizard flows. The `service` module is the
//! server side of the pathway call.

pub mod catalog;
pub mod config;
pub mod error;
pub mod finance;
pub mod pathway;
pub mod selection;
pub mod service;
pub mod wizard;

//! cforg: Organization Summaries
//!
//! Resolves an organization on a Cloud Controller style platform and renders its domains, quota,
//! spaces and space quotas, or just its guid.

pub mod cli;
pub mod cloud;
pub mod config;
pub mod error;
pub mod logging;
pub mod org;
pub mod session;

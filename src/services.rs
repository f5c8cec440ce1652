//! Third-party API clients.
//!
//! Each service is a single-shot HTTP GET with a fixed timeout. Failures
//! never cross the boundary as errors: every public fetch method logs and
//! collapses to `None` (or a hardcoded fallback for location), so callers
//! only ever see optional results.

pub mod crypto;
pub mod location;
pub mod weather;

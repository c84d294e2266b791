//! Configuration Module
//!
//! Plain settings records handed to the tracker at setup. Each one
//! supports a field-wise `copy()` so a host app can retain and mutate
//! its own instance without affecting the tracker's.

pub mod session;
pub mod subject;

pub use session::SessionConfiguration;
pub use subject::{Size, SubjectConfiguration};

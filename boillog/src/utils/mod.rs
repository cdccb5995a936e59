//! # Utility Modules
//!
//! Cross-cutting helpers shared by the emitter and the timing helper.
//!
//! ## Sub-modules
//!
//! - **`logging`**: installs the `tracing` subscriber that receives the crate's own
//!   diagnostics (failed directory creation, unparsable flags, and so on).
//!
//! - **`timestamp`**: formats record timestamps as `YYYY-MM-DD HH:MM:SS`.

pub mod logging;
pub mod timestamp;

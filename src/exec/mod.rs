// src/exec/mod.rs

//! Single invocation layer.
//!
//! This module resolves an executable and runs it once, either wired to the
//! caller's own streams or with its output captured.
//!
//! - [`resolve`] turns an argv into a resolved executable path.
//! - [`runner`] holds the [`Runner`] trait and [`SystemRunner`], the
//!   implementation that launches real processes via `std::process`. Tests
//!   can swap in a fake runner.
//! - [`quiet`] provides the best-effort capturing variants that never
//!   surface a failure.
//! - [`sink`] defines the diagnostic [`LogSink`] those variants report to.

pub mod quiet;
pub mod resolve;
pub mod runner;
pub mod sink;

pub use quiet::{out_logged, out_quiet};
pub use resolve::resolve;
pub use runner::{Runner, SystemRunner};
pub use sink::{LogSink, TracingSink};

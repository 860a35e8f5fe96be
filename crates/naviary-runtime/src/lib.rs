//! Naviary Runtime Library
//!
//! Output primitives for compiled Naviary programs, which have no standard
//! library of their own. The C entry points (`print`, `printBool`,
//! `printString`, `printFloat`) write `"🚀 Naviary says: <value>"` lines to
//! stdout. Builds with the `debug-mirror` feature also write
//! `"[DEBUG] printed value: <value>"` to stderr.
//!
//! The [`Shim`] type exposes the same behavior over arbitrary writers.

#![allow(clippy::not_unsafe_ptr_arg_deref)]

mod config;
mod error;
mod io;
mod message;
mod shim;

pub use config::*;
pub use error::*;
pub use io::*;
pub use message::*;
pub use shim::*;

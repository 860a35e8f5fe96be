//! The output shim: renders values and writes them to a pair of streams.

use std::io::{self, Stderr, Stdout, Write};

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::message::{self, Value};

/// Writes printed values to an output stream, optionally mirroring them
/// to a diagnostic stream.
pub struct Shim<O, D> {
    config: ShimConfig,
    out: O,
    diag: D,
}

impl Shim<Stdout, Stderr> {
    /// A shim over the process stdout and stderr with the build's defaults.
    pub fn stdio() -> Self {
        Self::new(ShimConfig::default(), io::stdout(), io::stderr())
    }
}

impl<O: Write, D: Write> Shim<O, D> {
    pub fn new(config: ShimConfig, out: O, diag: D) -> Self {
        Self { config, out, diag }
    }

    /// Write one value.
    ///
    /// Each stream gets a single `write_all` of a complete line. The mirror
    /// write is attempted even when the output write failed; the first
    /// error is returned.
    pub fn emit(&mut self, value: Value<'_>) -> Result<(), ShimError> {
        let line = message::primary_line(&self.config.tag, &value);
        let output = self.out.write_all(&line).map_err(ShimError::Output);

        if self.config.mirror.is_enabled() {
            let line = message::mirror_line(&value);
            let mirrored = self.diag.write_all(&line).map_err(ShimError::Diagnostic);
            output?;
            return mirrored;
        }

        output
    }

    pub fn print_int(&mut self, value: i64) -> Result<(), ShimError> {
        self.emit(Value::Int(value))
    }

    pub fn print_float(&mut self, value: f64) -> Result<(), ShimError> {
        self.emit(Value::Float(value))
    }

    pub fn print_bool(&mut self, value: bool) -> Result<(), ShimError> {
        self.emit(Value::Bool(value))
    }

    pub fn print_text(&mut self, value: &[u8]) -> Result<(), ShimError> {
        self.emit(Value::Text(value))
    }

    /// Consume the shim, returning the output and diagnostic streams.
    pub fn into_parts(self) -> (O, D) {
        (self.out, self.diag)
    }
}

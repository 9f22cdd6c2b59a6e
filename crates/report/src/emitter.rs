// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service-message emission: one clock read, one write per call.

use std::io::Write;

use tcm_core::{Clock, MessageError, ServiceMessage};
use thiserror::Error;

/// Errors surfaced by [`MessageEmitter`]
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Message(#[from] MessageError),
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes service messages to an injected sink using an injected clock.
///
/// Each call renders the full line in memory, then performs exactly one
/// write. Nothing is buffered across calls and no flush is issued; write
/// failures propagate unchanged so the caller decides whether lost
/// telemetry matters. Callers sharing one sink across threads must
/// serialize access themselves.
pub struct MessageEmitter<C: Clock, W: Write> {
    clock: C,
    sink: W,
}

impl<C: Clock, W: Write> MessageEmitter<C, W> {
    pub fn new(clock: C, sink: W) -> Self {
        Self { clock, sink }
    }

    /// Emit a message built from `name` and ordered `(key, value)` pairs.
    pub fn emit(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), EmitError> {
        let mut message = ServiceMessage::new(name)?;
        for (key, value) in attributes {
            message = message.attr(*key, *value);
        }
        self.emit_message(&message)
    }

    /// Emit an already-built message.
    pub fn emit_message(&mut self, message: &ServiceMessage) -> Result<(), EmitError> {
        let line = message.render(self.clock.now());
        self.sink.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Mutable access to the sink, for interleaving raw output between
    /// service messages.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the emitter and hand back the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

#[cfg(test)]
#[path = "emitter_tests.rs"]
mod tests;

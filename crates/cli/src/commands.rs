// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tcm_core::SystemClock;
use tcm_report::{MessageEmitter, TestReporter};

use crate::libtest::Translator;

/// `tcm send`: emit one service message to stdout.
pub fn send(name: &str, attributes: &[String]) -> Result<()> {
    let mut pairs = Vec::with_capacity(attributes.len());
    for attribute in attributes {
        let (key, value) = attribute
            .split_once('=')
            .with_context(|| format!("attribute '{attribute}' is not KEY=VALUE"))?;
        pairs.push((key, value));
    }

    let stdout = io::stdout();
    let mut emitter = MessageEmitter::new(SystemClock, stdout.lock());
    emitter.emit(name, &pairs)?;
    Ok(())
}

/// `tcm libtest`: translate libtest JSON event lines from stdin.
pub fn libtest(suite_name: &str) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut translator = Translator::new(suite_name, TestReporter::new(stdout.lock()));

    for line in stdin.lock().lines() {
        let line = line.context("reading libtest output from stdin")?;
        translator.line(&line)?;
    }
    translator.finish()?;
    Ok(())
}

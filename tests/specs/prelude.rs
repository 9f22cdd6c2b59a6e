// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for binary specs.

use assert_cmd::Command;

/// Command for the `tcm` binary.
pub fn tcm() -> Command {
    Command::cargo_bin("tcm").expect("tcm binary should be built")
}

/// Decoded stdout of a successful run.
pub fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout should be UTF-8")
}

/// Replace every volatile `timestamp='...'` value with `TS` so transcripts
/// compare deterministically, the same trick the golden files play with
/// wall-clock output.
pub fn normalize(output: &str) -> String {
    let mut normalized = String::with_capacity(output.len());
    let mut rest = output;
    const MARKER: &str = "timestamp='";
    while let Some(start) = rest.find(MARKER) {
        let value_start = start + MARKER.len();
        normalized.push_str(&rest[..value_start]);
        match rest[value_start..].find('\'') {
            Some(end) => {
                normalized.push_str("TS");
                rest = &rest[value_start + end..];
            }
            None => {
                rest = &rest[value_start..];
                break;
            }
        }
    }
    normalized.push_str(rest);
    normalized
}

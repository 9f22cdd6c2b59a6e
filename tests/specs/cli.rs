// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `tcm detect` and `tcm send`.

use similar_asserts::assert_eq;

use crate::prelude::*;

#[test]
fn detect_succeeds_under_teamcity() {
    tcm()
        .arg("detect")
        .env("TEAMCITY_VERSION", "2025.1")
        .assert()
        .success();
}

#[test]
fn detect_counts_empty_value_as_present() {
    tcm()
        .arg("detect")
        .env("TEAMCITY_VERSION", "")
        .assert()
        .success();
}

#[test]
fn detect_fails_outside_teamcity() {
    tcm()
        .arg("detect")
        .env_remove("TEAMCITY_VERSION")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn send_emits_one_framed_message() {
    let out = stdout_of(tcm().args(["send", "buildStatus", "text=ok", "status=SUCCESS"]));
    assert_eq!(
        normalize(&out),
        "\n##teamcity[buildStatus timestamp='TS' text='ok' status='SUCCESS']\n"
    );
}

#[test]
fn send_without_attributes() {
    let out = stdout_of(tcm().args(["send", "dummyMessage"]));
    assert_eq!(normalize(&out), "\n##teamcity[dummyMessage timestamp='TS']\n");
}

#[test]
fn send_escapes_attribute_values() {
    let out = stdout_of(tcm().args(["send", "message", "text=a'b [ok]"]));
    assert_eq!(
        normalize(&out),
        "\n##teamcity[message timestamp='TS' text='a|'b |[ok|]']\n"
    );
}

#[test]
fn send_preserves_attribute_order() {
    let out = stdout_of(tcm().args([
        "send",
        "dummyMessage",
        "fruit=apple",
        "meat=steak",
        "pie=raspberry",
    ]));
    assert_eq!(
        normalize(&out),
        "\n##teamcity[dummyMessage timestamp='TS' \
         fruit='apple' meat='steak' pie='raspberry']\n"
    );
}

#[test]
fn send_rejects_malformed_attribute() {
    let output = tcm()
        .args(["send", "m", "no-equals-sign"])
        .output()
        .expect("tcm should spawn");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("KEY=VALUE"), "stderr: {stderr}");
}

#[test]
fn usage_shown_without_arguments() {
    let output = tcm().output().expect("tcm should spawn");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

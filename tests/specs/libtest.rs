// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `tcm libtest`: full-transcript comparison against the
//! expected service-message stream, timestamps normalized.

use similar_asserts::assert_eq;

use crate::prelude::*;

const MIXED_RUN: &str = concat!(
    "running 2 tests\n",
    r#"{"type":"suite","event":"started","test_count":2}"#,
    "\n",
    r#"{"type":"test","event":"started","name":"escape::escapes"}"#,
    "\n",
    r#"{"type":"test","name":"escape::escapes","event":"ok","exec_time":0.012}"#,
    "\n",
    r#"{"type":"test","event":"started","name":"message::renders"}"#,
    "\n",
    r#"{"type":"test","name":"message::renders","event":"failed","stdout":"boom\n"}"#,
    "\n",
    r#"{"type":"suite","event":"failed","passed":1,"failed":1,"ignored":0,"measured":0,"filtered_out":0,"exec_time":0.014}"#,
    "\n",
);

#[test]
fn translates_a_mixed_run() {
    let out = stdout_of(tcm().arg("libtest").write_stdin(MIXED_RUN));
    assert_eq!(
        normalize(&out),
        "running 2 tests\n\
         \n##teamcity[testSuiteStarted timestamp='TS' name='rust']\n\
         \n##teamcity[testStarted timestamp='TS' name='escape::escapes']\n\
         \n##teamcity[testFinished timestamp='TS' name='escape::escapes' duration='12']\n\
         \n##teamcity[testStarted timestamp='TS' name='message::renders']\n\
         \n##teamcity[testFailed timestamp='TS' name='message::renders' \
         message='test failed' details='boom|n']\n\
         \n##teamcity[testFinished timestamp='TS' name='message::renders']\n\
         \n##teamcity[testSuiteFinished timestamp='TS' name='rust']\n"
    );
}

#[test]
fn custom_suite_name() {
    let run = concat!(
        r#"{"type":"suite","event":"started","test_count":0}"#,
        "\n",
        r#"{"type":"suite","event":"ok","passed":0,"failed":0,"ignored":0,"measured":0,"filtered_out":0,"exec_time":0.0}"#,
        "\n",
    );
    let out = stdout_of(tcm().args(["libtest", "--suite-name", "integration"]).write_stdin(run));
    assert_eq!(
        normalize(&out),
        "\n##teamcity[testSuiteStarted timestamp='TS' name='integration']\n\
         \n##teamcity[testSuiteFinished timestamp='TS' name='integration']\n"
    );
}

#[test]
fn empty_input_produces_no_output() {
    let out = stdout_of(tcm().arg("libtest").write_stdin(""));
    assert_eq!(out, "");
}

#[test]
fn truncated_stream_still_closes_the_suite() {
    let run = concat!(r#"{"type":"suite","event":"started","test_count":5}"#, "\n");
    let out = stdout_of(tcm().arg("libtest").write_stdin(run));
    assert!(out.contains("testSuiteFinished"));
}

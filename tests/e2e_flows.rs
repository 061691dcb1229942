mod common;

use common::TestEnv;
use std::fs;

#[test]
fn evaluate_flags_dob_variant_as_weak() {
    let env = TestEnv::new();

    let out = env.run_json(&["evaluate", "0201", "--dob", "1998-01-02"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["pin"], "0201");
    assert_eq!(out["data"]["strength"], "WEAK");
    let reasons = out["data"]["reasons"].as_array().expect("reasons array");
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons[0], "DEMOGRAPHIC_DOB_SELF");
}

#[test]
fn evaluate_flags_dictionary_pin_as_commonly_used() {
    let env = TestEnv::new();
    let dict = env.write_dictionary("1234\n0000\n123456\n");

    let out = env.run_json(&["--dictionary", &dict, "evaluate", "1234"]);
    assert_eq!(out["data"]["strength"], "WEAK");
    assert_eq!(out["data"]["reasons"][0], "COMMONLY_USED");
}

#[test]
fn evaluate_reports_strong_for_unrelated_pin() {
    let env = TestEnv::new();

    let out = env.run_json(&["evaluate", "9374", "--dob", "1995-07-14"]);
    assert_eq!(out["data"]["strength"], "STRONG");
    assert_eq!(
        out["data"]["reasons"].as_array().expect("reasons array").len(),
        0
    );
}

#[test]
fn evaluate_collects_multiple_reasons_in_check_order() {
    let env = TestEnv::new();
    let dict = env.write_dictionary("1998\n");

    let out = env.run_json(&[
        "--dictionary",
        &dict,
        "evaluate",
        "1998",
        "--dob",
        "1998-01-02",
    ]);
    assert_eq!(out["data"]["strength"], "WEAK");
    let reasons = out["data"]["reasons"].as_array().expect("reasons array");
    assert_eq!(reasons[0], "COMMONLY_USED");
    assert_eq!(reasons[1], "DEMOGRAPHIC_DOB_SELF");
}

#[test]
fn suggest_accept_ledger_cycle() {
    let env = TestEnv::new();

    let suggest = env.run_json(&[
        "suggest",
        "--length",
        "6",
        "--dob",
        "1998-01-02",
        "--spouse-dob",
        "1997-02-02",
    ]);
    assert_eq!(suggest["ok"], true);
    assert_eq!(suggest["data"]["status"], "ok");
    let pin = suggest["data"]["pin"].as_str().expect("suggested pin");
    assert_eq!(pin.len(), 6);
    assert!(pin.bytes().all(|b| b.is_ascii_digit()));

    // a suggestion must evaluate strong under the same demographics
    let verdict = env.run_json(&[
        "evaluate",
        pin,
        "--dob",
        "1998-01-02",
        "--spouse-dob",
        "1997-02-02",
    ]);
    assert_eq!(verdict["data"]["strength"], "STRONG");

    let accept = env.run_json(&["accept", pin]);
    assert_eq!(accept["data"]["status"], "recorded");

    let contains = env.run_json(&["ledger", "contains", pin]);
    assert_eq!(contains["data"], true);

    let again = env.run_json(&["accept", pin]);
    assert_eq!(again["data"]["status"], "already_recorded");

    let status = env.run_json(&["ledger", "status"]);
    assert_eq!(status["data"]["entries"], 1);
}

#[test]
fn ledger_stores_digests_not_raw_pins() {
    let env = TestEnv::new();

    env.run_json(&["accept", "4821"]);
    let raw = fs::read_to_string(env.default_ledger_path()).expect("ledger written");
    assert!(!raw.contains("4821"));
    let line = raw.lines().next().expect("one ledger entry");
    assert_eq!(line.len(), 64);
    assert!(line.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[test]
fn suggest_reports_exhaustion_when_space_is_covered() {
    let env = TestEnv::new();
    let all: String = (0..10_000).map(|n| format!("{n:04}\n")).collect();
    let dict = env.write_dictionary(&all);

    let out = env.run_json(&[
        "--dictionary",
        &dict,
        "suggest",
        "--length",
        "4",
        "--max-attempts",
        "50",
    ]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["status"], "exhausted");
    assert!(out["data"]["pin"].is_null());
    assert_eq!(out["data"]["attempts"], 50);
}

#[test]
fn malformed_date_is_rejected_with_stable_code() {
    let env = TestEnv::new();

    let err = env.run_json_failure(&["evaluate", "1234", "--dob", "1998/01/02"]);
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "MALFORMED_DATE");
    let msg = err["error"]["message"].as_str().unwrap_or("");
    assert!(msg.contains("YYYY-MM-DD"));
}

#[test]
fn malformed_pin_is_rejected_with_stable_code() {
    let env = TestEnv::new();

    for bad in ["12345", "12a4", "123"] {
        let err = env.run_json_failure(&["evaluate", bad]);
        assert_eq!(err["error"]["code"], "MALFORMED_PIN");
    }

    let err = env.run_json_failure(&["accept", "12345"]);
    assert_eq!(err["error"]["code"], "MALFORMED_PIN");
}

#[test]
fn variants_lists_reference_patterns() {
    let env = TestEnv::new();

    let out = env.run_json(&["variants", "1998-01-02", "--length", "4"]);
    let list: Vec<String> = out["data"]
        .as_array()
        .expect("variant array")
        .iter()
        .map(|v| v.as_str().expect("variant string").to_string())
        .collect();
    for expected in [
        "0201", "0102", "9801", "0198", "9802", "0298", "1998", "1902", "0219", "0119", "1901",
    ] {
        assert!(list.contains(&expected.to_string()), "missing {expected}");
    }
    assert!(list.iter().all(|v| v.len() == 4));
}

#[test]
fn ledger_starts_empty() {
    let env = TestEnv::new();

    let status = env.run_json(&["ledger", "status"]);
    assert_eq!(status["data"]["entries"], 0);

    let contains = env.run_json(&["ledger", "contains", "1234"]);
    assert_eq!(contains["data"], false);
}

#[test]
fn config_file_caps_suggestion_attempts() {
    let env = TestEnv::new();
    let all: String = (0..10_000).map(|n| format!("{n:04}\n")).collect();
    let dict = env.write_dictionary(&all);

    let config_dir = env.home.join(".config/mpinguard");
    fs::create_dir_all(&config_dir).expect("create config dir");
    fs::write(
        config_dir.join("config.toml"),
        "[suggest]\nmax_attempts = 7\n",
    )
    .expect("write config file");

    let out = env.run_json(&["--dictionary", &dict, "suggest", "--length", "4"]);
    assert_eq!(out["data"]["status"], "exhausted");
    assert_eq!(out["data"]["attempts"], 7);
}

use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn gesturehud_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_gesturehud").expect("gesturehud test binary not built")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(gesturehud_bin())
        .args(args)
        .env_remove("GESTUREHUD_LOCALE")
        .env("GESTUREHUD_NO_LOGS", "1")
        .output()
        .expect("run gesturehud")
}

#[test]
fn gesturehud_help_mentions_name() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    assert!(combined_output(&output).contains("Gesture HUD"));
}

#[test]
fn once_renders_active_status_card() {
    let output = run(&[
        "--once",
        "--theme",
        "none",
        "--locale",
        "en",
        "--permission",
        "granted",
        "--gesture",
        "open",
        "--tracking",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Gesture recognized"));
    assert!(stdout.contains("Open hand - galaxy"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn once_defaults_to_chinese_request_prompt() {
    let output = run(&["--once", "--theme", "none"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("启用手势控制"));
}

#[test]
fn json_reports_selected_variant() {
    let output = run(&["--json", "--locale", "en", "--permission", "denied"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(report["view"]["variant"], "denied");
    assert_eq!(report["view"]["title"], "Camera permission denied");
    assert_eq!(report["inputs"]["permission"], "denied");
}

#[test]
fn once_click_on_prompt_requests_permission() {
    let output = run(&["--once", "--click", "--theme", "none", "--locale", "en"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("click: requested; permission: requesting"));
    assert!(stdout.contains("Requesting permission..."));
}

#[test]
fn once_click_while_requesting_is_disabled() {
    let output = run(&["--json", "--click", "--permission", "requesting"]);
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["click"], "disabled");
    assert_eq!(report["view"]["enabled"], false);
}

#[test]
fn unknown_gesture_is_rejected() {
    let output = run(&["--once", "--gesture", "wave"]);
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("wave"));
}

#[test]
fn narrow_width_fails_validation() {
    let output = run(&["--once", "--width", "10"]);
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--width"));
}

#[test]
fn once_click_on_denied_card_is_inert() {
    let output = run(&["--once", "--click", "--theme", "none", "--permission", "denied"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("click: inert; permission: denied"));
}

#[test]
fn numeric_logging_env_values_are_accepted() {
    let output = Command::new(gesturehud_bin())
        .args(["--once", "--theme", "none"])
        .env("GESTUREHUD_NO_LOGS", "1")
        .env("GESTUREHUD_LOGS", "0")
        .output()
        .expect("run gesturehud");
    assert!(output.status.success(), "{}", combined_output(&output));
}

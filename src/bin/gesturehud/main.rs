//! Gesture HUD demo entrypoint.
//!
//! Renders the camera gesture status card for a set of inputs, either once to stdout
//! (`--once`, optionally as JSON) or as an interactive full-screen view where keys and
//! mouse clicks drive the inputs and a simulated resolver settles permission requests.

mod demo;
mod ui;

use std::time::Instant;

use anyhow::{Context, Result};
use gesturehud::config::AppConfig;
use gesturehud::indicator::format_status_banner;
use gesturehud::{init_logging, log_debug, log_file_path, ClickOutcome};

use crate::demo::DemoApp;
use crate::ui::{run_app, ViewOptions};

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_logging(&config);
    log_debug("=== Gesture HUD started ===");
    log_debug(&format!("log file: {:?}", log_file_path()));
    tracing::info!(
        permission = %config.permission,
        gesture = %config.gesture,
        locale = %config.locale,
        once = config.once,
        "gesturehud starting"
    );

    let mut app = DemoApp::new(&config);

    if config.once {
        return print_once(&config, &mut app);
    }

    let result = run_app(&mut app, ViewOptions::from_config(&config));
    log_debug(&format!(
        "=== Gesture HUD exiting ({} permission requests) ===",
        app.requests()
    ));
    result
}

/// Column and row (1-based) where `--click` lands: the title row, just inside the border.
const CLICK_POINT: (u16, u16) = (2, 2);

fn print_once(config: &AppConfig, app: &mut DemoApp) -> Result<()> {
    let render = |app: &DemoApp| {
        format_status_banner(&app.view(), config.theme, config.unicode(), config.width)
    };

    let outcome = config.click.then(|| {
        let (x, row) = CLICK_POINT;
        let before = render(&*app);
        app.click_at(before.button.as_ref(), x, row, Instant::now())
    });

    if config.json {
        let mut report = serde_json::json!({
            "inputs": app.inputs(),
            "view": app.view(),
        });
        if let Some(outcome) = outcome {
            report["click"] = serde_json::Value::from(outcome_name(outcome));
        }
        let rendered = serde_json::to_string_pretty(&report).context("failed to encode view")?;
        println!("{rendered}");
        return Ok(());
    }

    if let Some(outcome) = outcome {
        println!(
            "click: {}; permission: {}",
            outcome_name(outcome),
            app.permission()
        );
    }
    for line in &render(&*app).lines {
        println!("{line}");
    }
    Ok(())
}

fn outcome_name(outcome: ClickOutcome) -> &'static str {
    match outcome {
        ClickOutcome::Requested => "requested",
        ClickOutcome::Disabled => "disabled",
        ClickOutcome::Inert => "inert",
        ClickOutcome::Missed => "missed",
    }
}

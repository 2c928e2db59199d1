use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub(crate) fn tracing_log_path() -> PathBuf {
    env::var("GESTUREHUD_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("gesturehud_trace.jsonl"))
}

/// Install a JSON subscriber that appends indicator events to the trace log.
pub(crate) fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(tracing_log_path())
        else {
            return;
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_target(false)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

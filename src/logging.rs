use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "POST_CONSOLE_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `POST_CONSOLE_LOG` names a file path; writing to
/// the terminal would corrupt the UI. The file is created as
/// `{path}.{timestamp}.{pid}` so concurrent consoles don't collide.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(prefix: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", prefix, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::unique_log_path;

    #[test]
    fn log_path_carries_pid_suffix() {
        let path = unique_log_path("/tmp/console.log");
        assert!(path.starts_with("/tmp/console.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}

use std::path::Path;
use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Installs the global subscriber: a console layer filtered by `RUST_LOG` (default `info`)
/// and, when `is_enable_file` is set, a daily-rolling JSON file layer.
///
/// Keep the returned guard alive for the lifetime of the process or buffered file output
/// is lost.
pub fn init_logger(component: &str, is_dev: bool, is_enable_file: bool) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = if is_dev {
        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_filter(console_filter)
            .boxed()
    };

    let (file_layer, guard) = if is_enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let (writer, guard) = file_writer(log_dir, component);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"))
            .boxed();

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Daily-rolling `rust_app_<component>.log` in `log_dir`, written off the caller's thread.
fn file_writer(log_dir: impl AsRef<Path>, component: &str) -> (NonBlocking, WorkerGuard) {
    let file_name = format!("rust_app_{component}.log");
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
    non_blocking(file_appender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_writer_flushes_into_log_dir() {
        let dir = std::env::temp_dir().join(format!("laundry_logs_{}", std::process::id()));

        let (mut writer, guard) = file_writer(&dir, "unit");
        writer.write_all(b"{\"msg\":\"hello\"}\n").unwrap();
        drop(guard);

        let written: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("rust_app_unit.log"))
            .collect();
        assert_eq!(written.len(), 1);

        let contents = std::fs::read_to_string(written[0].path()).unwrap();
        assert!(contents.contains("hello"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入 `<data_local_dir>/model-admin/model-admin.log`。
//! core 与 client 使用 `log` 门面，经 `tracing-log` 桥接到同一个订阅者。

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量
pub const LOG_FILTER_ENV: &str = "MODEL_ADMIN_LOG";

const LOG_FILE_NAME: &str = "model-admin.log";

/// 日志目录
fn log_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join("model-admin"))
        .ok_or_else(|| anyhow!("Unable to determine the data directory"))
}

/// 初始化文件日志
///
/// 返回的 guard 必须存活到程序结束，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}

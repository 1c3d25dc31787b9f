//! Model Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与命令执行 (`backend/`)
//!
//!
//! main.rs
//! Model Admin TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load config             // 读取配置文件与环境变量
//!     init_logging()          // 日志写入文件，避免破坏终端界面
//!     Runtime::new()          // 后端请求在 tokio 运行时中执行
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 配置文件位置：
//!     $MODEL_ADMIN_CONFIG
//!     或 <config_dir>/model-admin/config.toml
//!
//! 环境变量 MODEL_ADMIN_URL / MODEL_ADMIN_TOKEN 覆盖配置文件中的后端设置，
//! MODEL_ADMIN_LOG 控制日志级别（`EnvFilter` 语法）。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use model_admin_core::ViewController;

use backend::{ConfigService, Executor, FileConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config_service = FileConfigService::new(FileConfigService::default_path()?);
    let mut config = config_service.load()?;
    backend::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    // 2. 初始化日志（guard 需存活到程序结束）
    let _log_guard = init_logging()?;
    tracing::info!(
        "Starting Model Admin TUI against {}",
        config.backend.base_url
    );

    view::theme::set_theme(config.theme);

    // 3. 创建运行时与后端服务
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let services = backend::connect(&config.backend)?;
    let (executor, mut outcomes) = Executor::new(Arc::new(services), runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let controller = ViewController::new(config.view.clone());
    let mut app = model::App::new(controller, config.backend.base_url.clone());

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &executor, &mut outcomes);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Model Admin TUI exited with error: {e:#}");
    }

    // 8. 返回结果
    result
}

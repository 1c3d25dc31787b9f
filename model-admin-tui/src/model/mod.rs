//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! 与模型管理相关的状态（模型目录、字段、当前页、对话框）全部由
//! model-admin-core 的 `ViewController` 持有；这里只保存纯界面状态：
//! 焦点、光标、状态栏消息，以及尚未派发的后端命令。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod cursor;         // 列表光标（模型列表、记录表格）
//!         mod focus;          // 焦点状态（Models / Records）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在模型列表按 Enter
//!         ↓
//!     update/navigation.rs 调用 controller.select_model(..)，得到 Vec<Command>
//!         ↓
//!     app.queue(commands)，命令进入 outbox
//!         ↓
//!     app.rs 主循环 take_commands() 并交给 Executor
//!         ↓
//!     结果作为 AppMessage::Backend(Outcome) 回到 Update 层
//!         ↓
//!     controller.apply(outcome) 更新视图状态，View 层读取并渲染
//!

mod app;
mod cursor;
mod focus;

pub use app::{App, StatusMessage};
pub use cursor::Cursor;
pub use focus::FocusPanel;

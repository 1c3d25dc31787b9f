//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     handle_event 的判断顺序：
//!         - 帮助打开时，只响应关闭帮助的按键
//!         - 有对话框打开时，调用 handle_dialog_keys 处理
//!         - 全局快捷键，就地处理
//!         - 焦点位于模型列表，调用 handle_models_keys 处理
//!         - 焦点位于记录表格，调用 handle_records_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单对话框键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     根据获得焦点字段的编辑器类型决定按键含义：
//!             Esc         → ModalMessage::Close
//!             Tab / ↓     → ModalMessage::NextField
//!             Shift+Tab / ↑ → ModalMessage::PrevField
//!             Ctrl+S      → ModalMessage::Confirm
//!             Enter       → 多行文本中换行，其他字段提交
//!             Space / ←→  → 三态开关切换（True / False / 未设置）
//!             字符输入     → ModalMessage::Input(c)
//!             Backspace   → ModalMessage::Backspace
//!             Ctrl+U      → ModalMessage::ClearField
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作，以及后端返回的结果，都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod content;        // 记录表格中的子消息
//!         mod modal;          // 对话框中的子消息
//!         mod navigation;     // 模型列表中的子消息
//!
//!
//!     除了键盘产生的消息外，还有 AppMessage::Backend(Outcome)：
//!         由 app.rs 在收到后端结果时创建，交给控制器的 apply() 处理。
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;

//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model（以及其中的 ViewController），从不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 模型列表 + 记录表格 + 状态栏
//!         mod components;     // 模型列表、状态栏、对话框
//!         mod pages;          // 记录表格页面
//!         pub mod theme;      // 主题与样式
//!
//!     ┌──────────────────────────────────────────────────────────────┐
//!     │ Model Admin v0.1.0 · http://localhost:3000/api/admin         │
//!     ├────────────┬─────────────────────────────────────────────────┤
//!     │ ▶ Course   │  id  title        published  price  ...         │
//!     │   Lesson   │  1   Rust 101     Yes        9.5                │
//!     │            │  ...                                            │
//!     │            │  Page 1 / 3 · 25 records · 10 per page          │
//!     ├────────────┴─────────────────────────────────────────────────┤
//!     │ ↑↓ Select │ Enter View │ Alt+a Add │ ...                     │
//!     └──────────────────────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

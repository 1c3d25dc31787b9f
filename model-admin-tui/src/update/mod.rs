//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 模型列表子消息处理
//!         mod content;            // 记录表格子消息处理
//!         mod modal;              // 对话框子消息处理
//!         mod backend;            // 后端结果处理
//!
//!
//!     控制器的每个意图方法都返回 Vec<Command>，
//!     这里统一 app.queue(commands)，由主循环交给 Executor 执行；
//!     控制器产生的通知在每次 update 结束时搬到状态栏。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Activate => {
            let commands = app.controller.activate();
            app.queue(commands);
        }

        AppMessage::ToggleFocus => {
            // 如果有对话框打开，不切换焦点
            if app.dialog().is_none() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(outcome) => {
            backend::update(app, outcome);
        }

        AppMessage::GoBack => {
            app.focus = FocusPanel::Models;
            app.clear_status();
        }

        AppMessage::Refresh => {
            let commands = app.controller.refresh();
            if !commands.is_empty() {
                app.clear_status();
            }
            app.queue(commands);
        }

        AppMessage::ShowHelp => {
            app.show_help = !app.show_help;
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    app.absorb_notices();
}

#[cfg(test)]
#[path = "update_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

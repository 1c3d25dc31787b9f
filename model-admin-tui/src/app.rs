//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 处于以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Models,                      // 当前焦点在哪个面板
//!     models: Cursor { selected = 0 },                // 模型列表光标
//!     rows: Cursor { selected = 0 },                  // 记录表格光标
//!     controller: ViewController,                     // 视图状态机（来自 model-admin-core）
//!     outbox: [],                                     // 待执行的后端命令
//!     status = None,                                  // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     executor.dispatch(app.take_commands())          // 把 Update 层产生的命令交给后端执行
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Ok(outcome) = outcomes.try_recv() {   // 收取已完成的后端结果
//!         update::update(&mut app , Backend(outcome))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }
//!
//! 后端结果只在主循环中被消费，所以 Model 始终只在一个线程上被修改。

use std::time::Duration;

use anyhow::Result;
use model_admin_core::Outcome;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Executor;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &Executor,
    outcomes: &mut UnboundedReceiver<Outcome>,
) -> Result<()> {
    // 0. 激活视图：加载模型目录
    update::update(app, AppMessage::Activate);

    loop {
        // 1. 派发待执行的后端命令
        for command in app.take_commands() {
            executor.dispatch(command);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 收取后端结果
        while let Ok(outcome) = outcomes.try_recv() {
            update::update(app, AppMessage::Backend(outcome));
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 7. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}

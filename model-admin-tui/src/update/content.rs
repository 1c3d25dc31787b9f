//! 记录表格更新逻辑

use model_admin_client::RecordId;
use model_admin_core::{Command, ViewController};

use crate::message::ContentMessage;
use crate::model::App;

/// 处理记录表格消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let rows = app
        .controller
        .workspace()
        .map_or(0, |ws| ws.page.records.len());

    match msg {
        // ========== 行选择 ==========
        ContentMessage::SelectPrevious => app.rows.select_previous(),
        ContentMessage::SelectNext => app.rows.select_next(rows),
        ContentMessage::SelectFirst => app.rows.select_first(),
        ContentMessage::SelectLast => app.rows.select_last(rows),

        // ========== 分页 ==========
        ContentMessage::NextPage => {
            let commands = app.controller.next_page();
            turn_page(app, commands);
        }
        ContentMessage::PrevPage => {
            let commands = app.controller.prev_page();
            turn_page(app, commands);
        }
        ContentMessage::LargerLimit => change_limit(app, true),
        ContentMessage::SmallerLimit => change_limit(app, false),

        // ========== CRUD 操作 ==========
        ContentMessage::View => with_selected(app, ViewController::open_view),
        ContentMessage::Add => {
            app.form_cursor = 0;
            let commands = app.controller.open_create();
            app.queue(commands);
        }
        ContentMessage::Edit => {
            app.form_cursor = 0;
            with_selected(app, ViewController::open_edit);
        }
        ContentMessage::Delete => with_selected(app, ViewController::request_delete),
    }
}

/// 翻页成功发出请求时，光标回到第一行
fn turn_page(app: &mut App, commands: Vec<Command>) {
    if !commands.is_empty() {
        app.rows.select_first();
    }
    app.queue(commands);
}

/// 切换到下一个（或上一个）可选的每页条数
fn change_limit(app: &mut App, forward: bool) {
    let current = app.controller.limit();
    let next = app.controller.settings().cycle_limit(current, forward);
    if next == current {
        return;
    }

    let commands = app.controller.change_limit(next);
    if app.controller.limit() == next {
        app.rows.select_first();
        app.set_status(format!("{next} records per page"));
    }
    app.queue(commands);
}

/// 对选中行执行操作
fn with_selected<F>(app: &mut App, action: F)
where
    F: FnOnce(&mut ViewController, &RecordId) -> Vec<Command>,
{
    let Some(id) = app.selected_record_id() else {
        app.set_status("No record selected");
        return;
    };

    let commands = action(&mut app.controller, &id);
    app.queue(commands);
}

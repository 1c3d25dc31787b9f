//! 对话框更新逻辑

use model_admin_core::editor::{ControlValue, EditorKind};
use model_admin_core::form::FormEntry;
use model_admin_core::Dialog;

use crate::message::ModalMessage;
use crate::model::App;

/// 处理对话框消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            let commands = app.controller.cancel();
            app.queue(commands);
            app.form_cursor = 0;
        }

        ModalMessage::NextField => {
            let len = form_len(app);
            if len > 0 {
                app.form_cursor = (app.form_cursor + 1) % len;
            }
        }

        ModalMessage::PrevField => {
            let len = form_len(app);
            if len > 0 {
                app.form_cursor = (app.form_cursor + len - 1) % len;
            }
        }

        ModalMessage::Confirm => confirm(app),

        ModalMessage::Input(c) => edit_text(app, |text| text.push(c)),

        ModalMessage::Backspace => edit_text(app, |text| {
            text.pop();
        }),

        ModalMessage::Newline => {
            with_focused_entry(app, |entry| {
                if entry.editor.kind() == EditorKind::MultiLine {
                    if let ControlValue::Text(text) = &mut entry.control {
                        text.push('\n');
                    }
                }
            });
        }

        ModalMessage::ClearField => {
            with_focused_entry(app, |entry| entry.control = entry.editor.empty_control());
        }

        // 三态循环：未设置 → True → False → 未设置
        ModalMessage::ToggleNext => toggle(app, 1),
        ModalMessage::TogglePrev => toggle(app, 2),
    }
}

/// 表单字段数（无表单时为 0）
fn form_len(app: &App) -> usize {
    app.dialog()
        .and_then(Dialog::form)
        .map_or(0, |dialog| dialog.form.len())
}

/// 提交表单、确认删除或关闭只读视图
fn confirm(app: &mut App) {
    let is_form = app.dialog().and_then(Dialog::form).is_some();
    let is_delete = matches!(app.dialog(), Some(Dialog::ConfirmDelete { .. }));

    let commands = if is_form {
        app.controller.submit()
    } else if is_delete {
        app.controller.confirm_delete()
    } else {
        app.controller.cancel()
    };
    app.queue(commands);
}

/// 修改获得焦点的字段（提交中的表单不可修改）
fn with_focused_entry<F>(app: &mut App, edit: F)
where
    F: FnOnce(&mut FormEntry),
{
    let cursor = app.form_cursor;
    if let Some(entry) = app
        .controller
        .form_mut()
        .and_then(|form| form.entry_mut(cursor))
    {
        edit(entry);
    }
}

fn edit_text<F>(app: &mut App, edit: F)
where
    F: FnOnce(&mut String),
{
    with_focused_entry(app, |entry| {
        if !entry.editor.kind().is_text() {
            return;
        }
        if let ControlValue::Text(text) = &mut entry.control {
            edit(text);
        }
    });
}

fn toggle(app: &mut App, steps: usize) {
    with_focused_entry(app, |entry| {
        if entry.editor.kind() != EditorKind::TriState {
            return;
        }
        for _ in 0..steps {
            entry.control = entry.control.next_choice();
        }
    });
}

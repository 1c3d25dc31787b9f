//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use model_admin_core::editor::EditorKind;
use model_admin_core::Dialog;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助打开时，只响应关闭
    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => AppMessage::ShowHelp,
            _ => AppMessage::Noop,
        };
    }

    // 如果有对话框打开，优先处理对话框输入
    if let Some(dialog) = app.dialog() {
        return handle_dialog_keys(key, dialog, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_models() {
        handle_models_keys(key)
    } else {
        handle_records_keys(key)
    }
}

/// 处理模型列表的按键
fn handle_models_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter 或 →: 打开模型
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),

        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理记录表格的按键
fn handle_records_keys(key: KeyEvent) -> AppMessage {
    let bindings = [
        (&DefaultKeymap::ACTION_ADD, ContentMessage::Add),
        (&DefaultKeymap::ACTION_EDIT, ContentMessage::Edit),
        (&DefaultKeymap::ACTION_DELETE, ContentMessage::Delete),
        (&DefaultKeymap::ACTION_VIEW, ContentMessage::View),
        (&DefaultKeymap::NEXT_PAGE, ContentMessage::NextPage),
        (&DefaultKeymap::NEXT_PAGE_ALT, ContentMessage::NextPage),
        (&DefaultKeymap::PREV_PAGE, ContentMessage::PrevPage),
        (&DefaultKeymap::PREV_PAGE_ALT, ContentMessage::PrevPage),
        (&DefaultKeymap::LARGER_LIMIT, ContentMessage::LargerLimit),
        (&DefaultKeymap::SMALLER_LIMIT, ContentMessage::SmallerLimit),
    ];
    if let Some((_, msg)) = bindings.iter().find(|(binding, _)| binding.matches(&key)) {
        return AppMessage::Content(*msg);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // ←: 回到模型列表
        KeyCode::Left => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}

/// 处理对话框中的按键
fn handle_dialog_keys(key: KeyEvent, dialog: &Dialog, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭对话框
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match dialog {
        Dialog::View { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Dialog::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Dialog::Create(_) | Dialog::Edit { .. } => {
            let kind = app.focused_entry().map(|entry| entry.editor.kind());
            handle_form_keys(key, kind)
        }
        Dialog::None => AppMessage::Noop,
    }
}

/// 处理确认删除对话框的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y' | 'Y') => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Char('n' | 'N') => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

/// 处理表单对话框的按键
///
/// `kind` 为获得焦点字段的编辑器类型（表单为空时为 `None`）。
fn handle_form_keys(key: KeyEvent, kind: Option<EditorKind>) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Confirm);
    }
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Modal(ModalMessage::ClearField);
    }

    match key.code {
        // 字段切换
        KeyCode::Tab | KeyCode::Down => return AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => return AppMessage::Modal(ModalMessage::PrevField),

        // Enter: 多行文本中换行，其余提交
        KeyCode::Enter => {
            return if kind == Some(EditorKind::MultiLine) {
                AppMessage::Modal(ModalMessage::Newline)
            } else {
                AppMessage::Modal(ModalMessage::Confirm)
            };
        }
        _ => {}
    }

    match kind {
        Some(EditorKind::TriState) => match key.code {
            KeyCode::Char(' ') | KeyCode::Right => AppMessage::Modal(ModalMessage::ToggleNext),
            KeyCode::Left => AppMessage::Modal(ModalMessage::TogglePrev),
            KeyCode::Backspace | KeyCode::Delete => AppMessage::Modal(ModalMessage::ClearField),
            _ => AppMessage::Noop,
        },
        Some(_) => match key.code {
            KeyCode::Char(c) if !has_command_modifier(&key) => {
                AppMessage::Modal(ModalMessage::Input(c))
            }
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

/// Ctrl / Alt 组合不作为文本输入
fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;
    use crate::test_support::ready_app;
    use crate::update::update;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn msg(app: &App, event: Event) -> AppMessage {
        handle_event(event, app)
    }

    #[test]
    fn release_events_are_ignored() {
        let app = ready_app(3);
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert!(matches!(msg(&app, Event::Key(release)), AppMessage::Noop));
    }

    #[test]
    fn global_keys() {
        let app = ready_app(3);

        assert!(matches!(
            msg(&app, press_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppMessage::Quit
        ));
        assert!(matches!(
            msg(&app, press_with(KeyCode::Char('q'), KeyModifiers::ALT)),
            AppMessage::Quit
        ));
        assert!(matches!(
            msg(&app, press_with(KeyCode::Char('r'), KeyModifiers::ALT)),
            AppMessage::Refresh
        ));
        assert!(matches!(msg(&app, press(KeyCode::Tab)), AppMessage::ToggleFocus));
        assert!(matches!(msg(&app, press(KeyCode::Char('?'))), AppMessage::ShowHelp));
    }

    #[test]
    fn focus_decides_list_keys() {
        let mut app = ready_app(3);

        app.focus = crate::model::FocusPanel::Models;
        assert!(matches!(
            msg(&app, press(KeyCode::Enter)),
            AppMessage::Navigation(NavigationMessage::Confirm)
        ));

        app.focus = crate::model::FocusPanel::Records;
        assert!(matches!(
            msg(&app, press(KeyCode::Enter)),
            AppMessage::Content(ContentMessage::View)
        ));
        assert!(matches!(
            msg(&app, press(KeyCode::Char(']'))),
            AppMessage::Content(ContentMessage::NextPage)
        ));
        assert!(matches!(
            msg(&app, press_with(KeyCode::Char('d'), KeyModifiers::ALT)),
            AppMessage::Content(ContentMessage::Delete)
        ));
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = ready_app(3);
        app.show_help = true;

        assert!(matches!(msg(&app, press(KeyCode::Char('j'))), AppMessage::Noop));
        assert!(matches!(msg(&app, press(KeyCode::Esc)), AppMessage::ShowHelp));
    }

    #[test]
    fn form_keys_follow_field_kind() {
        let mut app = ready_app(3);
        update(&mut app, AppMessage::Content(ContentMessage::Add));

        // 第一个字段是 title（单行文本）
        assert!(matches!(
            msg(&app, press(KeyCode::Char('x'))),
            AppMessage::Modal(ModalMessage::Input('x'))
        ));
        assert!(matches!(
            msg(&app, press(KeyCode::Enter)),
            AppMessage::Modal(ModalMessage::Confirm)
        ));

        // description 是多行文本
        update(&mut app, AppMessage::Modal(ModalMessage::NextField));
        assert!(matches!(
            msg(&app, press(KeyCode::Enter)),
            AppMessage::Modal(ModalMessage::Newline)
        ));

        // published 是三态开关
        update(&mut app, AppMessage::Modal(ModalMessage::NextField));
        assert!(matches!(
            msg(&app, press(KeyCode::Char(' '))),
            AppMessage::Modal(ModalMessage::ToggleNext)
        ));
        assert!(matches!(
            msg(&app, press(KeyCode::Char('x'))),
            AppMessage::Noop
        ));

        assert!(matches!(
            msg(&app, press_with(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            msg(&app, press(KeyCode::Esc)),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn confirm_delete_keys() {
        let mut app = ready_app(3);
        app.focus = crate::model::FocusPanel::Records;
        update(&mut app, AppMessage::Content(ContentMessage::Delete));

        assert!(matches!(
            msg(&app, press(KeyCode::Char('y'))),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            msg(&app, press(KeyCode::Char('n'))),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(msg(&app, press(KeyCode::Char('x'))), AppMessage::Noop));
    }
}

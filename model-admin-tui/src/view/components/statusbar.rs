//! 底部状态栏组件

use model_admin_core::controller::NoticeLevel;
use model_admin_core::editor::EditorKind;
use model_admin_core::Dialog;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和对话框生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref status) = app.status {
        let color = match status.level {
            NoticeLevel::Info => Color::Yellow,
            NoticeLevel::Error => colors().error,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.show_help {
        return vec![("Esc", "Close Help")];
    }

    let mut hints = Vec::new();

    match app.dialog() {
        Some(Dialog::Create(_) | Dialog::Edit { .. }) => {
            hints.push(("Tab", "Next Field"));
            match app.focused_entry().map(|e| e.editor.kind()) {
                Some(EditorKind::TriState) => hints.push(("Space", "Toggle")),
                Some(EditorKind::MultiLine) => hints.push(("Enter", "Newline")),
                Some(EditorKind::DateTime) => hints.push(("Format", "YYYY-MM-DDTHH:MM")),
                _ => {}
            }
            hints.push(("Ctrl+s", "Save"));
            hints.push(("Esc", "Cancel"));
            return hints;
        }
        Some(Dialog::ConfirmDelete { .. }) => {
            hints.push(("y", "Delete"));
            hints.push(("n/Esc", "Cancel"));
            return hints;
        }
        Some(Dialog::View { .. }) => {
            hints.push(("Esc", "Close"));
            return hints;
        }
        Some(Dialog::None) | None => {}
    }

    hints.push(("Tab", "Switch Panels"));

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Models => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Records => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "View"));
            hints.push(("Alt+a", "Add"));
            hints.push(("Alt+e", "Edit"));
            hints.push(("Alt+d", "Delete"));
            hints.push(("[ ]", "Page"));
            hints.push(("+/-", "Limit"));
        }
    }

    hints.push(("?", "Help"));
    hints.push(("Alt+q", "Quit"));

    hints
}

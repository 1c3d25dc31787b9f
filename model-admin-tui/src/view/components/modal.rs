//! 对话框组件
//!
//! 新建 / 编辑表单、只读查看、删除确认，以及帮助。

use model_admin_client::{FieldDescriptor, Record, RecordId};
use model_admin_core::controller::{FormDialog, Workspace};
use model_admin_core::editor::{ControlValue, EditorKind};
use model_admin_core::form::FormEntry;
use model_admin_core::format::{format_value, truncate_cell};
use model_admin_core::Dialog;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 表单对话框宽度
const FORM_WIDTH: u16 = 64;
/// 多行文本在表单中最多显示的行数
const MULTILINE_PREVIEW_LINES: usize = 3;

/// 渲染对话框（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    if app.show_help {
        render_help(frame);
        return;
    }

    let Some(ws) = app.controller.workspace() else {
        return;
    };

    match &ws.dialog {
        Dialog::Create(dialog) => {
            let title = format!(" New {} ", ws.model);
            render_form(frame, &title, dialog, app.form_cursor);
        }
        Dialog::Edit { record, form } => {
            let id = record.id().map_or_else(|| "?".to_string(), |id| id.to_string());
            let title = format!(" Edit {} #{id} ", ws.model);
            render_form(frame, &title, form, app.form_cursor);
        }
        Dialog::View { id, record } => render_view(frame, ws, id, record.as_ref()),
        Dialog::ConfirmDelete { id, pending, error } => {
            render_confirm_delete(frame, ws, id, pending.is_some(), error.as_deref());
        }
        Dialog::None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区域（去掉边框与左右留白）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 清空背景并绘制弹窗边框
fn render_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));

    frame.render_widget(block, area);
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

// ========== 表单 ==========

/// 渲染新建 / 编辑表单
fn render_form(frame: &mut Frame, title: &str, dialog: &FormDialog, cursor: usize) {
    let c = colors();
    let value_width = usize::from(FORM_WIDTH.saturating_sub(8));

    let mut lines = Vec::new();
    for (i, entry) in dialog.form.entries().iter().enumerate() {
        let focused = i == cursor && !dialog.is_pending();
        lines.push(label_line(entry.editor.field(), focused));
        lines.extend(value_lines(entry, focused, value_width));
        lines.push(Line::from(""));
    }

    if dialog.form.is_empty() {
        lines.push(Line::styled("This model has no editable fields.", Styles::muted()));
        lines.push(Line::from(""));
    }

    if dialog.is_pending() {
        lines.push(Line::styled("Saving...", Style::default().fg(c.warning)));
    } else if let Some(ref error) = dialog.error {
        lines.push(Line::styled(error.clone(), Style::default().fg(c.error)));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Ctrl+s", Styles::hint_key()),
            Span::styled(" Save   ", Styles::muted()),
            Span::styled("Esc", Styles::hint_key()),
            Span::styled(" Cancel", Styles::muted()),
        ]));
    }

    let height = to_u16(lines.len()).saturating_add(2);
    let area = centered_rect(FORM_WIDTH, height, frame.area());
    render_frame(frame, area, title, Color::Cyan);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 字段名、类型与必填标记
fn label_line(field: &FieldDescriptor, focused: bool) -> Line<'static> {
    let name_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(field.name.clone(), name_style)];
    if !field.nullable {
        spans.push(Span::styled(" *", Style::default().fg(colors().error)));
    }
    spans.push(Span::styled(
        format!("  {}", field.field_type.as_str()),
        Styles::muted(),
    ));
    Line::from(spans)
}

/// 字段当前值
fn value_lines(entry: &FormEntry, focused: bool, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let style = if focused {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg)
    };

    match (&entry.control, entry.editor.kind()) {
        (ControlValue::Choice(_), _) | (_, EditorKind::TriState) => {
            let label = entry.control.label();
            let text = if focused {
                format!("  ◀ {label} ▶")
            } else {
                format!("  {label}")
            };
            vec![Line::styled(text, style)]
        }
        (ControlValue::Text(text), kind) => {
            let caret = if focused { "▏" } else { "" };
            if text.is_empty() && !focused {
                let placeholder = if kind == EditorKind::DateTime {
                    "  YYYY-MM-DDTHH:MM"
                } else {
                    "  (empty)"
                };
                return vec![Line::styled(placeholder, Styles::muted())];
            }

            if kind == EditorKind::MultiLine {
                let all: Vec<&str> = text.split('\n').collect();
                let skip = all.len().saturating_sub(MULTILINE_PREVIEW_LINES);
                let shown = all.len() - skip;
                all.iter()
                    .skip(skip)
                    .enumerate()
                    .map(|(i, line)| {
                        let tail = if i + 1 == shown { caret } else { "" };
                        Line::styled(
                            format!("  {}{tail}", truncate_tail(line, width)),
                            style,
                        )
                    })
                    .collect()
            } else {
                vec![Line::styled(
                    format!("  {}{caret}", truncate_tail(text, width)),
                    style,
                )]
            }
        }
    }
}

/// 输入过长时只显示末尾（光标所在处）
fn truncate_tail(text: &str, width: usize) -> String {
    let reversed: String = text.chars().rev().collect();
    let cut = truncate_cell(&reversed, width);
    if cut == reversed {
        text.to_string()
    } else {
        cut.chars().rev().collect()
    }
}

// ========== 只读查看 ==========

/// 渲染只读查看对话框
fn render_view(frame: &mut Frame, ws: &Workspace, id: &RecordId, record: Option<&Record>) {
    let c = colors();
    let title = format!(" {} #{id} ", ws.model);

    let lines: Vec<Line> = match record {
        None => vec![Line::styled("Loading...", Styles::muted())],
        Some(record) => {
            let name_width = ws
                .fields
                .iter()
                .map(|f| f.name.chars().count())
                .max()
                .unwrap_or(0);
            ws.fields
                .iter()
                .map(|field| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<name_width$}  ", field.name),
                            Style::default().fg(c.muted),
                        ),
                        Span::styled(
                            format_value(record.value_of(&field.name)),
                            Style::default().fg(c.fg),
                        ),
                    ])
                })
                .collect()
        }
    };

    let height = to_u16(lines.len()).saturating_add(4);
    let area = centered_rect(72, height, frame.area());
    render_frame(frame, area, &title, c.border_focused);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

// ========== 删除确认 ==========

/// 渲染确认删除对话框
fn render_confirm_delete(
    frame: &mut Frame,
    ws: &Workspace,
    id: &RecordId,
    pending: bool,
    error: Option<&str>,
) {
    let c = colors();
    let area = centered_rect(48, 9, frame.area());
    render_frame(frame, area, " Confirm Deletion ", c.error);

    let summary = ws
        .record(id)
        .and_then(|record| {
            ws.fields
                .iter()
                .find(|f| !f.is_system_managed())
                .map(|f| format_value(record.value_of(&f.name)))
        })
        .map(|text| truncate_cell(&text, 36));

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  Delete {} #{id}?", ws.model),
            Style::default().fg(c.fg),
        ),
    ];
    if let Some(summary) = summary {
        lines.push(Line::styled(
            format!("  \"{summary}\""),
            Style::default().fg(c.warning),
        ));
    }
    lines.push(Line::from(""));

    if pending {
        lines.push(Line::styled("  Deleting...", Style::default().fg(c.warning)));
    } else {
        if let Some(error) = error {
            lines.push(Line::styled(format!("  {error}"), Style::default().fg(c.error)));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(" y ", Style::default().fg(Color::Black).bg(c.error)),
            Span::raw(" Delete    "),
            Span::styled(" n ", Style::default().fg(Color::Black).bg(Color::White)),
            Span::raw(" Cancel"),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

// ========== 帮助 ==========

/// 渲染帮助
fn render_help(frame: &mut Frame) {
    let sections: [(&str, &[(&str, &str)]); 3] = [
        (
            "Global",
            &[
                ("Tab", "Switch between models and records"),
                ("Alt+r", "Refresh"),
                ("? / Alt+h", "Toggle this help"),
                ("Alt+q / Ctrl+c", "Quit"),
            ],
        ),
        (
            "Records",
            &[
                ("↑↓ / j k", "Select row"),
                ("Enter", "View record"),
                ("Alt+a / Alt+e", "Create / edit record"),
                ("Alt+d", "Delete record (asks first)"),
                ("[ ] / PgUp PgDn", "Previous / next page"),
                ("+ / -", "Records per page"),
            ],
        ),
        (
            "Forms",
            &[
                ("Tab / Shift+Tab", "Next / previous field"),
                ("Space / ←→", "Cycle True / False / unset"),
                ("Ctrl+u", "Clear field"),
                ("Ctrl+s", "Save"),
                ("Esc", "Cancel"),
            ],
        ),
    ];

    let mut lines = Vec::new();
    for (title, keys) in sections {
        lines.push(Line::styled(title, Styles::title()));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<18}"), Styles::hint_key()),
                Span::raw(*desc),
            ]));
        }
        lines.push(Line::from(""));
    }

    let height = to_u16(lines.len()).saturating_add(2);
    let area = centered_rect(60, height, frame.area());
    render_frame(frame, area, " Help ", colors().border_focused);

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 10);

        let rect = centered_rect(64, 20, area);

        assert_eq!(rect, Rect::new(0, 0, 40, 10));
        assert_eq!(inner_rect(Rect::new(0, 0, 3, 1)).width, 0);
    }

    #[test]
    fn long_input_shows_its_end() {
        assert_eq!(truncate_tail("short", 10), "short");

        let shown = truncate_tail("abcdefghijklmnop", 6);
        assert!(shown.ends_with("nop"), "{shown}");
        assert!(shown.chars().count() <= 6);
    }
}

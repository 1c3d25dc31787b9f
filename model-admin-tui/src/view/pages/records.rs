//! 记录表格页面视图
//!
//! 列为字段列表的前 `table_column_limit` 个字段，单元格经
//! `format_value` 格式化并按显示宽度截断。

use model_admin_client::{FieldDescriptor, Record};
use model_admin_core::controller::{display_total_pages, Workspace};
use model_admin_core::format::{format_value, truncate_cell};
use model_admin_core::ViewState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 单列最大显示宽度
const MAX_COLUMN_WIDTH: usize = 32;
/// 单列最小显示宽度
const MIN_COLUMN_WIDTH: usize = 3;

/// 操作列
const ACTIONS_HEADER: &str = "View / Edit / Delete";
const ACTIONS_CELL: &str = "↵ / Alt+e / Alt+d";

/// 渲染记录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match app.controller.state() {
        ViewState::NoModelSelected => {
            let text = if app.controller.models().is_empty() {
                "Waiting for the model catalog..."
            } else {
                "Select a model on the left and press Enter."
            };
            render_hint(frame, area, &[text]);
        }
        ViewState::ModelSelected(loading) => {
            let text = format!("Loading {}...", loading.model);
            render_hint(frame, area, &[text.as_str()]);
        }
        ViewState::Ready(ws) => render_workspace(app, ws, frame, area),
    }
}

/// 渲染提示文本
fn render_hint(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let mut content = vec![Line::from("")];
    content.extend(
        lines
            .iter()
            .map(|text| Line::styled(format!("  {text}"), Styles::muted())),
    );
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染表格与分页栏
fn render_workspace(app: &App, ws: &Workspace, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 表格
            Constraint::Length(1), // 分页栏
        ])
        .split(area);

    if ws.page.records.is_empty() {
        render_hint(
            frame,
            layout[0],
            &["No records found.", "Press Alt+a to create one."],
        );
    } else {
        let columns = ws.columns(app.controller.settings().table_column_limit);
        render_table(app, columns, &ws.page.records, frame, layout[0]);
    }

    render_pager(ws, frame, layout[1]);
}

/// 渲染记录表格
fn render_table(
    app: &App,
    columns: &[FieldDescriptor],
    records: &[Record],
    frame: &mut Frame,
    area: Rect,
) {
    let c = colors();

    // 先格式化所有单元格，再据此计算列宽
    let cells: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|field| format_value(record.value_of(&field.name)))
                .collect()
        })
        .collect();
    let widths = column_widths(columns, &cells);

    let header = Row::new(
        header_labels(columns)
            .into_iter()
            .map(Cell::from)
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = cells
        .iter()
        .map(|row| {
            let mut row_cells: Vec<Cell> = row
                .iter()
                .zip(&widths)
                .map(|(text, width)| Cell::from(truncate_cell(text, *width)))
                .collect();
            row_cells.push(Cell::from(Span::styled(ACTIONS_CELL, Styles::muted())));
            Row::new(row_cells).style(Style::default().fg(c.fg))
        })
        .collect();

    let constraints: Vec<Constraint> = widths
        .iter()
        .copied()
        .chain(std::iter::once(actions_width()))
        .map(|w| Constraint::Length(u16::try_from(w).unwrap_or(u16::MAX)))
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.rows.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 表头：字段名加末尾的操作列
fn header_labels(columns: &[FieldDescriptor]) -> Vec<&str> {
    columns
        .iter()
        .map(|field| field.name.as_str())
        .chain(std::iter::once(ACTIONS_HEADER))
        .collect()
}

fn actions_width() -> usize {
    ACTIONS_HEADER.width().max(ACTIONS_CELL.width())
}

/// 每列宽度：表头与单元格中最宽者，限制在固定范围内
fn column_widths(columns: &[FieldDescriptor], cells: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let widest_cell = cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|text| text.width())
                .max()
                .unwrap_or(0);
            field
                .name
                .width()
                .max(widest_cell)
                .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
        })
        .collect()
}

/// 渲染分页栏
fn render_pager(ws: &Workspace, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![
        Span::styled(
            format!(
                " Page {} / {}",
                ws.page.page.max(1),
                display_total_pages(ws)
            ),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {} records · {} per page", ws.page.total, ws.page.limit),
            Styles::muted(),
        ),
    ];

    if ws.busy {
        spans.push(Span::styled(" · Loading...", Style::default().fg(c.warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

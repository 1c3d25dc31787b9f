//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧模型列表
            Constraint::Percentage(80), // 右侧记录表格
        ])
        .split(content_area);

    // 渲染左侧模型列表
    components::navigation::render(app, frame, columns[0]);

    // 渲染右侧内容
    render_records_panel(app, frame, columns[1]);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染对话框与帮助（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " Model Admin v{} · {}",
        env!("CARGO_PKG_VERSION"),
        app.backend_label
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染记录面板
fn render_records_panel(app: &App, frame: &mut Frame, area: Rect) {
    let title = app
        .controller
        .selected_model()
        .map_or_else(|| "Records".to_string(), ToString::to_string);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_records()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::records::render(app, frame, inner_area);
}

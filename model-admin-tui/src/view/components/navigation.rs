//! 左侧模型列表组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染模型列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_models();

    let block = Block::default()
        .title(" Models ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let models = app.controller.models();
    if models.is_empty() {
        let text = if app.controller.models_loading() {
            "  Loading models..."
        } else {
            "  No models available"
        };
        let paragraph = Paragraph::new(Line::styled(text, Styles::muted())).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let opened = app.controller.selected_model();

    // 构建模型列表
    let items: Vec<ListItem> = models
        .iter()
        .enumerate()
        .map(|(i, model)| {
            let is_selected = i == app.models.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            let style = if is_selected && is_focused {
                Styles::selected()
            } else if opened == Some(model) {
                Style::default().fg(c.success).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(format!("{prefix}{model}"), style)))
        })
        .collect();

    let list = List::new(items).block(block);

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.models.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

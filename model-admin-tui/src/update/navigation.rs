//! 模型列表更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理模型列表消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    let len = app.controller.models().len();

    match msg {
        NavigationMessage::SelectPrevious => app.models.select_previous(),
        NavigationMessage::SelectNext => app.models.select_next(len),
        NavigationMessage::SelectFirst => app.models.select_first(),
        NavigationMessage::SelectLast => app.models.select_last(len),
        NavigationMessage::Confirm => open_selected_model(app),
    }
}

/// 打开选中的模型，焦点移到记录表格
fn open_selected_model(app: &mut App) {
    let Some(model) = app.controller.models().get(app.models.selected).cloned() else {
        return;
    };

    let commands = app.controller.select_model(model);
    app.queue(commands);
    app.rows.select_first();
    app.focus = FocusPanel::Records;
    app.clear_status();
}

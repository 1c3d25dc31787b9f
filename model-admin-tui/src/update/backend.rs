//! 后端结果处理

use model_admin_core::Outcome;

use crate::model::App;

/// 把后端结果交给控制器，并让界面光标跟上新数据
pub fn update(app: &mut App, outcome: Outcome) {
    let commands = app.controller.apply(outcome);
    app.queue(commands);

    // 列表可能变短
    app.models.clamp(app.controller.models().len());
    let rows = app
        .controller
        .workspace()
        .map_or(0, |ws| ws.page.records.len());
    app.rows.clamp(rows);

    // 对话框已关闭（提交成功）时重置表单光标
    if app.dialog().is_none() {
        app.form_cursor = 0;
    }
}

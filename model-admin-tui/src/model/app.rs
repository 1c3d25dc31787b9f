//! 应用主状态结构

use model_admin_client::RecordId;
use model_admin_core::controller::NoticeLevel;
use model_admin_core::form::FormEntry;
use model_admin_core::{Command, Dialog, ViewController};

use super::{Cursor, FocusPanel};

/// 状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: NoticeLevel,
    pub text: String,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 模型列表光标
    pub models: Cursor,

    /// 记录表格光标（当前页内）
    pub rows: Cursor,

    /// 表单中获得焦点的字段
    pub form_cursor: usize,

    /// 是否显示帮助
    pub show_help: bool,

    /// 状态栏消息
    pub status: Option<StatusMessage>,

    /// 标题栏中显示的后端地址
    pub backend_label: String,

    /// 视图状态机
    pub controller: ViewController,

    /// 待派发的后端命令
    outbox: Vec<Command>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(controller: ViewController, backend_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Models,
            models: Cursor::default(),
            rows: Cursor::default(),
            form_cursor: 0,
            show_help: false,
            status: None,
            backend_label: backend_label.into(),
            controller,
            outbox: Vec::new(),
        }
    }

    // ========== 状态栏 ==========

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            level: NoticeLevel::Info,
            text: message.into(),
        });
    }

    /// 设置错误消息
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            level: NoticeLevel::Error,
            text: message.into(),
        });
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// 把控制器的通知搬到状态栏（保留最后一条）
    pub fn absorb_notices(&mut self) {
        for notice in self.controller.take_notices() {
            self.status = Some(StatusMessage {
                level: notice.level,
                text: notice.message,
            });
        }
    }

    // ========== 命令队列 ==========

    /// 排队等待派发
    pub fn queue(&mut self, commands: Vec<Command>) {
        self.outbox.extend(commands);
    }

    /// 取出所有待派发的命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.outbox)
    }

    // ========== 查询 ==========

    /// 当前打开的对话框
    pub fn dialog(&self) -> Option<&Dialog> {
        self.controller.dialog().filter(|d| d.is_open())
    }

    /// 表格中选中行的记录 ID
    pub fn selected_record_id(&self) -> Option<RecordId> {
        self.controller
            .workspace()?
            .page
            .records
            .get(self.rows.selected)?
            .id()
    }

    /// 表单中获得焦点的字段
    pub fn focused_entry(&self) -> Option<&FormEntry> {
        self.dialog()?
            .form()?
            .form
            .entries()
            .get(self.form_cursor)
    }
}

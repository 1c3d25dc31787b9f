//! 应用主消息枚举

use model_admin_core::Outcome;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 激活视图（加载模型目录）
    Activate,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 模型列表相关消息
    Navigation(NavigationMessage),

    /// 记录表格相关消息
    Content(ContentMessage),

    /// 对话框相关消息
    Modal(ModalMessage),

    /// 后端命令完成
    Backend(Outcome),

    /// 返回模型列表
    GoBack,

    /// 刷新当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

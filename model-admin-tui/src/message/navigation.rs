//! 模型列表消息

/// 模型列表消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一个模型
    SelectPrevious,
    /// 选择下一个模型
    SelectNext,
    /// 跳转到第一个模型
    SelectFirst,
    /// 跳转到最后一个模型
    SelectLast,
    /// 打开选中的模型
    Confirm,
}

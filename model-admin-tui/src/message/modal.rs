//! 对话框消息类型

/// 对话框相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭对话框（取消）
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 确认/提交
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前字段
    ClearField,

    /// 多行文本换行
    Newline,

    /// 三态开关：下一个值
    ToggleNext,

    /// 三态开关：上一个值
    TogglePrev,
}

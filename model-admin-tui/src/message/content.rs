//! 内容面板消息
//!
//! 处理记录表格中的操作：行选择、翻页、调整每页条数和增删改查

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 行选择 ==========
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,

    // ========== 分页 ==========
    /// 下一页
    NextPage,
    /// 上一页
    PrevPage,
    /// 增大每页条数
    LargerLimit,
    /// 减小每页条数
    SmallerLimit,

    // ========== CRUD 操作 ==========
    /// 查看当前选中记录
    View,
    /// 新建记录
    Add,
    /// 编辑当前选中记录
    Edit,
    /// 删除当前选中记录（先确认）
    Delete,
}

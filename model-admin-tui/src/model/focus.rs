//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧模型列表
    #[default]
    Models,
    /// 右侧记录表格
    Records,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Models => FocusPanel::Records,
            FocusPanel::Records => FocusPanel::Models,
        }
    }

    /// 是否是模型列表
    pub fn is_models(self) -> bool {
        matches!(self, FocusPanel::Models)
    }

    /// 是否是记录表格
    pub fn is_records(self) -> bool {
        matches!(self, FocusPanel::Records)
    }
}

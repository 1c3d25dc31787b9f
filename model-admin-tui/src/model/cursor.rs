//! 列表光标

/// 列表光标
///
/// 不持有列表本身，调用方每次传入当前长度。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// 当前选中的索引
    pub selected: usize,
}

impl Cursor {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表变短后，把光标收回到范围内
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_bounds() {
        let mut cursor = Cursor::default();

        cursor.select_previous();
        assert_eq!(cursor.selected, 0);

        cursor.select_next(3);
        cursor.select_next(3);
        cursor.select_next(3);
        assert_eq!(cursor.selected, 2);

        cursor.select_first();
        assert_eq!(cursor.selected, 0);

        cursor.select_last(3);
        assert_eq!(cursor.selected, 2);
    }

    #[test]
    fn empty_list_keeps_zero() {
        let mut cursor = Cursor::default();

        cursor.select_next(0);
        cursor.select_last(0);

        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut cursor = Cursor { selected: 9 };

        cursor.clamp(4);
        assert_eq!(cursor.selected, 3);

        cursor.clamp(0);
        assert_eq!(cursor.selected, 0);

        cursor = Cursor { selected: 1 };
        cursor.clamp(4);
        assert_eq!(cursor.selected, 1);
    }
}

//! 界面组件

pub mod modal;
pub mod navigation;
pub mod statusbar;

//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 玩家名单
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    AddPlayer,
    RemoveSelected,
    StartGame,

    // 计分
    Increment,
    Decrement,
    RequestReset,
    BackToSetup,
    TogglePresentation,
    ExitPresentation,

    // 确认框
    Cancel, // Esc / n
    Submit, // y
}

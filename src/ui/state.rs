//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::config::Config;
use crate::display::DisplaySurface;
use crate::models::{Player, Scoreboard};

/// 应用状态
pub struct App {
    pub board: Scoreboard,
    pub config: Config,
    pub surface: Box<dyn DisplaySurface>,
    pub selected_index: usize,
    pub mode: AppMode,
    pub input_buffer: String, // 玩家名输入框
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Confirm(ConfirmAction), // 模态确认框，打开时只响应 y/n
}

/// 确认操作类型
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    ResetScores,
}

impl ConfirmAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmAction::ResetScores => "RESET ALL PLAYERS' SCORES?",
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config, surface: Box<dyn DisplaySurface>) -> Self {
        Self {
            board: Scoreboard::new(),
            config,
            surface,
            selected_index: 0,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.board.players.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的玩家
    pub fn selected_player(&self) -> Option<&Player> {
        self.board.players.get(self.selected_index)
    }

    /// 获取当前选中的玩家 ID
    pub fn selected_player_id(&self) -> Option<String> {
        self.selected_player().map(|p| p.id().to_string())
    }
}

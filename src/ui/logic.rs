//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use tracing::{debug, info, warn};

use super::actions::Action;
use super::state::{App, AppMode, ConfirmAction};
use crate::models::{DisplayMode, Transition};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, "dispatch");
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::Input(c) => self.input_buffer.push(c),
            Action::DeleteChar => {
                self.input_buffer.pop();
            }
            Action::AddPlayer => self.add_player(),
            Action::RemoveSelected => self.remove_selected(),
            Action::StartGame => self.start_game(),

            Action::Increment => self.adjust_selected(1),
            Action::Decrement => self.adjust_selected(-1),
            Action::RequestReset => self.request_reset(),
            Action::BackToSetup => self.back_to_setup(),
            Action::TogglePresentation => self.toggle_presentation(),
            Action::ExitPresentation => self.exit_presentation_mode(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.execute_confirm(),
        }
        false
    }

    /// 所有状态变更都经由 reducer
    fn apply(&mut self, transition: Transition) {
        self.board = std::mem::take(&mut self.board).reduce(transition);
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.board.players.len() {
            self.selected_index += 1;
        }
    }

    // ============ 玩家名单相关 ============

    /// 用输入框内容添加玩家，成功后清空输入框
    pub fn add_player(&mut self) {
        let name = self.input_buffer.trim().to_string();
        if name.is_empty() {
            return;
        }
        self.apply(Transition::AddPlayer(name.clone()));
        self.input_buffer.clear();
        self.selected_index = self.board.players.len() - 1;
        info!(%name, players = self.board.players.len(), "player added");
        self.message = Some(format!("{} joined", name.to_uppercase()));
    }

    /// 删除选中的玩家，无需确认
    pub fn remove_selected(&mut self) {
        if let Some(player) = self.selected_player() {
            let id = player.id().to_string();
            let name = player.name().to_uppercase();
            self.apply(Transition::RemovePlayer(id));
            self.clamp_selection();
            info!(%name, "player removed");
            self.message = Some(format!("{} removed", name));
        }
    }

    /// 开始计分，名单为空时静默忽略
    pub fn start_game(&mut self) {
        self.apply(Transition::StartGame);
        if !self.board.players.is_empty() {
            self.selected_index = 0;
            self.message = None;
            info!(players = self.board.players.len(), "game started");
        }
    }

    pub fn back_to_setup(&mut self) {
        self.apply(Transition::BackToSetup);
        self.message = None;
    }

    // ============ 计分相关 ============

    /// 调整选中玩家的分数
    pub fn adjust_selected(&mut self, delta: i64) {
        if let Some(id) = self.selected_player_id() {
            self.apply(Transition::UpdateScore { id, delta });
        }
    }

    /// 打开重置确认框
    pub fn request_reset(&mut self) {
        self.mode = AppMode::Confirm(ConfirmAction::ResetScores);
    }

    /// 执行确认操作
    pub fn execute_confirm(&mut self) {
        if let AppMode::Confirm(ConfirmAction::ResetScores) = self.mode {
            self.apply(Transition::ResetAllScores);
            info!("all scores reset");
            self.message = Some("Scores reset".to_string());
        }
        self.mode = AppMode::Normal;
    }

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.message = None;
    }

    // ============ 电视模式相关 ============

    pub fn toggle_presentation(&mut self) {
        match self.board.display_mode {
            DisplayMode::Normal => self.enter_presentation_mode(),
            DisplayMode::Presentation => self.exit_presentation_mode(),
        }
    }

    /// 进入电视模式，全屏请求失败只记录日志
    pub fn enter_presentation_mode(&mut self) {
        self.apply(Transition::SetDisplayMode(DisplayMode::Presentation));
        if let Err(err) = self.surface.request_fullscreen() {
            warn!(error = %err, "fullscreen blocked or not supported");
        }
    }

    /// 退出电视模式，如果持有全屏则释放
    pub fn exit_presentation_mode(&mut self) {
        self.apply(Transition::SetDisplayMode(DisplayMode::Normal));
        self.release_display();
    }

    pub fn release_display(&mut self) {
        if self.surface.is_fullscreen() {
            if let Err(err) = self.surface.release_fullscreen() {
                warn!(error = %err, "failed to leave fullscreen");
            }
        }
    }
}

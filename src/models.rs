use uuid::Uuid;

/// 当前界面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Setup, // 录入玩家
    Counter, // 计分
}

/// 显示模式（与界面相互独立）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Presentation, // 电视模式
}

/// 玩家
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    name: String, // 创建后不可修改
    score: u32,   // 只能经由 Scoreboard 修改
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            score: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// 状态迁移，供 `Scoreboard::reduce` 使用
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    AddPlayer(String),
    RemovePlayer(String),
    StartGame,
    BackToSetup,
    UpdateScore { id: String, delta: i64 },
    ResetAllScores,
    SetDisplayMode(DisplayMode),
}

/// 记分板状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scoreboard {
    pub view: View,
    pub players: Vec<Player>,
    pub display_mode: DisplayMode,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 纯函数式的状态迁移：消费旧状态，返回新状态
    pub fn reduce(mut self, transition: Transition) -> Self {
        match transition {
            Transition::AddPlayer(name) => {
                self.add_player(&name);
            }
            Transition::RemovePlayer(id) => self.remove_player(&id),
            Transition::StartGame => self.start_game(),
            Transition::BackToSetup => self.back_to_setup(),
            Transition::UpdateScore { id, delta } => self.update_score(&id, delta),
            Transition::ResetAllScores => self.reset_all_scores(),
            Transition::SetDisplayMode(mode) => self.display_mode = mode,
        }
        self
    }

    // ============ 玩家名单 ============

    /// 添加玩家，名字去除首尾空白后为空则忽略
    pub fn add_player(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let player = Player::new(name.to_string());
        let id = player.id.clone();
        self.players.push(player);
        Some(id)
    }

    pub fn remove_player(&mut self, id: &str) {
        self.players.retain(|p| p.id != id);
    }

    #[cfg(test)]
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// 名单非空时进入计分界面
    pub fn start_game(&mut self) {
        if !self.players.is_empty() {
            self.view = View::Counter;
        }
    }

    pub fn back_to_setup(&mut self) {
        self.view = View::Setup;
    }

    // ============ 计分 ============

    /// 分数下限为 0，上限为 u32::MAX
    pub fn update_score(&mut self, id: &str, delta: i64) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            let next = (i64::from(player.score) + delta).max(0);
            player.score = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    pub fn reset_all_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }

    pub fn is_presentation(&self) -> bool {
        self.display_mode == DisplayMode::Presentation
    }
}

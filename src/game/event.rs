use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::action::Action;
use crate::game::error::GameError;
use crate::game::game_engine::GameEngine;
use crate::tile::Tile;

/// 事件种类（状态机的状态名）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameStarted,
    InitializeGame,
    GameInitialized,
    WaitForReady,
    StartAtBanker,
    PlayerSelected,
    Draw,
    DrawSupplementTile,
    Drawn,
    FlowerTileDrawn,
    WaitForPlayerAction,
    Cancel,
    WaitForPlayerToDiscardTile,
    TileDiscarded,
    WaitForReaction,
    NoReactions,
    NextPlayer,
    Chow,
    Pung,
    Kong,
    ConcealedKong,
    Win,
    MultipleWinners,
    NoMoreTiles,
    DrawGame,
    GameDrawn,
    DoSettlement,
    Settlement,
    CloseGame,
    GameClosed,
}

impl EventKind {
    pub const COUNT: usize = 30;

    /// 按声明顺序排列，下标即 `kind as usize`
    pub const ALL: [EventKind; EventKind::COUNT] = [
        EventKind::GameStarted,
        EventKind::InitializeGame,
        EventKind::GameInitialized,
        EventKind::WaitForReady,
        EventKind::StartAtBanker,
        EventKind::PlayerSelected,
        EventKind::Draw,
        EventKind::DrawSupplementTile,
        EventKind::Drawn,
        EventKind::FlowerTileDrawn,
        EventKind::WaitForPlayerAction,
        EventKind::Cancel,
        EventKind::WaitForPlayerToDiscardTile,
        EventKind::TileDiscarded,
        EventKind::WaitForReaction,
        EventKind::NoReactions,
        EventKind::NextPlayer,
        EventKind::Chow,
        EventKind::Pung,
        EventKind::Kong,
        EventKind::ConcealedKong,
        EventKind::Win,
        EventKind::MultipleWinners,
        EventKind::NoMoreTiles,
        EventKind::DrawGame,
        EventKind::GameDrawn,
        EventKind::DoSettlement,
        EventKind::Settlement,
        EventKind::CloseGame,
        EventKind::GameClosed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::GameStarted => "GameStarted",
            EventKind::InitializeGame => "InitializeGame",
            EventKind::GameInitialized => "GameInitialized",
            EventKind::WaitForReady => "WaitForReady",
            EventKind::StartAtBanker => "StartAtBanker",
            EventKind::PlayerSelected => "PlayerSelected",
            EventKind::Draw => "Draw",
            EventKind::DrawSupplementTile => "DrawSupplementTile",
            EventKind::Drawn => "Drawn",
            EventKind::FlowerTileDrawn => "FlowerTileDrawn",
            EventKind::WaitForPlayerAction => "WaitForPlayerAction",
            EventKind::Cancel => "Cancel",
            EventKind::WaitForPlayerToDiscardTile => "WaitForPlayerToDiscardTile",
            EventKind::TileDiscarded => "TileDiscarded",
            EventKind::WaitForReaction => "WaitForReaction",
            EventKind::NoReactions => "NoReactions",
            EventKind::NextPlayer => "NextPlayer",
            EventKind::Chow => "Chow",
            EventKind::Pung => "Pung",
            EventKind::Kong => "Kong",
            EventKind::ConcealedKong => "ConcealedKong",
            EventKind::Win => "Win",
            EventKind::MultipleWinners => "MultipleWinners",
            EventKind::NoMoreTiles => "NoMoreTiles",
            EventKind::DrawGame => "DrawGame",
            EventKind::GameDrawn => "GameDrawn",
            EventKind::DoSettlement => "DoSettlement",
            EventKind::Settlement => "Settlement",
            EventKind::CloseGame => "CloseGame",
            EventKind::GameClosed => "GameClosed",
        }
    }

    /// 需要外部输入的等待状态
    pub fn is_wait(&self) -> bool {
        matches!(
            self,
            EventKind::WaitForReady
                | EventKind::WaitForPlayerAction
                | EventKind::WaitForPlayerToDiscardTile
                | EventKind::WaitForReaction
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 吃碰杠的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeldPayload {
    /// 响应的玩家
    pub seat: usize,
    /// 被吃碰杠的弃牌
    pub tile: Tile,
    /// 吃牌时手中的两张
    pub tiles: Vec<Tile>,
}

/// 胡牌的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPayload {
    /// 放炮者（自摸为 None）
    pub discarding_player: Option<usize>,
    pub winning_tile: Option<Tile>,
    pub winners: Vec<usize>,
}

/// 事件：每种事件只携带自己需要的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    InitializeGame,
    GameInitialized,
    WaitForReady,
    StartAtBanker,
    PlayerSelected(usize),
    Draw,
    DrawSupplementTile,
    Drawn,
    FlowerTileDrawn,
    WaitForPlayerAction,
    Cancel,
    WaitForPlayerToDiscardTile,
    TileDiscarded(Tile),
    /// 各座位可做的响应（下标为座位）
    WaitForReaction(Vec<Vec<Action>>),
    NoReactions,
    NextPlayer,
    Chow(MeldPayload),
    Pung(MeldPayload),
    Kong(MeldPayload),
    ConcealedKong(Tile),
    Win(WinPayload),
    MultipleWinners(WinPayload),
    NoMoreTiles,
    DrawGame,
    GameDrawn,
    DoSettlement,
    Settlement,
    CloseGame,
    GameClosed,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameStarted => EventKind::GameStarted,
            GameEvent::InitializeGame => EventKind::InitializeGame,
            GameEvent::GameInitialized => EventKind::GameInitialized,
            GameEvent::WaitForReady => EventKind::WaitForReady,
            GameEvent::StartAtBanker => EventKind::StartAtBanker,
            GameEvent::PlayerSelected(_) => EventKind::PlayerSelected,
            GameEvent::Draw => EventKind::Draw,
            GameEvent::DrawSupplementTile => EventKind::DrawSupplementTile,
            GameEvent::Drawn => EventKind::Drawn,
            GameEvent::FlowerTileDrawn => EventKind::FlowerTileDrawn,
            GameEvent::WaitForPlayerAction => EventKind::WaitForPlayerAction,
            GameEvent::Cancel => EventKind::Cancel,
            GameEvent::WaitForPlayerToDiscardTile => EventKind::WaitForPlayerToDiscardTile,
            GameEvent::TileDiscarded(_) => EventKind::TileDiscarded,
            GameEvent::WaitForReaction(_) => EventKind::WaitForReaction,
            GameEvent::NoReactions => EventKind::NoReactions,
            GameEvent::NextPlayer => EventKind::NextPlayer,
            GameEvent::Chow(_) => EventKind::Chow,
            GameEvent::Pung(_) => EventKind::Pung,
            GameEvent::Kong(_) => EventKind::Kong,
            GameEvent::ConcealedKong(_) => EventKind::ConcealedKong,
            GameEvent::Win(_) => EventKind::Win,
            GameEvent::MultipleWinners(_) => EventKind::MultipleWinners,
            GameEvent::NoMoreTiles => EventKind::NoMoreTiles,
            GameEvent::DrawGame => EventKind::DrawGame,
            GameEvent::GameDrawn => EventKind::GameDrawn,
            GameEvent::DoSettlement => EventKind::DoSettlement,
            GameEvent::Settlement => EventKind::Settlement,
            GameEvent::CloseGame => EventKind::CloseGame,
            GameEvent::GameClosed => EventKind::GameClosed,
        }
    }
}

/// 事件处理函数：返回下一个事件，`None` 表示停在等待状态或已结束
pub type Handler = fn(&mut GameEngine, GameEvent) -> Result<Option<GameEvent>, GameError>;

/// 转移表：事件种类 → 处理函数，引擎创建时构建一次
#[derive(Clone)]
pub struct TransitionTable {
    handlers: [Handler; EventKind::COUNT],
}

impl TransitionTable {
    pub fn new() -> Self {
        Self {
            handlers: EventKind::ALL.map(handler_for),
        }
    }

    pub fn handler(&self, kind: EventKind) -> Handler {
        self.handlers[kind as usize]
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_for(kind: EventKind) -> Handler {
    match kind {
        EventKind::GameStarted => GameEngine::on_game_started,
        EventKind::InitializeGame => GameEngine::on_initialize_game,
        EventKind::GameInitialized => GameEngine::on_game_initialized,
        EventKind::WaitForReady => GameEngine::on_suspend,
        EventKind::StartAtBanker => GameEngine::on_start_at_banker,
        EventKind::PlayerSelected => GameEngine::on_player_selected,
        EventKind::Draw => GameEngine::on_draw,
        EventKind::DrawSupplementTile => GameEngine::on_draw_supplement_tile,
        EventKind::Drawn => GameEngine::on_drawn,
        EventKind::FlowerTileDrawn => GameEngine::on_flower_tile_drawn,
        EventKind::WaitForPlayerAction => GameEngine::on_wait_for_player_action,
        EventKind::Cancel => GameEngine::on_cancel,
        EventKind::WaitForPlayerToDiscardTile => GameEngine::on_wait_for_discard,
        EventKind::TileDiscarded => GameEngine::on_tile_discarded,
        EventKind::WaitForReaction => GameEngine::on_wait_for_reaction,
        EventKind::NoReactions => GameEngine::on_no_reactions,
        EventKind::NextPlayer => GameEngine::on_next_player,
        EventKind::Chow => GameEngine::on_chow,
        EventKind::Pung => GameEngine::on_pung,
        EventKind::Kong => GameEngine::on_kong,
        EventKind::ConcealedKong => GameEngine::on_concealed_kong,
        EventKind::Win => GameEngine::on_win,
        EventKind::MultipleWinners => GameEngine::on_multiple_winners,
        EventKind::NoMoreTiles => GameEngine::on_no_more_tiles,
        EventKind::DrawGame => GameEngine::on_draw_game,
        EventKind::GameDrawn => GameEngine::on_game_drawn,
        EventKind::DoSettlement => GameEngine::on_do_settlement,
        EventKind::Settlement => GameEngine::on_settlement,
        EventKind::CloseGame => GameEngine::on_close_game,
        EventKind::GameClosed => GameEngine::on_suspend,
    }
}

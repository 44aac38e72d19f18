use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::error::GameError;
use crate::game::event::EventKind;
use crate::game::options::GameOptions;
use crate::game::player::PlayerState;
use crate::game::scoring::WinnerResult;
use crate::tile::{Tile, TileSetDef, Wall};

/// 开局后不再变化的信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub tile_set: TileSetDef,
    pub hand_tile_count: usize,
    pub player_count: usize,
    pub winning_streak: u32,
    pub dices: Vec<u8>,
    /// 开局时牌墙的摆放顺序
    pub tiles: Vec<Tile>,
}

/// 牌局进行中的状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// 最近处理的事件
    pub current_event: Option<EventKind>,
    /// 牌墙及前后游标
    pub wall: Wall,
    pub current_player: usize,
    /// 弃牌区（栈顶为最近打出的牌）
    pub discard_area: Vec<Tile>,
    /// 当前玩家最近一次摸牌是杠后补牌
    pub after_kong: bool,
}

/// 牌局结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// 流局
    pub is_drawn_game: bool,
    /// 放炮的玩家（自摸为 None）
    pub discarding_player: Option<usize>,
    pub winning_tile: Option<Tile>,
    /// 座位 → 台数与牌型
    pub winners: BTreeMap<usize, WinnerResult>,
    /// 各座位的输赢台数
    pub payments: Vec<i64>,
}

/// 游戏状态
///
/// 纯数据，由引擎独占并原地修改；序列化后即为完整的牌局快照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: Uuid,
    /// Unix 秒
    pub created_at: i64,
    pub updated_at: i64,
    pub meta: Meta,
    pub players: Vec<PlayerState>,
    pub status: Status,
    pub result: GameResult,
}

impl GameState {
    /// 由开局配置创建（尚未发牌）
    pub fn new(options: &GameOptions) -> Self {
        let now = Utc::now().timestamp();
        Self {
            game_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            meta: Meta {
                tile_set: options.tile_set.clone(),
                hand_tile_count: options.hand_tile_count,
                player_count: options.player_count,
                winning_streak: options.winning_streak,
                dices: options.dices.clone(),
                tiles: options.tiles.clone(),
            },
            players: (0..options.player_count)
                .map(|idx| PlayerState::new(idx, idx == crate::game::constants::BANKER_SEAT))
                .collect(),
            status: Status {
                wall: Wall::new(options.tiles.clone()),
                ..Status::default()
            },
            result: GameResult::default(),
        }
    }

    /// 更新修改时间
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp();
    }

    pub fn player(&self, idx: usize) -> Result<&PlayerState, GameError> {
        self.players.get(idx).ok_or(GameError::InvalidPlayer)
    }

    pub fn player_mut(&mut self, idx: usize) -> Result<&mut PlayerState, GameError> {
        self.players.get_mut(idx).ok_or(GameError::InvalidPlayer)
    }

    /// 当前玩家
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.status.current_player]
    }

    /// 庄家座位
    pub fn banker(&self) -> usize {
        self.players
            .iter()
            .position(|p| p.is_banker)
            .unwrap_or(crate::game::constants::BANKER_SEAT)
    }

    /// `to` 相对 `from` 的座位差（1 为下家）
    pub fn relative_seat(&self, from: usize, to: usize) -> usize {
        let n = self.meta.player_count;
        (to + n - from % n) % n
    }

    /// 下一个座位
    pub fn next_seat(&self, seat: usize) -> usize {
        (seat + 1) % self.meta.player_count
    }

    /// 是否有人吃碰明杠过
    pub fn anyone_exposed(&self) -> bool {
        self.players.iter().any(|p| p.hand.has_exposed_melds())
    }

    /// 清空所有玩家的可执行动作
    pub fn clear_allowed_actions(&mut self) {
        for player in &mut self.players {
            player.clear_allowed_actions();
        }
    }

    /// 牌局是否已结束
    pub fn is_closed(&self) -> bool {
        self.status.current_event == Some(EventKind::GameClosed)
    }

    /// 当前可追踪到的牌数：牌墙剩余 + 各家手牌（含成组、花牌）+ 弃牌区
    pub fn accounted_tiles(&self) -> usize {
        self.status.wall.remaining_count()
            + self.players.iter().map(|p| p.hand.tile_count()).sum::<usize>()
            + self.status.discard_area.len()
    }

    /// 一致性检查：牌数守恒、游标不交叉
    pub fn validate(&self) -> Result<(), GameError> {
        let wall = &self.status.wall;
        if wall.front() > wall.back() {
            return Err(GameError::InvalidGameStatus);
        }
        if self.accounted_tiles() != self.meta.tiles.len() {
            return Err(GameError::InvalidGameStatus);
        }
        if self.players.len() != self.meta.player_count
            || self.status.current_player >= self.meta.player_count
        {
            return Err(GameError::InvalidGameStatus);
        }
        Ok(())
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// 从 JSON 快照恢复
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameOptions::ordered());
        assert_eq!(state.players.len(), 4);
        assert!(state.players[0].is_banker);
        assert!(!state.players[1].is_banker);
        assert_eq!(state.banker(), 0);
        assert_eq!(state.status.wall.remaining_count(), crate::game::constants::STANDARD_TILE_COUNT);
        assert_eq!(state.status.current_event, None);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_relative_seat() {
        let state = GameState::new(&GameOptions::ordered());
        assert_eq!(state.relative_seat(0, 1), 1);
        assert_eq!(state.relative_seat(3, 0), 1);
        assert_eq!(state.relative_seat(2, 1), 3);
        assert_eq!(state.next_seat(3), 0);
    }

    #[test]
    fn test_validate_detects_lost_tile() {
        let mut state = GameState::new(&GameOptions::ordered());
        state.status.wall.draw();
        assert_eq!(state.validate(), Err(GameError::InvalidGameStatus));
        state.status.discard_area.push(Tile::Wan(1));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_keeps_shape() {
        let state = GameState::new(&GameOptions::ordered());
        let json = state.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["meta"]["tiles"].is_array());
        assert_eq!(value["status"]["current_event"], serde_json::Value::Null);
        assert_eq!(value["players"][0]["is_banker"], serde_json::Value::Bool(true));
        assert_eq!(GameState::from_json(&json).unwrap(), state);
    }
}

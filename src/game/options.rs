use serde::{Deserialize, Serialize};

use crate::game::constants::{DEFAULT_HAND_TILE_COUNT, DEFAULT_PLAYER_COUNT, DICE_COUNT};
use crate::game::error::GameError;
use crate::game::scoring::PointRules;
use crate::tile::{roll_dice, shuffle_tiles, Tile, TileSetDef};

/// 开局配置
///
/// `tiles` 为牌墙的摆放顺序，`dices` 为掷出的骰子；二者都由调用方提供
/// （`GameOptions::shuffled` 会随机生成）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub tile_set: TileSetDef,
    pub hand_tile_count: usize,
    pub player_count: usize,
    /// 庄家连庄次数
    pub winning_streak: u32,
    pub dices: Vec<u8>,
    pub tiles: Vec<Tile>,
    /// 计分表
    pub point_rules: PointRules,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            tile_set: TileSetDef::standard(),
            hand_tile_count: DEFAULT_HAND_TILE_COUNT,
            player_count: DEFAULT_PLAYER_COUNT,
            winning_streak: 0,
            dices: Vec::new(),
            tiles: Vec::new(),
            point_rules: PointRules::standard(),
        }
    }
}

impl GameOptions {
    /// 不洗牌的标准配置（牌按花色、数字顺序排列）
    pub fn ordered() -> Self {
        let tile_set = TileSetDef::standard();
        Self {
            tiles: tile_set.generate(),
            dices: vec![1, 1],
            tile_set,
            ..Self::default()
        }
    }

    /// 洗牌并掷骰的标准配置
    pub fn shuffled() -> Self {
        let mut options = Self::ordered();
        shuffle_tiles(&mut options.tiles);
        options.dices = roll_dice();
        options
    }

    /// 从 JSON 读取配置，未给出的字段使用默认值
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// 开局前校验
    pub fn validate(&self) -> Result<(), GameError> {
        if self.dices.len() != DICE_COUNT {
            return Err(GameError::InsufficientDice);
        }
        if let Some(d) = self.dices.iter().find(|d| !(1..=6).contains(*d)) {
            return Err(GameError::InvalidConfig(format!("dice value out of range: {}", d)));
        }
        if self.tiles.is_empty() {
            return Err(GameError::EmptyWall);
        }
        if !(2..=DEFAULT_PLAYER_COUNT).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player_count must be between 2 and {}, got {}",
                DEFAULT_PLAYER_COUNT, self.player_count
            )));
        }
        if self.hand_tile_count == 0 {
            return Err(GameError::InvalidConfig("hand_tile_count must be positive".into()));
        }
        if self.tiles.len() < self.hand_tile_count * self.player_count {
            return Err(GameError::EmptyWall);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::STANDARD_TILE_COUNT;

    #[test]
    fn test_default_options() {
        let options = GameOptions::default();
        assert_eq!(options.hand_tile_count, 16);
        assert_eq!(options.player_count, 4);
        assert!(options.tiles.is_empty());
        assert_eq!(options.validate(), Err(GameError::InsufficientDice));
    }

    #[test]
    fn test_validate() {
        let mut options = GameOptions::ordered();
        assert!(options.validate().is_ok());

        options.dices = vec![3];
        assert_eq!(options.validate(), Err(GameError::InsufficientDice));

        options.dices = vec![3, 4];
        options.tiles.clear();
        assert_eq!(options.validate(), Err(GameError::EmptyWall));

        options.tiles = vec![Tile::Wan(1); 10];
        assert_eq!(options.validate(), Err(GameError::EmptyWall));

        let mut options = GameOptions::ordered();
        options.dices = vec![0, 7];
        assert!(matches!(options.validate(), Err(GameError::InvalidConfig(_))));

        let mut options = GameOptions::ordered();
        options.player_count = 5;
        assert!(matches!(options.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_shuffled() {
        let options = GameOptions::shuffled();
        assert_eq!(options.tiles.len(), STANDARD_TILE_COUNT);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let options = GameOptions::from_json(r#"{"hand_tile_count": 13, "dices": [2, 5], "tiles": ["W1", "W2"]}"#).unwrap();
        assert_eq!(options.hand_tile_count, 13);
        assert_eq!(options.player_count, 4);
        assert_eq!(options.tiles, vec![Tile::Wan(1), Tile::Wan(2)]);

        assert!(matches!(
            GameOptions::from_json(r#"{"tiles": ["Z9"]}"#),
            Err(GameError::InvalidConfig(_))
        ));
    }
}

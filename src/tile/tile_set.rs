use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use super::tile::{Suit, Tile};

/// 单个花色的定义：数字个数与每种牌的张数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDef {
    pub suit: Suit,
    /// 数字个数（1..=numbers）
    pub numbers: u8,
    /// 每种牌的张数
    pub count: u8,
}

/// 牌组定义（静态配置）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSetDef {
    pub defs: Vec<TileDef>,
}

impl TileSetDef {
    /// 标准 144 张牌组
    pub fn standard() -> Self {
        let def = |suit: Suit, count: u8| TileDef {
            suit,
            numbers: suit.max_rank(),
            count,
        };
        Self {
            defs: vec![
                def(Suit::Wan, 4),
                def(Suit::Tong, 4),
                def(Suit::Bamboo, 4),
                def(Suit::Wind, 4),
                def(Suit::Dragon, 4),
                def(Suit::Flower, 1),
                def(Suit::Season, 1),
            ],
        }
    }

    /// 生成全部牌（按花色、数字排序，同种牌相邻）
    pub fn generate(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.total_count());
        for def in &self.defs {
            for rank in 1..=def.numbers {
                if let Some(tile) = Tile::new(def.suit, rank) {
                    tiles.extend(std::iter::repeat(tile).take(def.count as usize));
                }
            }
        }
        tiles
    }

    /// 牌的总张数
    pub fn total_count(&self) -> usize {
        self.defs
            .iter()
            .map(|d| d.numbers as usize * d.count as usize)
            .sum()
    }

    /// 某花色的数字个数（未定义的花色返回 0）
    pub fn rank_count(&self, suit: Suit) -> u8 {
        self.defs
            .iter()
            .find(|d| d.suit == suit)
            .map(|d| d.numbers.min(suit.max_rank()))
            .unwrap_or(0)
    }
}

impl Default for TileSetDef {
    fn default() -> Self {
        Self::standard()
    }
}

/// 洗牌（Fisher-Yates）
pub fn shuffle_tiles(tiles: &mut [Tile]) {
    shuffle_tiles_with(tiles, &mut thread_rng());
}

/// 使用指定的随机数生成器洗牌（便于测试复现）
pub fn shuffle_tiles_with<R: Rng + ?Sized>(tiles: &mut [Tile], rng: &mut R) {
    tiles.shuffle(rng);
}

/// 掷两颗骰子
pub fn roll_dice() -> Vec<u8> {
    let mut rng = thread_rng();
    (0..2).map(|_| rng.gen_range(1..=6)).collect()
}

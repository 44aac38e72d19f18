use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;

/// 麻将牌
///
/// 台湾十六张麻将使用 144 张牌：
/// - 万、筒、条各 36 张（1-9 各 4 张）
/// - 风牌 16 张（东南西北各 4 张）
/// - 箭牌 12 张（中发白各 4 张）
/// - 花牌、季牌各 4 张（每种 1 张）
///
/// 文本表示为 `<花色代码><数字>`，例如 `W4`、`I1`、`F3`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tile {
    /// 万子（1-9）
    Wan(u8),
    /// 筒子（1-9）
    Tong(u8),
    /// 条子（1-9）
    Bamboo(u8),
    /// 风牌（1-4：东南西北）
    Wind(u8),
    /// 箭牌（1-3：中发白）
    Dragon(u8),
    /// 花牌（1-4）
    Flower(u8),
    /// 季牌（1-4）
    Season(u8),
}

impl Tile {
    /// 创建一张牌，验证数字范围
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank < 1 || rank > suit.max_rank() {
            return None;
        }
        Some(match suit {
            Suit::Wan => Tile::Wan(rank),
            Suit::Tong => Tile::Tong(rank),
            Suit::Bamboo => Tile::Bamboo(rank),
            Suit::Wind => Tile::Wind(rank),
            Suit::Dragon => Tile::Dragon(rank),
            Suit::Flower => Tile::Flower(rank),
            Suit::Season => Tile::Season(rank),
        })
    }

    /// 获取花色
    pub fn suit(&self) -> Suit {
        match self {
            Tile::Wan(_) => Suit::Wan,
            Tile::Tong(_) => Suit::Tong,
            Tile::Bamboo(_) => Suit::Bamboo,
            Tile::Wind(_) => Suit::Wind,
            Tile::Dragon(_) => Suit::Dragon,
            Tile::Flower(_) => Suit::Flower,
            Tile::Season(_) => Suit::Season,
        }
    }

    /// 获取数字
    pub fn rank(&self) -> u8 {
        match self {
            Tile::Wan(r)
            | Tile::Tong(r)
            | Tile::Bamboo(r)
            | Tile::Wind(r)
            | Tile::Dragon(r)
            | Tile::Flower(r)
            | Tile::Season(r) => *r,
        }
    }

    /// 是否为花牌/季牌（摸到后立即放到一边并补花）
    pub fn is_bonus(&self) -> bool {
        self.suit().is_bonus()
    }

    /// 是否为字牌（风牌、箭牌）
    pub fn is_honor(&self) -> bool {
        self.suit().is_honor()
    }

    /// 同花色的下一张（用于顺子搜索），超出范围返回 None
    pub fn next(&self) -> Option<Tile> {
        Tile::new(self.suit(), self.rank() + 1)
    }

    /// 检查三张牌是否组成顺子（同一数牌花色、数字连续）
    pub fn can_form_sequence(&self, other1: &Tile, other2: &Tile) -> bool {
        if !self.suit().allows_straight()
            || self.suit() != other1.suit()
            || self.suit() != other2.suit()
        {
            return false;
        }
        let mut ranks = [self.rank(), other1.rank(), other2.rank()];
        ranks.sort_unstable();
        ranks[0] + 1 == ranks[1] && ranks[1] + 1 == ranks[2]
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit().code(), self.rank())
    }
}

impl FromStr for Tile {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(code), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::InvalidTile(s.to_string()));
        };
        let suit = Suit::from_code(code).ok_or_else(|| GameError::InvalidTile(s.to_string()))?;
        let rank = digit
            .to_digit(10)
            .ok_or_else(|| GameError::InvalidTile(s.to_string()))?;
        Tile::new(suit, rank as u8).ok_or_else(|| GameError::InvalidTile(s.to_string()))
    }
}

impl TryFrom<String> for Tile {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

/// 解析一组牌，例如 `["W1", "W2"]`
pub fn parse_tiles<S: AsRef<str>>(items: &[S]) -> Result<Vec<Tile>, GameError> {
    items.iter().map(|s| s.as_ref().parse()).collect()
}

/// 花色枚举
///
/// 数牌（万筒条）可以组成顺子；字牌（风、箭）只能组成刻子；
/// 花季牌不参与任何组合。
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Wan = 0,
    Tong = 1,
    Bamboo = 2,
    Wind = 3,
    Dragon = 4,
    Flower = 5,
    Season = 6,
}

impl Suit {
    /// 花色数量
    pub const COUNT: usize = 7;

    /// 所有花色（按生成顺序）
    pub fn all() -> [Suit; Suit::COUNT] {
        [
            Suit::Wan,
            Suit::Tong,
            Suit::Bamboo,
            Suit::Wind,
            Suit::Dragon,
            Suit::Flower,
            Suit::Season,
        ]
    }

    /// 花色代码
    pub fn code(&self) -> char {
        match self {
            Suit::Wan => 'W',
            Suit::Tong => 'T',
            Suit::Bamboo => 'B',
            Suit::Wind => 'I',
            Suit::Dragon => 'D',
            Suit::Flower => 'F',
            Suit::Season => 'S',
        }
    }

    /// 由花色代码解析
    pub fn from_code(code: char) -> Option<Suit> {
        Suit::all().into_iter().find(|s| s.code() == code)
    }

    /// 该花色的最大数字
    pub fn max_rank(&self) -> u8 {
        match self {
            Suit::Wan | Suit::Tong | Suit::Bamboo => 9,
            Suit::Wind | Suit::Flower | Suit::Season => 4,
            Suit::Dragon => 3,
        }
    }

    /// 数牌花色
    pub fn is_numeral(&self) -> bool {
        matches!(self, Suit::Wan | Suit::Tong | Suit::Bamboo)
    }

    /// 字牌花色
    pub fn is_honor(&self) -> bool {
        matches!(self, Suit::Wind | Suit::Dragon)
    }

    /// 花季牌
    pub fn is_bonus(&self) -> bool {
        matches!(self, Suit::Flower | Suit::Season)
    }

    /// 是否允许组成顺子
    pub fn allows_straight(&self) -> bool {
        self.is_numeral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_creation() {
        let tile = Tile::new(Suit::Wan, 1).unwrap();
        assert_eq!(tile.suit(), Suit::Wan);
        assert_eq!(tile.rank(), 1);

        let tile = Tile::new(Suit::Dragon, 3).unwrap();
        assert_eq!(tile, Tile::Dragon(3));

        // 超出范围
        assert!(Tile::new(Suit::Wan, 0).is_none());
        assert!(Tile::new(Suit::Wan, 10).is_none());
        assert!(Tile::new(Suit::Dragon, 4).is_none());
        assert!(Tile::new(Suit::Wind, 5).is_none());
    }

    #[test]
    fn test_tile_notation() {
        assert_eq!("W4".parse::<Tile>().unwrap(), Tile::Wan(4));
        assert_eq!("I1".parse::<Tile>().unwrap(), Tile::Wind(1));
        assert_eq!("S2".parse::<Tile>().unwrap(), Tile::Season(2));
        assert_eq!(Tile::Bamboo(7).to_string(), "B7");

        assert!("X1".parse::<Tile>().is_err());
        assert!("W".parse::<Tile>().is_err());
        assert!("W10".parse::<Tile>().is_err());
        assert!("D4".parse::<Tile>().is_err());
        assert_eq!(
            "".parse::<Tile>(),
            Err(GameError::InvalidTile(String::new()))
        );
    }

    #[test]
    fn test_tile_serde() {
        let json = serde_json::to_string(&vec![Tile::Wan(1), Tile::Flower(2)]).unwrap();
        assert_eq!(json, r#"["W1","F2"]"#);
        let tiles: Vec<Tile> = serde_json::from_str(&json).unwrap();
        assert_eq!(tiles, vec![Tile::Wan(1), Tile::Flower(2)]);
        assert!(serde_json::from_str::<Tile>(r#""Q9""#).is_err());
    }

    #[test]
    fn test_suit_properties() {
        assert!(Suit::Wan.allows_straight());
        assert!(!Suit::Wind.allows_straight());
        assert!(Suit::Dragon.is_honor());
        assert!(Tile::Flower(1).is_bonus());
        assert!(Tile::Season(4).is_bonus());
        assert!(!Tile::Dragon(1).is_bonus());
        assert_eq!(Suit::from_code('B'), Some(Suit::Bamboo));
        assert_eq!(Suit::from_code('Z'), None);
    }

    #[test]
    fn test_can_form_sequence() {
        let w1 = Tile::Wan(1);
        let w2 = Tile::Wan(2);
        let w3 = Tile::Wan(3);
        assert!(w1.can_form_sequence(&w2, &w3));
        assert!(w3.can_form_sequence(&w1, &w2));
        assert!(!w1.can_form_sequence(&w2, &Tile::Tong(3)));
        // 字牌不能组成顺子
        assert!(!Tile::Dragon(1).can_form_sequence(&Tile::Dragon(2), &Tile::Dragon(3)));
    }

    #[test]
    fn test_tile_ordering() {
        let mut tiles = vec![Tile::Dragon(1), Tile::Wan(9), Tile::Tong(1), Tile::Wan(2)];
        tiles.sort();
        assert_eq!(tiles, vec![Tile::Wan(2), Tile::Wan(9), Tile::Tong(1), Tile::Dragon(1)]);
    }
}

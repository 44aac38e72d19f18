/// 牌相关模块
///
/// 包含牌（Tile）、牌组定义、牌墙（Wall）、手牌（Hand）和牌型解析器（Resolver）

pub mod tile;
pub mod tile_set;
pub mod wall;
pub mod hand;
pub mod resolver;

// 重新导出常用类型
pub use tile::{parse_tiles, Suit, Tile};
pub use tile_set::{roll_dice, shuffle_tiles, shuffle_tiles_with, TileDef, TileSetDef};
pub use wall::{SupplementDraw, Wall};
pub use hand::{Hand, Kongs};
pub use resolver::{DiscardCandidate, ResolvedState, Resolver, Segment};

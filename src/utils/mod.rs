/// 工具模块

pub mod suit_counts;

pub use suit_counts::{RankGroup, RankGroups, SuitCounts};

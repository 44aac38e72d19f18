use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{Suit, Tile};
use super::tile_set::TileSetDef;
use crate::utils::suit_counts::{RankGroup, SuitCounts};

/// 解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedState {
    /// 是否胡牌
    pub is_win: bool,
    /// 是否听牌
    pub is_ready_hand: bool,
    /// 听的牌（加入任意一张即可完成）
    pub ready_hand_candidates: Vec<Tile>,
    /// 找到的雀头（多于一对时不能胡）
    pub eyes: Vec<Tile>,
}

/// 听牌打法：打出 `discard` 后听 `candidates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardCandidate {
    pub discard: Tile,
    pub candidates: Vec<Tile>,
}

/// 完整胡牌的拆分结果中的一组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// 刻子
    Triplet(Tile),
    /// 顺子（记录最小的一张）
    Straight(Tile),
    /// 雀头
    Eyes(Tile),
}

impl Segment {
    /// 组内的牌
    pub fn tiles(&self) -> SmallVec<[Tile; 3]> {
        match *self {
            Segment::Triplet(t) => SmallVec::from_slice(&[t, t, t]),
            Segment::Eyes(t) => SmallVec::from_slice(&[t, t]),
            Segment::Straight(t) => {
                let mut tiles = SmallVec::new();
                tiles.push(t);
                let mut cur = t;
                for _ in 0..2 {
                    if let Some(next) = cur.next() {
                        tiles.push(next);
                        cur = next;
                    }
                }
                tiles
            }
        }
    }

    fn from_group(suit: Suit, group: RankGroup) -> Option<Segment> {
        match group {
            RankGroup::Triplet(r) => Tile::new(suit, r).map(Segment::Triplet),
            RankGroup::Straight(r) => Tile::new(suit, r).map(Segment::Straight),
        }
    }
}

/// 单一花色的分解状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupStatus {
    /// 能完整分解（可能带一对雀头）
    Complete { eyes: Option<u8> },
    /// 无法分解
    Broken,
}

/// 按花色分组后的牌
struct SuitGroup {
    suit: Suit,
    counts: SuitCounts,
}

/// 牌型解析器
///
/// 将一组牌按花色拆分，各花色独立分解为刻子/顺子/雀头，再合并判定胡牌与听牌。
/// 不读取任何游戏状态，只依赖牌组定义中的各花色数字个数（用于听牌搜索）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    rank_counts: [u8; Suit::COUNT],
}

impl Resolver {
    /// 由牌组定义创建
    pub fn new(tile_set: &TileSetDef) -> Self {
        Self {
            rank_counts: Suit::all().map(|s| tile_set.rank_count(s)),
        }
    }

    /// 标准牌组的解析器
    pub fn standard() -> Self {
        Self::new(&TileSetDef::standard())
    }

    /// 解析一组牌（花季牌被忽略）
    ///
    /// # 返回
    ///
    /// - 所有花色都能分解且恰好一对雀头：胡牌
    /// - 所有花色都能分解且有两对雀头：听牌（雀头所在花色再补一张即成）
    /// - 三对以上雀头：只保留补上后确实能胡的雀头（一张牌最多消掉一对，因此通常为空）
    /// - 恰好一个花色不能分解：该花色中能补全的牌即为听牌候选
    /// - 两个以上花色不能分解：既不能胡也不能听
    pub fn resolve(&self, tiles: &[Tile]) -> ResolvedState {
        let groups = Self::partition(tiles);
        let statuses: SmallVec<[GroupStatus; 5]> =
            groups.iter().map(|g| Self::classify(g.suit, &g.counts)).collect();

        let eyes: Vec<Tile> = groups
            .iter()
            .zip(&statuses)
            .filter_map(|(g, st)| match st {
                GroupStatus::Complete { eyes: Some(r) } => Tile::new(g.suit, *r),
                _ => None,
            })
            .collect();

        let broken: SmallVec<[usize; 5]> = statuses
            .iter()
            .enumerate()
            .filter(|(_, st)| **st == GroupStatus::Broken)
            .map(|(i, _)| i)
            .collect();

        let mut state = ResolvedState {
            eyes,
            ..ResolvedState::default()
        };

        match broken.len() {
            0 => match state.eyes.len() {
                0 => {}
                1 => state.is_win = true,
                2 => {
                    let mut candidates = Vec::new();
                    for g in groups.iter().filter(|g| g.counts.len() % 3 == 2) {
                        candidates.extend(self.completions(g.suit, &g.counts));
                    }
                    state.ready_hand_candidates = candidates;
                }
                _ => {
                    state.ready_hand_candidates = state
                        .eyes
                        .iter()
                        .copied()
                        .filter(|&eyes| {
                            let mut probe = tiles.to_vec();
                            probe.push(eyes);
                            Self::completes(&probe)
                        })
                        .collect();
                }
            },
            1 => {
                let g = &groups[broken[0]];
                state.ready_hand_candidates = self.completions(g.suit, &g.counts);
            }
            _ => {}
        }

        state.ready_hand_candidates.sort_unstable();
        state.ready_hand_candidates.dedup();
        state.is_ready_hand = !state.is_win && !state.ready_hand_candidates.is_empty();
        state
    }

    /// 是否胡牌
    pub fn is_win(&self, tiles: &[Tile]) -> bool {
        Self::completes(tiles)
    }

    /// 所有花色都能分解且恰好一对雀头（不计算听牌）
    fn completes(tiles: &[Tile]) -> bool {
        let mut eyes = 0;
        for g in Self::partition(tiles) {
            match Self::classify(g.suit, &g.counts) {
                GroupStatus::Broken => return false,
                GroupStatus::Complete { eyes: Some(_) } => eyes += 1,
                GroupStatus::Complete { eyes: None } => {}
            }
        }
        eyes == 1
    }

    /// 各花色中验证成立的雀头
    pub fn figure_eyes(&self, tiles: &[Tile]) -> Vec<Tile> {
        Self::partition(tiles)
            .iter()
            .filter_map(|g| {
                g.counts
                    .decompose_with_eyes(g.suit.allows_straight())
                    .and_then(|(r, _)| Tile::new(g.suit, r))
            })
            .collect()
    }

    /// 完整胡牌的拆分（刻子、顺子、雀头），不是胡牌返回 None
    pub fn segments(&self, tiles: &[Tile]) -> Option<Vec<Segment>> {
        let mut segments = Vec::new();
        let mut eyes_found = 0;
        for g in Self::partition(tiles) {
            let straights = g.suit.allows_straight();
            let groups = match g.counts.len() % 3 {
                0 => g.counts.decompose(straights)?,
                2 => {
                    let (eyes, groups) = g.counts.decompose_with_eyes(straights)?;
                    eyes_found += 1;
                    segments.push(Segment::Eyes(Tile::new(g.suit, eyes)?));
                    groups
                }
                _ => return None,
            };
            for group in groups {
                segments.push(Segment::from_group(g.suit, group)?);
            }
        }
        (eyes_found == 1).then_some(segments)
    }

    /// 听牌打法
    ///
    /// 对手牌中每种不同的牌各打出一张，剩余的牌若听牌则记录 `{打出的牌 → 听的牌}`
    pub fn figure_discard_candidates_for_ready_hand(&self, tiles: &[Tile]) -> Vec<DiscardCandidate> {
        let mut distinct: Vec<Tile> = tiles.iter().copied().filter(|t| !t.is_bonus()).collect();
        distinct.sort_unstable();
        distinct.dedup();

        distinct
            .into_iter()
            .filter_map(|discard| {
                let mut rest = tiles.to_vec();
                let pos = rest.iter().position(|t| *t == discard)?;
                rest.remove(pos);
                let resolved = self.resolve(&rest);
                resolved.is_ready_hand.then(|| DiscardCandidate {
                    discard,
                    candidates: resolved.ready_hand_candidates,
                })
            })
            .collect()
    }

    /// 按花色拆分（跳过花季牌），花色顺序固定
    fn partition(tiles: &[Tile]) -> SmallVec<[SuitGroup; 5]> {
        let mut groups: SmallVec<[SuitGroup; 5]> = SmallVec::new();
        for suit in Suit::all() {
            if suit.is_bonus() {
                continue;
            }
            let counts = SuitCounts::from_ranks(
                tiles.iter().filter(|t| t.suit() == suit).map(|t| t.rank()),
            );
            if !counts.is_empty() {
                groups.push(SuitGroup { suit, counts });
            }
        }
        groups
    }

    /// 按张数模 3 判定单一花色能否分解
    fn classify(suit: Suit, counts: &SuitCounts) -> GroupStatus {
        let straights = suit.allows_straight();
        match counts.len() % 3 {
            0 if counts.decompose(straights).is_some() => GroupStatus::Complete { eyes: None },
            2 => match counts.decompose_with_eyes(straights) {
                Some((eyes, _)) => GroupStatus::Complete { eyes: Some(eyes) },
                None => GroupStatus::Broken,
            },
            _ => GroupStatus::Broken,
        }
    }

    /// 单一花色的听牌：`tiles` 中属于 `suit` 的牌再补一张后能完整分解的牌
    pub fn figure_ready_hand_conditions(&self, suit: Suit, tiles: &[Tile]) -> Vec<Tile> {
        let counts = SuitCounts::from_ranks(
            tiles.iter().filter(|t| t.suit() == suit).map(|t| t.rank()),
        );
        self.completions(suit, &counts)
    }

    /// 该花色中补一张后能完整分解的牌
    fn completions(&self, suit: Suit, counts: &SuitCounts) -> Vec<Tile> {
        (1..=self.rank_counts[suit as usize])
            .filter(|&rank| {
                let mut probe = *counts;
                probe.add(rank) && Self::classify(suit, &probe) != GroupStatus::Broken
            })
            .filter_map(|rank| Tile::new(suit, rank))
            .collect()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::standard()
    }
}

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::tile::{Hand, Resolver, Segment, Suit, Tile};

/// 台数种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointType {
    /// 平胡（没有其他牌型时的底台）
    MinimalPoints,
    /// 碰碰胡
    PungHand,
    /// 混一色
    HalfFlush,
    /// 清一色
    FullFlush,
    /// 小三元
    LittleThreeDragons,
    /// 字一色
    AllHonorsHand,
    /// 大三元
    BigThreeDragons,
    /// 三暗刻
    ThreeConcealedPungs,
    /// 四暗刻
    FourConcealedPungs,
    /// 五暗刻
    FiveConcealedPungs,
    /// 小四喜
    SmallFourWinds,
    /// 大四喜
    BigFourWinds,
    /// 天胡
    HeavenlyHand,
    /// 地胡
    EarthlyHand,
    /// 花牌（每张）
    FlowerTiles,
    /// 杠上开花
    AfterAKong,
    /// 海底捞月
    LastTileDraw,
    /// 杠上炮
    KongOnDiscard,
    /// 独听
    SingleWait,
    /// 自摸
    SelfDrawn,
    /// 明杠（每个）
    MeldedKong,
    /// 暗杠（每个）
    ConcealedKong,
    /// 门前清
    ConcealedHand,
}

/// 互斥的牌型族：同族只取台数最高的一种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointFamily {
    Suit,
    Dragons,
    Winds,
    ConcealedPungs,
    FirstTurn,
}

impl PointType {
    /// 所属牌型族
    pub fn family(&self) -> Option<PointFamily> {
        match self {
            PointType::HalfFlush | PointType::FullFlush | PointType::AllHonorsHand => {
                Some(PointFamily::Suit)
            }
            PointType::LittleThreeDragons | PointType::BigThreeDragons => Some(PointFamily::Dragons),
            PointType::SmallFourWinds | PointType::BigFourWinds => Some(PointFamily::Winds),
            PointType::ThreeConcealedPungs
            | PointType::FourConcealedPungs
            | PointType::FiveConcealedPungs => Some(PointFamily::ConcealedPungs),
            PointType::HeavenlyHand | PointType::EarthlyHand => Some(PointFamily::FirstTurn),
            _ => None,
        }
    }

    /// 是否为牌型（决定是否还需要平胡底台）
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            PointType::PungHand
                | PointType::HalfFlush
                | PointType::FullFlush
                | PointType::LittleThreeDragons
                | PointType::AllHonorsHand
                | PointType::BigThreeDragons
                | PointType::ThreeConcealedPungs
                | PointType::FourConcealedPungs
                | PointType::FiveConcealedPungs
                | PointType::SmallFourWinds
                | PointType::BigFourWinds
                | PointType::HeavenlyHand
                | PointType::EarthlyHand
        )
    }
}

/// 计分表：台数种类 → 台数
///
/// 表中没有的种类不计分，可以从 JSON 整体替换以支持不同地区的规则。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointRules {
    points: BTreeMap<PointType, u32>,
}

impl PointRules {
    /// 标准计分表
    pub fn standard() -> Self {
        use PointType::*;
        Self::from_pairs(&[
            (MinimalPoints, 1),
            (PungHand, 4),
            (HalfFlush, 4),
            (FullFlush, 8),
            (AllHonorsHand, 8),
            (LittleThreeDragons, 4),
            (BigThreeDragons, 8),
            (ThreeConcealedPungs, 2),
            (FourConcealedPungs, 5),
            (FiveConcealedPungs, 8),
            (SmallFourWinds, 8),
            (BigFourWinds, 16),
            (HeavenlyHand, 16),
            (EarthlyHand, 16),
            (FlowerTiles, 1),
            (AfterAKong, 1),
            (LastTileDraw, 1),
            (KongOnDiscard, 1),
            (SingleWait, 1),
            (SelfDrawn, 1),
            (MeldedKong, 1),
            (ConcealedKong, 1),
            (ConcealedHand, 1),
        ])
    }

    /// 简化计分表（没有三暗刻、五暗刻）
    pub fn simplified() -> Self {
        use PointType::*;
        Self::from_pairs(&[
            (MinimalPoints, 1),
            (PungHand, 2),
            (HalfFlush, 3),
            (FullFlush, 6),
            (LittleThreeDragons, 4),
            (AllHonorsHand, 5),
            (BigThreeDragons, 8),
            (FourConcealedPungs, 10),
            (SmallFourWinds, 10),
            (BigFourWinds, 13),
            (HeavenlyHand, 16),
            (EarthlyHand, 16),
            (FlowerTiles, 1),
            (AfterAKong, 1),
            (LastTileDraw, 1),
            (KongOnDiscard, 1),
            (SingleWait, 1),
            (SelfDrawn, 1),
            (MeldedKong, 1),
            (ConcealedKong, 1),
            (ConcealedHand, 1),
        ])
    }

    fn from_pairs(pairs: &[(PointType, u32)]) -> Self {
        Self {
            points: pairs.iter().copied().collect(),
        }
    }

    /// 某种类的台数（未定义为 0）
    pub fn point(&self, point_type: PointType) -> u32 {
        self.points.get(&point_type).copied().unwrap_or(0)
    }

    /// 修改某种类的台数
    pub fn set(&mut self, point_type: PointType, point: u32) {
        self.points.insert(point_type, point);
    }
}

impl Default for PointRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// 计分时需要的牌局信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringContext {
    pub is_banker: bool,
    /// 自摸
    pub self_drawn: bool,
    /// 弃牌区剩余张数
    pub discard_area_len: usize,
    /// 牌墙已摸完
    pub wall_exhausted: bool,
    /// 杠后补牌（自摸为杠上开花，放炮为杠上炮）
    pub after_kong: bool,
    /// 是否有人吃碰明杠过
    pub anyone_exposed: bool,
    pub player_count: usize,
    pub winning_tile: Option<Tile>,
}

/// 单个赢家的结算
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerResult {
    pub points: u32,
    pub conditions: Vec<PointType>,
}

/// 计台器
pub struct PointCalculator<'a> {
    resolver: &'a Resolver,
    rules: &'a PointRules,
}

impl<'a> PointCalculator<'a> {
    pub fn new(resolver: &'a Resolver, rules: &'a PointRules) -> Self {
        Self { resolver, rules }
    }

    /// 计算胡牌者的总台数
    ///
    /// 各牌型相加；同一牌型族（如大/小三元）只保留台数最高的一种。
    /// 没有任何牌型成立时记平胡。
    pub fn calculate(&self, hand: &Hand, ctx: &ScoringContext) -> WinnerResult {
        let mut matched: Vec<(PointType, u32)> = self
            .conditions(hand, ctx)
            .into_iter()
            .filter(|(_, p)| *p > 0)
            .collect();

        let mut best: BTreeMap<PointFamily, (PointType, u32)> = BTreeMap::new();
        for &(pt, p) in &matched {
            if let Some(family) = pt.family() {
                let entry = best.entry(family).or_insert((pt, p));
                if p > entry.1 {
                    *entry = (pt, p);
                }
            }
        }
        matched.retain(|(pt, _)| match pt.family() {
            Some(family) => best.get(&family).map(|(b, _)| b) == Some(pt),
            None => true,
        });

        if !matched.iter().any(|(pt, _)| pt.is_pattern()) {
            let minimal = self.rules.point(PointType::MinimalPoints);
            if minimal > 0 {
                matched.insert(0, (PointType::MinimalPoints, minimal));
            }
        }

        WinnerResult {
            points: matched.iter().map(|(_, p)| p).sum(),
            conditions: matched.into_iter().map(|(pt, _)| pt).collect(),
        }
    }

    /// 所有成立的牌型及其台数（未做同族取舍）
    pub fn conditions(&self, hand: &Hand, ctx: &ScoringContext) -> Vec<(PointType, u32)> {
        let mut found = Vec::new();
        let mut add = |pt: PointType, times: usize| {
            if times > 0 {
                found.push((pt, self.rules.point(pt) * times as u32));
            }
        };

        add(PointType::PungHand, is_pung_hand(hand) as usize);
        add(PointType::HalfFlush, is_half_flush(hand) as usize);
        add(PointType::FullFlush, is_full_flush(hand) as usize);
        add(PointType::AllHonorsHand, is_all_honors_hand(hand) as usize);
        add(PointType::LittleThreeDragons, is_little_three_dragons(hand) as usize);
        add(PointType::BigThreeDragons, is_big_three_dragons(hand) as usize);
        add(PointType::SmallFourWinds, is_small_four_winds(hand) as usize);
        add(PointType::BigFourWinds, is_big_four_winds(hand) as usize);
        match concealed_pung_count(hand, self.resolver, ctx) {
            3 => add(PointType::ThreeConcealedPungs, 1),
            4 => add(PointType::FourConcealedPungs, 1),
            n if n >= 5 => add(PointType::FiveConcealedPungs, 1),
            _ => {}
        }
        add(PointType::HeavenlyHand, is_heavenly_hand(hand, ctx) as usize);
        add(PointType::EarthlyHand, is_earthly_hand(hand, ctx) as usize);
        add(PointType::FlowerTiles, hand.flowers.len());
        add(PointType::AfterAKong, (ctx.self_drawn && ctx.after_kong) as usize);
        add(PointType::LastTileDraw, is_last_tile_draw(ctx) as usize);
        add(PointType::KongOnDiscard, (!ctx.self_drawn && ctx.after_kong) as usize);
        add(PointType::SingleWait, is_single_wait(hand, self.resolver, ctx) as usize);
        add(PointType::SelfDrawn, ctx.self_drawn as usize);
        add(PointType::MeldedKong, hand.kong.open.len());
        add(PointType::ConcealedKong, hand.kong.concealed.len());
        add(PointType::ConcealedHand, is_concealed_hand(hand) as usize);
        found
    }
}

/// 碰碰胡：没有顺子和杠，手牌除一对雀头外全是刻子
pub fn is_pung_hand(hand: &Hand) -> bool {
    if !hand.straights.is_empty() || hand.kong_count() > 0 {
        return false;
    }
    let counts = count_by_tile(&hand.tiles);
    let pairs = counts.values().filter(|&&c| c == 2).count();
    pairs == 1 && counts.values().all(|&c| c == 2 || c == 3)
}

/// 混一色：只有一种数牌，加上字牌
pub fn is_half_flush(hand: &Hand) -> bool {
    let suits = suits_of(hand);
    numeral_suit_count(&suits) == 1 && suits.iter().any(|s| s.is_honor())
}

/// 清一色：只有一种数牌
pub fn is_full_flush(hand: &Hand) -> bool {
    let suits = suits_of(hand);
    suits.len() == 1 && numeral_suit_count(&suits) == 1
}

/// 字一色
pub fn is_all_honors_hand(hand: &Hand) -> bool {
    let suits = suits_of(hand);
    !suits.is_empty() && suits.iter().all(|s| s.is_honor())
}

/// 小三元：两组箭牌刻子加箭牌雀头
pub fn is_little_three_dragons(hand: &Hand) -> bool {
    honor_sets(hand, Suit::Dragon) == (2, 1)
}

/// 大三元
pub fn is_big_three_dragons(hand: &Hand) -> bool {
    honor_sets(hand, Suit::Dragon).0 == 3
}

/// 小四喜：三组风牌刻子加风牌雀头
pub fn is_small_four_winds(hand: &Hand) -> bool {
    honor_sets(hand, Suit::Wind) == (3, 1)
}

/// 大四喜
pub fn is_big_four_winds(hand: &Hand) -> bool {
    honor_sets(hand, Suit::Wind).0 == 4
}

/// 暗刻数：暗杠加上手牌拆分出的刻子
///
/// 放炮胡时，由胡的那张牌组成的刻子算明刻
pub fn concealed_pung_count(hand: &Hand, resolver: &Resolver, ctx: &ScoringContext) -> usize {
    let claimed = if ctx.self_drawn { None } else { ctx.winning_tile };
    let in_hand = resolver
        .segments(&hand.tiles)
        .map(|segments| {
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Triplet(t) if Some(*t) != claimed))
                .count()
        })
        .unwrap_or(0);
    hand.kong.concealed.len() + in_hand
}

/// 天胡：庄家第一次摸牌即自摸，且无人吃碰杠
pub fn is_heavenly_hand(hand: &Hand, ctx: &ScoringContext) -> bool {
    ctx.is_banker
        && ctx.self_drawn
        && !ctx.anyone_exposed
        && is_concealed_hand(hand)
        && ctx.discard_area_len == 0
}

/// 地胡：闲家第一巡自摸，且无人吃碰杠
pub fn is_earthly_hand(hand: &Hand, ctx: &ScoringContext) -> bool {
    !ctx.is_banker
        && ctx.self_drawn
        && !ctx.anyone_exposed
        && hand.kong_count() == 0
        && ctx.discard_area_len < ctx.player_count
}

/// 海底捞月：摸最后一张牌自摸
pub fn is_last_tile_draw(ctx: &ScoringContext) -> bool {
    ctx.self_drawn && ctx.wall_exhausted
}

/// 独听：去掉胡的那张牌后只听一张
pub fn is_single_wait(hand: &Hand, resolver: &Resolver, ctx: &ScoringContext) -> bool {
    let Some(winning) = ctx.winning_tile else {
        return false;
    };
    let mut waiting = hand.tiles.clone();
    let Some(pos) = waiting.iter().position(|&t| t == winning) else {
        return false;
    };
    waiting.remove(pos);
    resolver.resolve(&waiting).ready_hand_candidates.len() == 1
}

/// 门前清：没有任何吃碰杠
pub fn is_concealed_hand(hand: &Hand) -> bool {
    hand.triplets.is_empty() && hand.straights.is_empty() && hand.kong_count() == 0
}

fn count_by_tile(tiles: &[Tile]) -> BTreeMap<Tile, usize> {
    let mut counts = BTreeMap::new();
    for &t in tiles.iter().filter(|t| !t.is_bonus()) {
        *counts.entry(t).or_insert(0) += 1;
    }
    counts
}

fn suits_of(hand: &Hand) -> BTreeSet<Suit> {
    hand.all_tiles().iter().map(|t| t.suit()).collect()
}

fn numeral_suit_count(suits: &BTreeSet<Suit>) -> usize {
    suits.iter().filter(|s| s.is_numeral()).count()
}

/// 某字牌花色的（刻子数, 雀头数）：碰、杠算刻子，手牌中三张以上算刻子、恰好两张算雀头
fn honor_sets(hand: &Hand, suit: Suit) -> (usize, usize) {
    let melded = hand
        .triplets
        .iter()
        .chain(&hand.kong.open)
        .chain(&hand.kong.concealed)
        .filter(|t| t.suit() == suit)
        .count();
    let counts = count_by_tile(&hand.tiles);
    let in_hand = counts.iter().filter(|(t, &c)| t.suit() == suit && c >= 3).count();
    let pairs = counts.iter().filter(|(t, &c)| t.suit() == suit && c == 2).count();
    (melded + in_hand, pairs)
}

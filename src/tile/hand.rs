use serde::{Deserialize, Serialize};

use super::resolver::{DiscardCandidate, Resolver};
use super::tile::Tile;
use crate::game::action::{Action, ActionKind};
use crate::game::error::GameError;

/// 杠
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kongs {
    /// 明杠
    pub open: Vec<Tile>,
    /// 暗杠
    pub concealed: Vec<Tile>,
}

/// 手牌
///
/// 每张牌只会出现在以下之一：`tiles`、`flowers`、`triplets`（算三张）、
/// `straights`、`kong`（算四张）。`draw` 只是对 `tiles` 中最近摸到那张牌的标记。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// 花牌区
    pub flowers: Vec<Tile>,
    /// 碰出的刻子
    pub triplets: Vec<Tile>,
    /// 吃出的顺子
    pub straights: Vec<[Tile; 3]>,
    pub kong: Kongs,
    /// 未成组的牌
    pub tiles: Vec<Tile>,
    /// 最近摸到的牌（自摸胡/暗杠判定用）
    pub draw: Option<Tile>,
}

impl Hand {
    /// 创建空手牌
    pub fn new() -> Self {
        Self::default()
    }

    /// 配牌阶段加入多张牌（不设置 `draw`）
    pub fn add_tiles(&mut self, tiles: &[Tile]) {
        self.tiles.extend_from_slice(tiles);
    }

    /// 摸入一张牌
    pub fn deal(&mut self, tile: Tile) {
        self.tiles.push(tile);
        self.draw = Some(tile);
    }

    /// 放入花牌区
    pub fn add_flowers(&mut self, flowers: &[Tile]) {
        self.flowers.extend_from_slice(flowers);
    }

    /// 是否持有该牌
    pub fn exists(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// 持有该牌的张数
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// 打出一张牌
    pub fn discard(&mut self, tile: Tile) -> Result<(), GameError> {
        let pos = self
            .tiles
            .iter()
            .position(|&t| t == tile)
            .ok_or(GameError::PlayerLacksTile(tile))?;
        self.tiles.remove(pos);
        self.draw = None;
        Ok(())
    }

    /// 打出刚摸到的牌（听牌后自动出牌）
    pub fn discard_draw_tile(&mut self) -> Result<Tile, GameError> {
        let tile = self.draw.ok_or(GameError::InvalidAction)?;
        self.discard(tile)?;
        Ok(tile)
    }

    /// 检查能否吃
    pub fn check_chow(&self, tile: Tile, pair: [Tile; 2]) -> Result<(), GameError> {
        for t in pair {
            if !self.exists(t) {
                return Err(GameError::PlayerLacksTile(t));
            }
        }
        if pair[0] == pair[1] || !tile.can_form_sequence(&pair[0], &pair[1]) {
            return Err(GameError::MeldPrecondition);
        }
        Ok(())
    }

    /// 吃：用手中两张与 `tile` 组成顺子
    pub fn do_chow(&mut self, tile: Tile, pair: [Tile; 2]) -> Result<(), GameError> {
        self.check_chow(tile, pair)?;
        for t in pair {
            self.discard(t)?;
        }
        let mut run = [tile, pair[0], pair[1]];
        run.sort_unstable();
        self.straights.push(run);
        Ok(())
    }

    /// 检查能否碰
    pub fn check_pung(&self, tile: Tile) -> Result<(), GameError> {
        if self.count(tile) < 2 {
            return Err(GameError::MeldPrecondition);
        }
        Ok(())
    }

    /// 碰
    pub fn do_pung(&mut self, tile: Tile) -> Result<(), GameError> {
        self.check_pung(tile)?;
        self.remove_copies(tile, 2);
        self.triplets.push(tile);
        self.draw = None;
        Ok(())
    }

    /// 检查能否杠
    ///
    /// - 明杠：手中有三张
    /// - 暗杠：`tile` 必须是刚摸到的牌，且连同摸到的牌共四张
    pub fn check_kong(&self, tile: Tile, concealed: bool) -> Result<(), GameError> {
        if concealed {
            if self.draw != Some(tile) || self.count(tile) < 4 {
                return Err(GameError::MeldPrecondition);
            }
        } else if self.count(tile) < 3 {
            return Err(GameError::MeldPrecondition);
        }
        Ok(())
    }

    /// 杠
    pub fn do_kong(&mut self, tile: Tile, concealed: bool) -> Result<(), GameError> {
        self.check_kong(tile, concealed)?;
        if concealed {
            self.remove_copies(tile, 4);
            self.kong.concealed.push(tile);
        } else {
            self.remove_copies(tile, 3);
            self.kong.open.push(tile);
        }
        self.draw = None;
        Ok(())
    }

    /// 能与 `tile` 组成顺子的两张牌组合
    pub fn figure_straight_candidates(&self, tile: Tile) -> Vec<[Tile; 2]> {
        if !tile.suit().allows_straight() {
            return Vec::new();
        }
        let suit = tile.suit();
        let rank = tile.rank() as i8;
        [(-2i8, -1i8), (-1, 1), (1, 2)]
            .into_iter()
            .filter_map(|(a, b)| {
                let first = Tile::new(suit, u8::try_from(rank + a).ok()?)?;
                let second = Tile::new(suit, u8::try_from(rank + b).ok()?)?;
                (self.exists(first) && self.exists(second)).then_some([first, second])
            })
            .collect()
    }

    /// 摸牌后的自身动作：自摸胡、暗杠；有任一项时附带出牌
    pub fn figure_actions(&self, resolver: &Resolver) -> Vec<Action> {
        let mut actions = Vec::new();
        if resolver.is_win(&self.tiles) {
            actions.push(Action::new(ActionKind::Win));
        }
        if let Some(draw) = self.draw {
            if self.count(draw) == 4 {
                actions.push(Action::with_candidates(ActionKind::Kong, vec![vec![draw]]));
            }
        }
        if !actions.is_empty() {
            actions.push(Action::new(ActionKind::Discard));
        }
        actions
    }

    /// 别家出牌后的响应：胡、杠、碰，以及只有下家（`relative_seat == 1`）可以吃
    pub fn figure_reactions(&self, resolver: &Resolver, tile: Tile, relative_seat: usize) -> Vec<Action> {
        let mut reactions = Vec::new();

        let mut probe = self.tiles.clone();
        probe.push(tile);
        if resolver.is_win(&probe) {
            reactions.push(Action::new(ActionKind::Win));
        }

        let copies = self.count(tile);
        if copies == 3 {
            reactions.push(Action::new(ActionKind::Kong));
        }
        if copies >= 2 {
            reactions.push(Action::new(ActionKind::Pung));
        }

        if relative_seat == 1 {
            let pairs = self.figure_straight_candidates(tile);
            if !pairs.is_empty() {
                reactions.push(Action::with_candidates(
                    ActionKind::Chow,
                    pairs.into_iter().map(|p| p.to_vec()).collect(),
                ));
            }
        }
        reactions
    }

    /// 听牌打法
    pub fn figure_ready_hand(&self, resolver: &Resolver) -> Vec<DiscardCandidate> {
        resolver.figure_discard_candidates_for_ready_hand(&self.tiles)
    }

    /// 是否有明牌（碰、吃、明杠）
    pub fn has_exposed_melds(&self) -> bool {
        !self.triplets.is_empty() || !self.straights.is_empty() || !self.kong.open.is_empty()
    }

    /// 杠的总数
    pub fn kong_count(&self) -> usize {
        self.kong.open.len() + self.kong.concealed.len()
    }

    /// 除花牌外的全部牌（含已成组的牌）
    pub fn all_tiles(&self) -> Vec<Tile> {
        let mut all = self.tiles.clone();
        for &t in &self.triplets {
            all.extend([t; 3]);
        }
        for run in &self.straights {
            all.extend_from_slice(run);
        }
        for &t in self.kong.open.iter().chain(&self.kong.concealed) {
            all.extend([t; 4]);
        }
        all
    }

    /// 手牌涉及的总张数（含花牌）
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
            + self.flowers.len()
            + 3 * (self.triplets.len() + self.straights.len())
            + 4 * self.kong_count()
    }

    /// 排序后的未成组牌
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles = self.tiles.clone();
        tiles.sort_unstable();
        tiles
    }

    fn remove_copies(&mut self, tile: Tile, n: usize) {
        let mut removed = 0;
        self.tiles.retain(|&t| {
            if t == tile && removed < n {
                removed += 1;
                false
            } else {
                true
            }
        });
    }
}

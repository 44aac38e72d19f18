use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// 牌墙（Wall）
///
/// 两个游标：`front` 用于正常发牌/摸牌（从前往后），
/// `back` 用于补牌（杠后补牌、补花，从后往前）。
/// 剩余牌为 `tiles[front..back]`，两游标相遇即为荒庄。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    tiles: Vec<Tile>,
    front: usize,
    back: usize,
}

/// 补牌结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplementDraw {
    /// 补到的非花牌，牌墙耗尽时为 None
    pub tile: Option<Tile>,
    /// 途中翻到的花季牌（即使补牌失败也要放到花牌区）
    pub bonus: Vec<Tile>,
}

impl Wall {
    /// 由给定顺序的牌创建牌墙
    pub fn new(tiles: Vec<Tile>) -> Self {
        let back = tiles.len();
        Self {
            tiles,
            front: 0,
            back,
        }
    }

    /// 从前端发 `n` 张牌
    ///
    /// 剩余不足时返回 None，且不消耗任何牌
    pub fn deal(&mut self, n: usize) -> Option<Vec<Tile>> {
        if self.remaining_count() < n {
            return None;
        }
        let dealt = self.tiles[self.front..self.front + n].to_vec();
        self.front += n;
        Some(dealt)
    }

    /// 从前端摸一张牌
    pub fn draw(&mut self) -> Option<Tile> {
        if self.is_exhausted() {
            return None;
        }
        let tile = self.tiles[self.front];
        self.front += 1;
        Some(tile)
    }

    /// 从后端补一张牌，跳过并收集花季牌
    pub fn draw_supplement(&mut self) -> SupplementDraw {
        let mut result = SupplementDraw::default();
        while self.back > self.front {
            self.back -= 1;
            let tile = self.tiles[self.back];
            if tile.is_bonus() {
                result.bonus.push(tile);
                continue;
            }
            result.tile = Some(tile);
            break;
        }
        result
    }

    /// 连续补 `n` 张牌
    ///
    /// # 返回
    ///
    /// `(补到的牌, 花季牌)`；牌墙耗尽时补到的牌少于 `n` 张
    pub fn draw_supplements(&mut self, n: usize) -> (Vec<Tile>, Vec<Tile>) {
        let mut tiles = Vec::with_capacity(n);
        let mut bonus = Vec::new();
        for _ in 0..n {
            let draw = self.draw_supplement();
            bonus.extend(draw.bonus);
            match draw.tile {
                Some(tile) => tiles.push(tile),
                None => break,
            }
        }
        (tiles, bonus)
    }

    /// 剩余牌数
    pub fn remaining_count(&self) -> usize {
        self.back.saturating_sub(self.front)
    }

    /// 是否荒庄（游标相遇）
    pub fn is_exhausted(&self) -> bool {
        self.front >= self.back
    }

    /// 前端游标
    pub fn front(&self) -> usize {
        self.front
    }

    /// 后端游标
    pub fn back(&self) -> usize {
        self.back
    }

    /// 总牌数
    pub fn total_count(&self) -> usize {
        self.tiles.len()
    }

    /// 剩余的牌（按摸牌顺序）
    pub fn remaining(&self) -> &[Tile] {
        &self.tiles[self.front..self.back]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_of(items: &[&str]) -> Wall {
        Wall::new(items.iter().map(|s| s.parse().unwrap()).collect())
    }

    #[test]
    fn test_deal() {
        let mut wall = wall_of(&["W1", "W2", "W3"]);
        assert_eq!(wall.deal(2), Some(vec![Tile::Wan(1), Tile::Wan(2)]));
        assert_eq!(wall.remaining_count(), 1);

        // 不足时不消耗
        assert_eq!(wall.deal(2), None);
        assert_eq!(wall.remaining_count(), 1);
        assert_eq!(wall.draw(), Some(Tile::Wan(3)));
        assert!(wall.is_exhausted());
        assert_eq!(wall.draw(), None);
    }

    #[test]
    fn test_draw_supplement_skips_bonus() {
        let mut wall = wall_of(&["W1", "W2", "W3", "F1", "F2"]);
        let draw = wall.draw_supplement();
        assert_eq!(draw.tile, Some(Tile::Wan(3)));
        assert_eq!(draw.bonus, vec![Tile::Flower(2), Tile::Flower(1)]);
        assert_eq!(wall.back(), 2);
    }

    #[test]
    fn test_draw_supplements() {
        let mut wall = wall_of(&["W1", "W2", "W3", "F1", "F2"]);
        let (tiles, bonus) = wall.draw_supplements(3);
        assert_eq!(tiles, vec![Tile::Wan(3), Tile::Wan(2), Tile::Wan(1)]);
        assert_eq!(bonus, vec![Tile::Flower(2), Tile::Flower(1)]);
        assert!(wall.is_exhausted());
    }

    #[test]
    fn test_supplement_exhaustion_keeps_bonus() {
        let mut wall = wall_of(&["W1", "F1", "S1"]);
        assert_eq!(wall.draw(), Some(Tile::Wan(1)));
        let draw = wall.draw_supplement();
        assert_eq!(draw.tile, None);
        assert_eq!(draw.bonus, vec![Tile::Season(1), Tile::Flower(1)]);
        assert_eq!(wall.front(), wall.back());
    }

    #[test]
    fn test_cursors_meet() {
        let mut wall = wall_of(&["W1", "W2", "W3", "W4"]);
        wall.draw();
        wall.draw_supplement();
        wall.draw();
        wall.draw_supplement();
        assert!(wall.is_exhausted());
        assert!(wall.front() <= wall.back());
        assert_eq!(wall.draw_supplement(), SupplementDraw::default());
    }
}

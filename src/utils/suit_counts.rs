use smallvec::SmallVec;

/// 单一花色内按数字分组后的牌组（只记录数字，花色由调用方负责）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankGroup {
    /// 刻子：三张相同数字
    Triplet(u8),
    /// 顺子：以该数字开头的连续三张
    Straight(u8),
}

/// 分解结果（一个花色最多 16+ 张，通常不超过 6 组）
pub type RankGroups = SmallVec<[RankGroup; 6]>;

/// 单一花色的计数表
///
/// `counts[i]` 为数字 i+1 的张数，`presence` 的第 i 位表示数字 i+1 至少有一张。
/// 不限制每种牌最多 4 张：听牌搜索时需要在已有 4 张的基础上再试一张。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitCounts {
    presence: u16,
    counts: [u8; 9],
    len: usize,
}

impl SuitCounts {
    /// 最大数字
    pub const MAX_RANK: u8 = 9;

    /// 创建空计数表
    pub fn new() -> Self {
        Self::default()
    }

    /// 从数字序列创建
    pub fn from_ranks<I: IntoIterator<Item = u8>>(ranks: I) -> Self {
        let mut counts = Self::new();
        for rank in ranks {
            counts.add(rank);
        }
        counts
    }

    /// 添加一张牌，数字越界返回 false
    pub fn add(&mut self, rank: u8) -> bool {
        if rank < 1 || rank > Self::MAX_RANK {
            return false;
        }
        let idx = (rank - 1) as usize;
        self.counts[idx] = self.counts[idx].saturating_add(1);
        self.presence |= 1 << idx;
        self.len += 1;
        true
    }

    /// 移除 `n` 张数字为 `rank` 的牌，不足时不做修改并返回 false
    pub fn remove(&mut self, rank: u8, n: u8) -> bool {
        if self.count(rank) < n {
            return false;
        }
        let idx = (rank - 1) as usize;
        self.counts[idx] -= n;
        if self.counts[idx] == 0 {
            self.presence &= !(1 << idx);
        }
        self.len -= n as usize;
        true
    }

    /// 数字为 `rank` 的牌的张数
    pub fn count(&self, rank: u8) -> u8 {
        if rank < 1 || rank > Self::MAX_RANK {
            return 0;
        }
        self.counts[(rank - 1) as usize]
    }

    /// 总张数
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 存在性掩码
    pub fn presence_mask(&self) -> u16 {
        self.presence
    }

    /// 至少有一张的数字（升序）
    pub fn ranks(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=Self::MAX_RANK).filter(move |&r| self.presence & (1 << (r - 1)) != 0)
    }

    /// 三个余数类 {1,4,7} {2,5,8} {3,6,9} 各自张数模 3
    pub fn residue_classes(&self) -> [u8; 3] {
        let mut classes = [0usize; 3];
        for (i, &c) in self.counts.iter().enumerate() {
            classes[i % 3] += c as usize;
        }
        classes.map(|c| (c % 3) as u8)
    }

    /// 雀头候选
    ///
    /// - 数牌：雀头所在余数类与其余两类模 3 不同（顺子每类各占一张，刻子占 3 张，
    ///   只有对子会打破平衡），只在唯一不同的那一类中找张数 ≥2 的数字；
    ///   三类都相同时没有候选
    /// - 字牌：所有张数 ≥2 的数字
    pub fn eyes_candidates(&self, allow_straights: bool) -> SmallVec<[u8; 9]> {
        let pairs = self.ranks().filter(|&r| self.count(r) >= 2);
        if !allow_straights {
            return pairs.collect();
        }
        let [a, b, c] = self.residue_classes();
        let class = if a != b && b == c {
            0
        } else if b != a && a == c {
            1
        } else if c != a && a == b {
            2
        } else {
            return SmallVec::new();
        };
        pairs.filter(|&r| ((r - 1) % 3) as usize == class).collect()
    }

    /// 无雀头分解：反复取最小的牌，够三张则去刻子，否则尝试去顺子
    ///
    /// 字牌（`allow_straights = false`）只能去刻子
    pub fn decompose(&self, allow_straights: bool) -> Option<RankGroups> {
        if self.len % 3 != 0 {
            return None;
        }
        let mut counts = self.counts;
        let mut groups = RankGroups::new();
        let mut i = 0usize;
        while i < counts.len() {
            if counts[i] == 0 {
                i += 1;
                continue;
            }
            let rank = (i + 1) as u8;
            if counts[i] >= 3 {
                counts[i] -= 3;
                groups.push(RankGroup::Triplet(rank));
                continue;
            }
            if allow_straights && i + 2 < counts.len() && counts[i + 1] > 0 && counts[i + 2] > 0 {
                counts[i] -= 1;
                counts[i + 1] -= 1;
                counts[i + 2] -= 1;
                groups.push(RankGroup::Straight(rank));
                continue;
            }
            return None;
        }
        Some(groups)
    }

    /// 带雀头分解：逐个验证雀头候选，返回第一个成立的雀头和剩余牌组
    pub fn decompose_with_eyes(&self, allow_straights: bool) -> Option<(u8, RankGroups)> {
        if self.len % 3 != 2 {
            return None;
        }
        self.eyes_candidates(allow_straights)
            .into_iter()
            .find_map(|eyes| {
                let mut rest = *self;
                rest.remove(eyes, 2);
                rest.decompose(allow_straights).map(|groups| (eyes, groups))
            })
    }
}

use tracing::{debug, info, warn};

use crate::game::action::ActionKind;
use crate::game::action_callback::{ActionCallback, Decision};
use crate::game::constants::MAX_DRIVER_STEPS;
use crate::game::error::GameError;
use crate::game::event::{EventKind, GameEvent, MeldPayload, TransitionTable, WinPayload};
use crate::game::options::GameOptions;
use crate::game::player::PlayerState;
use crate::game::ready::ReadyChecker;
use crate::game::scoring::{PointRules, WinnerResult};
use crate::game::settlement::Settlement;
use crate::game::state::{GameResult, GameState};
use crate::tile::{Resolver, Tile};

/// 游戏引擎
///
/// 独占一份 `GameState`，所有公开方法先校验、再推进状态机。
/// 每次调用同步地执行一串事件，直到停在等待状态或牌局结束。
/// 引擎不加锁：同一局的调用必须串行。
#[derive(Clone)]
pub struct GameEngine {
    /// 游戏状态
    state: GameState,
    resolver: Resolver,
    rules: PointRules,
    transitions: TransitionTable,
}

impl GameEngine {
    /// 创建新的游戏引擎（尚未开局）
    pub fn new() -> Self {
        Self {
            state: GameState::new(&GameOptions::default()),
            resolver: Resolver::standard(),
            rules: PointRules::standard(),
            transitions: TransitionTable::new(),
        }
    }

    /// 从快照恢复
    pub fn from_state(state: GameState) -> Result<Self, GameError> {
        state.validate()?;
        Ok(Self {
            resolver: Resolver::new(&state.meta.tile_set),
            state,
            rules: PointRules::standard(),
            transitions: TransitionTable::new(),
        })
    }

    /// 替换计分表
    pub fn with_rules(mut self, rules: PointRules) -> Self {
        self.rules = rules;
        self
    }

    /// 开局
    ///
    /// # 参数
    ///
    /// - `options`: 开局配置（骰子必须恰好两颗，牌墙不能为空）
    ///
    /// 成功后停在 `WaitForReady`
    pub fn start_game(&mut self, options: GameOptions) -> Result<(), GameError> {
        if self.state.status.current_event.is_some() {
            return Err(GameError::InvalidGameStatus);
        }
        options.validate()?;

        self.resolver = Resolver::new(&options.tile_set);
        self.rules = options.point_rules.clone();
        self.state = GameState::new(&options);
        self.dispatch(GameEvent::GameStarted)
    }

    /// 所有玩家就绪，从庄家开始摸牌
    pub fn ready(&mut self) -> Result<(), GameError> {
        self.expect_event(EventKind::WaitForReady)?;
        self.dispatch(GameEvent::StartAtBanker)
    }

    /// 当前玩家出牌
    ///
    /// 摸牌后等待自身动作时也可以直接出牌，视为放弃自摸/暗杠
    pub fn discard_tile(&mut self, tile: Tile) -> Result<(), GameError> {
        if !matches!(
            self.state.status.current_event,
            Some(EventKind::WaitForPlayerToDiscardTile) | Some(EventKind::WaitForPlayerAction)
        ) {
            return Err(GameError::InvalidGameStatus);
        }
        let player = self.state.current_player();
        if !player.is_allowed(ActionKind::Discard) {
            return Err(GameError::InvalidAction);
        }
        if !player.hand.exists(tile) {
            return Err(GameError::PlayerLacksTile(tile));
        }
        if player.is_ready_hand && player.hand.draw != Some(tile) {
            return Err(GameError::InvalidAction);
        }

        let player = self.current_player_mut();
        player.hand.discard(tile)?;
        player.clear_allowed_actions();
        self.dispatch(GameEvent::TileDiscarded(tile))
    }

    /// 出牌并宣告听牌
    pub fn ready_hand(&mut self, tile: Tile) -> Result<(), GameError> {
        self.expect_event(EventKind::WaitForPlayerToDiscardTile)?;
        ReadyChecker::validate_declaration(self.state.current_player(), tile)?;

        let player = self.current_player_mut();
        player.hand.discard(tile)?;
        player.is_ready_hand = true;
        player.clear_allowed_actions();
        info!(player = player.idx, discard = %tile, "ready hand declared");
        self.dispatch(GameEvent::TileDiscarded(tile))
    }

    /// 响应别家打出的牌
    ///
    /// # 参数
    ///
    /// - `seat`: 响应的座位；`None` 表示无人响应（此时忽略 `kind`、`tiles`）
    /// - `kind`: 吃、碰、杠或胡
    /// - `tiles`: 吃牌时手中的两张
    pub fn react(&mut self, seat: Option<usize>, kind: ActionKind, tiles: &[Tile]) -> Result<(), GameError> {
        self.expect_event(EventKind::WaitForReaction)?;
        let Some(seat) = seat else {
            self.state.clear_allowed_actions();
            return self.dispatch(GameEvent::NoReactions);
        };

        let discarder = self.state.status.current_player;
        let tile = *self
            .state
            .status
            .discard_area
            .last()
            .ok_or(GameError::InvalidGameStatus)?;
        let player = self.state.player(seat)?;
        if seat == discarder {
            return Err(GameError::InvalidReaction);
        }
        let action = player.allowed(kind).ok_or(GameError::InvalidReaction)?;

        let event = match kind {
            ActionKind::Chow => {
                let pair: [Tile; 2] = tiles.try_into().map_err(|_| GameError::InvalidReaction)?;
                if !action.accepts(&pair) {
                    return Err(GameError::InvalidReaction);
                }
                player.hand.check_chow(tile, pair)?;
                GameEvent::Chow(MeldPayload {
                    seat,
                    tile,
                    tiles: pair.to_vec(),
                })
            }
            ActionKind::Pung => {
                player.hand.check_pung(tile)?;
                GameEvent::Pung(MeldPayload {
                    seat,
                    tile,
                    tiles: Vec::new(),
                })
            }
            ActionKind::Kong => {
                player.hand.check_kong(tile, false)?;
                GameEvent::Kong(MeldPayload {
                    seat,
                    tile,
                    tiles: Vec::new(),
                })
            }
            ActionKind::Win => GameEvent::Win(WinPayload {
                discarding_player: Some(discarder),
                winning_tile: Some(tile),
                winners: vec![seat],
            }),
            ActionKind::Discard | ActionKind::ReadyHand => return Err(GameError::InvalidReaction),
        };

        self.state.clear_allowed_actions();
        self.state.status.discard_area.pop();
        self.dispatch(event)
    }

    /// 当前玩家摸牌后的自身动作
    ///
    /// - `Win`: 自摸
    /// - `Kong`: 暗杠摸到的牌
    /// - `Discard`: 放弃，进入出牌阶段（已听牌则自动打出摸到的牌）
    pub fn act(&mut self, kind: ActionKind) -> Result<(), GameError> {
        self.expect_event(EventKind::WaitForPlayerAction)?;
        let player = self.state.current_player();
        let action = player.allowed(kind).ok_or(GameError::InvalidAction)?;

        let event = match kind {
            ActionKind::Win => {
                if !self.resolver.is_win(&player.hand.tiles) {
                    return Err(GameError::InvalidAction);
                }
                GameEvent::Win(WinPayload {
                    discarding_player: None,
                    winning_tile: player.hand.draw,
                    winners: vec![player.idx],
                })
            }
            ActionKind::Kong => {
                let tile = action
                    .candidates
                    .first()
                    .and_then(|c| c.first())
                    .copied()
                    .ok_or(GameError::InvalidAction)?;
                player.hand.check_kong(tile, true)?;
                GameEvent::ConcealedKong(tile)
            }
            ActionKind::Discard => GameEvent::Cancel,
            ActionKind::Chow | ActionKind::Pung | ActionKind::ReadyHand => {
                return Err(GameError::InvalidAction)
            }
        };

        self.current_player_mut().clear_allowed_actions();
        self.dispatch(event)
    }

    /// 用回调驱动整局，直到结束
    ///
    /// 响应阶段依次询问每个有可选响应的座位，按 胡 > 杠 > 碰 > 吃 取舍，
    /// 同级时离出牌者最近的座位优先。
    pub fn run<C: ActionCallback + ?Sized>(&mut self, callback: &mut C) -> Result<&GameResult, GameError> {
        for _ in 0..MAX_DRIVER_STEPS {
            let kind = self.state.status.current_event.ok_or(GameError::InvalidGameStatus)?;
            match kind {
                EventKind::GameClosed => return Ok(&self.state.result),
                EventKind::WaitForReady => self.ready()?,
                EventKind::WaitForPlayerAction | EventKind::WaitForPlayerToDiscardTile => {
                    let seat = self.state.status.current_player;
                    let decision = callback.decide(&self.state, seat);
                    self.apply(seat, decision)?;
                }
                EventKind::WaitForReaction => self.collect_reactions(callback)?,
                _ => return Err(GameError::InvalidGameStatus),
            }
        }
        Err(GameError::InvalidGameStatus)
    }

    fn apply(&mut self, seat: usize, decision: Decision) -> Result<(), GameError> {
        match decision {
            Decision::Act(kind) => self.act(kind),
            Decision::Discard(tile) => self.discard_tile(tile),
            Decision::ReadyHand(tile) => self.ready_hand(tile),
            Decision::React { kind, tiles } => self.react(Some(seat), kind, &tiles),
            Decision::Pass => match self.state.status.current_event {
                Some(EventKind::WaitForPlayerAction) => self.act(ActionKind::Discard),
                Some(EventKind::WaitForReaction) => self.react(None, ActionKind::Discard, &[]),
                _ => Err(GameError::InvalidAction),
            },
        }
    }

    fn collect_reactions<C: ActionCallback + ?Sized>(&mut self, callback: &mut C) -> Result<(), GameError> {
        let discarder = self.state.status.current_player;
        let player_count = self.state.meta.player_count;

        let mut best: Option<(u8, usize, ActionKind, Vec<Tile>)> = None;
        for offset in 1..player_count {
            let seat = (discarder + offset) % player_count;
            if self.state.player(seat)?.allowed_actions.is_empty() {
                continue;
            }
            if let Decision::React { kind, tiles } = callback.decide(&self.state, seat) {
                let rank = reaction_priority(kind);
                if best.as_ref().map_or(true, |(r, ..)| rank > *r) {
                    best = Some((rank, seat, kind, tiles));
                }
            }
        }

        match best {
            Some((_, seat, kind, tiles)) => self.react(Some(seat), kind, &tiles),
            None => self.react(None, ActionKind::Discard, &[]),
        }
    }

    /// 当前玩家
    pub fn current_player(&self) -> &PlayerState {
        self.state.current_player()
    }

    /// 指定座位的玩家
    pub fn player(&self, idx: usize) -> Result<&PlayerState, GameError> {
        self.state.player(idx)
    }

    /// 游戏状态（只读）
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 游戏状态的 JSON 快照
    pub fn state_json(&self) -> Result<String, GameError> {
        self.state.to_json()
    }

    /// 计分表
    pub fn rules(&self) -> &PointRules {
        &self.rules
    }

    fn current_player_mut(&mut self) -> &mut PlayerState {
        let idx = self.state.status.current_player;
        &mut self.state.players[idx]
    }

    fn expect_event(&self, kind: EventKind) -> Result<(), GameError> {
        if self.state.status.current_event != Some(kind) {
            return Err(GameError::InvalidGameStatus);
        }
        Ok(())
    }

    /// 推进状态机，直到处理函数不再返回下一个事件
    fn dispatch(&mut self, event: GameEvent) -> Result<(), GameError> {
        let mut next = Some(event);
        while let Some(event) = next {
            let kind = event.kind();
            self.state.status.current_event = Some(kind);
            self.state.touch();
            debug!(event = %kind, player = self.state.status.current_player, "transition");
            next = (self.transitions.handler(kind))(self, event)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // 事件处理
    // ---------------------------------------------------------------------

    pub(crate) fn on_suspend(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(None)
    }

    pub(crate) fn on_game_started(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        info!(
            game_id = %self.state.game_id,
            players = self.state.meta.player_count,
            tiles = self.state.meta.tiles.len(),
            "game started"
        );
        Ok(Some(GameEvent::InitializeGame))
    }

    /// 配牌：从庄家起逐张轮流发牌，再给每家补花
    pub(crate) fn on_initialize_game(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let banker = self.state.banker();
        let player_count = self.state.meta.player_count;

        for _ in 0..self.state.meta.hand_tile_count {
            for offset in 0..player_count {
                let seat = (banker + offset) % player_count;
                let dealt = self.state.status.wall.deal(1).ok_or(GameError::EmptyWall)?;
                self.state.players[seat].hand.add_tiles(&dealt);
            }
        }

        for offset in 0..player_count {
            let seat = (banker + offset) % player_count;
            let hand = &mut self.state.players[seat].hand;
            let (flowers, rest): (Vec<Tile>, Vec<Tile>) = hand.tiles.iter().partition(|t| t.is_bonus());
            if flowers.is_empty() {
                continue;
            }
            hand.tiles = rest;
            hand.add_flowers(&flowers);

            let (tiles, bonus) = self.state.status.wall.draw_supplements(flowers.len());
            hand.add_flowers(&bonus);
            hand.add_tiles(&tiles);
        }
        Ok(Some(GameEvent::GameInitialized))
    }

    pub(crate) fn on_game_initialized(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(Some(GameEvent::WaitForReady))
    }

    pub(crate) fn on_start_at_banker(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(Some(GameEvent::PlayerSelected(self.state.banker())))
    }

    pub(crate) fn on_player_selected(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::PlayerSelected(seat) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        self.state.player(seat)?;
        self.state.status.current_player = seat;
        Ok(Some(GameEvent::Draw))
    }

    pub(crate) fn on_draw(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        self.state.status.after_kong = false;
        let Some(tile) = self.state.status.wall.draw() else {
            return Ok(Some(GameEvent::NoMoreTiles));
        };
        let hand = &mut self.current_player_mut().hand;
        if tile.is_bonus() {
            hand.add_flowers(&[tile]);
            return Ok(Some(GameEvent::FlowerTileDrawn));
        }
        hand.deal(tile);
        Ok(Some(GameEvent::Drawn))
    }

    /// 从牌墙尾部补牌（杠后、补花）
    pub(crate) fn on_draw_supplement_tile(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let draw = self.state.status.wall.draw_supplement();
        let hand = &mut self.current_player_mut().hand;
        hand.add_flowers(&draw.bonus);
        match draw.tile {
            Some(tile) => {
                hand.deal(tile);
                Ok(Some(GameEvent::Drawn))
            }
            None => Ok(Some(GameEvent::NoMoreTiles)),
        }
    }

    pub(crate) fn on_flower_tile_drawn(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(Some(GameEvent::DrawSupplementTile))
    }

    pub(crate) fn on_drawn(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let player = self.state.current_player();
        if !ReadyChecker::self_actions(player, &self.resolver).is_empty() {
            return Ok(Some(GameEvent::WaitForPlayerAction));
        }
        if player.is_ready_hand {
            let tile = self.current_player_mut().hand.discard_draw_tile()?;
            return Ok(Some(GameEvent::TileDiscarded(tile)));
        }
        Ok(Some(GameEvent::WaitForPlayerToDiscardTile))
    }

    pub(crate) fn on_wait_for_player_action(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let actions = ReadyChecker::self_actions(self.state.current_player(), &self.resolver);
        self.current_player_mut().set_allowed_actions(actions);
        Ok(None)
    }

    /// 放弃自身动作
    pub(crate) fn on_cancel(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        if self.state.current_player().is_ready_hand {
            let tile = self.current_player_mut().hand.discard_draw_tile()?;
            return Ok(Some(GameEvent::TileDiscarded(tile)));
        }
        Ok(Some(GameEvent::WaitForPlayerToDiscardTile))
    }

    pub(crate) fn on_wait_for_discard(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let actions = ReadyChecker::discard_actions(self.state.current_player(), &self.resolver);
        self.current_player_mut().set_allowed_actions(actions);
        Ok(None)
    }

    /// 出牌入弃牌区，并计算其他各家的响应
    pub(crate) fn on_tile_discarded(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::TileDiscarded(tile) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        let discarder = self.state.status.current_player;
        self.state.status.discard_area.push(tile);
        debug!(player = discarder, tile = %tile, "tile discarded");

        let reactions: Vec<Vec<_>> = self
            .state
            .players
            .iter()
            .map(|p| {
                if p.idx == discarder {
                    return Vec::new();
                }
                let relative = self.state.relative_seat(discarder, p.idx);
                let found = p.hand.figure_reactions(&self.resolver, tile, relative);
                ReadyChecker::restrict_reactions(p, found)
            })
            .collect();

        let winners: Vec<usize> = reactions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.iter().any(|a| a.name == ActionKind::Win))
            .map(|(seat, _)| seat)
            .collect();
        if winners.len() > 1 && winners.len() == self.state.meta.player_count - 1 {
            return Ok(Some(GameEvent::MultipleWinners(WinPayload {
                discarding_player: Some(discarder),
                winning_tile: Some(tile),
                winners,
            })));
        }

        if reactions.iter().all(|r| r.is_empty()) {
            return Ok(Some(GameEvent::NoReactions));
        }
        Ok(Some(GameEvent::WaitForReaction(reactions)))
    }

    pub(crate) fn on_wait_for_reaction(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::WaitForReaction(reactions) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        if reactions.len() != self.state.players.len() {
            return Err(GameError::InvalidGameStatus);
        }
        for (player, actions) in self.state.players.iter_mut().zip(reactions) {
            player.set_allowed_actions(actions);
        }
        Ok(None)
    }

    pub(crate) fn on_no_reactions(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(Some(GameEvent::NextPlayer))
    }

    pub(crate) fn on_next_player(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let next = self.state.next_seat(self.state.status.current_player);
        Ok(Some(GameEvent::PlayerSelected(next)))
    }

    pub(crate) fn on_chow(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::Chow(meld) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        let pair: [Tile; 2] = meld
            .tiles
            .as_slice()
            .try_into()
            .map_err(|_| GameError::InvalidReaction)?;
        self.state.player_mut(meld.seat)?.hand.do_chow(meld.tile, pair)?;
        self.take_turn(meld.seat);
        Ok(Some(GameEvent::WaitForPlayerToDiscardTile))
    }

    pub(crate) fn on_pung(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::Pung(meld) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        self.state.player_mut(meld.seat)?.hand.do_pung(meld.tile)?;
        self.take_turn(meld.seat);
        Ok(Some(GameEvent::WaitForPlayerToDiscardTile))
    }

    pub(crate) fn on_kong(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::Kong(meld) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        self.state.player_mut(meld.seat)?.hand.do_kong(meld.tile, false)?;
        self.take_turn(meld.seat);
        self.state.status.after_kong = true;
        Ok(Some(GameEvent::DrawSupplementTile))
    }

    pub(crate) fn on_concealed_kong(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::ConcealedKong(tile) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        self.current_player_mut().hand.do_kong(tile, true)?;
        self.state.status.after_kong = true;
        Ok(Some(GameEvent::DrawSupplementTile))
    }

    /// 登记赢家；放炮胡时把弃牌放入赢家手牌
    pub(crate) fn on_win(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::Win(win) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        if win.discarding_player.is_some() {
            if let Some(tile) = win.winning_tile {
                for &seat in &win.winners {
                    self.state.player_mut(seat)?.hand.tiles.push(tile);
                }
            }
        }
        info!(
            winners = ?win.winners,
            discarding_player = ?win.discarding_player,
            "win"
        );
        self.record_winners(win);
        Ok(Some(GameEvent::DoSettlement))
    }

    /// 一张弃牌让其余各家同时胡：不结算，直接结束
    pub(crate) fn on_multiple_winners(&mut self, event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        let GameEvent::MultipleWinners(win) = event else {
            return Err(GameError::InvalidGameStatus);
        };
        warn!(
            winners = ?win.winners,
            discarding_player = ?win.discarding_player,
            "every other seat can win on one discard, closing without settlement"
        );
        self.record_winners(win);
        Ok(Some(GameEvent::CloseGame))
    }

    pub(crate) fn on_no_more_tiles(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(Some(GameEvent::DrawGame))
    }

    pub(crate) fn on_draw_game(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Ok(Some(GameEvent::GameDrawn))
    }

    pub(crate) fn on_game_drawn(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        self.state.result.is_drawn_game = true;
        info!(game_id = %self.state.game_id, "wall exhausted, game drawn");
        Ok(Some(GameEvent::DoSettlement))
    }

    pub(crate) fn on_do_settlement(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        Settlement::settle(&mut self.state, &self.resolver, &self.rules)?;
        Ok(Some(GameEvent::Settlement))
    }

    pub(crate) fn on_settlement(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        for (seat, result) in &self.state.result.winners {
            info!(seat, points = result.points, conditions = ?result.conditions, "settled");
        }
        Ok(Some(GameEvent::CloseGame))
    }

    pub(crate) fn on_close_game(&mut self, _event: GameEvent) -> Result<Option<GameEvent>, GameError> {
        self.state.clear_allowed_actions();
        info!(game_id = %self.state.game_id, drawn = self.state.result.is_drawn_game, "game closed");
        Ok(Some(GameEvent::GameClosed))
    }

    fn take_turn(&mut self, seat: usize) {
        self.state.status.current_player = seat;
        self.state.status.after_kong = false;
    }

    fn record_winners(&mut self, win: WinPayload) {
        let result = &mut self.state.result;
        result.discarding_player = win.discarding_player;
        result.winning_tile = win.winning_tile;
        for seat in win.winners {
            result.winners.insert(seat, WinnerResult::default());
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn reaction_priority(kind: ActionKind) -> u8 {
    match kind {
        ActionKind::Win => 4,
        ActionKind::Kong => 3,
        ActionKind::Pung => 2,
        ActionKind::Chow => 1,
        ActionKind::Discard | ActionKind::ReadyHand => 0,
    }
}

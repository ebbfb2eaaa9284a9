//! Core data model for Timber Trails.
//! A single reducible `GameState` drives the whole screen. Every roll of
//! randomness happens before dispatch (`ChopRoll::roll`, `ScoreEntry::fake`),
//! so reduction itself is deterministic.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::util::wallet_address;

/// Seconds on the clock at the start of a run.
pub const RUN_SECS: u32 = 30;
/// Chop progress gained per Space press, in percent of one tree.
pub const CHOP_STEP: u32 = 5;
/// Points for felling a tree.
pub const TREE_POINTS: u32 = 10;
/// Points for clicking a coin.
pub const COIN_POINTS: u32 = 10;
/// Popup lifetime in seconds.
pub const POPUP_TTL_SECS: f64 = 1.0;
/// Coin lifetime in seconds.
pub const COIN_TTL_SECS: f64 = 2.0;
/// Tree shake duration after a chop, in seconds.
pub const SHAKE_TTL_SECS: f64 = 0.15;
/// Minimum gap between coin spawns, in milliseconds.
pub const COIN_SPAWN_COOLDOWN_MS: f64 = 1500.0;
/// Idle time after the last press before the streak dies, in milliseconds.
pub const STREAK_IDLE_MS: f64 = 1500.0;
/// Chance that a chop drops a coin.
pub const COIN_CHANCE: f64 = 0.15;
/// The leaderboard keeps this many entries.
pub const LEADERBOARD_CAP: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupKind {
    Good,
    Nice,
    Great,
    Excellent,
}

impl PopupKind {
    /// Streak thresholds: 10+ Excellent, 7+ Great, 4+ Nice, otherwise a coin
    /// flip between Good and Nice. The streak is sampled before the press is
    /// scored, so the popup reflects the streak the player walked in with.
    pub fn for_streak(streak: u32, roll: f64) -> Self {
        if streak >= 10 {
            PopupKind::Excellent
        } else if streak >= 7 {
            PopupKind::Great
        } else if streak >= 4 {
            PopupKind::Nice
        } else if roll > 0.5 {
            PopupKind::Good
        } else {
            PopupKind::Nice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopupKind::Good => "Good!",
            PopupKind::Nice => "Nice!",
            PopupKind::Great => "Great!",
            PopupKind::Excellent => "Excellent!",
        }
    }
}

/// Floating praise text spawned by a chop. Position is in percent of the
/// scene; alpha and rise at draw time derive from the remaining ttl.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub id: u64,
    pub kind: PopupKind,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub ttl: f64,
}

/// Clickable $LUMBER coin. Expires on its own if not collected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub ttl: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub trees: u32,
    /// Fabricated 44-character base58 string; decorative only.
    pub wallet: String,
}

impl ScoreEntry {
    /// Fabricated churn entry: 50..250 points, 5..20 trees.
    pub fn fake() -> Self {
        Self {
            score: (js_sys::Math::random() * 200.0).floor() as u32 + 50,
            trees: (js_sys::Math::random() * 15.0).floor() as u32 + 5,
            wallet: wallet_address(),
        }
    }

    /// The player's own result, submitted once when the clock runs out.
    pub fn player(score: u32, trees: u32) -> Self {
        Self {
            score,
            trees,
            wallet: wallet_address(),
        }
    }
}

/// Placement seed for a coin spawn: 40..60 percent on both axes, scale
/// 1.5..1.8.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoinSeed {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Randomness for one Space press, rolled by the caller so the reducer stays
/// deterministic. `coin` is `Some` with probability `COIN_CHANCE`; the
/// reducer still applies the spawn cooldown on top.
#[derive(Clone, Debug, PartialEq)]
pub struct ChopRoll {
    /// Coin flip consumed while the streak is still low.
    pub kind_roll: f64,
    /// Popup placement: x 30..70, y 30..60 percent, scale 0.8..1.2.
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub coin: Option<CoinSeed>,
}

impl ChopRoll {
    pub fn roll() -> Self {
        let coin = if js_sys::Math::random() < COIN_CHANCE {
            Some(CoinSeed {
                x: js_sys::Math::random() * 20.0 + 40.0,
                y: js_sys::Math::random() * 20.0 + 40.0,
                scale: 1.5 + js_sys::Math::random() * 0.3,
            })
        } else {
            None
        };
        Self {
            kind_roll: js_sys::Math::random(),
            x: js_sys::Math::random() * 40.0 + 30.0,
            y: js_sys::Math::random() * 30.0 + 30.0,
            scale: 0.8 + js_sys::Math::random() * 0.4,
            coin,
        }
    }
}

/// Cosmetic render toggles, persisted to localStorage as one JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub show_popups: bool,
    pub tree_shake: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_popups: true,
            tree_shake: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// Seconds left; stays at `RUN_SECS` until the walk-in lands.
    pub time_left: u32,
    /// 0..100 in `CHOP_STEP` increments; rolls over to 0 when a tree falls.
    pub chop_progress: u32,
    pub trees_chopped: u32,
    pub current_streak: u32,
    /// Best streak of the current run.
    pub best_streak: u32,
    /// A run exists (the intro has been dismissed).
    pub started: bool,
    /// The walk-in reached the tree; Space and the countdown work from here.
    pub ready: bool,
    pub game_over: bool,
    /// Bumped on every `Start` so view effects can reset per-run state.
    pub run_id: u32,
    pub popups: Vec<Popup>,
    pub coins: Vec<Coin>,
    /// Remaining tree-shake time after a chop.
    pub shake_ttl: f64,
    /// Session leaderboard, sorted descending, capped at `LEADERBOARD_CAP`.
    pub highscores: Vec<ScoreEntry>,
    /// Session clock in milliseconds, advanced by `Tick`.
    pub elapsed_ms: f64,
    /// Session time of the latest coin spawn (cooldown bookkeeping).
    pub last_coin_spawn_ms: f64,
    /// Session time of the latest chop press (streak idle bookkeeping).
    pub last_chop_ms: f64,
    /// Monotonic ids; never reset so keys stay unique across restarts.
    pub next_popup_id: u64,
    pub next_coin_id: u64,
    /// Bumped on every state change; redraw effects key on it.
    pub version: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            time_left: RUN_SECS,
            chop_progress: 0,
            trees_chopped: 0,
            current_streak: 0,
            best_streak: 0,
            started: false,
            ready: false,
            game_over: false,
            run_id: 0,
            popups: Vec::new(),
            coins: Vec::new(),
            shake_ttl: 0.0,
            highscores: Vec::new(),
            elapsed_ms: 0.0,
            // first coin of the session is not throttled
            last_coin_spawn_ms: -COIN_SPAWN_COOLDOWN_MS,
            last_chop_ms: 0.0,
            next_popup_id: 0,
            next_coin_id: 0,
            version: 0,
        }
    }
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Reset the run and launch a fresh walk-in. Session data (leaderboard,
    /// id counters, coin clock) survives.
    Start,
    /// The walk-in reached the tree; the countdown may run.
    WalkArrived,
    /// One Space press with its pre-rolled cosmetics.
    Chop(ChopRoll),
    CollectCoin { id: u64 },
    /// ~16ms cosmetic clock: ttl decay and session time.
    Tick { dt: f64 },
    /// Fired once per elapsed real second.
    CountdownSecond,
    /// Periodic check; kills the streak once no press has landed for
    /// `STREAK_IDLE_MS` and no tree is in progress.
    StreakTimeout,
    /// Leaderboard insert: fabricated churn or the player's own result.
    PushScore { entry: ScoreEntry },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Start => {
                new.score = 0;
                new.time_left = RUN_SECS;
                new.chop_progress = 0;
                new.trees_chopped = 0;
                new.current_streak = 0;
                new.best_streak = 0;
                new.started = true;
                new.ready = false;
                new.game_over = false;
                new.run_id = new.run_id.wrapping_add(1);
                new.popups.clear();
                new.coins.clear();
                new.shake_ttl = 0.0;
            }
            WalkArrived => {
                if new.started && !new.game_over {
                    new.ready = true;
                }
            }
            Chop(roll) => {
                if !(new.started && new.ready && !new.game_over) {
                    return self;
                }
                new.last_chop_ms = new.elapsed_ms;
                let kind = PopupKind::for_streak(new.current_streak, roll.kind_roll);
                let id = new.next_popup_id;
                new.next_popup_id += 1;
                new.popups.push(Popup {
                    id,
                    kind,
                    x: roll.x,
                    y: roll.y,
                    scale: roll.scale,
                    ttl: POPUP_TTL_SECS,
                });
                new.shake_ttl = SHAKE_TTL_SECS;
                if let Some(seed) = roll.coin {
                    if new.elapsed_ms - new.last_coin_spawn_ms >= COIN_SPAWN_COOLDOWN_MS {
                        let id = new.next_coin_id;
                        new.next_coin_id += 1;
                        new.coins.push(Coin {
                            id,
                            x: seed.x,
                            y: seed.y,
                            scale: seed.scale,
                            ttl: COIN_TTL_SECS,
                        });
                        new.last_coin_spawn_ms = new.elapsed_ms;
                    }
                }
                new.chop_progress += CHOP_STEP;
                if new.chop_progress >= 100 {
                    new.chop_progress = 0;
                    new.trees_chopped += 1;
                    new.score += TREE_POINTS;
                    new.current_streak += 1;
                    if new.current_streak > new.best_streak {
                        new.best_streak = new.current_streak;
                    }
                }
            }
            CollectCoin { id } => {
                if new.game_over {
                    return self;
                }
                let before = new.coins.len();
                new.coins.retain(|c| c.id != id);
                if new.coins.len() < before {
                    new.score += COIN_POINTS;
                }
            }
            Tick { dt } => {
                new.elapsed_ms += dt * 1000.0;
                for p in &mut new.popups {
                    p.ttl -= dt;
                }
                new.popups.retain(|p| p.ttl > 0.0);
                for c in &mut new.coins {
                    c.ttl -= dt;
                }
                new.coins.retain(|c| c.ttl > 0.0);
                if new.shake_ttl > 0.0 {
                    new.shake_ttl = (new.shake_ttl - dt).max(0.0);
                }
            }
            CountdownSecond => {
                if !(new.started && new.ready && !new.game_over) {
                    return self;
                }
                if new.time_left <= 1 {
                    new.time_left = 0;
                    new.game_over = true;
                } else {
                    new.time_left -= 1;
                }
            }
            StreakTimeout => {
                // a press shields the streak for a full idle window, so a
                // timeout landing just after a felled tree cannot wipe it
                if new.started
                    && new.ready
                    && !new.game_over
                    && new.chop_progress == 0
                    && new.elapsed_ms - new.last_chop_ms >= STREAK_IDLE_MS
                {
                    new.current_streak = 0;
                }
            }
            PushScore { entry } => {
                new.highscores.push(entry);
                new.highscores.sort_by(|a, b| b.score.cmp(&a.score));
                new.highscores.truncate(LEADERBOARD_CAP);
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let mut gs = GameState::new();
        gs.started = true;
        gs.ready = true;
        gs
    }

    fn chop_roll() -> ChopRoll {
        ChopRoll {
            kind_roll: 0.9,
            x: 50.0,
            y: 45.0,
            scale: 1.0,
            coin: None,
        }
    }

    fn chop_roll_with_coin() -> ChopRoll {
        ChopRoll {
            coin: Some(CoinSeed {
                x: 50.0,
                y: 50.0,
                scale: 1.6,
            }),
            ..chop_roll()
        }
    }

    fn entry(score: u32) -> ScoreEntry {
        ScoreEntry {
            score,
            trees: 1,
            wallet: "1".repeat(44),
        }
    }

    fn apply(gs: GameState, action: GameAction) -> GameState {
        (*Rc::new(gs).reduce(action)).clone()
    }

    #[test]
    fn chop_advances_progress_by_a_fixed_step() {
        let gs = apply(playing(), GameAction::Chop(chop_roll()));
        assert_eq!(gs.chop_progress, CHOP_STEP);
        assert_eq!(gs.trees_chopped, 0);
        assert_eq!(gs.score, 0);
        assert_eq!(gs.popups.len(), 1);
        assert!(gs.shake_ttl > 0.0);
    }

    #[test]
    fn twenty_chops_fell_one_tree() {
        let mut gs = playing();
        for _ in 0..20 {
            gs = apply(gs, GameAction::Chop(chop_roll()));
        }
        assert_eq!(gs.trees_chopped, 1);
        assert_eq!(gs.score, TREE_POINTS);
        assert_eq!(gs.chop_progress, 0);
        assert_eq!(gs.current_streak, 1);
        assert_eq!(gs.best_streak, 1);
    }

    #[test]
    fn chop_is_ignored_until_the_walk_in_lands() {
        let mut gs = GameState::new();
        gs.started = true;
        let gs = apply(gs, GameAction::Chop(chop_roll()));
        assert_eq!(gs.chop_progress, 0);
        assert!(gs.popups.is_empty());
    }

    #[test]
    fn chop_is_ignored_after_game_over() {
        let mut gs = playing();
        gs.game_over = true;
        let gs = apply(gs, GameAction::Chop(chop_roll()));
        assert_eq!(gs.chop_progress, 0);
        assert!(gs.popups.is_empty());
    }

    #[test]
    fn popup_kind_follows_streak_thresholds() {
        assert_eq!(PopupKind::for_streak(12, 0.0), PopupKind::Excellent);
        assert_eq!(PopupKind::for_streak(10, 0.0), PopupKind::Excellent);
        assert_eq!(PopupKind::for_streak(8, 0.0), PopupKind::Great);
        assert_eq!(PopupKind::for_streak(5, 0.0), PopupKind::Nice);
        assert_eq!(PopupKind::for_streak(2, 0.8), PopupKind::Good);
        assert_eq!(PopupKind::for_streak(2, 0.2), PopupKind::Nice);
    }

    #[test]
    fn popups_expire_after_their_lifetime() {
        let gs = apply(playing(), GameAction::Chop(chop_roll()));
        let gs = apply(gs, GameAction::Tick { dt: 0.5 });
        assert_eq!(gs.popups.len(), 1);
        let gs = apply(gs, GameAction::Tick { dt: 0.6 });
        assert!(gs.popups.is_empty());
    }

    #[test]
    fn first_coin_of_the_session_is_not_throttled() {
        let gs = apply(playing(), GameAction::Chop(chop_roll_with_coin()));
        assert_eq!(gs.coins.len(), 1);
    }

    #[test]
    fn coin_spawns_respect_the_cooldown() {
        let gs = apply(playing(), GameAction::Chop(chop_roll_with_coin()));
        assert_eq!(gs.coins.len(), 1);
        // second seed inside the cooldown window is dropped
        let gs = apply(gs, GameAction::Chop(chop_roll_with_coin()));
        assert_eq!(gs.coins.len(), 1);
        // 1.6 seconds later a new spawn is allowed again
        let gs = apply(gs, GameAction::Tick { dt: 1.6 });
        let gs = apply(gs, GameAction::Chop(chop_roll_with_coin()));
        assert_eq!(gs.coins.len(), 2);
    }

    #[test]
    fn collecting_a_coin_scores_once() {
        let gs = apply(playing(), GameAction::Chop(chop_roll_with_coin()));
        let id = gs.coins[0].id;
        let gs = apply(gs, GameAction::CollectCoin { id });
        assert!(gs.coins.is_empty());
        assert_eq!(gs.score, COIN_POINTS);
        let gs = apply(gs, GameAction::CollectCoin { id });
        assert_eq!(gs.score, COIN_POINTS);
    }

    #[test]
    fn collecting_an_expired_coin_is_a_noop() {
        let gs = apply(playing(), GameAction::Chop(chop_roll_with_coin()));
        let id = gs.coins[0].id;
        let gs = apply(gs, GameAction::Tick { dt: 2.1 });
        assert!(gs.coins.is_empty());
        let gs = apply(gs, GameAction::CollectCoin { id });
        assert_eq!(gs.score, 0);
    }

    #[test]
    fn countdown_runs_out_and_ends_the_run() {
        let mut gs = playing();
        gs.time_left = 2;
        let gs = apply(gs, GameAction::CountdownSecond);
        assert_eq!(gs.time_left, 1);
        assert!(!gs.game_over);
        let gs = apply(gs, GameAction::CountdownSecond);
        assert_eq!(gs.time_left, 0);
        assert!(gs.game_over);
        // pinned at zero afterwards
        let gs = apply(gs, GameAction::CountdownSecond);
        assert_eq!(gs.time_left, 0);
    }

    #[test]
    fn countdown_waits_for_the_walk_in() {
        let mut gs = GameState::new();
        gs.started = true;
        let gs = apply(gs, GameAction::CountdownSecond);
        assert_eq!(gs.time_left, RUN_SECS);
    }

    #[test]
    fn a_full_run_is_exactly_thirty_countdown_ticks() {
        let mut gs = playing();
        for _ in 0..RUN_SECS - 1 {
            gs = apply(gs, GameAction::CountdownSecond);
        }
        assert_eq!(gs.time_left, 1);
        assert!(!gs.game_over);
        let gs = apply(gs, GameAction::CountdownSecond);
        assert_eq!(gs.time_left, 0);
        assert!(gs.game_over);
    }

    #[test]
    fn streak_dies_only_while_idle() {
        let mut gs = playing();
        gs.current_streak = 6;
        gs.best_streak = 6;
        gs.chop_progress = 5;
        gs = apply(gs, GameAction::Tick { dt: 2.0 });
        // mid-tree, even a long idle spell never resets
        let gs = apply(gs, GameAction::StreakTimeout);
        assert_eq!(gs.current_streak, 6);
        let mut gs = gs;
        gs.chop_progress = 0;
        let gs = apply(gs, GameAction::StreakTimeout);
        assert_eq!(gs.current_streak, 0);
        assert_eq!(gs.best_streak, 6);
    }

    #[test]
    fn felling_press_shields_the_streak_from_the_next_timeout() {
        let mut gs = playing();
        gs.current_streak = 5;
        gs.chop_progress = 95;
        gs = apply(gs, GameAction::Tick { dt: 5.0 });
        gs = apply(gs, GameAction::Chop(chop_roll()));
        assert_eq!(gs.chop_progress, 0);
        assert_eq!(gs.current_streak, 6);
        // a timeout landing right after the felling press is a no-op
        let gs = apply(gs, GameAction::StreakTimeout);
        assert_eq!(gs.current_streak, 6);
        // a real idle spell still kills it
        let gs = apply(gs, GameAction::Tick { dt: 1.6 });
        let gs = apply(gs, GameAction::StreakTimeout);
        assert_eq!(gs.current_streak, 0);
    }

    #[test]
    fn leaderboard_stays_sorted_and_capped() {
        let mut gs = GameState::new();
        for score in [120, 80, 200, 40, 150, 90] {
            gs = apply(gs, GameAction::PushScore { entry: entry(score) });
        }
        let scores: Vec<u32> = gs.highscores.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![200, 150, 120, 90, 80]);
        assert_eq!(gs.highscores.len(), LEADERBOARD_CAP);
    }

    #[test]
    fn restart_resets_the_run_but_keeps_session_data() {
        let mut gs = playing();
        gs = apply(gs, GameAction::Chop(chop_roll_with_coin()));
        gs = apply(gs, GameAction::PushScore { entry: entry(77) });
        let popup_ids = gs.next_popup_id;
        let coin_ids = gs.next_coin_id;
        let spawn_ms = gs.last_coin_spawn_ms;
        let run = gs.run_id;
        let gs = apply(gs, GameAction::Start);
        assert_eq!(gs.score, 0);
        assert_eq!(gs.time_left, RUN_SECS);
        assert!(gs.started && !gs.ready && !gs.game_over);
        assert!(gs.popups.is_empty() && gs.coins.is_empty());
        assert_eq!(gs.highscores.len(), 1);
        assert_eq!(gs.next_popup_id, popup_ids);
        assert_eq!(gs.next_coin_id, coin_ids);
        assert_eq!(gs.last_coin_spawn_ms, spawn_ms);
        assert_eq!(gs.run_id, run + 1);
    }

    #[test]
    fn walk_arrival_makes_the_run_ready() {
        let mut gs = GameState::new();
        gs.started = true;
        let gs = apply(gs, GameAction::WalkArrived);
        assert!(gs.ready);
    }

    #[test]
    fn shake_decays_to_zero() {
        let gs = apply(playing(), GameAction::Chop(chop_roll()));
        let gs = apply(gs, GameAction::Tick { dt: 0.1 });
        assert!(gs.shake_ttl > 0.0);
        let gs = apply(gs, GameAction::Tick { dt: 0.1 });
        assert_eq!(gs.shake_ttl, 0.0);
    }
}

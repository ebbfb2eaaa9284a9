use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::{self, ChopRoll, GameAction, GameState, PopupKind, ScoreEntry, Settings};
use crate::state::{SpriteAnim, SpritePose};
use crate::util::clog;
use super::{
    game_over_overlay::GameOverOverlay, highscore_panel::HighscorePanel, hud_panel::HudPanel,
    intro_overlay::IntroOverlay, settings_modal::SettingsModal, token_banner::TokenBanner,
};

const SETTINGS_KEY: &str = "tt_settings";

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub game: UseReducerHandle<GameState>,
}

/// Hit circle for a coin; must match the drawn coin in `draw_coin`.
fn coin_radius(w: f64, scale: f64) -> f64 {
    w * 0.022 * scale
}

/// Trunk, canopy and the chop darkening in one place so the silhouette and
/// the dim overlay cannot drift apart.
fn draw_tree(ctx: &CanvasRenderingContext2d, cx: f64, ground_y: f64, w: f64, h: f64, progress: u32) {
    let trunk_w = w * 0.022;
    let trunk_h = h * 0.14;
    let canopy_base = ground_y - trunk_h * 0.85;
    let tiers = [
        (w * 0.085, canopy_base, h * 0.17, "#2e6b34"),
        (w * 0.068, canopy_base - h * 0.11, h * 0.15, "#3c8a42"),
        (w * 0.050, canopy_base - h * 0.21, h * 0.13, "#4da351"),
    ];
    ctx.set_fill_style_str("#6e4318");
    ctx.fill_rect(cx - trunk_w * 0.5, ground_y - trunk_h, trunk_w, trunk_h);
    ctx.set_stroke_style_str("#53300f");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(cx - trunk_w * 0.5, ground_y - trunk_h, trunk_w, trunk_h);
    for (half_w, base_y, tri_h, color) in tiers {
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.move_to(cx - half_w, base_y);
        ctx.line_to(cx + half_w, base_y);
        ctx.line_to(cx, base_y - tri_h);
        ctx.close_path();
        ctx.fill();
    }
    // worn tree darkens as the chop progresses, matching brightness
    // 100% - 0.3% per progress point
    let dim = progress as f64 * 0.003;
    if dim > 0.0 {
        ctx.set_fill_style_str(&format!("rgba(0,0,0,{:.3})", dim));
        ctx.begin_path();
        ctx.rect(cx - trunk_w * 0.5, ground_y - trunk_h, trunk_w, trunk_h);
        for (half_w, base_y, tri_h, _) in tiers {
            ctx.move_to(cx - half_w, base_y);
            ctx.line_to(cx + half_w, base_y);
            ctx.line_to(cx, base_y - tri_h);
            ctx.close_path();
        }
        ctx.fill();
    }
}

fn draw_lumberjack(ctx: &CanvasRenderingContext2d, w: f64, h: f64, ground_y: f64, anim: &SpriteAnim) {
    let x = w * anim.pos_x / 100.0;
    if x < -w * 0.1 {
        return;
    }
    let unit = h * 0.018;
    let stride = match anim.pose {
        SpritePose::Walking => [0.0, 0.7, 1.0, 0.7, 0.0, -0.7][anim.frame % 6] * unit,
        _ => 0.0,
    };
    let leg_h = unit * 2.2;
    ctx.set_fill_style_str("#33435c");
    ctx.fill_rect(x - unit * 0.9 + stride, ground_y - leg_h, unit * 0.8, leg_h);
    ctx.fill_rect(x + unit * 0.1 - stride, ground_y - leg_h, unit * 0.8, leg_h);
    ctx.set_fill_style_str("#2b1d12");
    ctx.fill_rect(x - unit * 1.0 + stride, ground_y - unit * 0.5, unit * 1.0, unit * 0.5);
    ctx.fill_rect(x - stride, ground_y - unit * 0.5, unit * 1.0, unit * 0.5);
    let torso_h = unit * 2.6;
    let torso_y = ground_y - leg_h - torso_h;
    ctx.set_fill_style_str("#b13e3e");
    ctx.fill_rect(x - unit * 1.2, torso_y, unit * 2.4, torso_h);
    // flannel seams
    ctx.set_fill_style_str("#8f2f2f");
    ctx.fill_rect(x - unit * 1.2, torso_y + unit * 0.8, unit * 2.4, unit * 0.25);
    ctx.fill_rect(x - unit * 0.12, torso_y, unit * 0.24, torso_h);
    let head = unit * 1.3;
    let head_y = torso_y - head;
    ctx.set_fill_style_str("#e8b588");
    ctx.fill_rect(x - head * 0.5, head_y, head, head);
    ctx.set_fill_style_str("#6f4a23");
    ctx.fill_rect(x - head * 0.5, head_y + head * 0.55, head, head * 0.45);
    ctx.set_fill_style_str("#c9473b");
    ctx.fill_rect(x - head * 0.55, head_y - unit * 0.45, head * 1.1, unit * 0.5);
    // axe arm swings around the shoulder; the tree stands to the right
    let shoulder_x = x + unit * 0.9;
    let shoulder_y = torso_y + unit * 0.5;
    let angle = match anim.pose {
        SpritePose::Chopping => [-1.15, -0.65, -0.10, 0.55, 0.95][anim.frame.min(4)],
        _ => -1.15,
    };
    ctx.save();
    ctx.translate(shoulder_x, shoulder_y).ok();
    ctx.rotate(angle).ok();
    ctx.set_fill_style_str("#b13e3e");
    ctx.fill_rect(0.0, -unit * 0.3, unit * 1.8, unit * 0.6);
    ctx.set_fill_style_str("#8a5a2b");
    ctx.fill_rect(unit * 1.4, -unit * 0.22, unit * 2.4, unit * 0.44);
    ctx.set_fill_style_str("#c7cdd6");
    ctx.fill_rect(unit * 3.4, -unit * 1.0, unit * 0.9, unit * 1.4);
    ctx.restore();
}

fn draw_coin(ctx: &CanvasRenderingContext2d, w: f64, h: f64, coin: &model::Coin) {
    let cx = w * coin.x / 100.0;
    let cy = h * coin.y / 100.0;
    let r = coin_radius(w, coin.scale);
    // fade out over the last half second
    let alpha = (coin.ttl / 0.5).clamp(0.0, 1.0);
    ctx.set_global_alpha(alpha);
    ctx.set_shadow_color("rgba(255,215,0,0.8)");
    ctx.set_shadow_blur(12.0);
    ctx.begin_path();
    ctx.set_fill_style_str("#ffd24a");
    ctx.arc(cx, cy, r, 0.0, std::f64::consts::PI * 2.0).ok();
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    ctx.set_stroke_style_str("#a8731e");
    ctx.set_line_width((r * 0.18).max(1.0));
    ctx.stroke();
    ctx.set_fill_style_str("#8a5a10");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("bold {}px 'VT323', monospace", (r * 1.2) as i32));
    ctx.fill_text("$", cx, cy).ok();
    ctx.set_text_baseline("alphabetic");
    ctx.set_text_align("start");
    ctx.set_global_alpha(1.0);
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let sprite = use_mut_ref(SpriteAnim::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let game_ref = use_mut_ref(|| props.game.clone());
    let settings = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    if let Ok(parsed) = serde_json::from_str::<Settings>(&raw) {
                        return parsed;
                    }
                }
            }
        }
        Settings::default()
    });
    let settings_flag = use_mut_ref(Settings::default);
    let open_settings = use_state(|| false);

    // Effect: mirror settings for the draw closure and persist them
    {
        let draw_ref = draw_ref.clone();
        let current = (*settings).clone();
        let settings_flag_ref = settings_flag.clone();
        use_effect_with(current.clone(), move |_| {
            *settings_flag_ref.borrow_mut() = current.clone();
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(&current) {
                        let _ = store.set_item(SETTINGS_KEY, &raw);
                    }
                }
            }
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Effect: update game handle each version
    {
        let game_ref = game_ref.clone();
        let current_handle = props.game.clone();
        let draw_ref_local = draw_ref.clone();
        let version = props.game.version;
        use_effect_with(version, move |_| {
            *game_ref.borrow_mut() = current_handle.clone();
            if let Some(f) = &*draw_ref_local.borrow() {
                f();
            }
            || ()
        });
    }
    // Main mount effect (events, loops)
    {
        let canvas_ref = canvas_ref.clone();
        let sprite_setup = sprite.clone();
        let draw_ref_setup = draw_ref.clone();
        let game_ref_setup = game_ref.clone();
        let settings_flag_setup = settings_flag.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            compute_and_apply_canvas_size();
            // Draw closure
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let game_ref = game_ref_setup.clone();
                let sprite_draw = sprite_setup.clone();
                let settings_flag = settings_flag_setup.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas.get_context("2d").ok().flatten() {
                        Some(c) => c.dyn_into::<CanvasRenderingContext2d>().unwrap(),
                        None => return,
                    };
                    let w = canvas.width() as f64;
                    let h = canvas.height() as f64;
                    let gs_handle = game_ref.borrow();
                    let gs = (**gs_handle).clone();
                    drop(gs_handle);
                    let opts = settings_flag.borrow().clone();
                    let anim = sprite_draw.borrow().clone();
                    // sky and distant treeline
                    ctx.set_global_alpha(1.0);
                    ctx.set_fill_style_str("#a8d8e8");
                    ctx.fill_rect(0.0, 0.0, w, h * 0.62);
                    ctx.set_fill_style_str("#3a5c32");
                    let silhouettes = 9;
                    for i in 0..silhouettes {
                        let cx = w * (i as f64 + 0.5) / silhouettes as f64;
                        ctx.begin_path();
                        ctx.move_to(cx - w * 0.05, h * 0.62);
                        ctx.line_to(cx + w * 0.05, h * 0.62);
                        ctx.line_to(cx, h * 0.46);
                        ctx.close_path();
                        ctx.fill();
                    }
                    // grass and dirt
                    ctx.set_fill_style_str("#7bb661");
                    ctx.fill_rect(0.0, h * 0.62, w, h * 0.18);
                    ctx.set_fill_style_str("#8a6240");
                    ctx.fill_rect(0.0, h * 0.80, w, h * 0.20);
                    let ground_y = h * 0.80;
                    // tree, shaken sideways right after a chop
                    let shake_on = opts.tree_shake && gs.started && gs.shake_ttl > 0.0;
                    let jitter = if shake_on {
                        if ((gs.shake_ttl * 1000.0 / 30.0) as i64) % 2 == 0 {
                            w * 0.004
                        } else {
                            -w * 0.004
                        }
                    } else {
                        0.0
                    };
                    draw_tree(&ctx, w * 0.5 + jitter, ground_y, w, h, gs.chop_progress);
                    if gs.started {
                        // chop progress bar under the tree
                        let bar_w = w * 0.16;
                        let bar_h = h * 0.015;
                        let bx = w * 0.5 - bar_w * 0.5;
                        let by = ground_y + h * 0.035;
                        ctx.set_fill_style_str("rgba(15,15,15,0.55)");
                        ctx.fill_rect(bx, by, bar_w, bar_h);
                        ctx.set_fill_style_str("#e5484d");
                        ctx.fill_rect(bx, by, bar_w * gs.chop_progress as f64 / 100.0, bar_h);
                        ctx.set_stroke_style_str("#2b1d12");
                        ctx.set_line_width(1.0);
                        ctx.stroke_rect(bx, by, bar_w, bar_h);
                        draw_lumberjack(&ctx, w, h, ground_y, &anim);
                        for c in &gs.coins {
                            draw_coin(&ctx, w, h, c);
                        }
                        // floating praise text
                        if opts.show_popups && !gs.popups.is_empty() {
                            ctx.set_text_align("center");
                            for p in &gs.popups {
                                let life = (p.ttl / model::POPUP_TTL_SECS).clamp(0.0, 1.0);
                                let rise = (model::POPUP_TTL_SECS - p.ttl).max(0.0) * h * 0.06;
                                let px = w * p.x / 100.0;
                                let py = h * p.y / 100.0 - rise;
                                let size = (h * 0.045 * p.scale) as i32;
                                ctx.set_font(&format!("{}px 'VT323', monospace", size));
                                let (r, g, b) = match p.kind {
                                    PopupKind::Good => (233, 237, 201),
                                    PopupKind::Nice => (163, 230, 53),
                                    PopupKind::Great => (255, 183, 3),
                                    PopupKind::Excellent => (255, 214, 10),
                                };
                                ctx.set_fill_style_str(&format!(
                                    "rgba({},{},{},{:.3})",
                                    r, g, b, life
                                ));
                                ctx.fill_text(p.kind.label(), px, py).ok();
                            }
                            ctx.set_text_align("start");
                        }
                    }
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();
            // RAF loop
            let raf_id = Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let draw_ref_loop = draw_ref_setup.clone();
                let window_loop = window.clone();
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if let Some(f) = &*draw_ref_loop.borrow() {
                        f();
                    }
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_clone.borrow_mut() = Some(id);
                    }
                })
                    as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
            // Animation interval: sprite frames plus the cosmetic ttl clock
            let anim_tick = {
                let game_ref_ct = game_ref_setup.clone();
                let sprite_tick = sprite_setup.clone();
                Closure::wrap(Box::new(move || {
                    let handle = game_ref_ct.borrow().clone();
                    let gs_snap = (*handle).clone();
                    if gs_snap.started && !gs_snap.game_over {
                        let arrived = sprite_tick.borrow_mut().advance(16.0);
                        if arrived {
                            clog("walk-in done, axe ready");
                            handle.dispatch(GameAction::WalkArrived);
                        }
                    }
                    handle.dispatch(GameAction::Tick { dt: 0.016 });
                }) as Box<dyn FnMut()>)
            };
            let anim_tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    anim_tick.as_ref().unchecked_ref(),
                    16,
                )
                .unwrap();
            // Streak decay interval
            let streak_tick = {
                let game_ref_ct = game_ref_setup.clone();
                Closure::wrap(Box::new(move || {
                    let handle = game_ref_ct.borrow().clone();
                    handle.dispatch(GameAction::StreakTimeout);
                }) as Box<dyn FnMut()>)
            };
            let streak_tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    streak_tick.as_ref().unchecked_ref(),
                    1500,
                )
                .unwrap();
            // Leaderboard churn interval
            let churn_tick = {
                let game_ref_ct = game_ref_setup.clone();
                Closure::wrap(Box::new(move || {
                    let handle = game_ref_ct.borrow().clone();
                    if handle.started {
                        handle.dispatch(GameAction::PushScore {
                            entry: ScoreEntry::fake(),
                        });
                    }
                }) as Box<dyn FnMut()>)
            };
            let churn_tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    churn_tick.as_ref().unchecked_ref(),
                    3000,
                )
                .unwrap();
            // Spacebar chops
            let keydown_cb = {
                let game_ref_ct = game_ref_setup.clone();
                let sprite_key = sprite_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    let key = e.key();
                    let code = e.code();
                    if code == "Space" || key == " " || key == "Space" || key == "Spacebar" {
                        e.prevent_default();
                        let handle = game_ref_ct.borrow().clone();
                        if !(handle.started && handle.ready && !handle.game_over) {
                            return;
                        }
                        sprite_key.borrow_mut().begin_chop();
                        handle.dispatch(GameAction::Chop(ChopRoll::roll()));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .unwrap();
            // Coin clicks
            let mousedown_cb = {
                let canvas_mc = canvas.clone();
                let game_ref_ct = game_ref_setup.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let handle = game_ref_ct.borrow().clone();
                    let gs = (*handle).clone();
                    if !gs.started || gs.game_over {
                        return;
                    }
                    let px = e.offset_x() as f64;
                    let py = e.offset_y() as f64;
                    let w = canvas_mc.width() as f64;
                    let h = canvas_mc.height() as f64;
                    // last drawn is on top
                    for c in gs.coins.iter().rev() {
                        let dx = px - w * c.x / 100.0;
                        let dy = py - h * c.y / 100.0;
                        let r = coin_radius(w, c.scale);
                        if dx * dx + dy * dy <= r * r {
                            clog(&format!("coin {} collected", c.id));
                            handle.dispatch(GameAction::CollectCoin { id: c.id });
                            break;
                        }
                    }
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();
            // Resize
            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();
            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                window_clone.clear_interval_with_handle(anim_tick_id);
                window_clone.clear_interval_with_handle(streak_tick_id);
                window_clone.clear_interval_with_handle(churn_tick_id);
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                let _keep_alive = (
                    &anim_tick,
                    &streak_tick,
                    &churn_tick,
                    &keydown_cb,
                    &mousedown_cb,
                    &resize_cb,
                );
            }
        });
    }
    // Countdown; armed when the walk-in lands, disarmed when the run ends,
    // so the first tick lands a full second after arrival
    {
        let game = props.game.clone();
        let deps = (props.game.ready, props.game.game_over);
        use_effect_with(deps, move |(ready, game_over)| {
            let mut armed = None;
            if *ready && !*game_over {
                let window = web_sys::window().expect("window");
                let tick = Closure::wrap(Box::new(move || {
                    game.dispatch(GameAction::CountdownSecond);
                }) as Box<dyn FnMut()>);
                let id = window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        1000,
                    )
                    .unwrap();
                armed = Some((tick, id, window));
            }
            move || {
                if let Some((tick, id, window)) = armed {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }
    // restart the walk-in on run id change
    {
        let sprite_run = sprite.clone();
        let run_id_dependency = props.game.run_id;
        use_effect_with(run_id_dependency, move |_| {
            sprite_run.borrow_mut().begin_walk();
            || ()
        });
    }
    // submit the player's result once the clock runs out
    {
        let game_handle = props.game.clone();
        let game_over_dep = props.game.game_over;
        use_effect_with(game_over_dep, move |go| {
            if *go {
                let gs = (*game_handle).clone();
                clog(&format!(
                    "run over: {} points, {} trees",
                    gs.score, gs.trees_chopped
                ));
                if gs.score > 0 {
                    game_handle.dispatch(GameAction::PushScore {
                        entry: ScoreEntry::player(gs.score, gs.trees_chopped),
                    });
                }
            }
            || ()
        });
    }

    let start_cb: Callback<()> = {
        let game = props.game.clone();
        Callback::from(move |()| {
            clog("run started");
            game.dispatch(GameAction::Start);
        })
    };
    let open_settings_cb: Callback<MouseEvent> = {
        let open_settings = open_settings.clone();
        Callback::from(move |_e: MouseEvent| open_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let toggle_popups_cb: Callback<()> = {
        let settings = settings.clone();
        Callback::from(move |()| {
            let mut s = (*settings).clone();
            s.show_popups = !s.show_popups;
            settings.set(s);
        })
    };
    let toggle_shake_cb: Callback<()> = {
        let settings = settings.clone();
        Callback::from(move |()| {
            let mut s = (*settings).clone();
            s.tree_shake = !s.tree_shake;
            settings.set(s);
        })
    };

    let gs_overlay = (*props.game).clone();
    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref.clone()} id="game-canvas" style="display:block; width:100%; height:100%;"></canvas>
        { if gs_overlay.started {
            html! {<>
                <HudPanel score={gs_overlay.score} trees={gs_overlay.trees_chopped} streak={gs_overlay.current_streak} best={gs_overlay.best_streak} time_left={gs_overlay.time_left} />
                <TokenBanner />
                <HighscorePanel entries={gs_overlay.highscores.clone()} />
            </>}
        } else { html! {} } }
        { if gs_overlay.started && !gs_overlay.ready && !gs_overlay.game_over {
            html! {<div style="position:absolute; left:50%; top:66%; transform:translateX(-50%); background:rgba(20,14,8,0.78); border:1px solid #5c4326; border-radius:8px; padding:8px 18px; color:#f3e9d2; font-size:22px; z-index:15;">{"Lumberjack approaching..."}</div>}
        } else { html! {} } }
        { if gs_overlay.started && gs_overlay.ready && !gs_overlay.game_over {
            html! {<div style="position:absolute; left:50%; top:66%; transform:translateX(-50%); background:rgba(20,14,8,0.78); border:1px solid #ffd60a; border-radius:8px; padding:8px 18px; color:#ffd60a; font-size:24px; z-index:15;">{"Press SPACEBAR rapidly!"}</div>}
        } else { html! {} } }
        <div style="position:absolute; left:12px; bottom:12px; z-index:20;">
            <button onclick={open_settings_cb}>{"Settings"}</button>
        </div>
        <IntroOverlay show={!gs_overlay.started && !gs_overlay.game_over} start={start_cb.clone()} />
        <SettingsModal show={*open_settings} on_close={close_settings_cb} show_popups={settings.show_popups} on_toggle_popups={toggle_popups_cb} tree_shake={settings.tree_shake} on_toggle_shake={toggle_shake_cb} />
        <GameOverOverlay show={gs_overlay.game_over} score={gs_overlay.score} trees={gs_overlay.trees_chopped} best_streak={gs_overlay.best_streak} restart={start_cb} />
    </div> }
}

// Lumberjack pose state, driven by the 16ms animation interval. Lives outside
// the reducible state; the draw closure reads it straight from a shared ref.

/// Chop swing frame count and per-frame duration.
pub const CHOP_FRAMES: usize = 5;
pub const CHOP_FRAME_MS: f64 = 30.0;
/// Walk cycle frame count and per-frame duration.
pub const WALK_FRAMES: usize = 6;
pub const WALK_FRAME_MS: f64 = 50.0;
/// The walk-in starts off-screen left, in percent of the scene width.
pub const WALK_START_X: f64 = -100.0;
/// Crossing this x ends the walk-in and arms the axe.
pub const WALK_STOP_X: f64 = 30.0;
/// Horizontal percent covered per walk frame.
pub const WALK_SPEED: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpritePose {
    Idle,
    Walking,
    Chopping,
}

#[derive(Clone, Debug)]
pub struct SpriteAnim {
    pub pose: SpritePose,
    pub frame: usize,
    /// Horizontal position in percent of the scene width.
    pub pos_x: f64,
    elapsed_ms: f64,
}

impl Default for SpriteAnim {
    fn default() -> Self {
        Self {
            pose: SpritePose::Idle,
            frame: 0,
            pos_x: WALK_STOP_X,
            elapsed_ms: 0.0,
        }
    }
}

impl SpriteAnim {
    /// Restart the walk-in from off-screen (new run).
    pub fn begin_walk(&mut self) {
        self.pose = SpritePose::Walking;
        self.frame = 0;
        self.pos_x = WALK_START_X;
        self.elapsed_ms = 0.0;
    }

    /// Restart the chop swing; a press mid-swing snaps back to the first
    /// frame, which is what makes rapid pressing look frantic.
    pub fn begin_chop(&mut self) {
        self.pose = SpritePose::Chopping;
        self.frame = 0;
        self.elapsed_ms = 0.0;
    }

    /// Advance by `dt_ms`. Returns true on the tick the walk-in reaches the
    /// tree; at most once per `begin_walk`.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        match self.pose {
            SpritePose::Idle => false,
            SpritePose::Walking => {
                self.elapsed_ms += dt_ms;
                let mut arrived = false;
                while self.elapsed_ms >= WALK_FRAME_MS && !arrived {
                    self.elapsed_ms -= WALK_FRAME_MS;
                    self.frame = (self.frame + 1) % WALK_FRAMES;
                    self.pos_x += WALK_SPEED;
                    if self.pos_x >= WALK_STOP_X {
                        self.pose = SpritePose::Idle;
                        self.frame = 0;
                        arrived = true;
                    }
                }
                arrived
            }
            SpritePose::Chopping => {
                self.elapsed_ms += dt_ms;
                while self.elapsed_ms >= CHOP_FRAME_MS {
                    self.elapsed_ms -= CHOP_FRAME_MS;
                    if self.frame + 1 < CHOP_FRAMES {
                        self.frame += 1;
                    } else {
                        self.pose = SpritePose::Idle;
                        self.frame = 0;
                        break;
                    }
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_in_crosses_and_stops_at_the_tree() {
        let mut anim = SpriteAnim::default();
        anim.begin_walk();
        assert_eq!(anim.pos_x, WALK_START_X);
        let mut arrivals = 0;
        for _ in 0..40 {
            if anim.advance(WALK_FRAME_MS) {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert_eq!(anim.pose, SpritePose::Idle);
        assert!(anim.pos_x >= WALK_STOP_X);
    }

    #[test]
    fn walk_in_arrival_survives_a_coarse_tick() {
        let mut anim = SpriteAnim::default();
        anim.begin_walk();
        // 33 frames of 50ms cover the -100..30 span in one call
        assert!(anim.advance(WALK_FRAME_MS * 33.0));
        assert_eq!(anim.pos_x, WALK_START_X + WALK_SPEED * 33.0);
    }

    #[test]
    fn walk_cycle_wraps_its_frames() {
        let mut anim = SpriteAnim::default();
        anim.begin_walk();
        for _ in 0..WALK_FRAMES {
            anim.advance(WALK_FRAME_MS);
        }
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.pose, SpritePose::Walking);
    }

    #[test]
    fn chop_swing_returns_to_idle() {
        let mut anim = SpriteAnim::default();
        anim.begin_chop();
        anim.advance(CHOP_FRAME_MS * (CHOP_FRAMES as f64 - 1.0));
        assert_eq!(anim.pose, SpritePose::Chopping);
        assert_eq!(anim.frame, CHOP_FRAMES - 1);
        anim.advance(CHOP_FRAME_MS);
        assert_eq!(anim.pose, SpritePose::Idle);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn press_mid_swing_restarts_the_swing() {
        let mut anim = SpriteAnim::default();
        anim.begin_chop();
        anim.advance(CHOP_FRAME_MS * 2.0);
        assert_eq!(anim.frame, 2);
        anim.begin_chop();
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.pose, SpritePose::Chopping);
    }

    #[test]
    fn idle_ignores_time() {
        let mut anim = SpriteAnim::default();
        assert!(!anim.advance(1000.0));
        assert_eq!(anim.frame, 0);
        assert_eq!(anim.pose, SpritePose::Idle);
    }
}

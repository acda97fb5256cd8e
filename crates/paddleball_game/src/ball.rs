use crate::geometry::{circle_rect_contact, Contact, Point, Rect};
use crate::{BOTTOM_MARGIN, INFO_BAR_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Edge length of the ball's sprite box in pixels.
pub const BALL_SIZE: i32 = 20;
/// Collision radius, half the sprite box.
pub const BALL_RADIUS: i32 = BALL_SIZE / 2;
/// Scalar speed in pixels per tick. Velocity components never change
/// magnitude, only sign.
pub const BALL_SPEED: i32 = 2;

/// Spawn position used at the start of every match.
const START_X: i32 = 300;
const START_Y: i32 = 300;

/// What happened to the ball during one `advance` call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BallOutcome {
    /// Plain flight, nothing of interest.
    Continue,
    /// Bounced off the left or right wall. Still in play, no scoring effect;
    /// reported separately so the presentation layer can play a cue.
    WallBounce,
    /// Hit the active paddle. `side` is true when the contact was past a
    /// vertical edge, which also reverses horizontal travel.
    PaddleHit { side: bool },
    /// Crossed the goal line above the AI or below the player; the rally is
    /// over.
    OutOfBounds,
}

/// The ball: a circle moving at a fixed scalar speed whose velocity
/// components only ever flip sign.
pub struct Ball {
    x: i32,
    y: i32,
    vx: i32,
    vy: i32,
    speed: i32,
    radius: i32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            x: START_X,
            y: START_Y,
            vx: BALL_SPEED,
            vy: BALL_SPEED,
            speed: BALL_SPEED,
            radius: BALL_RADIUS,
        }
    }

    /// Put the ball back at the spawn point moving down towards the player.
    ///
    /// Only the vertical velocity is reset; the horizontal component keeps
    /// whatever sign the previous match left it with.
    pub fn reset_for_match(&mut self) {
        self.x = START_X;
        self.y = START_Y;
        self.vy = self.speed;
    }

    /// Integrate one frame of motion and test against the active paddle.
    ///
    /// Vertical motion runs first: crossing either goal line rejects the
    /// whole move and reports `OutOfBounds` with no further processing.
    /// Horizontal motion follows, bouncing off the side walls. Finally the
    /// ball is tested against `active_paddle` only; possession is exclusive,
    /// so the other paddle cannot be nearby and is not checked.
    pub fn advance(&mut self, ticks: i32, active_paddle: Rect) -> BallOutcome {
        let (prev_x, prev_y) = (self.x, self.y);

        self.y += self.vy * ticks;
        if self.y < INFO_BAR_HEIGHT {
            return BallOutcome::OutOfBounds;
        }
        if self.y > SCREEN_HEIGHT - BOTTOM_MARGIN - BALL_SIZE {
            return BallOutcome::OutOfBounds;
        }

        self.x += self.vx * ticks;
        let mut wall_bounce = false;
        if self.x < 0 || self.x > SCREEN_WIDTH - BALL_SIZE {
            self.vx = -self.vx;
            // Nudge back towards the field by a single velocity step.
            self.x += self.vx;
            wall_bounce = true;
        }

        match circle_rect_contact(self.center(), self.radius, active_paddle) {
            Some(contact) => {
                // Rewind so the ball never overlaps the paddle visually.
                self.x = prev_x;
                self.y = prev_y;
                self.vy = -self.vy;
                let side = contact == Contact::Side;
                if side {
                    // Corner contact reverses horizontal travel too, and the
                    // ball gets pushed clear of the corner so it cannot graze
                    // the same edge again next frame. The push is clamped so
                    // a long frame cannot carry it through a wall.
                    self.vx = -self.vx;
                    self.x += 2 * self.vx * ticks;
                    self.y += 2 * self.vy * ticks;
                    self.clamp_to_playfield();
                }
                BallOutcome::PaddleHit { side }
            }
            None if wall_bounce => BallOutcome::WallBounce,
            None => BallOutcome::Continue,
        }
    }

    fn clamp_to_playfield(&mut self) {
        self.x = self.x.clamp(0, SCREEN_WIDTH - BALL_SIZE);
        self.y = self
            .y
            .clamp(INFO_BAR_HEIGHT, SCREEN_HEIGHT - BOTTOM_MARGIN - BALL_SIZE);
    }

    fn center(&self) -> Point {
        Point::new(self.x + BALL_SIZE / 2, self.y + BALL_SIZE / 2)
    }

    pub fn set_pos(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn vy(&self) -> i32 {
        self.vy
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

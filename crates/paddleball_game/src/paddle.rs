use crate::geometry::Rect;
use crate::input::InputState;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Paddle sprite dimensions in pixels.
pub const PADDLE_WIDTH: i32 = 80;
pub const PADDLE_HEIGHT: i32 = 20;

/// Player paddle speed in pixels per tick.
pub const PLAYER_SPEED: i32 = 2;
/// AI paddle base speed in pixels per tick, before the tracking bonus.
pub const AI_BASE_SPEED: i32 = 3;

/// Vertical offset of the player paddle, near the bottom of the window.
pub const PLAYER_PADDLE_Y: i32 = SCREEN_HEIGHT - 50;
/// Vertical offset of the AI paddle, just below the info bar.
pub const AI_PADDLE_Y: i32 = 110;

/// Ball heights the AI reacts to. Outside this band the tracking bonus is
/// zero and the paddle stands still.
const AI_BAND_TOP: i32 = 80;
const AI_BAND_BOTTOM: i32 = 750;
/// Right shift applied to the base-plus-coefficient sum. An arithmetic
/// shift on `i32`, so the division floors; the coefficient is never
/// negative inside the band.
const AI_SPEED_SHIFT: u32 = 7;

/// A paddle: an axis-aligned box confined to a fixed horizontal band.
///
/// Both the player's and the AI's paddle share this type; they differ only
/// in which `advance` method drives them each frame.
pub struct Paddle {
    rect: Rect,
    speed: i32,
}

impl Paddle {
    pub fn new(y: i32) -> Self {
        Self {
            rect: Rect::new(SCREEN_WIDTH / 4, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PLAYER_SPEED,
        }
    }

    /// Player-controlled movement from the held directional state.
    ///
    /// Only one direction applies per frame: left wins when both are held.
    pub fn advance(&mut self, ticks: i32, input: &InputState) {
        if input.left {
            self.rect.x -= self.speed * ticks;
        } else if input.right {
            self.rect.x += self.speed * ticks;
        }
        self.clamp();
    }

    /// Reactive AI movement tracking the ball.
    ///
    /// While the ball's height is inside the reachable band, a bonus
    /// proportional to its distance from the player's goal line is added to
    /// the base speed and the sum is scaled down by a power of two. The
    /// paddle therefore speeds up as the ball approaches its own goal and
    /// ignores the ball entirely once it is outside the band. No lookahead,
    /// no shot anticipation.
    pub fn advance_ai(&mut self, ticks: i32, ball_x: i32, ball_y: i32) {
        let coeff = if (AI_BAND_TOP..=AI_BAND_BOTTOM).contains(&ball_y) {
            PLAYER_PADDLE_Y - ball_y + AI_BAND_TOP
        } else {
            0
        };
        let step = (AI_BASE_SPEED + coeff) >> AI_SPEED_SHIFT;

        if ball_x < self.rect.x {
            self.rect.x -= step * ticks;
        } else if ball_x > self.rect.right() {
            self.rect.x += step * ticks;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        self.rect.x = self.rect.x.clamp(0, SCREEN_WIDTH - self.rect.w);
    }

    /// Collision box in window coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_moves_right_by_speed_times_ticks() {
        let mut paddle = Paddle::new(PLAYER_PADDLE_Y);
        let input = InputState {
            left: false,
            right: true,
        };
        paddle.advance(10, &input);
        assert_eq!(paddle.rect().x, 150 + PLAYER_SPEED * 10);
    }

    #[test]
    fn left_wins_when_both_directions_are_held() {
        let mut paddle = Paddle::new(PLAYER_PADDLE_Y);
        let input = InputState {
            left: true,
            right: true,
        };
        paddle.advance(10, &input);
        assert_eq!(paddle.rect().x, 150 - PLAYER_SPEED * 10);
    }

    #[test]
    fn player_clamps_to_both_field_edges() {
        let mut paddle = Paddle::new(PLAYER_PADDLE_Y);
        let left = InputState {
            left: true,
            right: false,
        };
        paddle.advance(1_000, &left);
        assert_eq!(paddle.rect().x, 0);

        let right = InputState {
            left: false,
            right: true,
        };
        paddle.advance(1_000, &right);
        assert_eq!(paddle.rect().x, SCREEN_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn ai_speeds_up_as_the_ball_nears_its_goal() {
        let mut paddle = Paddle::new(AI_PADDLE_Y);
        // Ball high in the band: coefficient 750 - 100 + 80 = 730, so the
        // per-tick step is (3 + 730) >> 7 = 5.
        paddle.advance_ai(10, 0, 100);
        assert_eq!(paddle.rect().x, 150 - 50);
    }

    #[test]
    fn ai_ignores_the_ball_outside_the_band() {
        let mut paddle = Paddle::new(AI_PADDLE_Y);
        paddle.advance_ai(100, 0, 60);
        assert_eq!(paddle.rect().x, 150);
        paddle.advance_ai(100, 0, 760);
        assert_eq!(paddle.rect().x, 150);
        // Inside the band but deep in the player's half the bonus still
        // truncates to zero: (3 + 83) >> 7 = 0.
        paddle.advance_ai(100, 0, 747);
        assert_eq!(paddle.rect().x, 150);
    }

    #[test]
    fn ai_rests_while_the_ball_is_over_its_span() {
        let mut paddle = Paddle::new(AI_PADDLE_Y);
        paddle.advance_ai(10, 150 + PADDLE_WIDTH / 2, 100);
        assert_eq!(paddle.rect().x, 150);
    }

    #[test]
    fn ai_never_leaves_the_field_for_wild_ball_positions() {
        let mut paddle = Paddle::new(AI_PADDLE_Y);
        paddle.advance_ai(10_000, -50_000, 100);
        assert_eq!(paddle.rect().x, 0);
        paddle.advance_ai(10_000, 50_000, 100);
        assert_eq!(paddle.rect().x, SCREEN_WIDTH - PADDLE_WIDTH);
    }
}

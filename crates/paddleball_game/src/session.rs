use log::info;

use crate::ball::{Ball, BallOutcome};
use crate::input::{InputState, Press};
use crate::paddle::{Paddle, AI_PADDLE_Y, PLAYER_PADDLE_Y};
use crate::scores::{ScoreTable, TABLE_SIZE};

#[cfg(test)]
mod tests;

/// Which paddle the ball is tested against this frame.
///
/// Possession is exclusive: the playfield geometry keeps the ball near at
/// most one paddle, so checking a single collision box halves the work per
/// frame. The side alternates on successful hits only, never on wall
/// bounces.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Menu entries, top to bottom.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuItem {
    Play,
    HighScores,
    Quit,
}

impl MenuItem {
    pub const ORDER: [MenuItem; 3] = [MenuItem::Play, MenuItem::HighScores, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play => "PLAY",
            MenuItem::HighScores => "HIGH SCORES",
            MenuItem::Quit => "QUIT",
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&item| item == self).unwrap_or(0)
    }

    fn previous(self) -> MenuItem {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    fn next(self) -> MenuItem {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }
}

/// Discrete presentation cues emitted by the state machine.
///
/// The session holds no renderer or audio handles; it reports what happened
/// and the app layer decides how to show or play it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cue {
    WallBounce,
    PaddleHit,
    Goal,
    MenuMove,
    MenuSelect,
}

/// Current state of the outer game state machine.
///
/// The pause, end-of-match, and menu screens are all plain variants here
/// rather than nested wait loops: each frame performs at most one
/// transition and the outer loop stays responsive to quit throughout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Menu { selected: MenuItem },
    HighScores,
    Playing,
    Paused,
    GameOver { player_won: bool, new_high_score: bool },
}

/// The match loop: owns all gameplay state and advances it one frame at a
/// time.
pub struct Session {
    phase: Phase,
    ball: Ball,
    player: Paddle,
    enemy: Paddle,
    active_side: Side,
    score: u32,
    scores: ScoreTable,
    high_scores: [u32; TABLE_SIZE],
    cues: Vec<Cue>,
    quit: bool,
}

impl Session {
    pub fn new(scores: ScoreTable) -> Self {
        let high_scores = scores.load_top3();
        Self {
            phase: Phase::Menu {
                selected: MenuItem::Play,
            },
            ball: Ball::new(),
            player: Paddle::new(PLAYER_PADDLE_Y),
            enemy: Paddle::new(AI_PADDLE_Y),
            active_side: Side::Player,
            score: 0,
            scores,
            high_scores,
            cues: Vec::new(),
            quit: false,
        }
    }

    /// Advance one frame. `ticks` is the frame duration in physics ticks
    /// and `input` the held directional state sampled before the call.
    /// Outside of `Playing` nothing moves; in particular a paused match is
    /// completely frozen and resumes with the next frame's own elapsed
    /// time, so the pause duration is never charged to physics.
    pub fn tick(&mut self, ticks: i32, input: &InputState) {
        if matches!(self.phase, Phase::Playing) {
            self.step_match(ticks, input);
        }
    }

    /// One frame of match physics: input is already sampled, both paddles
    /// commit their new positions, and only then does the ball move, so its
    /// collision test always sees current-frame paddle geometry.
    fn step_match(&mut self, ticks: i32, input: &InputState) {
        self.player.advance(ticks, input);
        self.enemy.advance_ai(ticks, self.ball.x(), self.ball.y());

        let active_box = match self.active_side {
            Side::Player => self.player.rect(),
            Side::Ai => self.enemy.rect(),
        };
        match self.ball.advance(ticks, active_box) {
            BallOutcome::OutOfBounds => self.end_match(),
            BallOutcome::PaddleHit { .. } => {
                // One point per completed exchange: the rally scores when
                // the AI returns the ball to the player's side, not on every
                // touch.
                if self.active_side == Side::Ai {
                    self.score += 1;
                }
                self.active_side = self.active_side.other();
                self.cues.push(Cue::PaddleHit);
            }
            BallOutcome::WallBounce => self.cues.push(Cue::WallBounce),
            BallOutcome::Continue => {}
        }
    }

    fn end_match(&mut self) {
        // The active side was the one expected to return the ball, so the
        // other side takes the match.
        let player_won = self.active_side == Side::Ai;
        let new_high_score = self.scores.try_record(self.score);
        if new_high_score {
            self.high_scores = self.scores.load_top3();
        }
        info!(
            "Match over: player_won={player_won} score={} new_high_score={new_high_score}",
            self.score
        );
        self.cues.push(Cue::Goal);
        self.phase = Phase::GameOver {
            player_won,
            new_high_score,
        };
    }

    /// Handle a discrete key press. Which presses mean anything depends on
    /// the current phase; everything else is ignored.
    pub fn handle_press(&mut self, press: Press) {
        match self.phase {
            Phase::Menu { selected } => self.handle_menu_press(selected, press),
            Phase::HighScores => {
                if matches!(press, Press::Back | Press::Confirm) {
                    self.cues.push(Cue::MenuSelect);
                    self.phase = Phase::Menu {
                        selected: MenuItem::HighScores,
                    };
                }
            }
            Phase::Playing => match press {
                Press::Pause => {
                    self.cues.push(Cue::MenuSelect);
                    self.phase = Phase::Paused;
                }
                Press::Back => {
                    // Aborting forfeits the match; nothing is recorded.
                    info!("Match aborted at score {}", self.score);
                    self.phase = Phase::Menu {
                        selected: MenuItem::Play,
                    };
                }
                _ => {}
            },
            Phase::Paused => match press {
                Press::Pause => {
                    self.cues.push(Cue::MenuSelect);
                    self.phase = Phase::Playing;
                }
                Press::Back => {
                    self.phase = Phase::Menu {
                        selected: MenuItem::Play,
                    };
                }
                _ => {}
            },
            Phase::GameOver { .. } => {
                if matches!(press, Press::Confirm | Press::Back) {
                    self.cues.push(Cue::MenuSelect);
                    self.phase = Phase::Menu {
                        selected: MenuItem::Play,
                    };
                }
            }
        }
    }

    fn handle_menu_press(&mut self, selected: MenuItem, press: Press) {
        match press {
            Press::MenuUp => {
                self.cues.push(Cue::MenuMove);
                self.phase = Phase::Menu {
                    selected: selected.previous(),
                };
            }
            Press::MenuDown => {
                self.cues.push(Cue::MenuMove);
                self.phase = Phase::Menu {
                    selected: selected.next(),
                };
            }
            Press::Confirm => {
                self.cues.push(Cue::MenuSelect);
                match selected {
                    MenuItem::Play => self.start_match(),
                    MenuItem::HighScores => {
                        self.high_scores = self.scores.load_top3();
                        self.phase = Phase::HighScores;
                    }
                    MenuItem::Quit => self.quit = true,
                }
            }
            Press::Back => self.quit = true,
            Press::Pause => {}
        }
    }

    /// Reset match state and enter `Playing`. Paddle positions deliberately
    /// carry over from the previous match; only the ball and the score are
    /// reset.
    fn start_match(&mut self) {
        info!("Starting match");
        self.ball.reset_for_match();
        self.active_side = Side::Player;
        self.score = 0;
        self.phase = Phase::Playing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_scores(&self) -> [u32; TABLE_SIZE] {
        self.high_scores
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn player(&self) -> &Paddle {
        &self.player
    }

    pub fn enemy(&self) -> &Paddle {
        &self.enemy
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Hand the cues collected this frame to the presentation layer.
    pub fn drain_cues(&mut self) -> impl Iterator<Item = Cue> + '_ {
        self.cues.drain(..)
    }
}

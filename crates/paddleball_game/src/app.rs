use log::info;

use paddleball_common::app::App;
use paddleball_common::color::Color;
use paddleball_common::key::Key;

use crate::ball::BALL_RADIUS;
use crate::geometry::{Point, Rect};
use crate::input::{press_for_key, InputState};
use crate::render::{text_width, Frame};
use crate::scores::ScoreTable;
use crate::session::{MenuItem, Phase, Session};
use crate::sound::SoundManager;
use crate::{INFO_BAR_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Playfield backdrop.
const PLAYFIELD_COLOR: Color = Color::new_rgb(0x00, 0xff, 0xbf);
/// Info bar backdrop.
const INFO_BAR_COLOR: Color = Color::new_rgb(0x00, 0x90, 0xff);
/// Menu and overlay backdrop.
const MENU_COLOR: Color = Color::WHITE;

/// Frame milliseconds are shifted down by this much to produce physics
/// ticks, so one tick is four milliseconds.
const TICK_SHIFT: u32 = 2;

/// Frontend-facing application wrapper around the match state machine.
///
/// Implements the shared `App` trait: translates key events into logical
/// input, steps the session once per frame, paints the current phase into
/// the frame buffer, and forwards the session's cues to the audio thread.
pub struct PaddleballApp {
    session: Session,
    input: InputState,
    sound: Option<SoundManager>,
    scale: u32,
}

impl PaddleballApp {
    pub fn new(score_table: ScoreTable, scale: u32) -> Self {
        Self {
            session: Session::new(score_table),
            input: InputState::default(),
            sound: None,
            scale,
        }
    }
}

impl App for PaddleballApp {
    fn init(&mut self) {
        info!("Paddleball init");
        // Try to bring up audio for the discrete cues. If this fails, the
        // game still runs but stays silent.
        if self.sound.is_none() {
            self.sound = SoundManager::new();
        }
    }

    fn update(&mut self, elapsed_ms: u32, screen_state: &mut [u8]) {
        let ticks = (elapsed_ms >> TICK_SHIFT) as i32;
        self.session.tick(ticks, &self.input);

        let mut frame = Frame::new(
            screen_state,
            SCREEN_WIDTH as usize,
            SCREEN_HEIGHT as usize,
        );
        match self.session.phase() {
            Phase::Menu { selected } => draw_menu(&mut frame, selected),
            Phase::HighScores => draw_high_scores(&mut frame, self.session.high_scores()),
            Phase::Playing => draw_match(&mut frame, &self.session),
            Phase::Paused => {
                draw_match(&mut frame, &self.session);
                frame.draw_text_centered(SCREEN_HEIGHT * 2 / 5, 8, "PAUSED", Color::BLACK);
            }
            Phase::GameOver {
                player_won,
                new_high_score,
            } => {
                draw_match(&mut frame, &self.session);
                draw_game_over(&mut frame, player_won, new_high_score);
            }
        }

        for cue in self.session.drain_cues() {
            if let Some(sound) = &self.sound {
                sound.play(cue);
            }
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        self.input.apply(key, is_down);
        if is_down {
            if let Some(press) = press_for_key(key) {
                self.session.handle_press(press);
            }
        }
    }

    fn should_exit(&self) -> bool {
        self.session.quit_requested()
    }

    fn exit(&mut self) {
        info!("Paddleball exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        "Paddleball".to_string()
    }
}

fn draw_menu(frame: &mut Frame, selected: MenuItem) {
    frame.clear(MENU_COLOR);
    frame.draw_text_centered(120, 6, "PADDLEBALL", Color::BLACK);

    for (i, item) in MenuItem::ORDER.iter().enumerate() {
        let color = if *item == selected {
            Color::RED
        } else {
            Color::BLACK
        };
        let (scale, y) = if i == 0 {
            (5, 280)
        } else {
            (4, 300 + 60 * i as i32)
        };
        frame.draw_text_centered(y, scale, item.label(), color);
    }

    frame.draw_text_centered(700, 2, "W/S-MOVE   ENTER-SELECT", Color::BLACK);
}

fn draw_high_scores(frame: &mut Frame, scores: [u32; 3]) {
    frame.clear(MENU_COLOR);
    frame.draw_text_centered(120, 5, "HIGH SCORES", Color::BLACK);

    for (i, score) in scores.iter().enumerate() {
        let y = 300 + 80 * i as i32;
        frame.draw_text(150, y, 4, &format!("NO. {}:", i + 1), Color::BLACK);
        frame.draw_text(380, y, 4, &score.to_string(), Color::RED);
    }

    frame.draw_text_centered(700, 2, "ESC-BACK", Color::BLACK);
}

fn draw_match(frame: &mut Frame, session: &Session) {
    frame.clear(PLAYFIELD_COLOR);
    frame.fill_rect(
        Rect::new(0, 0, SCREEN_WIDTH, INFO_BAR_HEIGHT),
        INFO_BAR_COLOR,
    );

    frame.draw_text(20, 30, 2, "ESC-MENU", Color::BLACK);
    frame.draw_text(140, 30, 2, "P-PAUSE", Color::BLACK);
    let score_text = format!("SCORE:{}", session.score());
    let score_x = SCREEN_WIDTH - text_width(3, &score_text) - 10;
    frame.draw_text(score_x, 26, 3, &score_text, Color::BLACK);

    frame.fill_rect(session.player().rect(), Color::BLACK);
    frame.fill_rect(session.enemy().rect(), Color::BLACK);

    let ball = session.ball();
    let center = Point::new(ball.x() + BALL_RADIUS, ball.y() + BALL_RADIUS);
    frame.fill_circle(center, BALL_RADIUS, Color::WHITE);
}

fn draw_game_over(frame: &mut Frame, player_won: bool, new_high_score: bool) {
    let message = if player_won { "YOU WIN" } else { "YOU LOSE" };
    frame.draw_text_centered(SCREEN_HEIGHT * 2 / 5, 8, message, Color::BLACK);
    if new_high_score {
        frame.draw_text_centered(SCREEN_HEIGHT * 2 / 5 + 125, 4, "NEW HIGH SCORE!", Color::RED);
    }
    frame.draw_text_centered(540, 3, "PRESS ENTER", Color::BLACK);
}

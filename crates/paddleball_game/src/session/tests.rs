use std::fs;
use std::path::PathBuf;

use super::*;
use crate::ball::BALL_SPEED;

const IDLE: InputState = InputState {
    left: false,
    right: false,
};

fn score_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "paddleball_session_{}_{name}.txt",
        std::process::id()
    ))
}

fn session(name: &str) -> (Session, PathBuf) {
    let path = score_path(name);
    let _ = fs::remove_file(&path);
    (Session::new(ScoreTable::new(path.clone())), path)
}

fn start_match(session: &mut Session) {
    session.handle_press(Press::Confirm);
    assert!(matches!(session.phase, Phase::Playing));
    session.cues.clear();
}

/// Park the ball just above the player paddle so the next frame lands a
/// face hit. Both paddles sit at x = 150 and never move in these tests.
fn land_player_hit(session: &mut Session) {
    session.ball.set_pos(150, 729);
    session.tick(1, &IDLE);
}

/// Park the ball just below the AI paddle (the ball must already be moving
/// up, i.e. the player must have hit it) so the next frame lands a face hit.
fn land_ai_hit(session: &mut Session) {
    assert!(session.ball.vy() < 0);
    session.ball.set_pos(150, 131);
    session.tick(1, &IDLE);
}

#[test]
fn menu_cursor_wraps_both_ways() {
    let (mut session, _) = session("menu_wrap");
    assert_eq!(
        session.phase(),
        Phase::Menu {
            selected: MenuItem::Play
        }
    );
    session.handle_press(Press::MenuDown);
    assert_eq!(
        session.phase(),
        Phase::Menu {
            selected: MenuItem::HighScores
        }
    );
    session.handle_press(Press::MenuDown);
    session.handle_press(Press::MenuDown);
    assert_eq!(
        session.phase(),
        Phase::Menu {
            selected: MenuItem::Play
        }
    );
    session.handle_press(Press::MenuUp);
    assert_eq!(
        session.phase(),
        Phase::Menu {
            selected: MenuItem::Quit
        }
    );
}

#[test]
fn confirming_play_resets_match_state() {
    let (mut session, _) = session("reset");
    session.score = 7;
    session.active_side = Side::Ai;
    session.handle_press(Press::Confirm);
    assert!(matches!(session.phase, Phase::Playing));
    assert_eq!(session.score(), 0);
    assert_eq!(session.active_side(), Side::Player);
    assert_eq!((session.ball.x(), session.ball.y()), (300, 300));
    assert_eq!(session.ball.vy(), BALL_SPEED);
}

#[test]
fn quit_is_reachable_from_the_menu() {
    let (mut session, _) = session("quit_select");
    session.handle_press(Press::MenuDown);
    session.handle_press(Press::MenuDown);
    session.handle_press(Press::Confirm);
    assert!(session.quit_requested());
}

#[test]
fn back_in_the_menu_requests_quit() {
    let (mut session, _) = session("quit_back");
    session.handle_press(Press::Back);
    assert!(session.quit_requested());
}

#[test]
fn high_score_screen_returns_to_its_menu_entry() {
    let (mut session, _) = session("scores_screen");
    session.handle_press(Press::MenuDown);
    session.handle_press(Press::Confirm);
    assert_eq!(session.phase(), Phase::HighScores);
    session.handle_press(Press::Back);
    assert_eq!(
        session.phase(),
        Phase::Menu {
            selected: MenuItem::HighScores
        }
    );
}

#[test]
fn rally_scores_on_every_second_hit() {
    let (mut session, _) = session("rally");
    start_match(&mut session);

    land_player_hit(&mut session);
    assert_eq!(session.active_side(), Side::Ai);
    assert_eq!(session.score(), 0);

    land_ai_hit(&mut session);
    assert_eq!(session.active_side(), Side::Player);
    assert_eq!(session.score(), 1);

    land_player_hit(&mut session);
    assert_eq!(session.score(), 1);

    land_ai_hit(&mut session);
    assert_eq!(session.score(), 2);

    assert!(matches!(session.phase, Phase::Playing));
}

#[test]
fn ball_past_the_player_loses_the_match() {
    let (mut session, _) = session("loss");
    start_match(&mut session);
    session.ball.set_pos(300, 760);
    session.tick(10, &IDLE);
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            player_won: false,
            new_high_score: false
        }
    );
    assert!(session.drain_cues().any(|cue| cue == Cue::Goal));
}

#[test]
fn ball_past_the_ai_wins_the_match() {
    let (mut session, _) = session("win");
    start_match(&mut session);
    // The player returned the ball, so the AI side is the one on the hook.
    land_player_hit(&mut session);
    assert_eq!(session.active_side(), Side::Ai);
    session.ball.set_pos(300, 85);
    session.tick(10, &IDLE);
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            player_won: true,
            new_high_score: false
        }
    );
}

#[test]
fn final_score_is_recorded_at_match_end() {
    let (mut session, path) = session("record");
    start_match(&mut session);
    session.score = 40;
    session.ball.set_pos(300, 760);
    session.tick(10, &IDLE);
    assert_eq!(
        session.phase(),
        Phase::GameOver {
            player_won: false,
            new_high_score: true
        }
    );
    assert_eq!(session.high_scores(), [40, 0, 0]);
    assert_eq!(ScoreTable::new(path.clone()).load_top3(), [40, 0, 0]);
    let _ = fs::remove_file(path);
}

#[test]
fn aborting_a_match_records_nothing() {
    let (mut session, path) = session("abort");
    start_match(&mut session);
    session.score = 40;
    session.handle_press(Press::Back);
    assert_eq!(
        session.phase(),
        Phase::Menu {
            selected: MenuItem::Play
        }
    );
    assert!(!path.exists());
}

#[test]
fn pause_freezes_physics_and_resumes_cleanly() {
    let (mut session, _) = session("pause");
    start_match(&mut session);
    session.handle_press(Press::Pause);
    assert_eq!(session.phase(), Phase::Paused);

    let held_right = InputState {
        left: false,
        right: true,
    };
    session.tick(100, &held_right);
    assert_eq!((session.ball.x(), session.ball.y()), (300, 300));
    assert_eq!(session.player.rect().x, 150);

    session.handle_press(Press::Pause);
    assert_eq!(session.phase(), Phase::Playing);
    session.tick(1, &IDLE);
    assert_eq!((session.ball.x(), session.ball.y()), (302, 302));
}

#[test]
fn wall_bounce_emits_a_cue_but_no_transition() {
    let (mut session, _) = session("wall_cue");
    start_match(&mut session);
    session.ball.set_pos(570, 300);
    session.tick(10, &IDLE);
    let cues: Vec<Cue> = session.drain_cues().collect();
    assert_eq!(cues, vec![Cue::WallBounce]);
    assert!(matches!(session.phase, Phase::Playing));
    assert_eq!(session.active_side(), Side::Player);
}

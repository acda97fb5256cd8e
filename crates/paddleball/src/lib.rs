use std::path::PathBuf;

use anyhow::Result;

use paddleball_game::scores::ScoreTable;
use paddleball_game::{PaddleballApp, SCREEN_SCALE};
use paddleball_sdl2::{App, SdlContext, SdlInitInfo};

/// Launch options resolved from the command line.
pub struct RunOptions {
    /// Path of the persisted top-three score file.
    pub scores_path: PathBuf,
    /// Integer window scaling factor.
    pub scale: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from("high_scores.txt"),
            scale: SCREEN_SCALE,
        }
    }
}

/// Build the game app and hand it to the SDL2 frontend.
pub fn run(options: RunOptions) -> Result<()> {
    let score_table = ScoreTable::new(options.scores_path);
    let app = PaddleballApp::new(score_table, options.scale);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}

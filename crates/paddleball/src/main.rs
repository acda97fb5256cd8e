use paddleball::RunOptions;

fn main() {
    env_logger::init();

    let mut options = RunOptions::default();
    let mut args = std::env::args().skip(1);
    if let Some(path) = args.next() {
        options.scores_path = path.into();
    }
    if let Some(scale) = args.next() {
        match scale.parse() {
            Ok(scale) if scale >= 1 => options.scale = scale,
            _ => {
                eprintln!("Invalid scale '{}'. Expected a positive integer", scale);
                std::process::exit(1);
            }
        }
    }

    log::info!(
        "Scores at '{}', window scale {}",
        options.scores_path.display(),
        options.scale
    );

    paddleball::run(options).unwrap();
}

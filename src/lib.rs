pub mod cards;
pub mod draw;
pub mod state;
pub mod table;

/// stacks, bets, and the pot are all denominated in big blinds
pub type Chips = f32;

/// nominal output resolution. the working canvas is this times the
/// scale factor and gets downsampled once at the end of a render.
pub const BASE_WIDTH: u32 = 1200;
pub const BASE_HEIGHT: u32 = 800;

/// smallest and largest table sizes with tuned geometry
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 9;

/// seat geometry exists for 2..=9 players. anything else is a data
/// problem upstream, so keep rendering on the 8-handed layout.
pub fn clamp_players(n: usize) -> usize {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
        n
    } else {
        log::warn!("{:<32}{:<32}", "unsupported player count", n);
        8
    }
}

/// initialize logging to terminal and a timestamped file under logs/
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

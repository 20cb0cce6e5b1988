mod frame_input;
mod ui_render;
mod window_config;

use clap::Parser;
use delve_app::app_loop::AppState;
use delve_app::cli::Cli;
use delve_app::config_file::load_config;
use delve_app::seed::resolve_seed;
use delve_core::Game;
use macroquad::prelude::*;

use crate::window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}

async fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())
        .map_err(|error| color_eyre::eyre::eyre!(Box::<dyn std::error::Error + Send + Sync>::from(error)))?;
    let seed = resolve_seed(cli.seed, config.seed).value();

    let mut game = Game::new(config, seed)?;
    let mut app_state = AppState::new();

    loop {
        clear_background(BLACK);
        let keys_pressed = frame_input::capture_frame_input();
        app_state.tick(&mut game, &keys_pressed)?;
        ui_render::draw_frame(&game, &app_state, seed);
        if app_state.exit_requested {
            break;
        }
        next_frame().await;
    }
    Ok(())
}

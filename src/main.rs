use macroquad::prelude::*;

mod brain;
mod command;
mod config;
mod console;
mod entity;
mod error;
mod frame;
mod genome;
mod overlay;
mod physics;
mod renderer;
mod reproduction;
mod sensory;
mod session;
mod settings;
mod simulation;
mod stats;
mod ui;
mod world;

use renderer::MacroquadCanvas;
use session::Session;
use settings::Settings;
use ui::terminal::Terminal;

fn window_conf() -> Conf {
    Conf {
        window_title: "Aviary: Evolving Birds".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    pretty_env_logger::init();

    let settings = Settings::load(settings::SETTINGS_PATH).unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        Settings::default()
    });

    let mut session = match Session::new(settings.seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("could not start simulation: {e}");
            return;
        }
    };

    let mut terminal = Terminal::new(settings.scrollback);
    ui::print_help(&mut terminal, session.simulation().config());
    terminal.scroll_to_top();

    log::info!(
        "started: {} birds, {} foods",
        session.simulation().config().world_animals,
        session.simulation().config().world_foods
    );

    let panel_width = settings.terminal_width;

    loop {
        let mut canvas = MacroquadCanvas::fit(screen_width() - panel_width, screen_height());
        frame::tick(&mut session, &mut terminal, &mut canvas);
        renderer::draw_hud(session.simulation(), session.is_running());

        egui_macroquad::ui(|ctx| terminal.show(ctx, panel_width));
        egui_macroquad::draw();

        // Commands typed this frame take effect from the next one.
        while let Some(line) = terminal.next_input() {
            command::handle_input(&line, &mut session, &mut terminal);
        }

        next_frame().await;
    }
}

//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting ClickEdit demo");

    clickedit_app::App::run();
}

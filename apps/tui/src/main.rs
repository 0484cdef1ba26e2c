use clap::Parser;
use color_eyre::Result;
use tracing::{error, info};

use user_manager_tui::app::App;
use user_manager_tui::cli::CliArgs;
use user_manager_tui::config::init_app_config;
use user_manager_tui::logging::{init_logging, LogTarget};
use user_manager_tui::roster::{sample_users, UserStore};
use user_manager_tui::{event, terminal};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let mut config = init_app_config()?;
    args.apply_overrides(&mut config);

    let headless = args.headless || args.json || !is_terminal();
    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    init_logging(&config, target)?;

    let store = if config.seed_sample_user {
        UserStore::with_users(sample_users())
    } else {
        UserStore::new()
    };
    let mut app = App::new(store);

    if headless {
        return event::run_headless(&app, args.json);
    }

    info!(log_file = %config.log_file.display(), "starting user manager");

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    if let Err(e) = &result {
        error!(%e, "user manager exited with an error");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

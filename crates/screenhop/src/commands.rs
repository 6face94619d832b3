use clap::ArgMatches;
use tracing::info;

use screenhop_core::events;
use screenhop_core::platform;
use screenhop_core::{SwitchConfig, switch_ops};

/// Run one switch. Failures are logged, never returned.
pub fn run_command(matches: &ArgMatches) {
    events::log_app_startup();

    let platform = platform::native();
    let config = SwitchConfig::default();

    info!(
        event = "cli.switch_started",
        platform = platform.name(),
        verbose = matches.get_flag("verbose")
    );

    match switch_ops::run_switch(platform.as_ref(), &config) {
        Ok(outcome) => {
            info!(
                event = "cli.switch_completed",
                outcome = outcome.as_str(),
                moved_pointer = outcome.moved_pointer()
            );
        }
        Err(e) => {
            events::log_app_error(&e);
        }
    }

    events::log_app_shutdown();
}

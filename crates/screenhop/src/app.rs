use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("screenhop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Move the pointer and focus to the next display")
        .long_about(
            "screenhop moves the pointer to the center of the next display, in \
             left-to-right, top-to-bottom order, and brings the topmost application \
             window on that display to the front. Bind it to a hotkey.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "screenhop");
    }

    #[test]
    fn test_cli_no_arguments() {
        let matches = build_cli().try_get_matches_from(vec!["screenhop"]).unwrap();
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_short_and_long() {
        let matches = build_cli()
            .try_get_matches_from(vec!["screenhop", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));

        let matches = build_cli()
            .try_get_matches_from(vec!["screenhop", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let result = build_cli().try_get_matches_from(vec!["screenhop", "left"]);
        assert!(result.is_err());
    }
}

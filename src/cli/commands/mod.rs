use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgGroup, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("shipdesk")
        .about("Route protection for the shipdesk console")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("pages")
                .long("pages")
                .help("Page registry JSON file (default: built-in registry)")
                .env("SHIPDESK_PAGES")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SHIPDESK_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("routes")
                .about("Validate the page registry against the route table and print it"),
        )
        .subcommand(
            Command::new("decide")
                .about("Print the route guard decision for a navigation")
                .arg(
                    Arg::new("path")
                        .help("Requested pathname, example: /shipment/WB-42")
                        .required(true),
                )
                .arg(
                    Arg::new("route")
                        .long("route")
                        .help("Route pattern used for the registry lookup (default: the path)"),
                )
                .arg(
                    Arg::new("query")
                        .short('q')
                        .long("query")
                        .help("Query string of the request, example: tab=events&page=2")
                        .default_value(""),
                )
                .arg(
                    Arg::new("accessor")
                        .short('a')
                        .long("accessor")
                        .help("Accessor JSON file of a signed-in user, '-' reads stdin"),
                )
                .arg(
                    Arg::new("pending")
                        .long("pending")
                        .help("The identity provider has not reported yet")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("signed-out")
                        .long("signed-out")
                        .help("No session (default)")
                        .action(clap::ArgAction::SetTrue),
                )
                .group(ArgGroup::new("state").args(["accessor", "pending", "signed-out"])),
        )
        .subcommand(
            Command::new("resume")
                .about("Print where a sign-in on the given login URL navigates to")
                .arg(
                    Arg::new("url")
                        .help("Login URL, example: /login?redirect=shipments")
                        .required(true),
                ),
        )
}

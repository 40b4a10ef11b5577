use crate::CLAP_STYLING;
use clap::{arg, command};
use mindmap::handlers::DEFAULT_CONFIG_PATH;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("mindmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("mindmap")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Log request and fallback details to stderr").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Writes the default endpoint table to your filesystem")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Where to write the endpoint table")
                        .default_value(DEFAULT_CONFIG_PATH),
                )
                .arg(
                    arg!(-f --"force")
                        .help("Overwrites an existing endpoint table without asking.")
                        .required(false),
                ),
        )
        .subcommand(
            command!("endpoints")
                .about("Lists the workflow address used for each input category")
                .arg(config_arg()),
        )
        .subcommand(
            command!("classify")
                .about("Shows how an input would be classified")
                .arg(
                    arg!(<INPUT>)
                        .required(true)
                        .help("Prompt text or link. Use - to read from stdin"),
                ),
        )
        .subcommand(
            command!("generate")
                .about(
                    "Generates a mind map for a prompt or link. Falls back to a placeholder map \
                if the workflow service can't be reached.",
                )
                .arg(
                    arg!(<INPUT>)
                        .required(true)
                        .help("Prompt text or link. Use - to read from stdin"),
                )
                .arg(config_arg())
                .arg(
                    arg!(--"offline")
                        .required(false)
                        .help("Skip the workflow service and use the placeholder map"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format")
                        .value_parser(["tree", "json", "diagram"])
                        .default_value("tree"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the map to a file instead of stdout")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}

fn config_arg() -> clap::Arg {
    arg!(-c --"config" <PATH>)
        .required(false)
        .help("Endpoint table to use")
        .default_value(DEFAULT_CONFIG_PATH)
}

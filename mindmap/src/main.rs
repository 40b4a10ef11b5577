use colored::Colorize;
use commands::command_argument_builder;
use mindmap::handlers::{
    handle_classify, handle_endpoints, handle_generate, handle_init, init_logging,
};
use mindmap_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    init_logging(chosen_command.get_flag("verbose"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let result = match chosen_command.subcommand() {
        None => return,
        Some(("init", primary_command)) => handle_init(primary_command),
        Some(("endpoints", primary_command)) => handle_endpoints(primary_command),
        Some(("classify", primary_command)) => handle_classify(primary_command),
        Some(("generate", primary_command)) => handle_generate(primary_command, quiet).await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

use create_adk_agent::{
    cli::{get_log_level_from_verbose, parse_cli, run, Commands},
    error::default_error_handler,
    generator,
};

fn main() {
    let cli = parse_cli();
    let level = get_log_level_from_verbose(cli.common().verbose);
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Some(Commands::Init(args)) => generator::run(args),
        None => run(cli.args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}

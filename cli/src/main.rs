mod app;
mod config;

use clap::Parser;

fn main() {
    let cmd = match app::Command::try_parse() {
        Ok(value) => value,
        Err(err) => std::process::exit(app::handle_parse_error(err)),
    };
    cmd.set_log_level();
    std::process::exit(cmd.execute());
}

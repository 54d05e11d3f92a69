use crate::config::Config;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use moveit::{Credentials, Error, UploadError};
use std::path::PathBuf;

/// Upload a file to the home folder of a MOVEit user.
#[derive(Debug, Parser)]
#[command(about, author, version, arg_required_else_help = true)]
pub struct Command {
    /// Path to load the configuration file. Default to ~/.config/moveit.json. If not found, loading from environment.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Base url of the MOVEit server, takes precedence over the configuration file.
    #[arg(long)]
    base_url: Option<String>,
    #[arg(short, long)]
    verbose: bool,
    username: String,
    password: String,
    /// Local file to upload
    file: PathBuf,
    /// Anything after the file is accepted and ignored.
    #[arg(hide = true)]
    ignored: Vec<String>,
}

/// Turns a parsing failure into an exit code, printing the usage when nothing was provided.
pub fn handle_parse_error(err: clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            println!("{}", Command::command().render_help());
            exitcode::OK
        }
        ErrorKind::MissingRequiredArgument => {
            eprintln!("too few arguments");
            eprintln!("{}", Command::command().render_usage());
            exitcode::USAGE
        }
        _ => err.exit(),
    }
}

fn print_error(err: &dyn std::error::Error) {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    eprintln!("{message}");
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Upload(UploadError::Open { .. }) => exitcode::NOINPUT,
        _ if err.is_unauthorized() => exitcode::NOPERM,
        _ => exitcode::UNAVAILABLE,
    }
}

impl Command {
    pub fn config(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("moveit.json")
        } else {
            PathBuf::from(".moveit.json")
        }
    }

    fn load_config(&self) -> Result<Config, String> {
        let path = self.config();
        if self.config.is_none() && !path.exists() {
            tracing::debug!("no configuration found at {path:?}, using defaults");
            return Ok(Config::default());
        }
        Config::from_path(&path).map_err(|err| format!("unable to load {path:?}: {err}"))
    }

    pub fn set_log_level(&self) {
        if self.verbose {
            let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
            if let Err(err) = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
            {
                eprintln!("couldn't init logger: {err}");
            }
        }
    }

    /// Runs the whole upload and returns the exit code.
    #[tracing::instrument(skip_all)]
    pub fn execute(self) -> i32 {
        if !self.ignored.is_empty() {
            tracing::warn!("ignoring {} extra arguments", self.ignored.len());
        }
        if !self.file.is_file() {
            eprintln!("file not found: {}", self.file.display());
            return exitcode::NOINPUT;
        }

        let config = match self.load_config() {
            Ok(value) => value,
            Err(err) => {
                eprintln!("{err}");
                return exitcode::CONFIG;
            }
        };
        let client = match config.build(self.base_url) {
            Ok(value) => value,
            Err(err) => {
                print_error(&err);
                return exitcode::CONFIG;
            }
        };

        let credentials = Credentials::new(self.username, self.password);
        let session = match client.open_session(&credentials) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("unable to open session: {err:?}");
                print_error(&err);
                return exit_code(&err);
            }
        };

        println!("Uploading {}...", self.file.display());
        match session.upload(&self.file) {
            Ok(_) => {
                println!("Finished uploading.");
                exitcode::OK
            }
            Err(err) => {
                tracing::error!("unable to upload file: {err:?}");
                print_error(&err);
                exit_code(&err)
            }
        }
    }
}

use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{
    RenderOptions,
    chat::{
        ChatSurface, MemorySessionStore, MemoryTranscript, SessionIdProvider, SessionStore,
        StoredSessionProvider, TranscriptEntry, TranscriptSink,
    },
    render_with,
};
use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "\
Usage: chatmark [OPTIONS] [FILE]

Renders chat Markdown from FILE (or stdin when FILE is absent or '-') as HTML.

Options:
  --config PATH     read configuration from PATH
  --escape-text     HTML-escape ordinary text as well as code
  --answer          treat input as the answer endpoint's JSON payload
  --query TEXT      print the JSON request body for TEXT
  --session ID      session id to use when none is stored yet
  -h, --help        print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Render,
    Answer,
    Query(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    escape_text: bool,
    mode: Mode,
    session: Option<String>,
    input: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut parsed = Args {
        config: None,
        escape_text: false,
        mode: Mode::Render,
        session: None,
        input: None,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--escape-text" => parsed.escape_text = true,
            "--answer" => parsed.mode = Mode::Answer,
            "--query" => {
                let text = args.next().context("--query requires text")?;
                parsed.mode = Mode::Query(text);
            }
            "--session" => {
                parsed.session = Some(args.next().context("--session requires an id")?);
            }
            "-" => parsed.input = None,
            flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
            path => {
                if parsed.input.is_some() {
                    bail!("only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Run(parsed))
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn render_options(config: &Config, args: &Args) -> RenderOptions {
    RenderOptions {
        escape_plain_text: args.escape_text || config.render.escape_plain_text,
    }
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Prints each transcript entry on stdout as it arrives.
struct StdoutTranscript;

impl TranscriptSink for StdoutTranscript {
    fn append(&mut self, entry: TranscriptEntry) {
        println!("{}", entry.html);
    }
}

/// Keeps the session id in a plain file between runs.
struct FileSessionStore {
    path: PathBuf,
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<String> {
        let id = fs::read_to_string(&self.path).ok()?;
        let id = id.trim();
        (!id.is_empty()).then(|| id.to_string())
    }

    fn store(&mut self, id: &str) {
        let written = self
            .path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| fs::write(&self.path, id));
        if let Err(e) = written {
            log::warn!("Failed to save session id to {}: {e}", self.path.display());
        }
    }
}

fn answer<P: SessionIdProvider>(
    surface: &mut ChatSurface<P, StdoutTranscript>,
    args: &Args,
) -> Result<()> {
    match read_input(args.input.as_ref()) {
        Ok(body) => surface
            .receive_answer(&body)
            .context("answer payload was not valid JSON"),
        Err(e) => {
            surface.receive_failure(e);
            Ok(())
        }
    }
}

fn query<P: SessionIdProvider>(sessions: P, text: &str) -> Result<()> {
    let mut surface = ChatSurface::new(sessions, MemoryTranscript::default());
    match surface.submit_user_message(text) {
        Some(message) => {
            println!("{}", serde_json::to_string(&message)?);
            Ok(())
        }
        None => bail!("refusing to send an empty message"),
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let options = render_options(&config, &args);

    match &args.mode {
        Mode::Render => {
            let input = read_input(args.input.as_ref()).context("failed to read input")?;
            let html = render_with(&input, &options);
            if !html.is_empty() {
                println!("{html}");
            }
            Ok(())
        }
        Mode::Answer => {
            let sessions = StoredSessionProvider::new(MemorySessionStore::default());
            let mut surface =
                ChatSurface::new(sessions, StdoutTranscript).with_render_options(options);
            if let Some(fallback) = &config.chat.fallback_message {
                surface = surface.with_fallback(fallback.clone());
            }
            answer(&mut surface, &args)
        }
        Mode::Query(text) => match &config.chat.session_file {
            Some(path) => {
                let store = FileSessionStore { path: path.clone() };
                query(with_session(StoredSessionProvider::new(store), &args), text)
            }
            None => {
                let store = MemorySessionStore::default();
                query(with_session(StoredSessionProvider::new(store), &args), text)
            }
        },
    }
}

fn with_session<S: SessionStore>(
    provider: StoredSessionProvider<S>,
    args: &Args,
) -> StoredSessionProvider<S> {
    match &args.session {
        Some(id) => provider.with_link_session(id.clone()),
        None => provider,
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Run(args) => {
            if let Err(e) = run(args) {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn run_args(args: &[&str]) -> Args {
        match parse(args).unwrap() {
            Command::Run(args) => args,
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn no_args_renders_stdin() {
        let args = run_args(&[]);
        assert_eq!(args.mode, Mode::Render);
        assert_eq!(args.input, None);
        assert!(!args.escape_text);
    }

    #[test]
    fn all_flags() {
        let args = run_args(&[
            "--config",
            "/tmp/c.toml",
            "--escape-text",
            "--answer",
            "--session",
            "abc",
            "reply.json",
        ]);
        assert_eq!(
            args,
            Args {
                config: Some(PathBuf::from("/tmp/c.toml")),
                escape_text: true,
                mode: Mode::Answer,
                session: Some("abc".to_string()),
                input: Some(PathBuf::from("reply.json")),
            }
        );
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(run_args(&["-"]).input, None);
    }

    #[test]
    fn query_takes_text() {
        assert_eq!(
            run_args(&["--query", "hello there"]).mode,
            Mode::Query("hello there".to_string())
        );
    }

    #[test]
    fn help_flag() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["a.md", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn argument_errors() {
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--query"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["a.md", "b.md"]).is_err());
    }

    #[test]
    fn escape_flag_overrides_config() {
        let config = Config::default();
        assert!(render_options(&config, &run_args(&["--escape-text"])).escape_plain_text);
        assert!(!render_options(&config, &run_args(&[])).escape_plain_text);

        let mut config = Config::default();
        config.render.escape_plain_text = true;
        assert!(render_options(&config, &run_args(&[])).escape_plain_text);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn file_session_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileSessionStore {
            path: temp_dir.path().join("state").join("session"),
        };
        assert_eq!(store.load(), None);

        store.store("abc-123");
        assert_eq!(store.load().as_deref(), Some("abc-123"));
    }

    #[test]
    fn file_session_is_reused() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session");

        let first =
            StoredSessionProvider::new(FileSessionStore { path: path.clone() }).session_id();
        let second = StoredSessionProvider::new(FileSessionStore { path }).session_id();
        assert_eq!(first, second);
    }
}

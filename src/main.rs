use std::io;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use fortune_news::app::App;
use fortune_news::config::ApiConfig;
use fortune_news::locale::Locale;
use fortune_news::routes::{resolve_to_route, Route};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: fortune-news [OPTIONS] [PATH]

A trilingual terminal reader for the FortuneNews backend.

Arguments:
  [PATH]                 Deep link, e.g. /ko/news/42 or /news/42

Options:
      --api-url <URL>    API base URL (env: FORTUNE_NEWS_API_URL)
      --locale <TAG>     Display locale: en, zh-CN, ko (env: FORTUNE_NEWS_LOCALE)
      --version          Print version
      --help             Print this help
";

struct CliArgs {
    config: ApiConfig,
    path: Option<String>,
}

fn parse_args() -> Result<Option<CliArgs>> {
    let mut config = ApiConfig::from_env();
    let mut path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("fortune-news {}", VERSION);
                return Ok(None);
            }
            "--help" | "-h" => {
                print!("{}", USAGE);
                return Ok(None);
            }
            "--api-url" => {
                let url = args
                    .next()
                    .ok_or_else(|| eyre!("--api-url requires a value"))?;
                config = config.with_base_url(url);
            }
            "--locale" => {
                let tag = args
                    .next()
                    .ok_or_else(|| eyre!("--locale requires a value"))?;
                let locale = Locale::parse(&tag)
                    .ok_or_else(|| eyre!("unrecognized locale '{}' (en, zh-CN, ko)", tag))?;
                config = config.with_locale(locale);
            }
            other if other.starts_with('-') => {
                return Err(eyre!("unrecognized option '{}'\n\n{}", other, USAGE));
            }
            other => path = Some(other.to_string()),
        }
    }

    Ok(Some(CliArgs { config, path }))
}

/// Log to the file named by `FORTUNE_NEWS_LOG`, if set. Logging to stderr
/// would corrupt the alternate screen, so without the variable logs are
/// dropped.
fn init_tracing() -> Result<()> {
    let Ok(log_path) = std::env::var("FORTUNE_NEWS_LOG") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fortune_news=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal even when rendering panics, so the shell stays
/// usable.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let Some(args) = parse_args()? else {
        return Ok(());
    };
    init_tracing()?;

    let mut app = App::new(&args.config);
    if let Some(path) = &args.path {
        let resolved = resolve_to_route(path);
        app.locale = resolved.locale;
        if let Route::Detail(id) = resolved.route {
            app.open_article(id);
        }
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal).await;
    restore_terminal(&mut terminal)?;
    result
}

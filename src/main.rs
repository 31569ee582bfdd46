use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use labelx::app::App;
use labelx::build_info;
use labelx::cli::{self, Command};
use labelx::config::AppConfig;
use labelx::core::FRAME_POLL_MS;
use labelx::error::AppError;
use labelx::logging;
use labelx::motion::ScrollPhysics;
use labelx::ui;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<(), AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match cli::parse(&args) {
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Ok(Command::Run(options)) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Run 'labelx --help' for usage.");
            std::process::exit(1);
        }
    };

    let mut config = AppConfig::load()?;
    options.apply(&mut config);
    if options.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    // The UI owns the terminal, so a logging failure is only worth a warning.
    if let Err(err) = logging::init(&config.log_level) {
        eprintln!("warning: logging disabled: {err}");
    }
    tracing::info!(
        show_loader = config.show_loader,
        seed = ?config.seed,
        "starting {}",
        build_info::version_line()
    );

    let physics = ScrollPhysics::install(config.scroll_config())?;
    let mut app = App::new(config, physics)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting on error");
    } else {
        tracing::info!("exiting");
    }
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), AppError> {
    let mut last_frame = Instant::now();
    loop {
        let size = terminal.size()?;
        app.resize(size.width, size.height);
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code)?;
                }
            }
        }
        if app.should_quit() {
            return Ok(());
        }

        let now = Instant::now();
        app.advance(now - last_frame)?;
        last_frame = now;
    }
}

use calendar_summary::{
    app::App,
    calendar,
    cli::Cli,
    components,
    config::Config,
    event::EventHandler,
    logging, tui,
};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).wrap_err("loading configuration")?;
    config.apply_cli(&cli);
    config.validate()?;

    let log_path = logging::init(config.log_file.as_deref())?;
    info!(
        config = ?config.origin,
        log = %log_path.display(),
        source = ?config.source,
        "starting calendar-summary"
    );

    let source = calendar::source_from_config(&config).wrap_err("setting up event source")?;

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let mut app = App::new(source, events.sender())
        .with_theme(config.theme.to_theme())
        .with_empty_day(config.empty_day)
        .with_today(cli.today);
    app.start_fetch();

    let result = run(&mut terminal, &mut app, &mut events).await;
    tui::restore()?;
    info!("calendar-summary exited");
    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while app.running {
        terminal.draw(|frame| components::draw(frame, app))?;

        app.dispatch(events.next().await?)?;
    }

    Ok(())
}

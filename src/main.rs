use panelkit::config::ControllerConfig;
use panelkit::controller::Controller;
use panelkit::input::{translate_key, translate_mouse, Command};
use panelkit::terminal::{setup_panic_hook, TerminalManager};
use panelkit::ui::{self, menu_area, menu_trigger_area, screen_areas, HostView, MENU_ID};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::Rect;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("panelkit {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = ControllerConfig::from_env()?;
    let log_path = panelkit::logging::init(&config.log_filter);

    setup_panic_hook();

    // Every intent and timer callback runs on this one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tracing::info!(version = VERSION, log = ?log_path, "panelkit starting");
    let result = runtime.block_on(run(config));
    tracing::info!("panelkit stopped");
    result
}

async fn run(config: ControllerConfig) -> Result<()> {
    let mut controller = Controller::new(config)?;
    let mut term_manager = TerminalManager::new()?;
    let mut events = EventStream::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let snapshot = controller.snapshot();
            let panels = &controller.config().panels;
            term_manager.terminal().draw(|frame| {
                ui::render(frame, &HostView::new(&snapshot, panels));
            })?;
            needs_redraw = false;
        }

        tokio::select! {
            changed = controller.expire_next() => {
                needs_redraw |= !changed.is_empty();
            }

            event = events.next() => {
                let Some(event) = event else {
                    break;
                };
                let command = match event? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
                    Event::Mouse(mouse) => {
                        let menu_open = controller.store().is_open(MENU_ID).unwrap_or(false);
                        let size = term_manager.terminal().size()?;
                        let (header, body, _) = screen_areas(Rect::new(0, 0, size.width, size.height));
                        translate_mouse(
                            mouse,
                            menu_trigger_area(header),
                            menu_open.then(|| menu_area(body)),
                        )
                    }
                    Event::Resize(width, height) => {
                        tracing::debug!(width, height, "terminal resized");
                        needs_redraw = true;
                        None
                    }
                    _ => None,
                };

                match command {
                    Some(Command::Quit) => break,
                    Some(Command::Dispatch(intent)) => {
                        needs_redraw |= !controller.apply_or_notify(intent).is_empty();
                    }
                    None => {}
                }
            }
        }
    }

    term_manager.restore();
    Ok(())
}

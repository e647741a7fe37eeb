use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    io,
    path::PathBuf,
    sync::atomic::Ordering,
    time::Duration,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Meme template gallery
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/memegallery-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, /)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Browse images in a local directory instead of fetching the manifest
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,
}

mod app;
mod handlers;
mod ui;

use memegallery::{api, config, log_debug, logic, model, selection, services, utils, DEBUG_MODE};

use api::TemplateClient;
use config::Config;
use services::loader::{CatalogLoaded, CatalogOrigin};
use services::preview::{ImageFetcher, ImagePreviewState, PreviewUpdate};

/// Messages posted by the selection handoff callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffMessage {
    TemplateSelected(String),
    BackToHome,
}

pub struct App {
    pub model: model::Model,

    origin: CatalogOrigin,
    loader_tx: mpsc::UnboundedSender<CatalogLoaded>,
    loader_rx: mpsc::UnboundedReceiver<CatalogLoaded>,
    /// The one in-flight load of the current activation
    loader_task: Option<JoinHandle<()>>,

    handoff: selection::SelectionHandoff,
    handoff_rx: mpsc::UnboundedReceiver<HandoffMessage>,

    image_fetcher: ImageFetcher,
    image_picker: Option<ratatui_image::picker::Picker>,
    preview_tx: mpsc::UnboundedSender<PreviewUpdate>,
    preview_rx: mpsc::UnboundedReceiver<PreviewUpdate>,

    /// Preview states by template id (not Clone, so kept out of the Model)
    image_state_map: HashMap<u32, ImagePreviewState>,
}

impl App {
    fn new(config: Config, dir: Option<PathBuf>) -> Result<Self> {
        let client = TemplateClient::new(
            config.base_url.clone(),
            config.manifest_path.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;

        // In directory mode, root-relative previews come from that directory
        let public_dir = dir.clone().or(config.public_dir.clone());
        let origin = match dir {
            Some(path) => CatalogOrigin::Directory(path),
            None => CatalogOrigin::Remote(client.clone()),
        };
        log_debug(&format!("Catalog origin: {:?}", origin));

        let (loader_tx, loader_rx) = mpsc::unbounded_channel();
        let (preview_tx, preview_rx) = mpsc::unbounded_channel();

        let (handoff_tx, handoff_rx) = mpsc::unbounded_channel();
        let select_tx = handoff_tx.clone();
        let handoff = selection::SelectionHandoff::new(
            move |url| {
                let _ = select_tx.send(HandoffMessage::TemplateSelected(url.to_string()));
            },
            move || {
                let _ = handoff_tx.send(HandoffMessage::BackToHome);
            },
        );

        let image_picker = if config.image_preview_enabled {
            Some(create_picker(&config.image_protocol))
        } else {
            log_debug("Image preview disabled in config");
            None
        };

        Ok(App {
            model: model::Model::new(config.vim_mode, config.page_size),
            origin,
            loader_tx,
            loader_rx,
            loader_task: None,
            handoff,
            handoff_rx,
            image_fetcher: ImageFetcher::new(client, public_dir),
            image_picker,
            preview_tx,
            preview_rx,
            image_state_map: HashMap::new(),
        })
    }
}

fn create_picker(protocol: &str) -> ratatui_image::picker::Picker {
    use ratatui_image::picker::{Picker, ProtocolType};

    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            log_debug(&format!("Image preview: Failed to detect terminal: {}", e));
            Picker::from_fontsize((8, 16))
        }
    };

    match protocol.to_lowercase().as_str() {
        "auto" => log_debug("Image preview: Auto-detected protocol"),
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => log_debug(&format!(
            "Image preview: Unknown protocol '{}', using auto-detect",
            unknown
        )),
    }

    picker
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = match config::find_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::load(&path)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    if args.vim {
        config.vim_mode = true;
    }

    // Setup terminal (before App::new so the picker can query it)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match App::new(config, args.dir) {
        Ok(mut app) => run_app(&mut terminal, &mut app)
            .await
            .map(|_| app.model.ui.chosen_template_url.clone()),
        Err(e) => Err(e),
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Hand the chosen template to whatever launched us
    if let Some(url) = result? {
        println!("{}", url);
    }
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            app.unmount_gallery();
            break;
        }

        // Process background results (non-blocking)
        while let Ok(loaded) = app.loader_rx.try_recv() {
            handlers::loader::handle_catalog_loaded(app, loaded);
        }

        while let Ok(update) = app.preview_rx.try_recv() {
            handlers::preview::handle_preview_update(app, update);
        }

        while let Ok(message) = app.handoff_rx.try_recv() {
            handlers::handoff::handle_handoff(app, message);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key);
            }
        }
    }

    Ok(())
}

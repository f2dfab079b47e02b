use anyhow::{Context, Result};
use clap::Parser;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use circle_widget::config::AppConfig;
use circle_widget::ui::MainWindow;
use circle_widget::{CircleBackground, CircleConfig};

const APP_ID: &str = "org.circle_widget.CircleWidget";

/// circle-widget - A circular control with a ring or HSV color wheel
#[derive(Parser, Debug, Clone)]
#[command(name = "circle-widget")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Circle diameter in pixels (32-1024)
    #[arg(short = 's', long = "size", value_name = "PIXELS")]
    size: Option<i32>,

    /// Extra space around the circle in pixels (0-64)
    #[arg(long = "border-width", value_name = "PIXELS")]
    border_width: Option<i32>,

    /// Background style: plain or hsv
    #[arg(long = "background", value_name = "STYLE")]
    background: Option<CircleBackground>,

    /// Render the circle to a PNG file and exit
    #[arg(short = 'e', long = "export", value_name = "PATH")]
    export: Option<PathBuf>,

    /// Config file to load instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

impl Cli {
    /// Apply command line overrides on top of the loaded circle settings
    fn circle_config(&self, base: CircleConfig) -> CircleConfig {
        CircleConfig::new(
            self.size.unwrap_or(base.size()),
            self.border_width.unwrap_or(base.border_width()),
            self.background.unwrap_or(base.background()),
        )
    }
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting circle-widget v{}", env!("CARGO_PKG_VERSION"));

    let app_config = load_config(&cli);
    let circle_config = cli.circle_config(app_config.circle);

    if let Some(ref path) = cli.export {
        if let Err(e) = export_png(circle_config, path) {
            error!("{:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let app = Application::builder().application_id(APP_ID).build();

    let window_config = app_config.window.clone();
    app.connect_activate(move |app| {
        let main_window = MainWindow::new(circle_config);

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Circle")
            .default_width(window_config.width)
            .default_height(window_config.height)
            .child(&main_window.widget())
            .build();

        window.present();
    });

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["circle-widget"]);
}

/// Load configuration - from the given file if specified, otherwise from
/// the default location
fn load_config(cli: &Cli) -> AppConfig {
    if let Some(ref path) = cli.config {
        match AppConfig::load_from_path(path) {
            Ok(config) => {
                info!("Loaded config from: {}", path.display());
                return config;
            }
            Err(e) => warn!("Failed to load config file '{}': {:#}", path.display(), e),
        }
    }

    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }
    }
}

fn export_png(config: CircleConfig, path: &Path) -> Result<()> {
    let surface = circle_widget_render::render_to_surface(config.size(), config.background())
        .context("Failed to render circle")?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    info!(
        "Exported {}px {} circle to {}",
        config.size(),
        config.background(),
        path.display()
    );
    Ok(())
}

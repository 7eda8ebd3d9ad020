use std::path::PathBuf;

use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;

use physics_lab::{LabConfig, PhysicsLabPlugin};

const BASE_CONFIG: &str = "assets/config/lab.ron";
const LOCAL_CONFIG: &str = "assets/config/lab.local.ron";

#[derive(Parser, Debug)]
#[command(name = "physics_lab", version, about = "Interactive 2D physics playground")]
struct Cli {
    /// Extra RON layers merged over the base config, in order
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<PathBuf>,
    /// Initial window width (overrides the config)
    #[arg(long, value_name = "PX")]
    width: Option<f32>,
    /// Start with an empty window; nothing is mounted
    #[arg(long)]
    no_mount: bool,
}

fn load_config(cli: &Cli) -> LabConfig {
    let mut layers = vec![PathBuf::from(BASE_CONFIG)];
    if std::path::Path::new(LOCAL_CONFIG).exists() {
        layers.push(PathBuf::from(LOCAL_CONFIG));
    }
    layers.extend(cli.configs.iter().cloned());
    let (mut cfg, used, errors) = LabConfig::load_layered(&layers);
    // Bevy's logger is not up yet.
    for e in &errors {
        eprintln!("config: {e}");
    }
    if used.is_empty() {
        eprintln!("config: no layer loaded, using built-in defaults");
    } else {
        println!("config layers: {}", used.join(", "));
    }
    if let Some(width) = cli.width {
        cfg.window.width = width;
    }
    if cli.no_mount {
        cfg.auto_mount = false;
    }
    cfg
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // On wasm there are no files to read; every layer fails and the defaults apply.
    let cfg = load_config(&Cli::parse());

    for w in cfg.validate() {
        eprintln!("config warning: {w}");
    }
    if cfg.window.width <= 0.0 || cfg.window.height <= 0.0 {
        anyhow::bail!(
            "window size {}x{} is not usable",
            cfg.window.width,
            cfg.window.height
        );
    }

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: cfg.window.resizable,
                #[cfg(target_arch = "wasm32")]
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .add_plugins(PhysicsLabPlugin)
        .run();
    if let AppExit::Error(code) = exit {
        anyhow::bail!("app exited with code {code}");
    }
    Ok(())
}

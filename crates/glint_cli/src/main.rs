use std::path::PathBuf;

use anyhow::{Context, Result};
use argh::FromArgs;
use glint_core::{load_scene, Scene};
use glint_renderer::{render, save, Camera, RenderConfig, DEFAULT_MAX_DEPTH};

/// Render spheres with a recursive Whitted-style ray tracer
#[derive(FromArgs, Debug)]
struct Options {
    /// path to a JSON scene file (defaults to the built-in three sphere scene)
    #[argh(option, short = 's')]
    scene: Option<PathBuf>,

    /// width of the output image
    #[argh(option, default = "800")]
    width: u32,

    /// height of the output image
    #[argh(option, default = "600")]
    height: u32,

    /// path to which the output should be written (.ppm or .png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"output.ppm\")")]
    output: PathBuf,

    /// number of reflection/refraction bounces
    #[argh(option, default = "DEFAULT_MAX_DEPTH")]
    max_depth: u32,
}

/// Build the scene, camera and render settings from the command line.
fn setup(options: &Options) -> Result<(Scene, Camera, RenderConfig)> {
    let mut camera = Camera::new(options.width, options.height);
    let mut config = RenderConfig::default().with_max_depth(options.max_depth);

    let scene = match &options.scene {
        Some(path) => {
            let description = load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let scene = description
                .build()
                .with_context(|| format!("Invalid scene {}", path.display()))?;

            if let Some(light) = description.light() {
                config = config.with_light(light);
            }
            if let Some(background) = description.background() {
                config = config.with_background(background);
            }
            if let Some(eye) = description.eye() {
                camera = camera.with_eye(eye);
            }

            log::info!("Loaded {} spheres from {}", scene.len(), path.display());
            scene
        }
        None => {
            log::info!("No scene file given, using the three sphere scene");
            Scene::three_spheres()
        }
    };

    Ok((scene, camera, config))
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options: Options = argh::from_env();
    log::debug!("{:?}", options);

    let (scene, camera, config) = setup(&options)?;

    let image = render(&scene, &camera, &config).context("Render failed")?;
    save(&image, &options.output)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    Ok(())
}

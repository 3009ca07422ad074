use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sceneport_core::{
    DataFolderEngine, Engine, ExportConfig, ExportJob, SceneAsset, SceneNode,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

mod ui;

use ui::{error, info, spinner, step, success, warning};

/// Sceneport CLI - Export editor scenes to engine-native markup
#[derive(Parser)]
#[command(
    name = "sceneport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Exports editor scene graphs to an engine-native scene/prefab format",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export scene descriptions to a destination data folder
    Export {
        /// Scene description files (JSON)
        #[arg(required = true)]
        scenes: Vec<PathBuf>,

        /// Destination data folder
        #[arg(short, long)]
        output: PathBuf,

        /// Skip documents that are newer than their source
        #[arg(long)]
        updated_only: bool,

        /// Only export scenes whose source path appears in --select
        #[arg(long)]
        selected_only: bool,

        /// Source path to include when --selected-only is set (repeatable)
        #[arg(long = "select", value_name = "SOURCE_PATH")]
        selection: Vec<String>,

        /// Export each scene as a freestanding prefab instead of a scene
        #[arg(long)]
        as_prefab: bool,

        /// Skip disabled objects and their entire subtrees
        #[arg(long)]
        skip_disabled: bool,

        /// Emit reflection probes as bounded zones
        #[arg(long)]
        reflection_probes: bool,

        /// Skybox material to cubemap mapping, MATERIAL=CUBEMAP (repeatable)
        #[arg(long = "skybox-cubemap", value_name = "MATERIAL=CUBEMAP")]
        skybox_cubemaps: Vec<String>,
    },

    /// Summarize a scene description without exporting it
    Inspect {
        /// Scene description file (JSON)
        scene: PathBuf,

        /// Show per-root subtree breakdown
        #[arg(long)]
        detailed: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(!cli.no_color);
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Export {
            scenes,
            output,
            updated_only,
            selected_only,
            selection,
            as_prefab,
            skip_disabled,
            reflection_probes,
            skybox_cubemaps,
        } => {
            let config = ExportConfig {
                export_folder: output.clone(),
                updated_only: *updated_only,
                selected_only: *selected_only,
                scene_as_prefab: *as_prefab,
                skip_disabled: *skip_disabled,
                export_reflection_probes: *reflection_probes,
            };
            run_export(scenes, &config, selection, skybox_cubemaps)
        }
        Commands::Inspect { scene, detailed } => inspect_scene(scene, *detailed),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sceneport_core={},sceneport_cli={}",
            level, level
        ))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn run_export(
    scene_files: &[PathBuf],
    config: &ExportConfig,
    selection: &[String],
    skybox_cubemaps: &[String],
) -> Result<()> {
    let assets = scene_files
        .iter()
        .map(|path| load_scene(path))
        .collect::<Result<Vec<_>>>()?;

    info(&format!(
        "Exporting {} scene(s) to {}",
        assets.len(),
        config.export_folder.display()
    ));

    let mut engine = DataFolderEngine::new(&config.export_folder, config.updated_only);
    for mapping in skybox_cubemaps {
        let (material, cubemap) = mapping
            .split_once('=')
            .with_context(|| format!("Invalid skybox cubemap mapping '{}'", mapping))?;
        engine.register_skybox_cubemap(material, cubemap);
    }

    let mut job = ExportJob::new(&mut engine, config, assets);
    if config.selected_only {
        if selection.is_empty() {
            warning("--selected-only set without --select; nothing will be exported");
        }
        let selection: HashSet<String> = selection.iter().cloned().collect();
        job = job.with_selection(selection);
    }

    let started = Instant::now();
    let completed = drive_job(job)?;

    success(&format!(
        "Exported {} scene(s) in {}",
        completed,
        ui::format_duration(started.elapsed().as_millis() as u64)
    ));
    Ok(())
}

/// Drain the export job in bounded time slices
///
/// Mirrors the host editor's cooperative loop: advance the job for up to
/// 16ms, refresh the spinner, repeat. An error report halts the job.
fn drive_job<E: Engine>(mut job: ExportJob<'_, E>) -> Result<usize> {
    const TIME_SLICE: Duration = Duration::from_millis(16);

    let bar = spinner();
    let mut completed = 0;
    loop {
        let slice_start = Instant::now();
        while slice_start.elapsed() < TIME_SLICE {
            match job.next() {
                Some(Ok(report)) => {
                    bar.set_message(report.message.clone());
                    completed += 1;
                }
                Some(Err(err)) => {
                    bar.finish_and_clear();
                    error(&format!("Export failed: {}", err));
                    return Err(err.into());
                }
                None => {
                    bar.finish_and_clear();
                    return Ok(completed);
                }
            }
        }
        bar.tick();
    }
}

fn load_scene(path: &Path) -> Result<SceneAsset> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse scene description {}", path.display()))
}

fn inspect_scene(path: &Path, detailed: bool) -> Result<()> {
    let scene = load_scene(path)?;

    println!("Scene: {}", scene.name);
    println!("  Source path: {}", scene.source_path);
    println!("  Root objects: {}", scene.roots.len());
    println!("  Total objects: {}", count_nodes(&scene.roots));
    println!("  Components: {}", count_components(&scene.roots));
    match &scene.render_settings.skybox_material {
        Some(material) => println!("  Skybox material: {}", material),
        None => println!("  Skybox material: (none)"),
    }

    if detailed {
        println!();
        for (index, root) in scene.roots.iter().enumerate() {
            step(
                index + 1,
                scene.roots.len(),
                &format!(
                    "{} ({} object(s), {} component(s)){}",
                    root.name,
                    root.subtree_len(),
                    count_components(std::slice::from_ref(root)),
                    if root.enabled { "" } else { " [disabled]" }
                ),
            );
        }
    }

    Ok(())
}

fn count_nodes(nodes: &[SceneNode]) -> usize {
    nodes.iter().map(SceneNode::subtree_len).sum()
}

fn count_components(nodes: &[SceneNode]) -> usize {
    nodes
        .iter()
        .map(|node| node.components.len() + count_components(&node.children))
        .sum()
}

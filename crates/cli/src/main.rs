use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, bail};
use arnold::{
    LogBridge, LogFlags, LoaderConfig, NodeEntry, NodeMask, NodeType, ParamEntry, RenderMode, RenderSession,
    RenderStatus, RenderUpdateType, SceneFormat, Session, SessionMode, UpdateInfo, Universe,
};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(name = "arnold-cli", about = "Inspect and render scenes with the Arnold renderer")]
struct CommandLineArguments {
    #[arg(long, global = true, help = "Load the Arnold library from this file instead of searching for it")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    #[command(about = "Print the version of the loaded library")]
    Version,
    #[command(about = "List installed node entries")]
    Entries {
        #[arg(long = "type", value_name = "KIND", help = "Only list entries of this kind (e.g. shader, light)")]
        kind: Option<String>,
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(about = "List the parameters of a node entry")]
    Params {
        #[arg(help = "Node entry name (e.g. standard_surface)")]
        entry: String,
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(about = "List supported scene formats")]
    Formats {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(about = "Render a scene file")]
    Render {
        #[arg(help = "Scene to load (.ass, .usd, ...)")]
        scene: PathBuf,
        #[arg(
            short = 't',
            long,
            allow_negative_numbers = true,
            help = "Render threads, 0 or negative counts are relative to the core count"
        )]
        threads: Option<i32>,
        #[arg(long, help = "Camera (AA) samples")]
        aa: Option<i32>,
        #[arg(short, long, help = "Render progressively and report every pass")]
        interactive: bool,
        #[arg(
            long,
            value_parser = parse_log_flags,
            default_value = "warnings,errors",
            help = "Renderer messages to show: all, none or a comma-separated list (e.g. info,warnings,stats)"
        )]
        log: LogFlags,
    },
}

fn parse_log_flags(s: &str) -> Result<LogFlags, String> {
    let mut flags = LogFlags::empty();
    for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        match name.to_ascii_lowercase().as_str() {
            "none" => {}
            "all" => flags |= LogFlags::ALL,
            other => {
                flags |= LogFlags::from_name(&other.to_ascii_uppercase())
                    .ok_or_else(|| format!("unknown log category {name:?}"))?;
            }
        }
    }
    Ok(flags)
}

#[derive(Debug, Serialize)]
struct EntryRow {
    name: String,
    #[serde(rename = "type")]
    node_type: Option<String>,
    derived_type: Option<String>,
    filename: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct ParamRow {
    name: String,
    #[serde(rename = "type")]
    param_type: String,
    default: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    enum_values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FormatRow {
    name: String,
    description: Option<String>,
    extensions: Vec<String>,
    read: bool,
    write: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli_args = CommandLineArguments::parse();

    let mut config = LoaderConfig::from_env();
    if let Some(library) = &cli_args.library {
        config = config.with_explicit_path(library);
    }
    arnold::init_with(&config).context("failed to load the Arnold library")?;

    match cli_args.command {
        Command::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
        Command::Entries { kind, json } => {
            list_entries(kind.as_deref(), json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Params { entry, json } => {
            list_params(&entry, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Formats { json } => {
            list_formats(json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Render {
            scene,
            threads,
            aa,
            interactive,
            log,
        } => render(&scene, threads, aa, interactive, log),
    }
}

fn print_version() {
    println!("Arnold {}", arnold::version::version_string());
    let info = arnold::version::version_info();
    if !info.is_empty() {
        println!("{info}");
    }
    let options = arnold::version::compile_options();
    if !options.is_empty() {
        println!("compiled with: {options}");
    }
    let bound = arnold::version::bound_version();
    match arnold::version::version() {
        Ok(loaded) if loaded.arch == bound.arch && loaded.major == bound.major => {}
        Ok(loaded) => warn!("bindings target {bound}, loaded library is {loaded}"),
        Err(err) => warn!("{err}"),
    }
}

fn list_entries(kind: Option<&str>, json: bool) -> anyhow::Result<()> {
    let mask = match kind {
        Some(kind) => NodeType::from_name(kind)
            .with_context(|| format!("unknown node type {kind:?}"))?
            .mask(),
        None => NodeMask::ALL,
    };
    let _session = Session::begin(SessionMode::Batch)?;
    let mut rows: Vec<EntryRow> = NodeEntry::iter(mask)
        .filter(|entry| kind.is_none_or(|kind| entry_matches(entry, kind)))
        .map(|entry| EntryRow {
            name: entry.name(),
            node_type: entry.type_name(),
            derived_type: entry.derived_type_name(),
            filename: entry.filename(),
            version: entry.version(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        println!(
            "{:<32} {:<14} {}",
            row.name,
            row.node_type.as_deref().unwrap_or("?"),
            row.filename.as_deref().unwrap_or("(built-in)")
        );
    }
    Ok(())
}

/// `--type procedural` and friends narrow shapes down by derived type.
fn entry_matches(entry: &NodeEntry, kind: &str) -> bool {
    match NodeType::from_name(kind) {
        Some(ty @ (NodeType::ShapeProcedural | NodeType::ShapeVolume | NodeType::ShapeImplicit)) => {
            entry.derived_type() == Some(ty)
        }
        _ => true,
    }
}

fn param_row(param: &ParamEntry) -> ParamRow {
    let type_name = |ty: Option<arnold::ParamType>| {
        ty.and_then(|ty| ty.name()).unwrap_or_else(|| "?".to_string())
    };
    let mut param_type = type_name(param.param_type());
    if param.param_type() == Some(arnold::ParamType::Array) {
        param_type = format!("{param_type}[{}]", type_name(param.sub_type()));
    }
    ParamRow {
        name: param.name(),
        param_type,
        default: param.default_value().to_string(),
        enum_values: param.enum_labels(),
    }
}

fn list_params(entry_name: &str, json: bool) -> anyhow::Result<()> {
    let _session = Session::begin(SessionMode::Batch)?;
    let Some(entry) = NodeEntry::look_up(entry_name)? else {
        bail!("no node entry named {entry_name:?}");
    };
    let rows: Vec<ParamRow> = entry.params().map(|param| param_row(&param)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("{} ({})", entry.name(), entry.type_name().unwrap_or_default());
    for row in rows {
        print!("  {:<28} {:<14} {}", row.name, row.param_type, row.default);
        if !row.enum_values.is_empty() {
            print!("  [{}]", row.enum_values.join(", "));
        }
        println!();
    }
    Ok(())
}

fn list_formats(json: bool) -> anyhow::Result<()> {
    let _session = Session::begin(SessionMode::Batch)?;
    let rows: Vec<FormatRow> = SceneFormat::all()
        .into_iter()
        .map(|format| FormatRow {
            name: format.name,
            description: format.description,
            extensions: format.extensions,
            read: format.reads,
            write: format.writes,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in rows {
        let access = match (row.read, row.write) {
            (true, true) => "rw",
            (true, false) => "r",
            (false, true) => "w",
            (false, false) => "-",
        };
        println!("{:<12} {:<3} {}", row.name, access, row.extensions.join(" "));
    }
    Ok(())
}

fn report_pass(update: RenderUpdateType, info: &UpdateInfo) -> RenderStatus {
    if update == RenderUpdateType::AfterPass {
        info!(
            "pass {}/{} (AA {})",
            info.pass_index + 1,
            info.total_passes,
            info.aa_samples
        );
    }
    arnold::default_status(update)
}

fn render(
    scene: &Path,
    threads: Option<i32>,
    aa: Option<i32>,
    interactive: bool,
    log: LogFlags,
) -> anyhow::Result<ExitCode> {
    let mode = if interactive { SessionMode::Interactive } else { SessionMode::Batch };
    let session = Session::begin(mode)?;
    session.set_system_handlers(true);
    let _bridge = LogBridge::install(log);
    arnold::msg::set_console_flags(None, LogFlags::empty());

    let universe = Universe::new(&session)?;
    universe
        .load_scene(scene, None)
        .with_context(|| format!("failed to load {}", scene.display()))?;

    let options = universe.options().context("scene has no options node")?;
    if let Some(threads) = threads {
        options.set_int("threads", threads)?;
    }
    if let Some(aa) = aa {
        options.set_int("AA_samples", aa)?;
    }

    let mut render_session = RenderSession::new(&universe, mode)?;
    let start = Instant::now();
    let result = if interactive {
        render_session
            .begin(RenderMode::Camera, Some(Box::new(report_pass)))
            .and_then(|()| render_session.end())
    } else {
        render_session.render(RenderMode::Camera)
    };
    let status = render_session.status();

    match result {
        Ok(()) => {
            println!("{}: {:?} in {:.2}s", scene.display(), status, start.elapsed().as_secs_f32());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}: render failed ({err}), status {:?}", scene.display(), status);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_flags() {
        assert_eq!(parse_log_flags("all").unwrap(), LogFlags::ALL);
        assert_eq!(parse_log_flags("none").unwrap(), LogFlags::empty());
        assert_eq!(
            parse_log_flags("warnings, errors").unwrap(),
            LogFlags::WARNINGS | LogFlags::ERRORS
        );
        assert_eq!(parse_log_flags("Stats").unwrap(), LogFlags::STATS);
        assert!(parse_log_flags("loud").is_err());
    }

    #[test]
    fn test_parse_render_arguments() {
        let args = CommandLineArguments::try_parse_from([
            "arnold-cli",
            "--library",
            "/opt/arnold/bin/libai.so",
            "render",
            "cornell.ass",
            "--threads",
            "-2",
            "--aa",
            "4",
            "--log",
            "all",
        ])
        .unwrap();
        assert_eq!(args.library, Some(PathBuf::from("/opt/arnold/bin/libai.so")));
        match args.command {
            Command::Render {
                scene,
                threads,
                aa,
                interactive,
                log,
            } => {
                assert_eq!(scene, PathBuf::from("cornell.ass"));
                assert_eq!(threads, Some(-2));
                assert_eq!(aa, Some(4));
                assert!(!interactive);
                assert_eq!(log, LogFlags::ALL);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_entries_type() {
        let args = CommandLineArguments::try_parse_from(["arnold-cli", "entries", "--type", "shader", "--json"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Entries { kind: Some(ref kind), json: true } if kind == "shader"
        ));
    }

    #[test]
    fn test_render_log_default() {
        let args = CommandLineArguments::try_parse_from(["arnold-cli", "render", "scene.ass"]).unwrap();
        let Command::Render { log, .. } = args.command else {
            panic!("expected render");
        };
        assert_eq!(log, LogFlags::WARNINGS | LogFlags::ERRORS);
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "pencil-sketch", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn a JPEG or PNG photo into a pencil sketch PNG.
    Sketch(SketchArgs),
    /// Print the usage instructions shown on the sketch page.
    Guide,
}

#[derive(Parser, Debug)]
struct SketchArgs {
    /// Input photo (JPEG or PNG).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `artistic_pencil_sketch.png`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write the original and the sketch side by side to this PNG path.
    #[arg(long)]
    compare: Option<PathBuf>,

    /// Host config JSON (upload limits, comparison layout).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the SHA-256 of the written sketch PNG.
    #[arg(long)]
    digest: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sketch(args) => cmd_sketch(args),
        Command::Guide => {
            cmd_guide();
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<pencil_sketch::HostConfig> {
    match path {
        Some(p) => Ok(pencil_sketch::HostConfig::from_path(p)?),
        None => Ok(pencil_sketch::HostConfig::default()),
    }
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))
}

fn cmd_sketch(args: SketchArgs) -> anyhow::Result<()> {
    let handler = pencil_sketch::SketchHandler::new(load_config(args.config.as_deref())?)?;

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let file_name = args
        .in_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    let upload = pencil_sketch::Upload { file_name, bytes };

    let view = match handler.handle(&upload) {
        pencil_sketch::Response::Sketched(view) => view,
        pencil_sketch::Response::Failed(notice) => {
            anyhow::bail!("{}\n{}", notice.message, notice.detail);
        }
    };

    ensure_dir(&args.out_dir)?;
    let out_path = args.out_dir.join(&view.download.file_name);
    std::fs::write(&out_path, &view.download.bytes)
        .with_context(|| format!("write png '{}'", out_path.display()))?;
    eprintln!("wrote {}", out_path.display());

    if let Some(compare_path) = &args.compare {
        if let Some(parent) = compare_path.parent() {
            ensure_dir(parent)?;
        }
        let canvas = handler.comparison(&view)?;
        canvas
            .save_with_format(compare_path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", compare_path.display()))?;
        eprintln!("wrote {}", compare_path.display());
    }

    if args.digest {
        let digest = sha2::Sha256::digest(&view.download.bytes);
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        println!("sha256 {hex}  {}", view.download.file_name);
    }
    Ok(())
}

fn cmd_guide() {
    use pencil_sketch::page;
    println!("{} {}", page::ICON, page::TITLE);
    println!("{}\n", page::TAGLINE);
    print!("{}", page::instructions());
}

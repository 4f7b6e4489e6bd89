use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use splaydeck::{Deck, Drawable, Frame, Rect};

#[derive(Parser, Debug)]
#[command(name = "splaydeck", version)]
struct Cli {
    /// Log layout and render diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the geometry of every step as JSON.
    Layout(LayoutArgs),
    /// Render one slide (or one step of it) as SVG.
    Svg(SvgArgs),
    /// Render an in-between frame of the transition after a step as SVG.
    Morph(MorphArgs),
    /// Write the built-in splay rotation deck as JSON.
    DumpBuiltin(DumpArgs),
}

#[derive(Args, Debug)]
struct DeckSource {
    /// Input deck JSON. The built-in deck is used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    source: DeckSource,

    /// Override the deck's horizontal spacing base.
    #[arg(long)]
    spacing: Option<f64>,

    /// Override the deck's vertical distance between levels.
    #[arg(long)]
    vertical_buff: Option<f64>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    source: DeckSource,

    /// Render the title slide instead of a content slide.
    #[arg(long, conflicts_with_all = ["slide", "step"])]
    title: bool,

    /// Slide index (0-based).
    #[arg(long, default_value_t = 0)]
    slide: usize,

    /// Step index (0-based). Ignored for bullet slides.
    #[arg(long, default_value_t = 0)]
    step: usize,

    /// Presentation time in seconds; drives the glow pulse.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output scale.
    #[arg(long, default_value_t = splaydeck::DEFAULT_PIXELS_PER_UNIT)]
    pixels_per_unit: f64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct MorphArgs {
    #[command(flatten)]
    source: DeckSource,

    /// Slide index (0-based).
    #[arg(long)]
    slide: usize,

    /// Step the transition starts from (0-based).
    #[arg(long)]
    step: usize,

    /// Transition progress in [0, 1].
    #[arg(long)]
    t: f64,

    /// Presentation time in seconds; drives the glow pulse.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output scale.
    #[arg(long, default_value_t = splaydeck::DEFAULT_PIXELS_PER_UNIT)]
    pixels_per_unit: f64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct DumpArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Morph(args) => cmd_morph(args),
        Command::DumpBuiltin(args) => cmd_dump_builtin(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_deck(source: &DeckSource) -> anyhow::Result<Deck> {
    let Some(path) = &source.in_path else {
        return Ok(splaydeck::splay_rotations());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read deck '{}'", path.display()))?;
    let deck = Deck::from_json_str(&text)
        .with_context(|| format!("parse deck '{}'", path.display()))?;
    Ok(deck)
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn render(drawables: &[Drawable], view: Rect, pixels_per_unit: f64) -> anyhow::Result<String> {
    Ok(splaydeck::render_svg(drawables, view, pixels_per_unit)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let mut deck = read_deck(&args.source)?;
    if let Some(s) = args.spacing {
        deck.layout.spacing_base = s;
    }
    if let Some(v) = args.vertical_buff {
        deck.layout.vertical_buff = v;
    }
    let slides = deck.layout_slides()?;
    let json = serde_json::to_string_pretty(&slides).context("serialize layout")?;
    write_output(&args.out, &json)
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let deck = read_deck(&args.source)?;
    let view = splaydeck::default_view();

    let drawables = if args.title {
        splaydeck::title_drawables(&deck, view)
    } else {
        let slide = deck.slide(args.slide)?;
        if slide.steps.is_empty() {
            splaydeck::bullet_drawables(slide, &deck.theme, view)
        } else {
            let step = deck.step(args.slide, args.step)?;
            let frame = Frame::from(&deck.layout_step(args.slide, args.step)?);
            splaydeck::step_drawables(
                slide,
                &step.caption,
                step.tone,
                &frame,
                &deck.theme,
                view,
                args.time,
            )
        }
    };

    let svg = render(&drawables, view, args.pixels_per_unit)?;
    write_output(&args.out, &svg)
}

fn cmd_morph(args: MorphArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.t) {
        anyhow::bail!("--t must be within [0, 1], got {}", args.t);
    }
    let deck = read_deck(&args.source)?;
    let view = splaydeck::default_view();

    let slide = deck.slide(args.slide)?;
    let morph = deck.morph_step(args.slide, args.step)?;
    let frame = morph.sample(args.t, deck.ease);

    // The caption switches halfway through the transition.
    let shown = if args.t < 0.5 { args.step } else { args.step + 1 };
    let step = deck.step(args.slide, shown)?;

    let drawables = splaydeck::step_drawables(
        slide,
        &step.caption,
        step.tone,
        &frame,
        &deck.theme,
        view,
        args.time,
    );
    let svg = render(&drawables, view, args.pixels_per_unit)?;
    write_output(&args.out, &svg)
}

fn cmd_dump_builtin(args: DumpArgs) -> anyhow::Result<()> {
    let json = splaydeck::splay_rotations().to_json_pretty()?;
    write_output(&args.out, &json)
}

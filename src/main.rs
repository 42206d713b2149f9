//! `linebox`: lay out a text file as one text node and report its runs,
//! intrinsic widths, geometry and hit tests.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use linebox_config::{BreakRule, LineboxConfig, WhiteSpaceMode};
use linebox_text::font::{FontCache, load_system_default_font};
use linebox_text::{
    BoxContext, BreakPredicate, FixedMetrics, FlowOptions, HitTest, LayoutContext,
    MetricsProvider, NodeFonts, Point, TextNode, TextStyle, UnicodeBreaks, WhiteSpace,
    WhitespaceBreaks, flow_text,
};

const USAGE: &str = "usage: linebox [--config FILE] [--width PX] [--nowrap] [--hit X,Y]... [FILE|-]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    width: Option<f32>,
    nowrap: bool,
    hits: Vec<Point>,
    input: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--width" => {
                let value = args.next().context("--width needs a value")?;
                parsed.width = Some(value.parse().with_context(|| format!("bad width {value:?}"))?);
            }
            "--nowrap" => parsed.nowrap = true,
            "--hit" => {
                let value = args.next().context("--hit needs X,Y")?;
                parsed.hits.push(parse_point(&value)?);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => bail!("unknown option {arg}\n{USAGE}"),
            _ => {
                if parsed.input.replace(arg).is_some() {
                    bail!("only one input file is supported\n{USAGE}");
                }
            }
        }
    }
    Ok(parsed)
}

fn parse_point(value: &str) -> Result<Point> {
    let (x, y) = value
        .split_once(',')
        .with_context(|| format!("expected X,Y, got {value:?}"))?;
    Ok(Point::new(
        x.trim().parse().with_context(|| format!("bad x in {value:?}"))?,
        y.trim().parse().with_context(|| format!("bad y in {value:?}"))?,
    ))
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
    }
}

/// Pick metrics: a fixed advance when configured, else the configured
/// font, else the system sans-serif, else fixed metrics for the size.
fn metrics_for(config: &LineboxConfig) -> Box<dyn MetricsProvider> {
    let size = config.text.font_size;
    if let Some(advance) = config.text.fixed_advance {
        return Box::new(FixedMetrics {
            advance,
            ..FixedMetrics::for_font_size(size)
        });
    }

    let face = match &config.text.font {
        Some(path) => FontCache::new()
            .get_or_load(path, 0)
            .map_err(|e| log::warn!("failed to load font {}: {e}", path.display())),
        None => load_system_default_font()
            .map(Arc::new)
            .map_err(|e| log::warn!("no system font: {e}")),
    };
    match face {
        Ok(face) => Box::new(face.at_size(size)),
        Err(()) => {
            log::info!("using fixed metrics for {size}px");
            Box::new(FixedMetrics::for_font_size(size))
        }
    }
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let args = parse_args(std::env::args().skip(1))?;
    let mut config = match &args.config {
        Some(path) => LineboxConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LineboxConfig::load_or_default(),
    };
    config.merge_with_env();
    if args.width.is_some() {
        config.layout.width = args.width;
    }
    if args.nowrap {
        config.layout.white_space = WhiteSpaceMode::Nowrap;
    }
    log::debug!("config: {config:?}");

    let text = read_input(args.input.as_deref())?;
    let metrics = metrics_for(&config);
    let breaks: Box<dyn BreakPredicate> = match config.layout.break_rule {
        BreakRule::Whitespace => Box::new(WhitespaceBreaks),
        BreakRule::Unicode => Box::new(UnicodeBreaks),
    };

    let style = TextStyle {
        white_space: match config.layout.white_space {
            WhiteSpaceMode::Normal => WhiteSpace::Normal,
            WhiteSpaceMode::Nowrap => WhiteSpace::NoWrap,
            WhiteSpaceMode::Pre => WhiteSpace::Pre,
        },
        visually_ordered: config.layout.visually_ordered,
        line_height: config.text.line_height,
        ..TextStyle::default()
    };

    let block = BoxContext::in_block(Point::zero());
    let cx = LayoutContext::new(NodeFonts::new(metrics.as_ref()), &block);
    let mut node = TextNode::new(text, style);

    let widths = node.intrinsic_widths(&cx, breaks.as_ref());
    println!("min-width: {:.2}", widths.min);
    println!("max-width: {:.2}", widths.max);

    let options = FlowOptions {
        max_width: config.layout.width,
        ..FlowOptions::default()
    };
    let summary = flow_text(&mut node, &cx, breaks.as_ref(), options)?;
    println!("lines: {}", summary.lines);
    for (index, run) in node.runs().iter().enumerate() {
        println!(
            "run {index}: x={:.2} y={:.2} width={:.2} bytes={:?}{} {:?}",
            run.x,
            run.y,
            run.width,
            run.range,
            if run.reversed { " reversed" } else { "" },
            run.text(node.content()),
        );
    }
    println!("height: {:.2}", node.height(&cx));
    println!("width: {:.2}", node.width(&cx));

    for point in &args.hits {
        let hit = node.hit_test(&cx, *point, Point::zero());
        let kind = match hit.kind {
            HitTest::Before => "before",
            HitTest::Inside => "inside",
            HitTest::After => "after",
        };
        print!("hit ({:.1},{:.1}): {kind} offset={}", point.x, point.y, hit.offset);
        match node.cursor_position(&cx, hit.offset) {
            Some(caret) => println!(" caret=({:.2},{:.2})", caret.x, caret.y),
            None => println!(),
        }
    }
    Ok(())
}

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use xpathlite::xml::{
    CompactFormatter, FormatConfig, Formatter, Parser as DocumentParser, ParserConfig,
    PrettyFormatter, DEFAULT_MAX_DEPTH,
};
use xpathlite::{Node, PathCache, XPathExpression};

#[derive(Debug, Parser)]
#[command(
    name = "xpathlite",
    version,
    about = "Query XML documents with simple path expressions"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Path expression to evaluate; repeat to evaluate several
    #[arg(short, long = "path", value_name = "PATH", required = true)]
    paths: Vec<String>,
    /// How matches are reported
    #[arg(short, long, value_enum, default_value_t = Mode::Nodes)]
    mode: Mode,
    /// Indent element output
    #[arg(long)]
    pretty: bool,
    /// Spaces per indentation level with --pretty
    #[arg(long, default_value_t = 2)]
    indent: usize,
    /// Maximum element nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Every matching node
    Nodes,
    /// One matching node
    Any,
    /// Text of one matching text node
    String,
    /// Number held by one matching text node
    Number,
    /// Text of every matching text node
    Strings,
    /// Every number held by a matching text node
    Numbers,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let input = read_input(args.input.as_deref())?;
    let config = ParserConfig {
        max_depth: args.max_depth,
        ..ParserConfig::default()
    };
    let root = DocumentParser::with_config(input.as_str(), config)
        .parse()
        .context("failed to parse document")?;
    info!(root = root.name(), "document loaded");

    let formatter: &dyn Formatter = if args.pretty {
        &PrettyFormatter
    } else {
        &CompactFormatter
    };
    let format_config = FormatConfig {
        indent_spaces: args.indent,
    };

    let cache = PathCache::new();
    let mut lines = Vec::new();
    for path in &args.paths {
        let compiled = cache
            .get_or_compile(path)
            .with_context(|| format!("failed to compile path {path}"))?;
        lines.extend(render(&compiled, &root, args.mode, formatter, &format_config));
    }

    let mut output = lines.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    write_output(args.output.as_deref(), output.as_bytes())
}

fn render(
    path: &XPathExpression,
    root: &Node,
    mode: Mode,
    formatter: &dyn Formatter,
    config: &FormatConfig,
) -> Vec<String> {
    match mode {
        Mode::Nodes => path
            .evaluate(root)
            .into_iter()
            .map(|node| formatter.format(node, config))
            .collect(),
        Mode::Any => path
            .evaluate_any(root)
            .map(|node| formatter.format(node, config))
            .into_iter()
            .collect(),
        Mode::String => vec![path.evaluate_string(root).to_string()],
        Mode::Number => path
            .evaluate_number(root)
            .map(|n| n.to_string())
            .into_iter()
            .collect(),
        Mode::Strings => path
            .evaluate_strings(root)
            .into_iter()
            .map(str::to_string)
            .collect(),
        Mode::Numbers => path
            .evaluate_numbers(root)
            .into_iter()
            .map(|n| n.to_string())
            .collect(),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

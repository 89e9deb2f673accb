use blueprint::document::sections_from_json;
use blueprint::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Lays out, flattens and checks outcome blueprints
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Shape of the input file.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Nested editor document, `{"root": {...}, "sections": [...]}` or a bare tree
    Document,
    /// Flat node table with parent/child edges
    Graph,
}

#[derive(clap::Args, Debug)]
struct Input {
    /// Path to the blueprint JSON file
    path: String,

    /// How the input file is structured
    #[arg(short, long, value_enum, default_value_t = InputFormat::Document)]
    format: InputFormat,

    /// Optional path to a scorecard sections JSON file, overriding the document's own
    #[arg(short, long)]
    sections: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute node positions and edges
    Layout {
        #[command(flatten)]
        input: Input,
        /// Optional layout configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
        /// Where to write the layout JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export one record per leaf outcome with inherited attributes
    Flatten {
        #[command(flatten)]
        input: Input,
        /// Start each path below the root instead of at it
        #[arg(long)]
        exclude_root: bool,
        /// Where to write the export JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the tree as an indented outline
    Outline {
        #[command(flatten)]
        input: Input,
    },
    /// Report irregularities in a draft blueprint
    Lint {
        #[command(flatten)]
        input: Input,
    },
    /// Lay out and flatten, then save both as one binary artifact
    Bundle {
        #[command(flatten)]
        input: Input,
        /// Optional layout configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
        /// Path of the artifact to write
        #[arg(short, long, default_value = "blueprint.bin")]
        output: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blueprint=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Layout {
            input,
            config,
            output,
        } => run_layout(input, config, output),
        Command::Flatten {
            input,
            exclude_root,
            output,
        } => run_flatten(input, exclude_root, output),
        Command::Outline { input } => {
            let (tree, _) = load_input(&input);
            print!("{}", TreeOutline::new(&tree));
        }
        Command::Lint { input } => run_lint(input),
        Command::Bundle {
            input,
            config,
            output,
        } => run_bundle(input, config, output),
    }
}

fn run_layout(input: Input, config_path: Option<String>, output: Option<String>) {
    let (tree, sections) = load_input(&input);
    let engine = load_engine(config_path);

    let start = Instant::now();
    let layout = engine
        .layout(&tree, &sections)
        .unwrap_or_else(|e| exit_with_error(&format!("Layout failed: {}", e)));
    tracing::info!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        elapsed = ?start.elapsed(),
        "layout complete"
    );

    let json = serde_json::to_string_pretty(&layout)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize layout: {}", e)));
    write_output(output.as_deref(), &json);
}

fn run_flatten(input: Input, exclude_root: bool, output: Option<String>) {
    let (tree, _) = load_input(&input);
    let flattener = Flattener::new(FlattenOptions {
        include_root_in_path: !exclude_root,
        ..FlattenOptions::default()
    });

    let start = Instant::now();
    let outcomes = flattener
        .flatten(&tree)
        .unwrap_or_else(|e| exit_with_error(&format!("Flattening failed: {}", e)));
    tracing::info!(
        leaves = outcomes.len(),
        elapsed = ?start.elapsed(),
        "flatten complete"
    );

    let json = OutcomeExport::new(tree.root_name(), outcomes)
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize export: {}", e)));
    write_output(output.as_deref(), &json);
}

fn run_lint(input: Input) {
    let (tree, sections) = load_input(&input);
    let warnings = tree.lint(&sections);

    if warnings.is_empty() {
        println!("No issues found in '{}'.", input.path);
        return;
    }
    for warning in &warnings {
        println!("  -> {}", warning);
    }
    println!("\n{} issue(s) found in '{}'.", warnings.len(), input.path);
}

fn run_bundle(input: Input, config_path: Option<String>, output: String) {
    let (tree, sections) = load_input(&input);
    let engine = load_engine(config_path);

    let layout = engine
        .layout(&tree, &sections)
        .unwrap_or_else(|e| exit_with_error(&format!("Layout failed: {}", e)));
    let outcomes =
        flatten(&tree).unwrap_or_else(|e| exit_with_error(&format!("Flattening failed: {}", e)));

    BlueprintArtifact::new(tree.root_name(), layout, outcomes)
        .save(&output)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
    println!("Saved blueprint artifact to '{}'.", output);
}

/// Reads the input file and any separate sections file.
fn load_input(input: &Input) -> (OutcomeTree, Vec<ScorecardSection>) {
    let json = read_file(&input.path, "blueprint");

    let (tree, mut sections) = match input.format {
        InputFormat::Document => BlueprintDocument::from_json(&json)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()))
            .into_parts(),
        InputFormat::Graph => {
            let graph: OutcomeGraph = serde_json::from_str(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse outcome graph JSON: {}", e))
            });
            let tree = graph
                .into_tree()
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid outcome graph: {}", e)));
            (tree, Vec::new())
        }
    };

    if let Some(path) = &input.sections {
        sections = sections_from_json(&read_file(path, "sections"))
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }

    tracing::debug!(
        root = %tree.root_name(),
        nodes = tree.node_count(),
        sections = sections.len(),
        "loaded blueprint"
    );
    (tree, sections)
}

fn load_engine(config_path: Option<String>) -> LayoutEngine {
    match config_path {
        Some(path) => {
            let config = LayoutConfig::from_json(&read_file(&path, "layout config"))
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            LayoutEngine::builder().with_config(config).build()
        }
        None => LayoutEngine::default(),
    }
}

fn read_file(path: &str, what: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read {} file '{}': {}", what, path, e))
    })
}

fn write_output(path: Option<&str>, contents: &str) {
    match path {
        Some(path) => {
            fs::write(path, contents).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            println!("Wrote '{}'.", path);
        }
        None => println!("{}", contents),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

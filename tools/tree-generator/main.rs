use blueprint::outcome::{
    BooleanScorecardItem, NamedItem, OutcomeNode, ScorecardSection, VariableScorecardItem,
};
use clap::Parser;
use rand::{Rng, rngs::ThreadRng};
use std::fs;

/// A CLI tool to generate random outcome blueprints for exercising the layout engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_blueprint.json")]
    output: String,

    /// Number of levels below the root
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// The maximum number of children per outcome
    #[arg(long, default_value_t = 4)]
    fanout: usize,

    /// The maximum number of scorecards per outcome
    #[arg(long, default_value_t = 3)]
    scorecards: usize,

    /// Number of scorecard sections to create
    #[arg(long, default_value_t = 3)]
    sections: usize,
}

const OUTCOME_NAMES: [&str; 10] = [
    "Demo Scheduled",
    "Follow-up Booked",
    "Not Interested",
    "Callback Requested",
    "Wrong Contact",
    "Proposal Sent",
    "No-Show",
    "Rescheduled",
    "Closed Won",
    "Closed Lost",
];

const CHECK_NAMES: [&str; 8] = [
    "Confirmed decision maker",
    "Asked about budget",
    "Set next step",
    "Handled pricing objection",
    "Summarized pain points",
    "Rapport",
    "Discovery depth",
    "Product knowledge",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.fanout == 0 && cli.depth > 0 {
        eprintln!("Error: --fanout must be at least 1 when --depth is {}", cli.depth);
        std::process::exit(1);
    }

    println!(
        "Generating blueprint (depth {}, up to {} children and {} scorecards per outcome)...",
        cli.depth, cli.fanout, cli.scorecards
    );

    let sections = generate_sections(cli.sections);
    let mut counter = 0;
    let root = generate_node(
        &mut rng,
        "All Outcomes".to_string(),
        cli.depth,
        &cli,
        &sections,
        &mut counter,
    );
    tracing::info!(outcomes = counter + 1, "generated outcome tree");

    let document = serde_json::json!({
        "root": root,
        "sections": sections,
    });
    fs::write(&cli.output, serde_json::to_string_pretty(&document)?)?;

    println!(
        "Successfully generated and saved blueprint to '{}'",
        cli.output
    );
    Ok(())
}

fn generate_sections(count: usize) -> Vec<ScorecardSection> {
    (0..count)
        .map(|i| ScorecardSection {
            id: format!("section-{}", i + 1),
            name: format!("Section {}", i + 1),
            description: String::new(),
        })
        .collect()
}

/// Builds one outcome and, while `remaining` levels are left, a random number of children.
fn generate_node(
    rng: &mut ThreadRng,
    name: String,
    remaining: usize,
    cli: &Cli,
    sections: &[ScorecardSection],
    counter: &mut usize,
) -> OutcomeNode {
    let mut node = OutcomeNode::new(name).with_description("Generated outcome");

    if rng.random_bool(0.3) {
        node = node.with_insight(NamedItem::new("Timeline", "When the prospect plans to buy"));
    }
    if rng.random_bool(0.2) {
        node = node.with_objection(NamedItem::new("Price", "Prospect finds the offer expensive"));
    }

    for _ in 0..rng.random_range(0..=cli.scorecards) {
        let name = CHECK_NAMES[rng.random_range(0..CHECK_NAMES.len())].to_string();
        let section_id = (!sections.is_empty())
            .then(|| sections[rng.random_range(0..sections.len())].id.clone());
        let is_fail_criterion = rng.random_bool(0.25);

        node = if rng.random_bool(0.5) {
            node.with_boolean_check(BooleanScorecardItem {
                name,
                is_fail_criterion,
                fail_weight: is_fail_criterion.then(|| "1/3".to_string()),
                section_id,
                ..Default::default()
            })
        } else {
            node.with_variable_check(VariableScorecardItem {
                name,
                is_fail_criterion,
                section_id,
                score1_desc: "Poor".to_string(),
                score3_desc: "Adequate".to_string(),
                score5_desc: "Excellent".to_string(),
                fail_score: is_fail_criterion.then(|| rng.random_range(1..=2)),
                ..Default::default()
            })
        };
    }

    if remaining > 0 {
        for _ in 0..rng.random_range(1..=cli.fanout) {
            *counter += 1;
            let name = format!(
                "{} #{}",
                OUTCOME_NAMES[rng.random_range(0..OUTCOME_NAMES.len())],
                counter
            );
            // Stop some branches early so leaves land at mixed depths.
            let child_remaining = if rng.random_bool(0.3) { 0 } else { remaining - 1 };
            let child = generate_node(rng, name, child_remaining, cli, sections, counter);
            node = node.with_child(child);
        }
    }
    node
}

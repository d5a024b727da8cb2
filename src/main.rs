use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use signpost_index::input::{ScoringInput, load_input, load_snapshots};
use signpost_index::logging::init_tracing;
use signpost_index::model::presets::Preset;
use signpost_index::model::snapshot::IndexSnapshot;
use signpost_index::pipeline::stage1_progress::compute_progress_str;
use signpost_index::pipeline::stage2_aggregate::score_categories;
use signpost_index::pipeline::stage4_bands::{DEFAULT_CONFIDENCE_WIDTH, tally_evidence};
use signpost_index::pipeline::stage5_snapshot::{
    CUSTOM_LABEL, build_preset_snapshots, build_snapshot, significant_changes,
};
use signpost_index::pipeline::stage6_report::write_reports;
use signpost_index::report::ReportMeta;

#[derive(Debug, Parser)]
#[command(name = "signpost-index")]
#[command(about = "Compute the signpost proximity index with confidence bands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a JSON snapshot of signposts and write reports
    Score {
        /// Input JSON with signposts and optional custom weights
        #[arg(long)]
        input: PathBuf,
        /// Output directory for snapshot.json and report.txt
        #[arg(long)]
        out: PathBuf,
        /// Weighting preset (ignored when the input carries custom weights)
        #[arg(long, value_enum, default_value_t = PresetChoice::All)]
        preset: PresetChoice,
        /// Base half-width of the confidence bands
        #[arg(long, default_value_t = DEFAULT_CONFIDENCE_WIDTH)]
        confidence_width: f64,
        /// Earlier snapshot.json to compare the overall index against
        #[arg(long)]
        previous: Option<PathBuf>,
    },
    /// Normalize a single observation onto the 0..1 progress scale
    Progress {
        #[arg(long, allow_hyphen_values = true)]
        observed: f64,
        #[arg(long, allow_hyphen_values = true)]
        baseline: f64,
        #[arg(long, allow_hyphen_values = true)]
        target: f64,
        /// '>=' when higher is better, '<=' when lower is better
        #[arg(long)]
        direction: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetChoice {
    Equal,
    Aschenbrenner,
    Ai2027,
    Cotra,
    All,
}

impl PresetChoice {
    fn preset(self) -> Option<Preset> {
        match self {
            PresetChoice::Equal => Some(Preset::Equal),
            PresetChoice::Aschenbrenner => Some(Preset::Aschenbrenner),
            PresetChoice::Ai2027 => Some(Preset::Ai2027),
            PresetChoice::Cotra => Some(Preset::Cotra),
            PresetChoice::All => None,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Score {
            input,
            out,
            preset,
            confidence_width,
            previous,
        } => {
            let scoring_input = load_input(&input).map_err(|e| e.to_string())?;
            let snapshots = score_input(&scoring_input, preset, confidence_width)?;
            if let Some(previous) = previous {
                let earlier = load_snapshots(&previous).map_err(|e| e.to_string())?;
                let changes = significant_changes(&earlier, &snapshots);
                if changes.is_empty() {
                    tracing::info!(previous = %previous.display(), "no significant index change");
                }
            }
            let meta = ReportMeta {
                tool_name: "signpost-index".to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                input_path: input.display().to_string(),
                n_signposts: scoring_input.signposts.len(),
                confidence_width,
            };
            write_reports(&meta, &snapshots, &out).map_err(|e| e.to_string())?;
            Ok(())
        }
        Command::Progress {
            observed,
            baseline,
            target,
            direction,
        } => {
            let progress = compute_progress_str(observed, baseline, target, &direction)
                .map_err(|e| e.to_string())?;
            println!("{progress:.6}");
            Ok(())
        }
    }
}

fn score_input(
    input: &ScoringInput,
    choice: PresetChoice,
    confidence_width: f64,
) -> Result<Vec<IndexSnapshot>, String> {
    let scores = score_categories(&input.signposts).map_err(|e| e.to_string())?;
    let evidence = tally_evidence(&input.signposts);

    if let Some(weights) = input.weights {
        if choice != PresetChoice::All {
            tracing::warn!(
                preset = ?choice,
                "input carries custom weights; --preset is ignored"
            );
        }
        let snapshot = build_snapshot(CUSTOM_LABEL, weights, &scores, &evidence, confidence_width)
            .map_err(|e| e.to_string())?;
        return Ok(vec![snapshot]);
    }

    match choice.preset() {
        Some(preset) => {
            let snapshot = build_snapshot(
                preset.slug(),
                preset.weights(),
                &scores,
                &evidence,
                confidence_width,
            )
            .map_err(|e| e.to_string())?;
            Ok(vec![snapshot])
        }
        None => build_preset_snapshots(&scores, &evidence, confidence_width)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

use anyhow::{Context, Result};
use tracing::info;

use revtex_cli::pipeline::{ExportConfig, export};
use revtex_cli::stats::compute_stats;
use revtex_cli::summary::print_stats;
use revtex_cli::types::ExportOutcome;
use revtex_ingest::{load_codes_mapping, load_redaction_rules, load_workbook};
use revtex_render::{RedactionEngine, parse_codes};

use crate::cli::{ExportArgs, StatsArgs};

pub fn run_export(args: &ExportArgs) -> Result<ExportOutcome> {
    let sheets = load_workbook(&args.workbook)?;
    info!(
        workbook = %args.workbook.display(),
        sheets = sheets.len(),
        "workbook loaded"
    );
    let rules = load_redaction_rules(&args.redactions)?;
    let engine = RedactionEngine::new(&rules).context("build redaction engine")?;
    let codes_text = load_codes_mapping(&args.codes)?;

    let config = ExportConfig {
        output_dir: &args.output_dir,
        templates: &args.templates,
        dry_run: args.dry_run,
    };
    export(&sheets, codes_text.as_deref(), &engine, &config)
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let sheets = load_workbook(&args.workbook)?;
    let codes = load_codes_mapping(&args.codes)?.map(|text| parse_codes(&text));
    let stats = compute_stats(&sheets, codes.as_ref());
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("serialize stats")?
        );
    } else {
        print_stats(&stats);
    }
    Ok(())
}

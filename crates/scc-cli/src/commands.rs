use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{Level, debug, info, info_span, trace, warn};

use scc_cli::logging::redact_value;
use scc_cli::session::CompareSession;
use scc_cli::settings::{Settings, save_default_settings, save_settings, settings_path};
use scc_ingest::{LoadOptions, guess_id_column, load_source};
use scc_model::{IdentifierSet, OutputPaths, Side};
use scc_output::{write_comparison, write_summary_json};

use crate::cli::{CompareArgs, ConfigArgs, InspectArgs};
use crate::types::{CompareOutcome, SourceOverview};

#[derive(Clone, Copy)]
struct SideInput<'a> {
    side: Side,
    path: &'a Path,
    sheet: Option<&'a String>,
    column: Option<&'a str>,
}

pub fn run_compare(args: &CompareArgs, settings: &Settings) -> Result<CompareOutcome> {
    let span = info_span!("compare_files");
    let _guard = span.enter();

    let keyword = args.keyword.as_deref().unwrap_or(&settings.column_keyword);
    let infer_types = settings.infer_types && !args.no_infer_types;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output_dir.clone());
    let id_header = args
        .id_header
        .clone()
        .unwrap_or_else(|| settings.id_header.clone());

    let mut session = CompareSession::new();
    let overview_a = load_side(
        &mut session,
        SideInput {
            side: Side::A,
            path: &args.file_a,
            sheet: args.sheet_a.as_ref(),
            column: args.column_a.as_deref(),
        },
        keyword,
        infer_types,
    )?;
    let overview_b = load_side(
        &mut session,
        SideInput {
            side: Side::B,
            path: &args.file_b,
            sheet: args.sheet_b.as_ref(),
            column: args.column_b.as_deref(),
        },
        keyword,
        infer_types,
    )?;

    let comparison = session.run()?;
    if tracing::enabled!(Level::TRACE) {
        trace_ids("in both files", &comparison.result.shared);
        trace_ids("only in file 1", &comparison.result.only_a);
        trace_ids("only in file 2", &comparison.result.only_b);
    }

    let outputs = if args.dry_run {
        info!("dry run, skipping output files");
        OutputPaths::default()
    } else {
        write_comparison(&output_dir, &comparison.result, &id_header)
            .with_context(|| format!("write results to {}", output_dir.display()))?
    };

    let summary_json = match &args.summary_json {
        Some(path) if args.dry_run => {
            warn!(path = %path.display(), "dry run, summary JSON not written");
            None
        }
        Some(path) => {
            write_summary_json(path, &comparison.report(outputs.clone()))
                .with_context(|| format!("write summary to {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(CompareOutcome {
        overviews: [overview_a, overview_b],
        comparison,
        output_dir,
        id_header,
        outputs,
        summary_json,
        preview_rows: args.preview.unwrap_or(settings.preview_rows),
    })
}

fn load_side(
    session: &mut CompareSession,
    input: SideInput<'_>,
    keyword: &str,
    infer_types: bool,
) -> Result<SourceOverview> {
    let options = LoadOptions::default()
        .with_sheet(input.sheet.cloned())
        .with_infer_types(infer_types);
    let table = session
        .load(input.side, input.path, &options)
        .with_context(|| format!("load file {} ({})", input.side.index(), input.path.display()))?;
    let mut overview = SourceOverview::from_table(table);

    overview.id_column = match input.column {
        Some(name) => Some(
            session
                .select_column(input.side, name)
                .with_context(|| format!("select column of file {}", input.side.index()))?,
        ),
        None => {
            let guessed = session.auto_select(input.side, keyword);
            if guessed.is_none() {
                warn!(file = input.side.index(), "no columns to choose from");
            }
            guessed
        }
    };
    Ok(overview)
}

fn trace_ids(group: &str, ids: &IdentifierSet) {
    for id in ids {
        trace!(group, id = redact_value(id.as_str()), "identifier");
    }
}

pub fn run_inspect(args: &InspectArgs, settings: &Settings) -> Result<SourceOverview> {
    let options = LoadOptions::default()
        .with_sheet(args.sheet.clone())
        .with_infer_types(settings.infer_types && !args.no_infer_types);
    let table = load_source(&args.file, &options)
        .with_context(|| format!("load {}", args.file.display()))?;

    let keyword = args.keyword.as_deref().unwrap_or(&settings.column_keyword);
    let mut overview = SourceOverview::from_table(&table);
    overview.id_column = guess_id_column(&table.column_names(), keyword).map(str::to_string);
    debug!(column = ?overview.id_column, "guessed smartcard column");
    Ok(overview)
}

pub fn run_config(args: &ConfigArgs, settings: &Settings, explicit: Option<&Path>) -> Result<()> {
    if args.init {
        let path = match explicit {
            Some(path) => {
                save_settings(settings, path)?;
                path.to_path_buf()
            }
            None => save_default_settings(settings)?,
        };
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }

    let path: Option<PathBuf> = explicit.map(Path::to_path_buf).or_else(settings_path);
    match path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# settings location unavailable"),
    }
    print!(
        "{}",
        toml::to_string_pretty(settings).context("serialize settings")?
    );
    Ok(())
}

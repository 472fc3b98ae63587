use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, error, info};

use prorename::cli::Args;
use prorename::output::{
    display_dry_run, display_execution_result, display_facets, display_json, display_page,
};
use prorename::progress::Progress;
use prorename::ui::{confirm, Ui, UiConfig};
use prorename::{
    config_from_env, execute, import_sources, logging, AppError, AppState, ExecutionReport,
    FsRenamer, Session, SortState,
};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn output_error(e: io::Error) -> AppError {
    AppError::Other(format!("Failed to display output: {}", e))
}

fn describe_sources(sources: &[PathBuf]) -> String {
    match sources {
        [] => "-".to_string(),
        [single] => single.display().to_string(),
        many => format!("{} files", many.len()),
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = config_from_env()?.with_overrides(args.lang, args.page_size)?;
    debug!(?config, "Configuration loaded");

    let strings = config.locale.strings();

    let mut state = AppState::new(config.page_size);
    state.set_mode(args.mode.into_mode(&args.text, &args.find, &args.replace));
    state.set_sort(SortState::new(args.sort, args.desc));

    // Step 1: Import
    if !args.sources.is_empty() {
        let records = import_sources(&args.sources)?;
        info!("Imported {} files", records.len());
        state.import(records);

        // Step 2: Facets
        for ext in &args.extensions {
            let active = state.toggle_extension(ext);
            debug!(extension = %ext, active, "Toggled extension");
        }
    }

    if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(state, config.locale, FsRenamer, stdin.lock(), stdout.lock());
        return session
            .run()
            .map_err(|e| AppError::Other(format!("Session I/O error: {}", e)));
    }

    let mut ui = Ui::new(UiConfig::new(args.verbose > 0));
    let mut stdout = io::stdout();

    state.go_to_page(args.page);

    // Step 3: Preview
    if !args.json {
        ui.print_header(strings.title, env!("CARGO_PKG_VERSION"));
        ui.kv(strings.source, &describe_sources(&args.sources));
        ui.kv(strings.mode, &state.mode().description());
        ui.kv(strings.sort, &state.sort().description());
        ui.kv(strings.lang, &config.locale.to_string());
        ui.blank();

        display_facets(&state.facets(), strings, &mut stdout).map_err(output_error)?;
        display_page(&state.view(), strings, &mut stdout).map_err(output_error)?;
    }

    if args.dry {
        let rows = state.preview_all();
        if args.json {
            display_json(&rows, &mut stdout).map_err(output_error)?;
        } else {
            display_dry_run(&rows, &state.mode().description(), strings, &mut stdout)
                .map_err(output_error)?;
        }
        return Ok(());
    }

    // Step 4: Execute over a snapshot of the filtered list
    let snapshot = state.snapshot();

    if snapshot.is_empty() {
        ui.warning(strings.nothing);
        if args.json {
            display_json(&ExecutionReport::new(0), &mut stdout).map_err(output_error)?;
        }
        return Ok(());
    }

    if !args.yes {
        let stdin = io::stdin();
        let confirmed = confirm(strings.confirm, &mut stdin.lock(), &mut io::stderr())
            .map_err(|e| AppError::Other(format!("Failed to read confirmation: {}", e)))?;
        if !confirmed {
            return Err(AppError::Aborted);
        }
    }

    let mut progress = Progress::new_with_ui(ui.is_verbose(), ui.is_colors_enabled());
    progress.batch_start(strings.exec, snapshot.len(), &state.mode().description());

    let report = execute(&snapshot, state.mode(), &mut FsRenamer, |event| {
        progress.rename_progress(event)
    });

    progress.batch_complete(&report);
    state.commit(&report);

    if args.json {
        display_json(&report, &mut stdout).map_err(output_error)?;
    } else {
        display_execution_result(&report, strings, &mut stdout).map_err(output_error)?;
    }

    if !report.is_success() {
        return Err(AppError::RenameFailures {
            failed: report.failures.len(),
            total: report.total,
            failures: report.failures,
        });
    }

    Ok(())
}

use std::error::Error;
use std::path::Path;

use pipeconf::cli::{AppMode, CliOptions, ask_for_mode};
use pipeconf::format::{self, FormatKind};
use pipeconf::{
    ConfigurationDocument, LinePrompter, Prompter, SettingsStore, SetupWizard, TerminalPrompter,
    default_registry, load_and_reconcile,
};
use sarge::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  pipeconf [--config <path>] [--reconfigure] [--plain] [--mode server|cli]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <path>   Settings file (default: config.yaml)");
    eprintln!("  -r, --reconfigure     Run the setup wizard even if the file exists");
    eprintln!("      --plain           Line-based prompts instead of terminal menus");
    eprintln!("  -m, --mode <mode>     Skip the mode prompt ('server' or 'cli')");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=pipeconf=info) for diagnostics.");
}

fn parse_options() -> Result<Option<CliOptions>, Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let help_ref = reader.add::<bool>(tag::both('h', "help"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let reconfigure_ref = reader.add::<bool>(tag::both('r', "reconfigure"));
    let plain_ref = reader.add::<bool>(tag::long("plain"));
    let mode_ref = reader.add::<AppMode>(tag::both('m', "mode"));

    let args = reader.parse()?;

    if matches!(help_ref.get(&args), Some(Ok(true))) {
        return Ok(None);
    }

    let mut options = CliOptions::new();
    if let Some(Ok(path)) = config_ref.get(&args) {
        options = options.with_config(path);
    }
    if matches!(reconfigure_ref.get(&args), Some(Ok(true))) {
        options = options.with_reconfigure();
    }
    if matches!(plain_ref.get(&args), Some(Ok(true))) {
        options = options.with_plain();
    }
    match mode_ref.get(&args) {
        Some(Ok(mode)) => options = options.with_mode(mode),
        Some(Err(e)) => return Err(e.into()),
        None => {}
    }

    Ok(Some(options))
}

fn print_document(doc: &ConfigurationDocument) -> Result<(), Box<dyn Error>> {
    let bytes = format::serialize(FormatKind::Yaml, doc)?;
    println!("{}", String::from_utf8_lossy(&bytes).trim_end());
    Ok(())
}

fn show_existing(path: &Path) -> Result<(), Box<dyn Error>> {
    let registry = default_registry();
    let (doc, report) = load_and_reconcile(path, &registry)?;
    if !report.is_clean() {
        eprintln!(
            "warning: {} does not fully match the registered integrations; run with --reconfigure to update it",
            path.display()
        );
    }
    print_document(&doc)
}

fn run() -> Result<(), Box<dyn Error>> {
    let Some(options) = parse_options()? else {
        print_usage();
        return Ok(());
    };

    let mut prompter: Box<dyn Prompter> = if options.plain {
        Box::new(LinePrompter::stdio())
    } else {
        Box::new(TerminalPrompter::new())
    };

    let mode = match options.mode {
        Some(mode) => mode,
        None => ask_for_mode(prompter.as_mut())?,
    };

    if mode == AppMode::Server {
        if !options.config.is_file() {
            return Err(format!(
                "no configuration at {}; run with --mode cli first",
                options.config.display()
            )
            .into());
        }
        show_existing(&options.config)?;
        println!("Configuration ready for the pipeline server.");
        return Ok(());
    }

    if !options.should_run_wizard() {
        return show_existing(&options.config);
    }

    let store = SettingsStore::at_path(&options.config)?;
    let location = store
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| store.id().to_string());
    let wizard = SetupWizard::new(default_registry()).with_store(store);
    let outcome = wizard.run(prompter.as_mut())?;

    match (&outcome.saved_to, &outcome.persist_error) {
        (Some(_), _) => println!("Configuration saved to {location}"),
        (None, Some(e)) => {
            println!("Failed to save configuration: {e}");
            print_document(&outcome.document)?;
        }
        (None, None) => print_document(&outcome.document)?,
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("pipeconf error: {e}");
        print_usage();
        std::process::exit(1);
    }
}

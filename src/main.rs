use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info, warn};

use sloc_tally::cli::{Cli, Commands, LanguagesArgs, ScanArgs};
use sloc_tally::config::{Config, ConfigLoader, FileConfigLoader};
use sloc_tally::discovery::{DirectoryWalker, GlobFilter};
use sloc_tally::language::SharedRegistry;
use sloc_tally::output::{ProjectStatistics, format_languages};
use sloc_tally::scanner::{ScanOptions, Scanner};
use sloc_tally::{EXIT_SCAN_ERROR, EXIT_SUCCESS, exit_code_for, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Languages(args) => run_languages(args, &cli),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            debug!(kind = e.error_type(), "run failed");
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> sloc_tally::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> sloc_tally::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let registry = config.registry();

    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scanner.extensions.clone());
    let mut exclude_patterns = config.scanner.exclude.clone();
    exclude_patterns.extend(args.exclude.iter().cloned());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    let use_gitignore = config.scanner.gitignore && !args.no_gitignore;
    let walker = DirectoryWalker::with_gitignore(filter, use_gitignore);
    let files = walker.discover(&args.paths, &registry)?;
    info!(files = files.len(), languages = registry.len(), "starting scan");

    let options = ScanOptions::new()
        .with_inline_block(args.inline_block.unwrap_or(config.scanner.inline_block))
        .with_parallel(args.parallel || config.scanner.parallel);
    let scanner = Scanner::new(SharedRegistry::new(registry)).with_options(options);

    let results = match scanner.scan(&files) {
        Ok(results) => results,
        Err(e) => {
            warn!(completed = e.completed.len(), "partial results discarded");
            eprintln!("Error: {e}");
            return Ok(EXIT_SCAN_ERROR);
        }
    };

    let stats = ProjectStatistics::new(results).with_sort(args.sort);
    let output = args.format.stats_formatter(args.by_file).format(&stats)?;
    write_output(args.output.as_deref(), &output)?;

    Ok(EXIT_SUCCESS)
}

fn run_languages(args: &LanguagesArgs, cli: &Cli) -> sloc_tally::Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let output = format_languages(&config.registry(), args.format)?;
    write_output(None, &output)?;
    Ok(EXIT_SUCCESS)
}

fn write_output(output_path: Option<&Path>, content: &str) -> sloc_tally::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        info!(path = %path.display(), "report written");
    } else {
        print!("{content}");
    }
    Ok(())
}

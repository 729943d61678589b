use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use stricture::linter::{Diagnostic, Severity};
use stricture::{Error, Linter, Tier, parse};

mod cli;
use cli::{Cli, Commands, OutputFormat};

/// Lint outcome for one input file.
struct FileReport {
    path: PathBuf,
    result: stricture::Result<(Tier, Vec<Diagnostic>)>,
}

fn current_dir() -> stricture::Result<PathBuf> {
    std::env::current_dir().map_err(|source| Error::Io {
        path: PathBuf::from("."),
        source,
    })
}

fn read_file(path: &Path) -> stricture::Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_linter(config: Option<&Path>, root: Option<&Path>, cwd: &Path) -> stricture::Result<Linter> {
    let (cfg, cfg_path) = stricture::config::load(config, cwd)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    let root = stricture::config::resolve_root(root, &cfg, cfg_path.as_deref(), cwd);
    log::debug!("Classifying paths relative to {}", root.display());
    Linter::new(&cfg, root)
}

fn lint_file(linter: &Linter, cwd: &Path, file: &Path) -> FileReport {
    let absolute = cwd.join(file);
    let tier = linter.classify(&absolute);
    let result = read_file(file).map(|input| {
        if tier == Tier::None {
            log::debug!("Skipping {} (tier none)", file.display());
            return (tier, Vec::new());
        }
        let tree = parse(&input);
        (tier, linter.lint(&tree, &input, &absolute))
    });
    FileReport {
        path: file.to_path_buf(),
        result,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> stricture::Result<ExitCode> {
    let cwd = current_dir()?;

    match cli.command {
        Commands::Lint {
            files,
            root,
            strict_warnings,
            format,
            quiet,
        } => {
            let linter = build_linter(cli.config.as_deref(), root.as_deref(), &cwd)?;

            // Parallel per document; collect keeps input order.
            let reports: Vec<FileReport> = files
                .par_iter()
                .map(|file| lint_file(&linter, &cwd, file))
                .collect();

            let summary = Summary::from_reports(&reports);
            match format {
                OutputFormat::Human => print_human(&reports, &summary, &linter, quiet),
                OutputFormat::Json => print_json(&reports, &summary)?,
            }

            let code = if summary.unreadable > 0 {
                2
            } else if summary.errors > 0 || (strict_warnings && summary.warnings > 0) {
                1
            } else {
                0
            };
            Ok(ExitCode::from(code))
        }
        Commands::Classify { files, root } => {
            let linter = build_linter(cli.config.as_deref(), root.as_deref(), &cwd)?;
            for file in &files {
                println!("{}\t{}", linter.classify(&cwd.join(file)), file.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Parse { file } => {
            let input = read_file(&file)?;
            let tree = parse(&input);
            println!("{:#?}", tree);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Rules => {
            for rule in stricture::linter::default_registry().rules() {
                println!("{}\t{}\t{}", rule.name(), rule.tier(), rule.severity());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    unreadable: usize,
    by_rule: BTreeMap<String, usize>,
    by_tier: BTreeMap<Tier, usize>,
}

impl Summary {
    fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            let Ok((tier, diagnostics)) = &report.result else {
                summary.unreadable += 1;
                continue;
            };
            for diag in diagnostics {
                match diag.severity {
                    Severity::Error => summary.errors += 1,
                    Severity::Warning => summary.warnings += 1,
                }
                *summary.by_rule.entry(diag.code.clone()).or_default() += 1;
                *summary.by_tier.entry(*tier).or_default() += 1;
            }
        }
        summary
    }

    fn total(&self) -> usize {
        self.errors + self.warnings
    }
}

fn print_human(reports: &[FileReport], summary: &Summary, linter: &Linter, quiet: bool) {
    for report in reports {
        match &report.result {
            Ok((tier, diagnostics)) if diagnostics.is_empty() => {
                if !quiet {
                    println!("{}: no issues found ({tier})", report.path.display());
                }
            }
            Ok((_, diagnostics)) => print_diagnostics(diagnostics, &report.path),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    if summary.total() == 0 {
        return;
    }

    println!(
        "\nFound {} issue(s): {} error(s), {} warning(s)",
        summary.total(),
        summary.errors,
        summary.warnings
    );
    // Registry order, so the summary reads strict to light.
    for rule in linter.rules() {
        if let Some(count) = summary.by_rule.get(rule.name()) {
            println!("  {:<20} {count}", rule.name());
        }
    }
    for (tier, count) in &summary.by_tier {
        println!("  {:<20} {count}", format!("[{tier}]"));
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic], file: &Path) {
    let file_name = file.display();

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };

        match &diag.location {
            Some(location) => println!(
                "{severity_str}[{}]: {} at {}:{}:{}",
                diag.code, diag.message, file_name, location.line, location.column
            ),
            None => println!(
                "{severity_str}[{}]: {} at {}",
                diag.code, diag.message, file_name
            ),
        }
    }
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'a str,
    severity: Severity,
    message: &'a str,
    line: Option<usize>,
    column: Option<usize>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<JsonFile<'a>>,
    summary: &'a Summary,
}

fn print_json(reports: &[FileReport], summary: &Summary) -> stricture::Result<()> {
    let files = reports
        .iter()
        .map(|report| {
            let path = report.path.display().to_string();
            match &report.result {
                Ok((tier, diagnostics)) => JsonFile {
                    path,
                    tier: Some(*tier),
                    error: None,
                    diagnostics: diagnostics
                        .iter()
                        .map(|d| JsonDiagnostic {
                            code: &d.code,
                            severity: d.severity,
                            message: &d.message,
                            line: d.location.as_ref().map(|l| l.line),
                            column: d.location.as_ref().map(|l| l.column),
                        })
                        .collect(),
                },
                Err(e) => JsonFile {
                    path,
                    tier: None,
                    error: Some(e.to_string()),
                    diagnostics: Vec::new(),
                },
            }
        })
        .collect();

    let output = JsonOutput { files, summary };
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)
        .map_err(io::Error::from)
        .and_then(|()| io::Write::write_all(&mut stdout, b"\n"))
        .map_err(|source| Error::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::warn;

use talent_match::dashboard::{Dashboard, DashboardEvent};
use talent_match::input::cache::CachePolicy;
use talent_match::logging::init_tracing;
use talent_match::model::profile::BenchmarkIds;
use talent_match::model::settings::{
    DEFAULT_BENCHMARK_IDS, DEFAULT_ROLE_NAME, DEFAULT_ROLE_PURPOSE, JobLevel, JobParameters,
    MatchSettings,
};
use talent_match::pipeline::stage4_report::write_reports;
use talent_match::profile_text::TemplateProfileGenerator;

#[derive(Debug, Parser)]
#[command(name = "talent-match", version, about = "Rank employees by competency match against a benchmark group")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a dataset directory and write reports.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Directory holding employees and competencies_yearly tables (.tsv/.csv, optionally .gz).
    #[arg(long)]
    input: PathBuf,

    /// Output directory for reports.
    #[arg(long)]
    out: PathBuf,

    /// Comma separated benchmark employee ids.
    #[arg(long, default_value = DEFAULT_BENCHMARK_IDS)]
    benchmark: String,

    #[arg(long, default_value = DEFAULT_ROLE_NAME)]
    role_name: String,

    #[arg(long, value_enum, default_value_t = JobLevel::Middle)]
    job_level: JobLevel,

    #[arg(long, default_value = DEFAULT_ROLE_PURPOSE)]
    role_purpose: String,

    /// Number of candidates listed in the report.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Employee id for the competency comparison; defaults to the top match.
    #[arg(long)]
    compare: Option<String>,

    /// Fail instead of dropping employees missing from the employee table.
    #[arg(long)]
    strict_names: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_dir: PathBuf,
    out_dir: PathBuf,
    params: JobParameters,
    settings: MatchSettings,
    compare: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let Command::Run(args) = cli.command;
    let config = build_config(args)?;

    let mut dashboard = Dashboard::new(
        &config.input_dir,
        config.settings.clone(),
        CachePolicy::default(),
        TemplateProfileGenerator,
    )
    .with_params(config.params.clone());

    let view = match &config.compare {
        Some(id) => dashboard.handle(DashboardEvent::SelectEmployee(id.clone())),
        None => dashboard.render(),
    }
    .map_err(|e| e.to_string())?;

    if let Some(id) = &config.compare {
        let shown = view.radar.as_ref().map(|r| r.employee_id.as_str());
        if shown != Some(id.as_str()) {
            warn!(
                employee_id = %id,
                "requested comparison employee is not ranked; showing the top match instead"
            );
        }
    }

    write_reports(&view, &config.out_dir).map_err(|e| e.to_string())?;
    Ok(())
}

fn build_config(args: RunArgs) -> Result<RunConfig, String> {
    if args.top == 0 {
        return Err("--top must be at least 1".to_string());
    }
    let benchmark_ids = BenchmarkIds::parse(&args.benchmark);
    if benchmark_ids.is_empty() {
        return Err("--benchmark needs at least one employee id".to_string());
    }

    let mut settings = if args.strict_names {
        MatchSettings::strict_names()
    } else {
        MatchSettings::default_v1()
    };
    settings.top_n = args.top;

    Ok(RunConfig {
        input_dir: args.input,
        out_dir: args.out,
        params: JobParameters {
            role_name: args.role_name,
            job_level: args.job_level,
            role_purpose: args.role_purpose,
            benchmark_ids,
        },
        settings,
        compare: args.compare,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

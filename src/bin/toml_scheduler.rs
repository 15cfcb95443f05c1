use advising_scheduler::core::plan::plan_departments;
use advising_scheduler::core::{ConfigProvider, Pipeline};
use advising_scheduler::utils::{logger, validation::Validate};
use advising_scheduler::{
    LocalStorage, SchedulePipeline, ScheduleError, SchedulerEngine, TomlConfig,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-scheduler")]
#[command(about = "Advising scheduler driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "scheduler.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the target group size from config
    #[arg(long)]
    group_size: Option<usize>,

    /// Override the small-major threshold from config
    #[arg(long)]
    small_major_threshold: Option<usize>,

    /// Show the planned groups per department without writing a schedule
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based advising scheduler");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    config.override_grouping(args.group_size, args.small_major_threshold);
    if let Some(group_size) = args.group_size {
        tracing::info!("🔧 Group size overridden to: {}", group_size);
    }
    if let Some(threshold) = args.small_major_threshold {
        tracing::info!("🔧 Small-major threshold overridden to: {}", threshold);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.data_dir().to_string());
    let pipeline = SchedulePipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no schedule will be written");
        if let Err(e) = perform_dry_run(&pipeline) {
            fail(&e);
        }
        return;
    }

    let engine = SchedulerEngine::new_with_monitoring(pipeline, monitor_enabled);
    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Schedule written successfully");
            println!("✅ success! Schedule saved to: {}", output_path);
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &ScheduleError) -> ! {
    tracing::error!(
        "❌ Scheduling failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Scheduler: {}", config.scheduler.name);
    if let Some(description) = &config.scheduler.description {
        println!("  Description: {}", description);
    }
    println!("  Data directory: {}", config.data_dir());
    println!("  Students: {}", config.student_majors_path());
    println!("  Majors: {}", config.major_departments_path());
    println!("  Advisers: {}", config.department_advisers_path());
    println!("  Output: {}", config.schedule_path());
    println!(
        "  Group size: {} (unbalanced majors below {} form one group)",
        config.group_size(),
        config.small_major_threshold()
    );

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(
    pipeline: &SchedulePipeline<LocalStorage, TomlConfig>,
) -> advising_scheduler::Result<()> {
    let data = pipeline.extract()?;
    let partitioner = pipeline.partitioner()?;
    let plan = plan_departments(&data, &partitioner)?;

    println!("🔍 Dry Run Analysis:");
    println!(
        "  {} students, {} majors, {} departments",
        data.roster.len(),
        data.majors.major_department.len(),
        plan.len()
    );

    for department in &plan {
        println!();
        println!(
            "🏛️ {} - adviser: {}",
            department.department,
            department.adviser.as_deref().unwrap_or("(none)")
        );
        for major in &department.majors {
            println!(
                "  {}: {} students -> groups {:?}",
                major.major, major.students, major.group_sizes
            );
        }
        println!(
            "  {} students in {} time slots",
            department.students(),
            department.slots()
        );
    }

    let unmapped: Vec<&str> = data
        .roster
        .majors()
        .filter(|major| data.majors.department_of(major).is_none())
        .collect();
    if !unmapped.is_empty() {
        println!();
        println!("⚠️ Majors without a department: {}", unmapped.join(", "));
    }

    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}

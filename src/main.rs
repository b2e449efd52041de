use clap::Parser;
use doctor_finder::app::render::render_list;
use doctor_finder::utils::error::ErrorSeverity;
use doctor_finder::utils::logger;
use doctor_finder::{CliConfig, DoctorListViewModel, HttpDoctorSource, LoadState, PageLocation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting doctor-finder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(e.severity()));
        }
    };

    let location = PageLocation::parse(&config.page_url)?;
    let mut view_model = DoctorListViewModel::new(location);
    let source = HttpDoctorSource::from_config(&config);

    tracing::info!("Fetching doctors from {}", source.endpoint());
    view_model.load(&source).await;

    let criteria = cli.criteria_over(view_model.criteria());
    view_model.set_criteria(criteria);

    println!("{}", render_list(view_model.view()));
    println!();
    println!(
        "{} of {} doctors shown",
        view_model.doctors().len(),
        view_model.raw_doctors().len()
    );
    println!("🔗 {}", view_model.location().current());

    if let Some(doctor_id) = &cli.book {
        let notification = view_model.book_appointment(doctor_id);
        println!("🔔 {}", notification.message);
    }

    if let LoadState::Failed { reason } = view_model.load_state() {
        eprintln!("⚠️  Doctor list unavailable: {}", reason);
        std::process::exit(exit_code(ErrorSeverity::Medium));
    }

    Ok(())
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

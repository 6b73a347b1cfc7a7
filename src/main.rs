//! fsdgen's entry point. Parses arguments, loads the project configuration
//! and dispatches to the requested generator.

use fsdgen::{
    cli::{get_args, Args, Command},
    config::get_config,
    error::{default_error_handler, Result},
    generator::{
        component::create_component, service::create_service_hook, store::create_store,
        structure::create_structure, Report,
    },
    logger::init_logger,
    renderer::PlaceholderRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn print_report(report: &Report) {
    for warning in &report.warnings {
        log::warn!("{}", warning);
    }
    for line in report.lines() {
        println!("{}", line);
    }
}

fn run(args: Args) -> Result<()> {
    let config = get_config(args.config.as_deref(), ".")?;
    let renderer = PlaceholderRenderer::new();

    let report = match args.command {
        Command::Component { path, name } => create_component(&renderer, path, &name)?,
        Command::Structure { project_root, slices } => {
            let slices = slices.unwrap_or(config.slices);
            create_structure(&renderer, project_root, &slices)?
        }
        Command::Service { feature_path, name } => {
            create_service_hook(&renderer, feature_path, &name, &config.api_client_import)?
        }
        Command::Store { feature_path, name } => create_store(&renderer, feature_path, &name)?,
    };

    print_report(&report);
    Ok(())
}

use bookprep::application::{convert_to_colab, update_html_styles, update_notebook, NotebookOutcome};
use bookprep::cli::{format_batch_summary, format_pipeline_report, Cli, Commands};
use bookprep::domain::Audience;
use bookprep::error::BookprepError;
use bookprep::infrastructure::Config;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BookprepError> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::ConvertToColab { input, output } => {
            let report = convert_to_colab(&input, &output, &config)?;
            println!("Converted {} -> {}", input.display(), output.display());
            println!("{}", format_pipeline_report(&report));
            Ok(())
        }
        Commands::UpdateHtmlStyles { path } => {
            let report = update_html_styles(&path, &config)?;
            println!("\n{}", format_batch_summary(&report));
            Ok(())
        }
        Commands::UpdateNotebooks {
            input,
            output,
            teacher,
        } => {
            let audience = Audience::from_teacher_flag(&teacher);
            match update_notebook(&input, &output, audience, &config)? {
                NotebookOutcome::Skipped => {}
                NotebookOutcome::Written(report) => {
                    println!(
                        "Updated {} -> {} ({})",
                        input.display(),
                        output.display(),
                        audience
                    );
                    println!("{}", format_pipeline_report(&report));
                }
            }
            Ok(())
        }
    }
}

use anyhow::{bail, Result};
use chrono::Local;
use colored::Colorize;

use crate::cli::output::OutputOptions;
use crate::core::config::AppConfig;
use crate::core::document;
use crate::core::gemini;
use crate::core::models::record::{CostRecord, FileStatus};
use crate::core::report;
use crate::core::scanner;

const PREVIEW_CHARS: usize = 200;

/// First 200 characters of the extracted text, with an ellipsis when
/// there is more.
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        out.push_str("...");
    }
    out
}

pub async fn run(opts: &OutputOptions) -> Result<()> {
    let config = AppConfig::load()?;

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("Config issue: {}", issue);
        }
        bail!(
            "Invalid configuration — fix {} and retry",
            AppConfig::config_path().display()
        );
    }

    println!(
        "Scanning directory: {} for images...",
        config.image_dir.display()
    );
    let scan = scanner::scan(&config.image_dir)?;
    for name in &scan.skipped {
        println!("Skipping non-image file: {}", name);
    }

    let client = reqwest::Client::new();
    let mut records: Vec<CostRecord> = Vec::new();
    let mut processed_count = 0usize;

    for candidate in &scan.candidates {
        println!(
            "\n--- Processing image: {} ---",
            candidate.file_name.bold()
        );
        let started = std::time::Instant::now();

        let outcome = gemini::extract_text(
            &client,
            &config.api_key,
            &config.model,
            &candidate.path,
        )
        .await;

        if opts.verbose {
            eprintln!(
                "{}: extraction took {:.1}s ({} input / {} output tokens)",
                candidate.file_name,
                started.elapsed().as_secs_f64(),
                outcome.input_tokens,
                outcome.output_tokens
            );
        }

        let record = match outcome.text {
            Some(text) => {
                println!("Extracted Text Preview:");
                println!("{}", preview(&text));

                let doc_path = document::document_path_for(&candidate.path);
                match document::save_text_as_docx(&text, &doc_path) {
                    Ok(()) => {
                        println!("Text successfully saved to: {}", doc_path.display());
                        processed_count += 1;
                        CostRecord::success(
                            &candidate.file_name,
                            outcome.input_tokens,
                            outcome.output_tokens,
                            &config.pricing,
                        )
                    }
                    Err(e) => {
                        eprintln!(
                            "Error saving document to '{}': {:#}",
                            doc_path.display(),
                            e
                        );
                        CostRecord::failed(&candidate.file_name)
                    }
                }
            }
            None => {
                println!(
                    "No text extracted or an error occurred for '{}'.",
                    candidate.file_name
                );
                CostRecord::failed(&candidate.file_name)
            }
        };

        let label = match record.status {
            FileStatus::Success => "Success".green(),
            FileStatus::Failed => "Failed".red(),
        };
        println!("Status: {}", label);
        records.push(record);
    }

    println!("\n--- Processing Complete ---");
    println!(
        "Successfully processed {} images in '{}'.",
        processed_count,
        config.image_dir.display()
    );

    if records.is_empty() {
        println!("No image files processed to generate a report.");
        return Ok(());
    }

    match report::write_report(&config.image_dir, &records, &Local::now()) {
        Ok(path) => println!("Cost analysis report saved to: {}", path.display()),
        Err(e) => eprintln!("Error writing cost report: {:#}", e),
    }

    Ok(())
}

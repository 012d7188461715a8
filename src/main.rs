mod fetch;
mod parser;
mod records;
mod report;
mod roster;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

#[derive(Parser)]
#[command(name = "course_snapshot", about = "Course snapshot extractor and PDF builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage 1: fetch course pages and write the JSON snapshot
    Extract,
    /// Stage 2: render one PDF per school from the JSON snapshot
    Render,
    /// Both stages in sequence
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract => run_extract().await,
        Commands::Render => run_render(),
        Commands::Run => {
            run_extract().await?;
            run_render()
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

/// Stage 1: course list -> fetched pages -> JSON snapshot. One page is
/// fetched and fully parsed before the next begins; any fetch failure
/// aborts the run with nothing written.
async fn run_extract() -> Result<()> {
    let rows = roster::load(roster::ROSTER_FILE)?;
    if rows.is_empty() {
        println!("No courses with URLs in {}.", roster::ROSTER_FILE);
        return Ok(());
    }

    let fetcher = fetch::Fetcher::new()?;

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut courses = Vec::with_capacity(rows.len());
    for row in &rows {
        info!("Extracting: {}", row.url);
        let body = fetcher.page(&row.url).await?;
        courses.push(parser::extract_course(row, &body));
        pb.inc(1);
    }
    pb.finish_and_clear();

    records::write_snapshot(records::SNAPSHOT_FILE, &courses)?;
    println!("Wrote {} courses to {}", courses.len(), records::SNAPSHOT_FILE);
    Ok(())
}

/// Stage 2: JSON snapshot -> one PDF per school.
fn run_render() -> Result<()> {
    let courses = records::read_snapshot(records::SNAPSHOT_FILE)?;
    if courses.is_empty() {
        println!("Snapshot is empty. Nothing to render.");
        return Ok(());
    }

    let output_dir = Path::new(report::OUTPUT_DIR);
    fs::create_dir_all(output_dir)?;

    let groups = report::group_by_school(&courses);
    let pb = ProgressBar::new(groups.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut written = 0usize;
    for (school, group) in &groups {
        info!("Rendering: {} ({} courses)", school, group.len());
        let path = report::build_school_pdf(school, group, output_dir)?;
        println!("Wrote {}", path.display());
        written += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("Wrote {} PDFs to {}", written, output_dir.display());
    Ok(())
}

use clap::{Parser, Subcommand};
use colored::*;
use tracing::info;

use pf_content::content::{self, Profile};
use pf_navigation::section::Section;

#[derive(Parser)]
struct Cli {
    /// Check or export portfolio content files
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a content file and print a summary per section
    Check {
        /// File path to the content JSON
        #[arg(short, long)]
        file: String,
    },
    /// Write the built-in profile to a JSON file as a starting point
    Export {
        /// File path to write
        #[arg(short, long)]
        file: String,
    },
}

fn main() {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt().with_target(true).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Export { file } => export(&file),
    }
}

fn check(file: &str) {
    let profile = match content::load_content_file(std::path::Path::new(file)) {
        Ok(profile) => profile,
        Err(e) => {
            println!("{} {}", "Failed to load content:".red(), e);
            std::process::exit(1);
        }
    };

    let problems = content_problems(&profile);

    println!("{}", format!("Content summary for {}", file).bold());

    for section in Section::ALL {
        let summary = match section {
            Section::Home => format!("{} — {}", profile.name, profile.tagline),
            Section::About => format!(
                "{} story paragraph(s), {} service(s)",
                profile.story.len(),
                profile.services.len()
            ),
            Section::Skills => format!(
                "{} skill(s), {} tool(s)",
                profile.skills.len(),
                profile.tools.len()
            ),
            Section::Projects => format!("{} project(s)", profile.projects.len()),
            Section::Contact => format!("{} contact link(s)", profile.contact_links.len()),
        };

        println!("  {} {}", section.title().blue(), summary);
    }

    if problems.is_empty() {
        println!("{}", "ok".green());
    } else {
        for problem in &problems {
            println!("{} {}", "problem:".red(), problem);
        }
        std::process::exit(1);
    }
}

fn content_problems(profile: &Profile) -> Vec<String> {
    let mut problems = vec![];

    if profile.name.trim().is_empty() {
        problems.push("The profile has no name".to_string());
    }

    if profile.story.is_empty() {
        problems.push("The about section has no story".to_string());
    }

    for skill in &profile.skills {
        if skill.level > 100 {
            problems.push(format!(
                "Skill level out of range for {}: {}",
                skill.name, skill.level
            ));
        }
    }

    for project in &profile.projects {
        if project.technologies.is_empty() {
            problems.push(format!("Project {} lists no technologies", project.title));
        }
    }

    for link in &profile.contact_links {
        if !(link.link.starts_with("http") || link.link.starts_with("mailto:")) {
            problems.push(format!(
                "Contact link {} does not look like a URL: {}",
                link.title, link.link
            ));
        }
    }

    problems
}

fn export(file: &str) {
    let profile = Profile::new();

    profile.save(std::path::Path::new(file));

    info!("Exported built-in profile");
    println!("{} {}", "Wrote".green(), file);
}

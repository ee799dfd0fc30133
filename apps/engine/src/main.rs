use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use engine::models::catalog::sample_catalog;
use engine::{AppState, Config, Tier};

const SAMPLE_RESUME: &str = r#"
Alex Morgan
alex.morgan@example.com | (555) 010-2030 | linkedin.com/in/alexmorgan

Summary
Frontend developer with 3 years building accessible web apps.

Experience
Frontend Developer, Brightside
- Built a React design system used by 40 engineers across 6 teams
- Cut bundle size by 35% by moving legacy JavaScript to modern CSS and HTML

Skills
JavaScript, React, CSS, HTML, Git, Node.js

Education
B.S. Computer Science, Lakeside University
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting matching engine v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Matching config: cap {} / qualified {} / close match {}",
        config.matching.score_cap,
        config.matching.qualified_threshold,
        config.matching.close_match_threshold
    );

    let state = AppState::with_rubric(config, sample_catalog());

    let analysis = state.analyze(SAMPLE_RESUME).await?;
    info!(
        "Analysis complete: overall {}/100, {} skills extracted",
        analysis.overall_score,
        analysis.extracted_skills.len()
    );

    let categorized = state.categorize_current();
    for tier in [Tier::Qualified, Tier::CloseMatch, Tier::SkillGap] {
        let jobs = categorized.tier(tier);
        info!("{}: {} job(s)", tier.label(), jobs.len());
        for job in jobs {
            info!(
                "  #{} {} @ {} ({}%, missing: {})",
                job.id(),
                job.job.title,
                job.job.company,
                job.match_score,
                job.missing_skills.join(", ")
            );
        }
    }

    let report = serde_json::to_string_pretty(&serde_json::json!({
        "analysis": analysis,
        "jobs": categorized,
    }))
    .context("Failed to serialize session report")?;
    println!("{report}");

    Ok(())
}

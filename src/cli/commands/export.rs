use anyhow::Context;
use std::path::PathBuf;

use crate::config::Config;
use crate::db::Store;
use crate::domain::AssessmentId;
use crate::export::{render_report, report_filename};

pub async fn cmd_export(config: &Config, id: i32, out: Option<PathBuf>) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    let Some(assessment) = store.get_assessment(AssessmentId::new(id)).await? else {
        println!("Assessment {id} not found.");
        return Ok(());
    };

    let responses = assessment
        .response_set()
        .with_context(|| format!("Assessment {id} has malformed responses"))?;
    let body = render_report(&responses)?;

    let path =
        out.unwrap_or_else(|| PathBuf::from(report_filename(chrono::Utc::now().date_naive())));
    std::fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Report for assessment {id} written to {}", path.display());
    Ok(())
}

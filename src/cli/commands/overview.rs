use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_overview(config: &Config) -> anyhow::Result<()> {
    let shared = SharedState::new(config.clone()).await?;
    let overview = shared.analytics_service.overview().await?;

    println!("Overview (last {} days)", crate::analytics::OVERVIEW_WINDOW_DAYS);
    println!("{:-<48}", "");
    println!("Assessments:          {}", overview.total_assessments);
    println!("Users:                {}", overview.total_users);
    println!("Avg total score:      {}", overview.average_total_score);
    println!("Avg positive items:   {}", overview.average_positive_items);

    if overview.recent_trend.is_empty() {
        println!();
        println!("No daily summaries yet.");
        return Ok(());
    }

    println!();
    for point in &overview.recent_trend {
        println!(
            "  {}  {:>5} assessments  avg {:.2}",
            point.date, point.assessments, point.avg_score
        );
    }

    if !overview.factor_prevalence.is_empty() {
        println!();
        println!("Factor prevalence:");
        for (factor, value) in &overview.factor_prevalence {
            println!("  {factor:<12} {value:.2}");
        }
    }

    Ok(())
}

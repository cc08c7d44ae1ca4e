use anyhow::Context;
use std::io::Read;

use crate::export::factor_lines;
use crate::scoring::{FactorStatus, ResponseSet};

pub fn cmd_score(file: &str) -> anyhow::Result<()> {
    let raw = if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?
    };

    let values: Vec<i64> =
        serde_json::from_str(&raw).context("Expected a JSON array of 90 integers")?;
    let responses = ResponseSet::try_from(values)?;
    let report = responses.score();

    println!("SCL-90 Report");
    println!("{:-<48}", "");
    println!("Total score:      {}", report.total);
    println!("Positive items:   {}", report.positive_count);
    println!("Average score:    {}", report.average);
    println!();
    println!(" {:<11} {:>6}  Status", "Factor", "Score");

    for (name, score, status) in factor_lines(&responses) {
        let marker = match status {
            FactorStatus::Normal => " ",
            FactorStatus::Elevated => "!",
        };
        println!("{marker}{name:<11} {score:>6}  {}", status.label());
    }

    Ok(())
}

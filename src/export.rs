//! CSV report for a single answer sheet.
//!
//! Layout: a UTF-8 byte-order mark, the factor summary section, a blank line,
//! then one row per item.

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::{factor_for_item, item};
use crate::scoring::{FactorStatus, ResponseSet, format_average};

pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const BOM: &[u8] = "\u{feff}".as_bytes();

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush CSV buffer: {0}")]
    Flush(String),
}

/// Download name for a report exported on `date`.
#[must_use]
pub fn report_filename(date: NaiveDate) -> String {
    format!("scl90-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Renders the full report.
pub fn render_report(responses: &ResponseSet) -> Result<Vec<u8>, ExportError> {
    let mut summary = section_writer();
    summary.write_record(["【维度因子分析】"])?;
    summary.write_record(["维度名称", "因子分", "评估结论"])?;
    for (name, score, status) in factor_lines(responses) {
        summary.write_record([name.as_str(), score.as_str(), status.label()])?;
    }

    let mut detail = section_writer();
    detail.write_record(["【90项原始答卷详情】"])?;
    detail.write_record(["题号", "条目内容", "所属维度", "得分"])?;
    for (id, value) in responses.iter() {
        let text = item(id).map_or("", |i| i.text);
        let id_label = id.to_string();
        let value = value.to_string();
        detail.write_record([
            id_label.as_str(),
            text,
            factor_for_item(id).name,
            value.as_str(),
        ])?;
    }

    let mut out = BOM.to_vec();
    out.extend(finish(summary)?);
    out.push(b'\n');
    out.extend(finish(detail)?);
    Ok(out)
}

/// Factor summary rows: display name, 2-decimal score, status.
#[must_use]
pub fn factor_lines(responses: &ResponseSet) -> Vec<(String, String, FactorStatus)> {
    responses
        .score()
        .factors()
        .into_iter()
        .map(|f| (f.name.to_string(), format_average(f.score), f.status))
        .collect()
}

fn section_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}

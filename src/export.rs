use crate::assemble::{OutputRecord, PeriodLabel};

/// Renders the output records as CSV in the canonical column order,
/// placeholder columns included so the arity matches the sheet renderer.
pub fn records_to_csv(records: &[OutputRecord]) -> String {
    let mut output = String::new();
    output.push_str(&OutputRecord::HEADERS.join(","));
    output.push('\n');

    for record in records {
        let fields = [
            record.employee_number.clone(),
            record.employee_name.clone(),
            record.date.format("%Y-%m-%d").to_string(),
            record.project.clone(),
            format!("{}", record.hours),
            record.comment.clone(),
            record.period.to_string(),
            record.period_start.format("%Y-%m-%d").to_string(),
            record.period_end.format("%Y-%m-%d").to_string(),
            record.fiscal_year.to_string(),
            record.original_tag.clone(),
            record.aux_tag2.clone(),
            record.aux_tag3.clone(),
            record.project_description.clone(),
            record.task.clone(),
            record.task_description.clone(),
            record.job_code.clone(),
            record.job_code_description.clone(),
            record.running_total.clone(),
            record.alternate_shading.clone(),
        ];

        let line: Vec<String> = fields.iter().map(|f| escape_csv_field(f)).collect();
        output.push_str(&line.join(","));
        output.push('\n');
    }

    output
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// A short human-readable run summary in Markdown.
pub fn summary_markdown(records: &[OutputRecord], label: &PeriodLabel) -> String {
    let total_hours: f64 = records.iter().map(|r| r.hours).sum();

    let mut projects: Vec<&str> = records.iter().map(|r| r.project.as_str()).collect();
    projects.sort_unstable();
    projects.dedup();

    let mut output = String::new();
    output.push_str(&format!("# Timesheet - {}\n\n", label));
    output.push_str(&format!("**Records:** {}\n\n", records.len()));
    output.push_str(&format!("**Total hours:** {:.2}\n\n", total_hours));

    output.push_str("## Projects\n\n");
    for project in &projects {
        let hours: f64 = records
            .iter()
            .filter(|r| r.project == *project)
            .map(|r| r.hours)
            .sum();
        output.push_str(&format!("- {} ({:.2} h)\n", project, hours));
    }
    output.push('\n');

    output
}

use timesheet_normalizer::*;

fn main() -> anyhow::Result<()> {
    println!("📅 Timesheet Normalization Demo\n");
    println!("Unpivots a wide July export into sorted, fiscal-tagged records.\n");

    let table = RawTable::new(vec![
        vec![
            Cell::text("Tag 1"),
            Cell::text("Tag 2"),
            Cell::text("Tag 3"),
            Cell::text("Notes"),
            Cell::Number(45473.0), // 2024-07-01
            Cell::Number(45474.0), // 2024-07-02
            Cell::Number(45475.0), // 2024-07-03
            Cell::text("Total"),
        ],
        vec![
            Cell::text("ACME-123456"),
            Cell::text("DEV"),
            Cell::text("J1"),
            Cell::text("feature work"),
            Cell::Number(3.5),
            Cell::Number(4.0),
            Cell::Empty,
            Cell::Number(7.5),
        ],
        vec![
            Cell::text("Office"),
            Cell::Empty,
            Cell::Empty,
            Cell::text("admin"),
            Cell::Number(1.0),
            Cell::Empty,
            Cell::Number(0.5),
            Cell::Number(1.5),
        ],
    ]);

    let config = TimesheetConfig {
        identity: Identity {
            employee_number: "10042".to_string(),
            employee_name: "Jane Doe".to_string(),
        },
        layout: TableLayout::extended(),
    };

    let normalized = normalize_timesheet(&table, &config)?;

    println!("Period: {}", normalized.period_label);
    println!("Records: {}\n", normalized.records.len());

    for warning in &normalized.warnings {
        println!("⚠️  {}", warning);
    }

    print!("{}", records_to_csv(&normalized.records));
    println!();
    print!(
        "{}",
        summary_markdown(&normalized.records, &normalized.period_label)
    );

    Ok(())
}

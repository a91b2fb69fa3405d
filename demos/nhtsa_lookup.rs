use vindecode::nhtsa::*;
use vindecode::report::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vindecode=info".into()),
        )
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1HGCM82633A004352".to_string());
    let locale = match std::env::var("VINDECODE_LOCALE").as_deref() {
        Ok("uk") => Locale::Ukrainian,
        _ => Locale::English,
    };

    let client = NhtsaClient::from_env()?;
    let report = lookup(&client, &raw).await?;

    for w in &report.warnings {
        println!("WARNING: {w}");
    }
    for e in &report.errors {
        println!("ERROR: {e}");
    }

    let rows = report.fields.display_rows(locale);
    if rows.is_empty() {
        println!("No data found.");
    }
    for row in &rows {
        println!("{:<32} {}", row.label, row.value);
    }

    if !report.recalls.is_empty() {
        println!("\n{}", recalls_heading(locale, report.recalls.len()));
        for recall in &report.recalls {
            println!("  {}: {}", recall.campaign_number, recall.summary);
        }
    }

    if let Some(rating) = &report.safety {
        println!();
        for (label, value) in rating.rows(locale) {
            println!("{label:<32} {value}");
        }
    }

    Ok(())
}

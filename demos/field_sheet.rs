use vindecode::Vin;
use vindecode::report::*;

fn main() {
    let vin = Vin::parse("1HGCM82633A004352").unwrap();

    // Pretend these came from a registry; placeholders are hidden on display.
    let mut report = VehicleReport::new(&vin);
    report.fields.insert("Make", "HONDA");
    report.fields.insert("Model", "Accord");
    report.fields.insert("Body Class", "Coupe");
    report.fields.insert("Series", "Not Applicable");
    report.fields.insert("Doors", "2");
    report.finish_fields();

    for locale in [Locale::English, Locale::Ukrainian] {
        println!("=== {locale:?} ===\n");
        let rows = report.fields.display_rows(locale);
        for row in &rows {
            println!("  {:<24} {}", row.label, row.value);
        }

        let query = "mod";
        let hits = filter_rows(&rows, query);
        println!("\n  filter {query:?}: {}", FilterSummary::new(&rows, query, locale));
        for row in hits {
            println!("    {} = {}", row.label, row.value);
        }
        println!();
    }
}

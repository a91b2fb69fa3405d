use vindecode::*;

fn main() {
    println!("=== Offline VIN Decoding ===\n");

    let inputs = [
        "1HGCM82633A004352",   // 2003 Honda Accord
        " jh4ka7561pc008269 ", // lowercase, padded
        "5YJ3E1EA2KF317000",   // second model-year cycle
        "1HGCM82693A004352",   // wrong check digit
        "1HGCM82633A00435",    // too short
        "1HGCM82633A0O4352",   // contains O
    ];

    for raw in &inputs {
        match Vin::parse(raw) {
            Ok(vin) => {
                let d = decode(&vin);
                println!("  {vin}");
                println!("    WMI:         {}", d.wmi);
                println!(
                    "    check digit: expected {}, found {} ({})",
                    d.check_digit.expected,
                    d.check_digit.actual,
                    if d.check_digit.is_valid { "ok" } else { "MISMATCH" }
                );
                println!(
                    "    model year:  {}",
                    d.model_year.map_or("undeterminable".to_string(), |y| y.to_string())
                );
                println!("    region:      {}", d.region);
                for w in d.warnings() {
                    println!("    warning:     {w}");
                }
            }
            Err(e) => println!("  {:?} => INVALID: {e}", raw.trim()),
        }
    }
}

use serde_json::Value;
use tabled::{builder::Builder, Table};

/// KRW amount fields, rendered with thousands separators.
const MONEY_KEYS: &[&str] = &[
    "vehicle_price",
    "down_payment",
    "loan_amount",
    "env_charge_semi_annual",
    "auto_tax_annual",
    "auto_tax_monthly",
    "annual_auto_tax",
    "monthly_auto_tax",
    "env_charge_monthly",
    "monthly_env_charge",
    "total_interest",
    "total_payment",
    "monthly_payment",
    "principal_payment",
    "interest_payment",
    "remaining_balance",
    "monthly_tax",
    "total_monthly_outflow",
];

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_envelope(result, map);
            } else if map.contains_key("spec") && map.contains_key("status") {
                print_record(map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_envelope(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        print_summary_and_schedule(res_map);
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    // Warnings after the tables so they are not scrolled away.
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Summary fields as a field/value table, then the schedule as rows.
fn print_summary_and_schedule(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if key == "schedule" {
            continue;
        }
        builder.push_record([key.as_str(), &format_field(key, val)]);
    }
    let table = Table::from(builder);
    println!("{}", table);

    if let Some(Value::Array(schedule)) = map.get("schedule") {
        if !schedule.is_empty() {
            println!();
            print_array_table(schedule);
        }
    }
}

/// A saved record: header fields, the loan inputs, then the cached summary.
fn print_record(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for key in ["id", "status", "created_at"] {
        if let Some(val) = map.get(key) {
            builder.push_record([key, &format_value(val)]);
        }
    }
    let table = Table::from(builder);
    println!("{}", table);

    if let Some(Value::Object(spec)) = map.get("spec") {
        println!("\nLoan:");
        print_flat_object(&Value::Object(spec.clone()));
    }

    if let Some(Value::Object(summary)) = map.get("summary") {
        println!("\nSummary:");
        print_summary_and_schedule(summary);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Headers from the first object's keys.
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_field(h, v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_field(key: &str, value: &Value) -> String {
    if MONEY_KEYS.contains(&key) {
        if let Some(grouped) = format_krw(value) {
            return grouped;
        }
    }
    format_value(value)
}

/// Group an integer amount with thousands separators: 1234567 -> 1,234,567.
fn format_krw(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    out.push_str(sign);
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    Some(out)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

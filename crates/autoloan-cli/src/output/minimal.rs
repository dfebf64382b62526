use serde_json::Value;

/// Print just the key answer value from the output.
///
/// A schedule answers with its fixed monthly payment; otherwise well-known
/// result fields are tried in priority order, then the first field.
pub fn print_minimal(value: &Value) {
    // Unwrap the computation envelope when present.
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        // The headline figure of a repayment schedule is the first
        // installment's payment.
        if let Some(Value::Array(schedule)) = map.get("schedule") {
            if let Some(Value::Object(first)) = schedule.first() {
                if let Some(payment) = first.get("monthly_payment") {
                    println!("{}", format_minimal(payment));
                    return;
                }
            }
        }

        let priority_keys = [
            "annual_auto_tax",
            "monthly_auto_tax",
            "total_payment",
            "total_interest",
            "id",
        ];

        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

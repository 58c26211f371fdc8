//! JSON formatter for audit reports.

use overlook_core::{render, AuditReport};
use serde_json::json;

pub fn print_json(report: &AuditReport) {
    // Attach the rendered tree text to each usage
    let json_result = json!({
        "usages": report.usages.iter().map(|usage| {
            let mut usage_json = serde_json::to_value(usage).unwrap();
            if let (Some(obj), Ok(tree)) = (usage_json.as_object_mut(), usage.unified_tree()) {
                obj.insert("tree".to_string(), json!(render(&tree)));
            }
            usage_json
        }).collect::<Vec<_>>(),
        "unused": report.unused,
        "diagnostics": report.diagnostics,
    });

    match serde_json::to_string_pretty(&json_result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}

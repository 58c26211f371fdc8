//! Human-readable formatter for audit reports.

use colored::*;
use overlook_core::{render, AuditReport, OverrideUsage};

pub fn print_report(report: &AuditReport) {
    if report.usages.is_empty() {
        println!("No overrides are currently exercised.");
    } else {
        println!("📌 Overrides in use ({}):", report.usages.len());
        for usage in &report.usages {
            println!();
            print!("{}", usage_block(usage));
        }
    }

    if report.unused.is_empty() {
        println!("\n{}", "✅ All declared overrides are exercised.".green());
    } else {
        println!("\n⚠️  Unused overrides ({}):", report.unused.len());
        for unused in &report.unused {
            println!("  {} ({})", unused.name.as_str().yellow(), unused.spec);
        }
    }
}

/// Rendered dependent tree for one usage, alias annotation included
fn usage_block(usage: &OverrideUsage) -> String {
    let mut block = String::new();
    if let Some(declared) = &usage.aliased_from {
        block.push_str(&format!("aliased from \"{declared}\"\n"));
    }
    match usage.unified_tree() {
        Ok(tree) => block.push_str(&render(&tree)),
        // Unreachable for orchestrator-built usages, whose chain sets are
        // never empty
        Err(_) => block.push_str(&format!("{}@{}\n", usage.name, usage.version)),
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlook_core::{DependencyChain, PathSegment};

    fn usage(aliased_from: Option<&str>) -> OverrideUsage {
        OverrideUsage {
            name: "send".to_string(),
            version: "0.19.1".to_string(),
            chains: vec![DependencyChain(vec![
                PathSegment::root("send@0.19.1"),
                PathSegment::new("honkit@6.0.3", Some("^0.17.2".to_string())),
            ])],
            aliased_from: aliased_from.map(String::from),
        }
    }

    #[test]
    fn test_usage_block_renders_tree() {
        assert_eq!(
            usage_block(&usage(None)),
            "send@0.19.1\n - honkit@6.0.3 (^0.17.2)\n"
        );
    }

    #[test]
    fn test_usage_block_notes_alias() {
        let block = usage_block(&usage(Some("send-compat")));
        assert!(block.starts_with("aliased from \"send-compat\"\n"));
        assert!(block.contains("send@0.19.1"));
    }
}

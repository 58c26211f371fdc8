//! Output formatters for audit reports.

pub mod human;
pub mod json;

/// Trait for formatting audit reports
pub trait Formatter {
    /// Format and print the audit report
    fn format(&self, report: &overlook_core::AuditReport);
}

pub struct HumanFormatter;
pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn format(&self, report: &overlook_core::AuditReport) {
        human::print_report(report);
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &overlook_core::AuditReport) {
        json::print_json(report);
    }
}

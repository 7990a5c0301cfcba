//! User, category and audit list formatting

use crate::audit::AuditEntry;
use crate::models::{Category, User};

/// Format a list of users
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut output = String::new();
    for user in users {
        output.push_str(&format!("  {}  {}\n", user.id, user.email));
    }
    output
}

/// Format a user's categories
pub fn format_category_list(user: &User, categories: &[Category]) -> String {
    if categories.is_empty() {
        return format!("No categories for {}.\n", user.email);
    }

    let mut output = format!("Categories for {}:\n", user.email);
    for category in categories {
        output.push_str(&format!("  {}  {}\n", category.id, category.name));
    }
    output
}

/// Format audit entries, one per line
pub fn format_audit_log(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

//! Display Helpers
//!
//! Terminal output formatting and styling.

use carnet_core::{ContactRecord, DuplicatePair, MergeOutcome};
use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "★")]
    favorite: &'static str,
}

impl From<&ContactRecord> for ContactRow {
    fn from(contact: &ContactRecord) -> Self {
        ContactRow {
            id: contact.id().map(|id| id.to_string()).unwrap_or_default(),
            name: contact.display_name(),
            email: contact.email().to_string(),
            phone: or_dash(contact.phone()),
            city: or_dash(contact.city()),
            favorite: if contact.is_favorite() { "★" } else { "" },
        }
    }
}

/// Displays contacts as a table.
pub fn display_contacts_table(contacts: &[ContactRecord]) {
    let rows: Vec<ContactRow> = contacts.iter().map(ContactRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Displays a contact with full details.
pub fn display_contact_details(contact: &ContactRecord) {
    let id = contact
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unsaved".to_string());

    println!();
    println!("  {}", style(contact.display_name()).bold().cyan());
    println!("  ID: {}", style(id).dim());
    if contact.is_favorite() {
        println!("  {}", style("★ favorite").yellow());
    }
    println!();

    let fields = [
        ("email", Some(contact.email())),
        ("phone", contact.phone()),
        ("address", contact.address()),
        ("city", contact.city()),
        ("country", contact.country()),
    ];
    for (label, value) in fields {
        println!("  {:10} {}", style(label).dim(), or_dash(value));
    }

    println!();
}

#[derive(Tabled)]
struct DuplicateRow {
    #[tabled(rename = "Keep")]
    target: String,
    #[tabled(rename = "Merge")]
    source: String,
    #[tabled(rename = "Similarity")]
    similarity: String,
}

/// Displays duplicate pairs with the names of both contacts.
///
/// `name_of` resolves a pair member to a display label.
pub fn display_duplicates_table<F>(pairs: &[DuplicatePair], name_of: F)
where
    F: Fn(&DuplicatePair, bool) -> String,
{
    let rows: Vec<DuplicateRow> = pairs
        .iter()
        .map(|pair| DuplicateRow {
            target: name_of(pair, true),
            source: name_of(pair, false),
            similarity: format!("{}%", pair.score_percent()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Displays the result of a merge.
pub fn display_merge_outcome(outcome: &MergeOutcome) {
    if outcome.completed_fields.is_empty() {
        info("No fields needed completing");
    } else {
        let fields: Vec<String> = outcome
            .completed_fields
            .iter()
            .map(|f| f.to_string())
            .collect();
        info(&format!("Completed fields: {}", fields.join(", ")));
    }
    display_contact_details(&outcome.merged);
}

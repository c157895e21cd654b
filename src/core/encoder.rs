use crate::domain::model::{ParcelRecord, Recipient};

/// Column order for the compact shared-reference schema.
pub const COMPACT_HEADERS: [&str; 6] = [
    "Package Number",
    "SO/INV",
    "Length (in)",
    "Width (in)",
    "Height (in)",
    "Weight (lb)",
];

/// Column order for the carrier batch-import schema. Fixed: the importer
/// maps columns by position.
pub const CARRIER_HEADERS: [&str; 28] = [
    "company",
    "attention",
    "street1",
    "street2",
    "city",
    "state",
    "zipcode",
    "phone",
    "residential",
    "carrier",
    "service",
    "length",
    "width",
    "height",
    "weight",
    "invoice",
    "reference1",
    "reference2",
    "order_name",
    "box",
    "fedex_po",
    "fedex_dp",
    "options1",
    "options2",
    "options3",
    "email1",
    "email2",
    "email3",
];

pub const CARRIER_CODE: &str = "FEDEX";
pub const SERVICE_CODE: &str = "FEDEX_GROUND";

/// Serializes a batch into the compact schema: one shared SO/INV reference
/// on every row, package numbers assigned from batch position.
///
/// Pure and infallible; records have already passed normalization.
pub fn encode_compact(records: &[ParcelRecord], reference: &str) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(COMPACT_HEADERS.join(","));

    for (index, record) in records.iter().enumerate() {
        let row = [
            (index + 1).to_string(),
            escape_field(reference),
            record.length.to_string(),
            record.width.to_string(),
            record.height.to_string(),
            record.weight.to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Serializes a batch into the 28-column carrier schema, one row per record
/// in batch order.
pub fn encode_carrier(records: &[ParcelRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CARRIER_HEADERS.join(","));

    for record in records {
        lines.push(carrier_row(record).join(","));
    }

    lines.join("\n")
}

fn carrier_row(record: &ParcelRecord) -> Vec<String> {
    // Unset columns render as empty strings; the importer treats anything
    // else as data.
    let empty = Recipient {
        company: String::new(),
        attention: String::new(),
        street1: String::new(),
        street2: None,
        city: String::new(),
        state: String::new(),
        zipcode: String::new(),
        phone: String::new(),
        reference1: None,
        reference2: None,
        residential: false,
    };
    let recipient = record.recipient.as_ref().unwrap_or(&empty);

    vec![
        escape_field(&recipient.company),
        escape_field(&recipient.attention),
        escape_field(&recipient.street1),
        escape_optional(recipient.street2.as_deref()),
        escape_field(&recipient.city),
        escape_field(&recipient.state),
        escape_field(&recipient.zipcode),
        escape_field(&recipient.phone),
        // The importer only understands presence: literal "true" or blank,
        // never "false".
        if recipient.residential {
            "true".to_string()
        } else {
            String::new()
        },
        CARRIER_CODE.to_string(),
        SERVICE_CODE.to_string(),
        record.length.to_string(),
        record.width.to_string(),
        record.height.to_string(),
        record.weight.to_string(),
        String::new(), // invoice
        escape_optional(recipient.reference1.as_deref()),
        escape_optional(recipient.reference2.as_deref()),
        String::new(), // order_name
        String::new(), // box
        String::new(), // fedex_po
        String::new(), // fedex_dp
        String::new(), // options1
        String::new(), // options2
        String::new(), // options3
        String::new(), // email1
        String::new(), // email2
        String::new(), // email3
    ]
}

/// RFC-4180-style escaping: fields containing a comma, quote or newline are
/// wrapped in quotes with internal quotes doubled; everything else passes
/// through verbatim. Empty in, empty out.
pub fn escape_field(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }

    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn escape_optional(field: Option<&str>) -> String {
    field.map(escape_field).unwrap_or_default()
}

use crate::domain::model::{ManifestFormat, ParcelDraft, ParcelRecord, Recipient, RecordId};
use crate::utils::error::{BatchError, Result};
use crate::utils::validation::{parse_positive_number, require_text};

/// Turns raw form input into a validated record, or rejects it with the
/// first failing field.
///
/// Dimensions are rounded up to whole inches; a carrier bills on the
/// enclosing footprint, so a 11.2" side is a 12" side on the manifest.
/// Weight is stored exactly as parsed. The caller supplies the id: a fresh
/// one on add, the existing one on edit.
pub fn normalize_draft(
    format: ManifestFormat,
    draft: &ParcelDraft,
    id: RecordId,
) -> Result<ParcelRecord> {
    let recipient = match format {
        ManifestFormat::Compact => None,
        ManifestFormat::Carrier => Some(normalize_recipient(draft)?),
    };

    let length = parse_dimension("length", &draft.length)?;
    let width = parse_dimension("width", &draft.width)?;
    let height = parse_dimension("height", &draft.height)?;
    let weight = parse_positive_number("weight", &draft.weight)?;

    Ok(ParcelRecord {
        id,
        length,
        width,
        height,
        weight,
        recipient,
    })
}

fn parse_dimension(field_name: &str, value: &str) -> Result<u32> {
    let parsed = parse_positive_number(field_name, value)?;
    Ok(parsed.ceil() as u32)
}

fn normalize_recipient(draft: &ParcelDraft) -> Result<Recipient> {
    let attention = require_text("recipient name", &draft.attention)?.to_string();
    let street1 = require_text("street address", &draft.street1)?.to_string();
    let city = require_text("city", &draft.city)?.to_string();
    let state = require_text("state", &draft.state)?.to_uppercase();
    let zipcode = require_text("zip code", &draft.zipcode)?.to_string();

    // The form filters as the user types, but pasted values arrive raw.
    let phone: String = require_text("phone", &draft.phone)?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if phone.is_empty() {
        return Err(BatchError::MissingField {
            field: "phone".to_string(),
        });
    }

    Ok(Recipient {
        company: draft.company.trim().to_string(),
        attention,
        street1,
        street2: non_empty(&draft.street2),
        city,
        state,
        zipcode,
        phone,
        reference1: non_empty(&draft.reference1),
        reference2: non_empty(&draft.reference2),
        residential: draft.residential,
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

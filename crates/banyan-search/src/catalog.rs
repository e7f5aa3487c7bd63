//! Part-catalog records: built-in sample data and tolerant parsing of
//! AI-generated additions.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// AI-generated additions are capped at this many records per request.
const GENERATED_RECORD_LIMIT: usize = 5;

/// Values a correct catalog PDF is expected to contain.
pub const EXPECTED_PDF_TOKENS: &[&str] = &[
    "B10099368",
    "FESTO",
    "CYLINDER ASSEMBLY",
    "63MM",
    "B10054276",
    "NTN",
    "BEARING INSERT",
    "30MM",
];

/// One row of the part catalog. `classtype` is "BU" for business-unit
/// rows and "INC" for technical-specification rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    pub partnum: String,
    pub escn: String,
    pub classtype: String,
    pub property: String,
    pub value: String,
    pub manufacturer: String,
}

impl PartRecord {
    fn new(
        partnum: &str,
        escn: &str,
        classtype: &str,
        property: &str,
        value: &str,
        manufacturer: &str,
    ) -> Self {
        Self {
            partnum: partnum.into(),
            escn: escn.into(),
            classtype: classtype.into(),
            property: property.into(),
            value: value.into(),
            manufacturer: manufacturer.into(),
        }
    }
}

/// The built-in sample catalog returned by every extraction call.
pub fn sample_records() -> Vec<PartRecord> {
    vec![
        PartRecord::new(
            "B10099368",
            "CYLINDER ASSEMBLY, LINEAR ACTUATING",
            "BU",
            "MANUFACTURER NAME 1",
            "FESTO",
            "FESTO INC",
        ),
        PartRecord::new(
            "B10099368",
            "CYLINDER ASSEMBLY, LINEAR ACTUATING",
            "BU",
            "MANUFACTURER NUMBER 1",
            "1383588",
            "FESTO INC",
        ),
        PartRecord::new(
            "B10099368",
            "CYLINDER ASSEMBLY, LINEAR ACTUATING",
            "INC",
            "BORE DIAMETER",
            "63MM",
            "FESTO INC",
        ),
        PartRecord::new(
            "B10099368",
            "CYLINDER ASSEMBLY, LINEAR ACTUATING",
            "INC",
            "STROKE",
            "400MM",
            "FESTO INC",
        ),
        PartRecord::new(
            "B10054276",
            "BEARING INSERT",
            "BU",
            "MANUFACTURER NAME 1",
            "NTN",
            "NTN BEARING CORPORATION",
        ),
        PartRecord::new(
            "B10054276",
            "BEARING INSERT",
            "INC",
            "INSIDE DIAMETER",
            "30MM",
            "NTN BEARING CORPORATION",
        ),
        PartRecord::new(
            "B10011511",
            "CALIPER, BRAKE",
            "BU",
            "MANUFACTURER NAME 1",
            "TOLOMATIC",
            "TOLOMATIC",
        ),
        PartRecord::new(
            "B10011511",
            "CALIPER, BRAKE",
            "INC",
            "TYPE",
            "ASSEMBLY, PNEUMATIC",
            "TOLOMATIC",
        ),
        PartRecord::new(
            "B10012022",
            "CONTACT, SET",
            "BU",
            "MANUFACTURER NAME 1",
            "SIEMENS",
            "SIEMENS",
        ),
        PartRecord::new(
            "B10012022",
            "CONTACT, SET",
            "INC",
            "STANDARDS",
            "EAC, UKCA",
            "SIEMENS",
        ),
    ]
}

/// Parse AI-emitted text into catalog records.
///
/// Tolerates Markdown code fences around the JSON array. Elements missing
/// any of the six required fields are dropped; at most five records are
/// kept. Any parse failure yields an empty vec, never an error.
pub fn parse_generated_records(text: &str) -> Vec<PartRecord> {
    let body = strip_code_fence(text.trim());

    let values: Vec<serde_json::Value> = match serde_json::from_str(body) {
        Ok(values) => values,
        Err(e) => {
            debug!("Generated records were not a JSON array: {}", e);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<PartRecord>(v).ok())
        .take(GENERATED_RECORD_LIMIT)
        .collect()
}

fn strip_code_fence(text: &str) -> &str {
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

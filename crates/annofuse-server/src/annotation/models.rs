//! Response shapes of the external annotation services
//!
//! Both services return flat JSON objects. Unknown fields are ignored and
//! missing fields decode to empty strings, so a sparse upstream record never
//! fails the pipeline on its own.

use serde::{Deserialize, Serialize};

/// Record returned by the annotation service for one gene identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneAnnotation {
    #[serde(default)]
    pub gene_id: String,
    #[serde(default)]
    pub annotation: String,
}

/// Record returned by the supplement service for one gene identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneSupplement {
    #[serde(default)]
    pub gene_id: String,
    #[serde(default)]
    pub additional_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let annotation: GeneAnnotation = serde_json::from_str("{}").unwrap();
        assert_eq!(annotation.gene_id, "");
        assert_eq!(annotation.annotation, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = r#"{"gene_id":"BRCA1","annotation":"x","score":0.9,"aliases":["BRCC1"]}"#;
        let annotation: GeneAnnotation = serde_json::from_str(raw).unwrap();
        assert_eq!(annotation.gene_id, "BRCA1");
        assert_eq!(annotation.annotation, "x");
    }

    #[test]
    fn test_supplement_decodes_additional_info() {
        let raw = r#"{"gene_id":"BRCA1","additional_info":"chr17"}"#;
        let supplement: GeneSupplement = serde_json::from_str(raw).unwrap();
        assert_eq!(supplement.additional_info, "chr17");
    }
}

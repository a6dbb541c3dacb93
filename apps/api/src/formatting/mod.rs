//! Reference formatting — the format catalog and the prompt builder.
//!
//! The actual bibliographic parsing and formatting is delegated entirely to
//! the generative model; this module owns the closed set of supported
//! citation styles and the prompt that instructs the model.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// The closed set of supported citation styles.
///
/// Serialized keys match the UI selector values: "APA", "MLA", "Chicago",
/// "IEEE", "Japanese", "auto".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReferenceFormat {
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
    Chicago,
    #[serde(rename = "IEEE")]
    Ieee,
    Japanese,
    #[default]
    #[serde(rename = "auto")]
    Auto,
}

impl ReferenceFormat {
    pub const ALL: [ReferenceFormat; 6] = [
        ReferenceFormat::Auto,
        ReferenceFormat::Apa,
        ReferenceFormat::Mla,
        ReferenceFormat::Chicago,
        ReferenceFormat::Ieee,
        ReferenceFormat::Japanese,
    ];

    /// The wire key, as used in request bodies and the format listing.
    pub fn key(&self) -> &'static str {
        match self {
            ReferenceFormat::Apa => "APA",
            ReferenceFormat::Mla => "MLA",
            ReferenceFormat::Chicago => "Chicago",
            ReferenceFormat::Ieee => "IEEE",
            ReferenceFormat::Japanese => "Japanese",
            ReferenceFormat::Auto => "auto",
        }
    }

    /// Human-readable name shown in the UI selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceFormat::Apa => "APA (American Psychological Association)",
            ReferenceFormat::Mla => "MLA (Modern Language Association)",
            ReferenceFormat::Chicago => "Chicago Manual of Style",
            ReferenceFormat::Ieee => "IEEE (Institute of Electrical and Electronics Engineers)",
            ReferenceFormat::Japanese => "日本の標準学術形式",
            ReferenceFormat::Auto => "自動判定",
        }
    }
}

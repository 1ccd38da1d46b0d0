//! Static section schema table
//!
//! One descriptor per known content-section type. The table drives both
//! validation (`validator::section`) and the reconstructed examples in
//! the structure guide, so the two cannot drift apart.

use super::rules::{
    ColumnsAndRowsTogether, EitherField, ItemRule, QuickReferenceItem, SectionRule,
};

/// Content-sequence names exempt from the "must exist in
/// contentSections" cross-check. `converter` is rendered from the
/// conversion data itself; `faq`/`faqs` fall back to the top-level
/// `faqs` array.
pub const SPECIAL_SEQUENCE_NAMES: [&str; 3] = ["converter", "faq", "faqs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Hero,
    QuickReference,
    ComparisonTable,
    VisualChart,
    StepByStep,
    CommonMistakes,
    EquipmentGuide,
    ScientificBackground,
    RegionalVariations,
    RecipeExamples,
    Tips,
    Faq,
    Faqs,
    Related,
}

impl SectionKind {
    pub const ALL: [SectionKind; 14] = [
        SectionKind::Hero,
        SectionKind::QuickReference,
        SectionKind::ComparisonTable,
        SectionKind::VisualChart,
        SectionKind::StepByStep,
        SectionKind::CommonMistakes,
        SectionKind::EquipmentGuide,
        SectionKind::ScientificBackground,
        SectionKind::RegionalVariations,
        SectionKind::RecipeExamples,
        SectionKind::Tips,
        SectionKind::Faq,
        SectionKind::Faqs,
        SectionKind::Related,
    ];

    /// Map a `contentSections` key to its kind. `None` means the name
    /// is unknown and must be reported as an error, never passed
    /// silently.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(SectionKind::Hero),
            "quickReference" => Some(SectionKind::QuickReference),
            "comparisonTable" => Some(SectionKind::ComparisonTable),
            "visualChart" => Some(SectionKind::VisualChart),
            "stepByStep" => Some(SectionKind::StepByStep),
            "commonMistakes" => Some(SectionKind::CommonMistakes),
            "equipmentGuide" => Some(SectionKind::EquipmentGuide),
            "scientificBackground" => Some(SectionKind::ScientificBackground),
            "regionalVariations" => Some(SectionKind::RegionalVariations),
            "recipeExamples" => Some(SectionKind::RecipeExamples),
            "tips" => Some(SectionKind::Tips),
            "faq" => Some(SectionKind::Faq),
            "faqs" => Some(SectionKind::Faqs),
            "related" => Some(SectionKind::Related),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::QuickReference => "quickReference",
            SectionKind::ComparisonTable => "comparisonTable",
            SectionKind::VisualChart => "visualChart",
            SectionKind::StepByStep => "stepByStep",
            SectionKind::CommonMistakes => "commonMistakes",
            SectionKind::EquipmentGuide => "equipmentGuide",
            SectionKind::ScientificBackground => "scientificBackground",
            SectionKind::RegionalVariations => "regionalVariations",
            SectionKind::RecipeExamples => "recipeExamples",
            SectionKind::Tips => "tips",
            SectionKind::Faq => "faq",
            SectionKind::Faqs => "faqs",
            SectionKind::Related => "related",
        }
    }

    pub fn schema(&self) -> &'static SectionSchema {
        match self {
            SectionKind::Hero => &HERO,
            SectionKind::QuickReference => &QUICK_REFERENCE,
            SectionKind::ComparisonTable => &COMPARISON_TABLE,
            SectionKind::VisualChart => &VISUAL_CHART,
            SectionKind::StepByStep => &STEP_BY_STEP,
            SectionKind::CommonMistakes => &COMMON_MISTAKES,
            SectionKind::EquipmentGuide => &EQUIPMENT_GUIDE,
            SectionKind::ScientificBackground => &SCIENTIFIC_BACKGROUND,
            SectionKind::RegionalVariations => &REGIONAL_VARIATIONS,
            SectionKind::RecipeExamples => &RECIPE_EXAMPLES,
            SectionKind::Tips => &TIPS,
            SectionKind::Faq | SectionKind::Faqs => &FAQ_SECTION,
            SectionKind::Related => &RELATED,
        }
    }

    pub fn is_special_sequence_name(name: &str) -> bool {
        SPECIAL_SEQUENCE_NAMES.contains(&name)
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declarative rules for one section type, plus an optional cross-field
/// hook for what the declarative part cannot express.
pub struct SectionSchema {
    pub required_keys: &'static [&'static str],
    /// Allow-list for documentation and the structure guide. Not
    /// enforced as a closed set.
    pub optional_keys: &'static [&'static str],
    pub array_fields: &'static [ArrayFieldRule],
    pub rule: Option<&'static dyn SectionRule>,
}

pub struct ArrayFieldRule {
    pub field: &'static str,
    pub min_items: usize,
    pub items: ItemShape,
}

/// Expected shape of one element of an array field.
pub enum ItemShape {
    /// A non-empty string.
    Text,
    /// An object with these required keys.
    Object { required_keys: &'static [&'static str] },
    /// An array of cell values (a table row).
    Row,
    /// Delegated to an [`ItemRule`] hook.
    Custom(&'static dyn ItemRule),
}

static HERO: SectionSchema = SectionSchema {
    required_keys: &["title"],
    optional_keys: &["subtitle", "intro"],
    array_fields: &[],
    rule: None,
};

static QUICK_REFERENCE: SectionSchema = SectionSchema {
    required_keys: &["title", "items"],
    optional_keys: &["note"],
    array_fields: &[ArrayFieldRule {
        field: "items",
        min_items: 1,
        items: ItemShape::Custom(&QuickReferenceItem),
    }],
    rule: None,
};

static COMPARISON_TABLE_RULE: ColumnsAndRowsTogether = ColumnsAndRowsTogether;

static COMPARISON_TABLE: SectionSchema = SectionSchema {
    required_keys: &["title"],
    optional_keys: &["columns", "rows", "caption"],
    array_fields: &[
        ArrayFieldRule {
            field: "columns",
            min_items: 1,
            items: ItemShape::Text,
        },
        ArrayFieldRule {
            field: "rows",
            min_items: 1,
            items: ItemShape::Row,
        },
    ],
    rule: Some(&COMPARISON_TABLE_RULE),
};

static VISUAL_CHART: SectionSchema = SectionSchema {
    required_keys: &["title", "items"],
    optional_keys: &["caption", "unit"],
    array_fields: &[ArrayFieldRule {
        field: "items",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["label", "value"] },
    }],
    rule: None,
};

static STEP_BY_STEP: SectionSchema = SectionSchema {
    required_keys: &["title", "steps"],
    optional_keys: &["note"],
    array_fields: &[ArrayFieldRule {
        field: "steps",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["title", "description"] },
    }],
    rule: None,
};

static COMMON_MISTAKES: SectionSchema = SectionSchema {
    required_keys: &["title", "mistakes"],
    optional_keys: &["intro"],
    array_fields: &[ArrayFieldRule {
        field: "mistakes",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["mistake", "solution"] },
    }],
    rule: None,
};

static EQUIPMENT_GUIDE: SectionSchema = SectionSchema {
    required_keys: &["title", "tools"],
    optional_keys: &["intro"],
    array_fields: &[ArrayFieldRule {
        field: "tools",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["name", "description"] },
    }],
    rule: None,
};

static SCIENTIFIC_BACKGROUND: SectionSchema = SectionSchema {
    required_keys: &["title", "concepts"],
    optional_keys: &["intro"],
    array_fields: &[ArrayFieldRule {
        field: "concepts",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["concept", "explanation"] },
    }],
    rule: None,
};

static REGIONAL_VARIATIONS: SectionSchema = SectionSchema {
    required_keys: &["title", "regions"],
    optional_keys: &["intro"],
    array_fields: &[ArrayFieldRule {
        field: "regions",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["region", "description"] },
    }],
    rule: None,
};

static RECIPE_EXAMPLES: SectionSchema = SectionSchema {
    required_keys: &["title", "examples"],
    optional_keys: &["intro"],
    array_fields: &[ArrayFieldRule {
        field: "examples",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["name", "description"] },
    }],
    rule: None,
};

static TIPS_RULE: EitherField = EitherField { first: "tips", second: "items" };

static TIPS: SectionSchema = SectionSchema {
    required_keys: &["title"],
    optional_keys: &["tips", "items"],
    array_fields: &[
        ArrayFieldRule {
            field: "tips",
            min_items: 1,
            items: ItemShape::Text,
        },
        ArrayFieldRule {
            field: "items",
            min_items: 1,
            items: ItemShape::Text,
        },
    ],
    rule: Some(&TIPS_RULE),
};

static FAQ_SECTION: SectionSchema = SectionSchema {
    required_keys: &["items"],
    optional_keys: &["title"],
    array_fields: &[ArrayFieldRule {
        field: "items",
        min_items: 1,
        items: ItemShape::Object { required_keys: &["question", "answer"] },
    }],
    rule: None,
};

static RELATED_RULE: EitherField = EitherField { first: "links", second: "items" };

static RELATED: SectionSchema = SectionSchema {
    required_keys: &["title"],
    optional_keys: &["links", "items"],
    array_fields: &[
        ArrayFieldRule {
            field: "links",
            min_items: 1,
            items: ItemShape::Object { required_keys: &["title", "url"] },
        },
        ArrayFieldRule {
            field: "items",
            min_items: 1,
            items: ItemShape::Object { required_keys: &["title", "url"] },
        },
    ],
    rule: Some(&RELATED_RULE),
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hero", SectionKind::Hero)]
    #[test_case("quickReference", SectionKind::QuickReference)]
    #[test_case("comparisonTable", SectionKind::ComparisonTable)]
    #[test_case("stepByStep", SectionKind::StepByStep)]
    #[test_case("faqs", SectionKind::Faqs)]
    #[test_case("related", SectionKind::Related)]
    fn test_from_name(name: &str, expected: SectionKind) {
        assert_eq!(SectionKind::from_name(name), Some(expected));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(SectionKind::from_name("madeUpSection"), None);
        assert_eq!(SectionKind::from_name("Hero"), None);
    }

    #[test]
    fn test_name_round_trips_for_all_kinds() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_special_sequence_names() {
        assert!(SectionKind::is_special_sequence_name("converter"));
        assert!(SectionKind::is_special_sequence_name("faq"));
        assert!(SectionKind::is_special_sequence_name("faqs"));
        assert!(!SectionKind::is_special_sequence_name("hero"));
    }

    #[test]
    fn test_every_schema_requires_something() {
        for kind in SectionKind::ALL {
            assert!(
                !kind.schema().required_keys.is_empty(),
                "{kind} has no required keys"
            );
        }
    }

    #[test]
    fn test_faq_and_faqs_share_a_schema() {
        let faq = SectionKind::Faq.schema() as *const SectionSchema;
        let faqs = SectionKind::Faqs.schema() as *const SectionSchema;
        assert_eq!(faq, faqs);
    }
}

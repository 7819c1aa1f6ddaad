//! Compiled-in species labels and remedy descriptions.
//!
//! The class label list is the sole link between the classifier's output
//! index and a species name: entry `i` names the class behind probability
//! `i`. The remedy table maps species names to short medicinal-use
//! descriptions. Both are process-wide constants and are never mutated.
//!
//! The remedy table is not guaranteed to cover every label (its keys come
//! from a hand-maintained source and one spelling disagrees with the label
//! list); a miss resolves to [`FALLBACK_REMEDY`].

/// Species names in model output order.
///
/// The classifier emits one probability per entry, in this order. Do not
/// reorder: index position is the contract with the trained artifact.
pub const CLASS_LABELS: [&str; 80] = [
    "Aloe Vera", "Amla", "Amruthaballi", "Arali", "Astma Weed", "Badipala", "Balloon Vine",
    "Bamboo", "Beans", "Betel", "Bhrami", "Bringaraja", "Caricature", "Castor", "Catharanthus",
    "Chakte", "Chilly", "Citron Lime (herelikai)", "Coffee", "Common Rue(naagdalli)", "Coriender",
    "Curry", "Doddpathre", "Drumstick", "Ekka", "Eucalyptus", "Ganigale", "Ganike", "Gasagase",
    "Ginger", "Globe Amarnath", "Guava", "Henna", "Hibiscus", "Honge", "Insulin", "Jackfruit",
    "Jasmine", "Kambajala", "Kasambruga", "Kohlrabi", "Lantana", "Lemon", "Lemongrass",
    "Malabar Nut", "Malabar Spinach", "Mango", "Marigold", "Mint", "Neem", "Nelavembu", "Nerale",
    "Nooni", "Onion", "Padri", "Palak(Spinach)", "Papaya", "Parijatha", "Pea", "Pepper",
    "Pomoegranate", "Pumpkin", "Raddish", "Rose", "Sampige", "Sapota", "Seethaashoka",
    "Seethapala", "Spinach1", "Tamarind", "Taro", "Tecoma", "Thumbe", "Tomato", "Tulsi",
    "Turmeric", "ashoka", "camphor", "kamakasturi", "kepala",
];

/// Returned by [`remedy_for`] when a label has no remedy entry.
pub const FALLBACK_REMEDY: &str = "Remedy information not available.";

/// Medicinal-use descriptions keyed by species name.
///
/// Keys are carried verbatim from the upstream remedy source, including its
/// "Astma weed" spelling that does not match the "Astma Weed" label.
const REMEDIES: [(&str, &str); 80] = [
    ("Aloe Vera", "Soothes burns and aids digestion."),
    ("Amla", "Rich in Vitamin C, boosts immunity."),
    ("Amruthaballi", "Helps in controlling fever and detoxification."),
    ("Arali", "Used in traditional medicine for skin issues."),
    ("Astma weed", "Traditional remedy for asthma relief."),
    ("Badipala", "Known to help with swelling and pain."),
    ("Balloon Vine", "Treats joint pain and stiffness."),
    ("Bamboo", "Used in traditional bone healing."),
    ("Beans", "Nutritious and supports heart health."),
    ("Betel", "Aids digestion and freshens breath."),
    ("Bhrami", "Boosts brain function and memory."),
    ("Bringaraja", "Promotes hair growth and liver health."),
    ("Caricature", "Used for respiratory disorders."),
    ("Castor", "Relieves constipation and hair health."),
    ("Catharanthus", "Contains anti-cancer compounds."),
    ("Chakte", "Used for controlling sugar levels."),
    ("Chilly", "Boosts metabolism and has antioxidants."),
    ("Citron Lime (herelikai)", "Aids digestion and immune support."),
    ("Coffee", "Antioxidant-rich, boosts alertness."),
    ("Common Rue(naagdalli)", "Treats insect bites and muscle pain."),
    ("Coriender", "Improves digestion and skin."),
    ("Curry", "Improves vision and digestive health."),
    ("Doddpathre", "Used for cough and cold."),
    ("Drumstick", "Rich in iron and vitamins."),
    ("Ekka", "Used in Ayurveda for ulcers."),
    ("Eucalyptus", "Clears nasal congestion."),
    ("Ganigale", "Traditional pain reliever."),
    ("Ganike", "Detoxifying and supports liver health."),
    ("Gasagase", "Improves sleep and reduces anxiety."),
    ("Ginger", "Eases nausea and inflammation."),
    ("Globe Amarnath", "Used to cool the body."),
    ("Guava", "Boosts immunity and improves skin."),
    ("Henna", "Natural hair dye and coolant."),
    ("Hibiscus", "Controls blood pressure and cholesterol."),
    ("Honge", "Used as antiseptic and mosquito repellent."),
    ("Insulin", "Lowers blood sugar levels."),
    ("Jackfruit", "Rich in fiber and vitamins."),
    ("Jasmine", "Reduces stress and improves sleep."),
    ("Kambajala", "Traditional remedy for inflammation."),
    ("Kasambruga", "Used in skin and hair care."),
    ("Kohlrabi", "Rich in vitamin C and fiber."),
    ("Lantana", "Used externally for skin diseases."),
    ("Lemon", "Boosts immunity and detoxifies."),
    ("Lemongrass", "Reduces anxiety and cholesterol."),
    ("Malabar Nut", "Used for respiratory conditions."),
    ("Malabar Spinach", "Rich in iron and calcium."),
    ("Mango", "Improves digestion and skin."),
    ("Marigold", "Antiseptic and wound healing."),
    ("Mint", "Aids digestion and relieves nausea."),
    ("Neem", "Powerful antibacterial and antifungal."),
    ("Nelavembu", "Used for fever and immunity."),
    ("Nerale", "Supports diabetic health."),
    ("Nooni", "Immunity booster and detox aid."),
    ("Onion", "Supports heart health."),
    ("Padri", "Used in skin treatments."),
    ("Palak(Spinach)", "Iron-rich and boosts energy."),
    ("Papaya", "Aids digestion and skin health."),
    ("Parijatha", "Treats cough and cold."),
    ("Pea", "High in protein and fiber."),
    ("Pepper", "Enhances digestion and absorption."),
    ("Pomoegranate", "Rich in antioxidants."),
    ("Pumpkin", "Boosts immunity and eye health."),
    ("Raddish", "Improves liver function."),
    ("Rose", "Used in skincare and mood lifting."),
    ("Sampige", "Used for aroma and skincare."),
    ("Sapota", "Boosts energy and digestion."),
    ("Seethaashoka", "Women’s health tonic."),
    ("Seethapala", "Rich in vitamins."),
    ("Spinach1", "Nutrient-dense leafy green."),
    ("Tamarind", "Improves digestion."),
    ("Taro", "Good for gut and immunity."),
    ("Tecoma", "Used for diabetes."),
    ("Thumbe", "Traditional flower used in rituals."),
    ("Tomato", "Rich in lycopene."),
    ("Tulsi", "Immunity and respiratory aid."),
    ("Turmeric", "Anti-inflammatory powerhouse."),
    ("ashoka", "Supports reproductive health."),
    ("camphor", "Used for cough and cold."),
    ("kamakasturi", "Aromatic and medicinal uses."),
    ("kepala", "Traditional herb with many uses."),
];

/// Looks up the remedy description for a species label.
///
/// Total over all inputs: an unknown label (or one whose table spelling
/// disagrees with the label list) yields [`FALLBACK_REMEDY`] rather than an
/// error.
pub fn remedy_for(label: &str) -> &'static str {
    REMEDIES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, remedy)| *remedy)
        .unwrap_or(FALLBACK_REMEDY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_are_unique() {
        let unique: HashSet<&str> = CLASS_LABELS.iter().copied().collect();
        assert_eq!(unique.len(), CLASS_LABELS.len());
    }

    #[test]
    fn test_remedy_keys_are_unique() {
        let unique: HashSet<&str> = REMEDIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(unique.len(), REMEDIES.len());
    }

    #[test]
    fn test_first_label_is_aloe_vera() {
        assert_eq!(CLASS_LABELS[0], "Aloe Vera");
    }

    #[test]
    fn test_known_remedy() {
        assert_eq!(remedy_for("Aloe Vera"), "Soothes burns and aids digestion.");
        assert_eq!(remedy_for("Spinach1"), "Nutrient-dense leafy green.");
    }

    #[test]
    fn test_unknown_label_falls_back() {
        assert_eq!(remedy_for("Not A Plant"), FALLBACK_REMEDY);
    }

    #[test]
    fn test_mismatched_spelling_falls_back() {
        // The label list says "Astma Weed" but the table key is "Astma weed".
        assert_eq!(remedy_for("Astma Weed"), FALLBACK_REMEDY);
        assert_eq!(remedy_for("Astma weed"), "Traditional remedy for asthma relief.");
    }

    #[test]
    fn test_every_label_resolves_to_some_text() {
        for label in CLASS_LABELS {
            assert!(!remedy_for(label).is_empty());
        }
    }
}

// lib/src/engine/severity.rs

//! Rule chain mapping a wound label and reported symptoms to a care tier.
//!
//! Rules are evaluated top to bottom and the first match wins. The label
//! rules come first so that wound-specific knowledge overrides the generic
//! pain and bleeding thresholds; the final rule always matches, which makes
//! the chain total over its inputs.

use log::debug;
use triage_models::{Bleeding, PainLevel, SeverityAssessment, SeverityTier, SymptomReport};

/// One link of the decision chain, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityRule {
    StabWound,
    LacerationWithHeavyBleeding,
    SevereBurn,
    BruiseWithSwelling,
    MinorAbrasionOrCut,
    HighPain,
    HeavyBleeding,
    ModerateSymptoms,
    Fallback,
}

impl SeverityRule {
    pub const CHAIN: [SeverityRule; 9] = [
        SeverityRule::StabWound,
        SeverityRule::LacerationWithHeavyBleeding,
        SeverityRule::SevereBurn,
        SeverityRule::BruiseWithSwelling,
        SeverityRule::MinorAbrasionOrCut,
        SeverityRule::HighPain,
        SeverityRule::HeavyBleeding,
        SeverityRule::ModerateSymptoms,
        SeverityRule::Fallback,
    ];

    /// 1-based position in the chain.
    pub fn position(self) -> usize {
        Self::CHAIN.iter().position(|rule| *rule == self).map_or(0, |idx| idx + 1)
    }

    pub const fn tier(self) -> SeverityTier {
        match self {
            SeverityRule::StabWound => SeverityTier::TraumaCenter,
            SeverityRule::LacerationWithHeavyBleeding
            | SeverityRule::SevereBurn
            | SeverityRule::HighPain
            | SeverityRule::HeavyBleeding => SeverityTier::EmergencyRoom,
            SeverityRule::BruiseWithSwelling | SeverityRule::ModerateSymptoms => {
                SeverityTier::UrgentCare
            }
            SeverityRule::MinorAbrasionOrCut | SeverityRule::Fallback => SeverityTier::SelfCare,
        }
    }

    /// User-facing copy. Front ends display these verbatim.
    pub const fn recommendation(self) -> &'static str {
        match self {
            SeverityRule::StabWound => {
                "Stab wounds require immediate emergency care. Go to the nearest trauma center or call 911."
            }
            SeverityRule::LacerationWithHeavyBleeding => {
                "Deep lacerations with heavy bleeding need emergency room care. Apply pressure and seek immediate medical attention."
            }
            SeverityRule::SevereBurn => {
                "Severe burns require emergency room treatment. Keep the burn cool and clean while traveling to the ER."
            }
            SeverityRule::BruiseWithSwelling => {
                "Bruises with significant swelling should be evaluated at an urgent care facility to rule out internal damage."
            }
            SeverityRule::MinorAbrasionOrCut => {
                "Minor abrasions and cuts can typically be treated at home. Clean the wound, apply antibiotic ointment, and bandage. Watch for signs of infection."
            }
            SeverityRule::HighPain => {
                "High pain levels indicate a serious injury. Visit the emergency room for proper evaluation and pain management."
            }
            SeverityRule::HeavyBleeding => {
                "Heavy bleeding requires emergency care. Apply firm pressure and head to the nearest emergency room."
            }
            SeverityRule::ModerateSymptoms => {
                "Your symptoms suggest you should visit an urgent care facility for proper wound care and evaluation."
            }
            SeverityRule::Fallback => {
                "Based on your symptoms, you may be able to treat this wound at home with proper first aid. Monitor for signs of infection such as increased redness, warmth, or pus."
            }
        }
    }

    fn matches(self, label: &str, symptoms: &SymptomReport) -> bool {
        let pain = symptoms.pain.value();
        match self {
            SeverityRule::StabWound => label.contains("stab"),
            SeverityRule::LacerationWithHeavyBleeding => {
                label.contains("laceration") && symptoms.bleeding == Bleeding::Heavy
            }
            SeverityRule::SevereBurn => label.contains("burn") && pain >= 7,
            SeverityRule::BruiseWithSwelling => label.contains("bruise") && symptoms.swelling,
            SeverityRule::MinorAbrasionOrCut => {
                (label.contains("abrasion") || label.contains("cut")) && pain <= 3
            }
            SeverityRule::HighPain => pain >= 8,
            SeverityRule::HeavyBleeding => symptoms.bleeding == Bleeding::Heavy,
            SeverityRule::ModerateSymptoms => pain >= 5 || symptoms.bleeding == Bleeding::Mild,
            SeverityRule::Fallback => true,
        }
    }
}

/// Returns the first rule in the chain that fires. Label matching is a
/// case-insensitive substring test.
pub fn select_rule(label: &str, symptoms: &SymptomReport) -> SeverityRule {
    let label = label.to_lowercase();
    SeverityRule::CHAIN
        .into_iter()
        .find(|rule| rule.matches(&label, symptoms))
        .unwrap_or(SeverityRule::Fallback)
}

/// Assesses a wound from its label and the reported symptoms.
pub fn assess_symptoms(label: &str, symptoms: &SymptomReport) -> SeverityAssessment {
    let rule = select_rule(label, symptoms);
    debug!(
        "Severity for '{}' (pain {}, bleeding {}, swelling {}): rule {} {:?} -> {}",
        label,
        symptoms.pain,
        symptoms.bleeding,
        symptoms.swelling,
        rule.position(),
        rule,
        rule.tier()
    );
    SeverityAssessment {
        severity: rule.tier(),
        recommendation: rule.recommendation().to_string(),
    }
}

/// Positional form of [`assess_symptoms`].
pub fn classify_severity(
    label: &str,
    pain: PainLevel,
    bleeding: Bleeding,
    swelling: bool,
) -> SeverityAssessment {
    assess_symptoms(label, &SymptomReport::new(pain, bleeding, swelling))
}

//! Input sections of the comparison view and their "modified" flags.

use serde::Serialize;

use crate::domain::analysis::{Analysis, AnalysisField};

/// A group of related inputs shown as one card in the comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSection {
    Equipment,
    FailureRate,
    DetectionRate,
    Wafer,
    Downtime,
}

impl InputSection {
    pub const ALL: [InputSection; 5] = [
        InputSection::Equipment,
        InputSection::FailureRate,
        InputSection::DetectionRate,
        InputSection::Wafer,
        InputSection::Downtime,
    ];

    /// Fields whose change marks this section as modified.
    pub fn fields(&self) -> &'static [AnalysisField] {
        match self {
            InputSection::Equipment => &[AnalysisField::PumpType, AnalysisField::PumpQuantity],
            InputSection::FailureRate => &[
                AnalysisField::FailureRateMode,
                AnalysisField::FailureRatePercentage,
                AnalysisField::AbsoluteFailureCount,
            ],
            InputSection::DetectionRate => &[AnalysisField::DetectionRate],
            InputSection::Wafer => &[
                AnalysisField::WaferType,
                AnalysisField::WaferQuantity,
                AnalysisField::WaferCost,
            ],
            InputSection::Downtime => &[
                AnalysisField::DowntimeDuration,
                AnalysisField::DowntimeCostPerHour,
            ],
        }
    }

    /// OR over the section's fields, compared field-by-field.
    pub fn is_modified(&self, baseline: &Analysis, current: &Analysis) -> bool {
        self.fields()
            .iter()
            .any(|field| !baseline.same_value(current, *field))
    }
}

/// Section-level "MODIFIED" badges of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedSections {
    pub equipment: bool,
    pub failure_rate: bool,
    pub detection_rate: bool,
    pub wafer: bool,
    pub downtime: bool,
}

impl ModifiedSections {
    pub fn between(baseline: &Analysis, current: &Analysis) -> Self {
        Self {
            equipment: InputSection::Equipment.is_modified(baseline, current),
            failure_rate: InputSection::FailureRate.is_modified(baseline, current),
            detection_rate: InputSection::DetectionRate.is_modified(baseline, current),
            wafer: InputSection::Wafer.is_modified(baseline, current),
            downtime: InputSection::Downtime.is_modified(baseline, current),
        }
    }

    pub fn get(&self, section: InputSection) -> bool {
        match section {
            InputSection::Equipment => self.equipment,
            InputSection::FailureRate => self.failure_rate,
            InputSection::DetectionRate => self.detection_rate,
            InputSection::Wafer => self.wafer,
            InputSection::Downtime => self.downtime,
        }
    }

    pub fn any(&self) -> bool {
        InputSection::ALL.iter().any(|s| self.get(*s))
    }
}

/// Editable fields whose values differ between two analyses.
pub fn modified_fields(baseline: &Analysis, current: &Analysis) -> Vec<AnalysisField> {
    AnalysisField::EDITABLE
        .iter()
        .copied()
        .filter(|field| !baseline.same_value(current, *field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::WaferType;

    fn baseline() -> Analysis {
        let mut a = Analysis::new("Implant").unwrap();
        a.pump_quantity = 10;
        a.failure_rate_percentage = 10.0;
        a.wafer_cost = 8000.0;
        a.downtime_duration = 6.0;
        a.downtime_cost_per_hour = 500.0;
        a
    }

    #[test]
    fn every_editable_field_belongs_to_exactly_one_section() {
        for field in AnalysisField::EDITABLE {
            let owners = InputSection::ALL
                .iter()
                .filter(|s| s.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{} owned by {} sections", field, owners);
        }
    }

    #[test]
    fn identical_copy_has_no_modified_section() {
        let base = baseline();
        let copy = base.what_if_copy();
        assert!(!ModifiedSections::between(&base, &copy).any());
        assert!(modified_fields(&base, &copy).is_empty());
    }

    #[test]
    fn single_change_flags_only_its_section() {
        let base = baseline();
        let mut copy = base.what_if_copy();
        copy.wafer_type = WaferType::Mono;

        let flags = ModifiedSections::between(&base, &copy);
        assert!(flags.wafer);
        assert!(!flags.equipment);
        assert!(!flags.failure_rate);
        assert!(!flags.detection_rate);
        assert!(!flags.downtime);
        assert_eq!(modified_fields(&base, &copy), vec![AnalysisField::WaferType]);
    }

    #[test]
    fn clearing_detection_override_counts_as_modified() {
        let mut base = baseline();
        base.detection_rate = Some(80.0);
        let mut copy = base.what_if_copy();
        copy.detection_rate = None;
        assert!(InputSection::DetectionRate.is_modified(&base, &copy));
    }

    #[test]
    fn rename_is_not_a_section_change() {
        let base = baseline();
        let mut copy = base.what_if_copy();
        copy.name = "Something else".to_string();
        assert!(!ModifiedSections::between(&base, &copy).any());
    }
}

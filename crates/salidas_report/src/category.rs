//! Partition of filtered exits by material type.

use crate::spec::{EnumMaterialType, EnumReportCategory, SpecMaterialExit, SpecReportSummary};

/// Category views over one filtered selection; all views keep input order.
#[derive(Debug, Clone, Default)]
pub struct SpecCategorized<'a> {
    /// Every filtered record.
    pub all: Vec<&'a SpecMaterialExit>,
    pub ersa: Vec<&'a SpecMaterialExit>,
    pub unbw: Vec<&'a SpecMaterialExit>,
    /// Records of unknown material type; part of `all` only.
    pub other: Vec<&'a SpecMaterialExit>,
}

impl<'a> SpecCategorized<'a> {
    /// View for a report category.
    pub fn select(&self, category: EnumReportCategory) -> &[&'a SpecMaterialExit] {
        match category {
            EnumReportCategory::All => &self.all,
            EnumReportCategory::Ersa => &self.ersa,
            EnumReportCategory::Unbw => &self.unbw,
        }
    }

    /// Per-view counters; `cnt_malformed` is left for the caller to fill.
    pub fn summary(&self) -> SpecReportSummary {
        SpecReportSummary {
            cnt_total: self.all.len(),
            cnt_ersa: self.ersa.len(),
            cnt_unbw: self.unbw.len(),
            cnt_other: self.other.len(),
            cnt_malformed: 0,
        }
    }
}

/// Split `records` into `all` / `ersa` / `unbw` / `other` views.
pub fn categorize<'a>(records: &[&'a SpecMaterialExit]) -> SpecCategorized<'a> {
    let mut categorized = SpecCategorized {
        all: records.to_vec(),
        ..Default::default()
    };
    for record in records {
        match record.material_type {
            EnumMaterialType::Ersa => categorized.ersa.push(*record),
            EnumMaterialType::Unbw => categorized.unbw.push(*record),
            EnumMaterialType::Other(_) => categorized.other.push(*record),
        }
    }
    categorized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_exit(id: &str, material_type: &str) -> SpecMaterialExit {
        SpecMaterialExit {
            id: id.to_string(),
            exit_date: "2024-01-01".to_string(),
            exit_time: "09:00".to_string(),
            material_type: EnumMaterialType::from(material_type.to_string()),
            material_code: String::new(),
            material_name: String::new(),
            material_location: String::new(),
            quantity: 1.0,
            remaining_stock: 0.0,
            person_name: String::new(),
            person_last_name: String::new(),
            area: String::new(),
            ceco: None,
            sap_code: None,
            work_order: None,
            created_at: String::new(),
        }
    }

    fn ids(view: &[&SpecMaterialExit]) -> Vec<String> {
        view.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn known_types_cover_all_exactly() {
        let records = vec![
            create_exit("1", "ERSA"),
            create_exit("2", "UNBW"),
            create_exit("3", "ERSA"),
        ];
        let l_refs: Vec<&SpecMaterialExit> = records.iter().collect();

        let categorized = categorize(&l_refs);
        assert_eq!(ids(&categorized.all), vec!["1", "2", "3"]);
        assert_eq!(ids(&categorized.ersa), vec!["1", "3"]);
        assert_eq!(ids(&categorized.unbw), vec!["2"]);
        assert!(categorized.other.is_empty());
        assert_eq!(
            categorized.ersa.len() + categorized.unbw.len(),
            categorized.all.len()
        );
    }

    #[test]
    fn unknown_types_stay_in_all_only() {
        let records = vec![
            create_exit("1", "ERSA"),
            create_exit("2", "FERT"),
            create_exit("3", "UNBW"),
        ];
        let l_refs: Vec<&SpecMaterialExit> = records.iter().collect();

        let categorized = categorize(&l_refs);
        assert!(categorized.ersa.len() + categorized.unbw.len() < categorized.all.len());
        assert_eq!(ids(&categorized.other), vec!["2"]);
        assert_eq!(ids(categorized.select(EnumReportCategory::All)), vec!["1", "2", "3"]);

        let summary = categorized.summary();
        assert_eq!(summary.cnt_total, 3);
        assert_eq!(summary.cnt_ersa, 1);
        assert_eq!(summary.cnt_unbw, 1);
        assert_eq!(summary.cnt_other, 1);
    }

    #[test]
    fn empty_input_gives_empty_views() {
        let categorized = categorize(&[]);
        for category in EnumReportCategory::ALL {
            assert!(categorized.select(category).is_empty());
        }
    }
}

//! カタログの統計

use cartas_common::LetterRecord;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// 巻ごとの件数
    pub per_volume: BTreeMap<u32, usize>,
    pub with_year: usize,
    pub with_date: usize,
    pub with_text: usize,
    /// 件名ごとの件数（多い順、同数は名前順）
    pub subjects: Vec<(String, usize)>,
}

impl CatalogStats {
    pub fn from_records(records: &[LetterRecord]) -> Self {
        let mut per_volume = BTreeMap::new();
        let mut subject_counts: BTreeMap<&str, usize> = BTreeMap::new();

        for record in records {
            *per_volume.entry(record.volume).or_insert(0) += 1;
            for subject in &record.subjects {
                *subject_counts.entry(subject.as_str()).or_insert(0) += 1;
            }
        }

        let mut subjects: Vec<(String, usize)> = subject_counts
            .into_iter()
            .map(|(s, n)| (s.to_string(), n))
            .collect();
        subjects.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total: records.len(),
            per_volume,
            with_year: records.iter().filter(|r| r.year.is_some_and(|y| y != 0)).count(),
            with_date: records.iter().filter(|r| r.publication_date.is_some()).count(),
            with_text: records.iter().filter(|r| !r.text().trim().is_empty()).count(),
            subjects,
        }
    }

    pub fn print(&self) {
        println!("Total: {} cartas", self.total);
        for (volume, count) in &self.per_volume {
            println!("  Volume {}: {}", volume, count);
        }
        println!("Com ano: {}", self.with_year);
        println!("Com data de publicação: {}", self.with_date);
        println!("Com texto (OCR): {}", self.with_text);
        println!("Assuntos:");
        for (subject, count) in &self.subjects {
            println!("  {:<16} {}", subject, count);
        }
    }
}

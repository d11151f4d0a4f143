//! カタログ全体のメタデータ補完

use cartas_common::classify::enrich_record;
use cartas_common::LetterRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifySummary {
    /// 何か変更したレコード数
    pub changed: usize,
    pub subjects: usize,
    pub years: usize,
    pub dates: usize,
    /// 本文がなく判定できなかった数
    pub without_text: usize,
}

pub fn classify_catalog(records: &mut [LetterRecord], overwrite: bool) -> ClassifySummary {
    let mut summary = ClassifySummary::default();

    for record in records.iter_mut() {
        if record.text().trim().is_empty() {
            summary.without_text += 1;
            continue;
        }

        let outcome = enrich_record(record, overwrite);
        if outcome.changed() {
            summary.changed += 1;
            log::debug!("{}: {:?}", record.id, outcome);
        }
        summary.subjects += outcome.subjects_set as usize;
        summary.years += outcome.year_set as usize;
        summary.dates += outcome.date_set as usize;
    }

    summary
}

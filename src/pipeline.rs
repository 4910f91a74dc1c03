use crate::model::ParsedExhibition;
use crate::parser::{Candidate, collect_candidates, normalize_text};
use crate::patterns::{PatternRule, registry};
use crate::postprocess::postprocess;
use crate::validate::validate;
use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Seoul;
use serde::Serialize;
use tracing::{debug, info};

pub struct ExhibitionParser {
    patterns: Vec<PatternRule>,
}

impl Default for ExhibitionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhibitionParser {
    pub fn new() -> Self {
        Self {
            patterns: registry(),
        }
    }

    pub fn parse(&self, text: &str) -> ParsedExhibition {
        self.parse_relative_to(text, seoul_today())
    }

    pub fn parse_relative_to(&self, text: &str, today: NaiveDate) -> ParsedExhibition {
        let mut record = ParsedExhibition::from_raw(text);
        let normalized = normalize_text(text);

        let candidates =
            collect_candidates(&self.patterns, &normalized, &mut record.parsing_errors);
        debug!(candidates = candidates.len(), "extraction complete");

        merge_candidates(&mut record, candidates);
        postprocess(&mut record, today);
        record.confidence = final_confidence(&record);

        record
    }

    pub fn parse_batch(&self, texts: &[&str]) -> Vec<ParsedExhibition> {
        let today = seoul_today();
        let records: Vec<_> = texts
            .iter()
            .map(|text| self.parse_relative_to(text, today))
            .collect();

        let summary = BatchSummary::from_records(&records);
        info!(
            records = summary.records,
            valid = summary.valid,
            mean_confidence = summary.mean_confidence,
            "batch parse complete"
        );

        records
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub records: usize,
    pub valid: usize,
    pub mean_confidence: u8,
}

impl BatchSummary {
    pub fn from_records(records: &[ParsedExhibition]) -> Self {
        let valid = records
            .iter()
            .filter(|record| validate(record).is_valid)
            .count();
        let mean_confidence = if records.is_empty() {
            0
        } else {
            let total: u32 = records.iter().map(|r| u32::from(r.confidence)).sum();
            (total / records.len() as u32) as u8
        };

        Self {
            records: records.len(),
            valid,
            mean_confidence,
        }
    }
}

// Per field, the value comes from the highest-scoring candidate that supplied
// it; ties go to the higher-priority pattern, then to the earlier match.
fn merge_candidates(record: &mut ParsedExhibition, mut candidates: Vec<Candidate>) {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| a.order.cmp(&b.order))
    });

    if let Some(title) = candidates.iter().find_map(|c| c.fields.title.clone()) {
        record.title = title;
    }
    if let Some(venue) = candidates.iter().find_map(|c| c.fields.venue_name.clone()) {
        record.venue_name = venue;
    }
    record.admission_fee = candidates.iter().find_map(|c| c.fields.admission_fee);
    if let Some(url) = candidates.iter().find_map(|c| c.fields.website_url.clone()) {
        record.website_url = Some(url);
    }

    if let Some((pattern, parts)) = candidates
        .iter()
        .find_map(|c| c.fields.start.map(|parts| (c.pattern, parts)))
    {
        match parts.to_date() {
            Some(date) => record.start_date = Some(date),
            None => record.parsing_errors.push(format!(
                "Pattern \"{pattern}\": {:04}-{:02}-{:02} is not a calendar date",
                parts.year, parts.month, parts.day
            )),
        }
    }

    if let Some((pattern, parts)) = candidates
        .iter()
        .find_map(|c| c.fields.end.map(|parts| (c.pattern, parts)))
    {
        match parts.to_date() {
            Some(date) => record.end_date = Some(date),
            None => record.parsing_errors.push(format!(
                "Pattern \"{pattern}\": {:04}-{:02}-{:02} is not a calendar date",
                parts.year, parts.month, parts.day
            )),
        }
    }
}

// Completeness of the merged record, independent of per-pattern scores.
fn final_confidence(record: &ParsedExhibition) -> u8 {
    const MAX_SCORE: u32 = 130;
    let mut score = 0u32;

    if !record.title.is_empty() {
        score += 30;
    }
    if !record.venue_name.is_empty() {
        score += 30;
    }
    if record.has_ordered_date_range() {
        score += 25;
    }

    if !record.venue_city.is_empty() {
        score += 10;
    }
    if record.venue_address.is_some() {
        score += 10;
    }
    if record.description.is_some() {
        score += 10;
    }
    if record.admission_fee.is_some() {
        score += 5;
    }
    if record.website_url.is_some() {
        score += 5;
    }
    if !record.tags.is_empty() {
        score += 5;
    }

    ((score * 100 + MAX_SCORE / 2) / MAX_SCORE) as u8
}

fn seoul_today() -> NaiveDate {
    Utc::now().with_timezone(&Seoul).date_naive()
}

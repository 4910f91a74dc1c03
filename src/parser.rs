use crate::patterns::{FieldDraft, PatternRule};
use tracing::{debug, warn};

pub fn normalize_text(text: &str) -> String {
    let unified: String = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{FF5E}' | '\u{2212}' | '\u{2015}' => '-',
            '\u{FF1A}' => ':',
            _ => c,
        })
        .collect();

    unified.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug)]
pub(crate) struct Candidate {
    pub pattern: &'static str,
    pub priority: u8,
    pub order: usize,
    pub score: u8,
    pub fields: FieldDraft,
}

pub(crate) fn collect_candidates(
    patterns: &[PatternRule],
    text: &str,
    errors: &mut Vec<String>,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for rule in patterns {
        let mut matches = 0usize;

        for caps in rule.regex.captures_iter(text) {
            matches += 1;
            match (rule.extract)(&caps) {
                Ok(fields) if fields.is_empty() => {}
                Ok(fields) => {
                    let score = score_candidate(rule.priority, &fields);
                    candidates.push(Candidate {
                        pattern: rule.name,
                        priority: rule.priority,
                        order: candidates.len(),
                        score,
                        fields,
                    });
                }
                Err(err) => {
                    warn!(pattern = rule.name, error = %err, "extractor failed on a match");
                    errors.push(format!("Pattern \"{}\": {err}", rule.name));
                }
            }
        }

        if matches > 0 {
            debug!(pattern = rule.name, matches, "pattern matched");
        }
    }

    candidates
}

fn score_candidate(priority: u8, fields: &FieldDraft) -> u8 {
    let mut score = i32::from(priority);

    if fields.title.is_some() {
        score += 15;
    }
    if fields.venue_name.is_some() {
        score += 15;
    }

    if let (Some(start), Some(end)) = (fields.start, fields.end) {
        score += 20;

        let valid = match (start.to_date(), end.to_date()) {
            (Some(start), Some(end)) => start <= end,
            _ => false,
        };
        score += if valid { 10 } else { -20 };
    }

    if let Some(title) = &fields.title {
        let len = title.chars().count();
        if len > 50 {
            score -= 10;
        }
        if len < 5 {
            score -= 15;
        }
        if title.chars().any(is_korean_or_latin) {
            score += 5;
        }
    }

    score.clamp(0, 100) as u8
}

fn is_korean_or_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || ('가'..='힣').contains(&c)
}

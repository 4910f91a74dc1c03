use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    fn from_groups(caps: &Captures<'_>, year: usize, month: usize, day: usize) -> Result<Self> {
        Ok(Self {
            year: group(caps, year)?.parse().context("year is not a number")?,
            month: group(caps, month)?
                .parse()
                .context("month is not a number")?,
            day: group(caps, day)?.parse().context("day is not a number")?,
        })
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldDraft {
    pub title: Option<String>,
    pub venue_name: Option<String>,
    pub start: Option<DateParts>,
    pub end: Option<DateParts>,
    pub admission_fee: Option<u32>,
    pub website_url: Option<String>,
}

impl FieldDraft {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.venue_name.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.admission_fee.is_none()
            && self.website_url.is_none()
    }
}

pub type ExtractFn = fn(&Captures<'_>) -> Result<FieldDraft>;

pub struct PatternRule {
    pub name: &'static str,
    pub priority: u8,
    pub regex: Regex,
    pub extract: ExtractFn,
}

impl PatternRule {
    fn new(name: &'static str, priority: u8, pattern: &str, extract: ExtractFn) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|err| panic!("pattern {name} must compile: {err}"));
        Self {
            name,
            priority,
            regex,
            extract,
        }
    }
}

pub fn registry() -> Vec<PatternRule> {
    vec![
        PatternRule::new(
            "korean_standard",
            95,
            r"(?:전시명?:?\s*)?(.+?)\s*(?:전시기간?:?\s*)?(\d{4})[./년-](\d{1,2})[./월-](\d{1,2})일?\s*[-~]\s*(\d{4})[./년-]?(\d{1,2})[./월-](\d{1,2})일?\s*(?:장소:?\s*)?(.+)",
            extract_titled_range,
        ),
        PatternRule::new(
            "seoul_museum",
            90,
            r"《([^》]+)》.*?(\d{4})[년.](\d{1,2})[월.](\d{1,2})일?\s*[-~]\s*(\d{4})[년.]?(\d{1,2})[월.](\d{1,2})일?.*?(?:장소|개최|전시관):?\s*(.+)",
            extract_titled_range,
        ),
        PatternRule::new(
            "mmca_format",
            88,
            r"(.*?전시?)\s*.*?(\d{4})[./년-]\s*(\d{1,2})[./월-]\s*(\d{1,2})일?\s*[-~]\s*(\d{4})[./년-]?\s*(\d{1,2})[./월-]\s*(\d{1,2})일?\s*.*(국립현대미술관|MMCA).*",
            extract_mmca,
        ),
        PatternRule::new(
            "gallery_format",
            85,
            r"(.+?)\s*(?:전시|개인전|기획전|특별전).*?(\d{4})[./년-]\s*(\d{1,2})[./월-]\s*(\d{1,2})일?\s*[-~]\s*(\d{4})[./년-]?\s*(\d{1,2})[./월-]\s*(\d{1,2})일?\s*.*?(갤러리\s*\S+|아트센터\s*\S+|미술관)",
            extract_titled_range,
        ),
        PatternRule::new(
            "english_format",
            80,
            r"(?i)([A-Z].+?)\s*(?:exhibition|show).*?(\d{1,2})[/.-]\s?(\d{1,2})[/.-](\d{4})\s*[-~]\s*(\d{1,2})[/.-](\d{1,2})[/.-](\d{4})\s*.*?(Museum|Gallery|Center)",
            extract_english,
        ),
        PatternRule::new(
            "date_pattern",
            70,
            r"(\d{4})[년./-]\s*(\d{1,2})[월./-]\s*(\d{1,2})일?\s*[-~]\s*(\d{4})[년./-]?\s*(\d{1,2})[월./-]\s*(\d{1,2})일?",
            extract_date_range,
        ),
        PatternRule::new(
            "admission_fee",
            60,
            r"(?i)(?:입장료|관람료|요금):?\s*(?:(\d{1,3}(?:,\d{3})*)\s*원|무료|free)",
            extract_admission_fee,
        ),
        PatternRule::new("website_url", 50, r"(?i)(https?://\S+)", extract_website_url),
    ]
}

// Title in group 1, start date in 2-4, end date in 5-7, venue in group 8.
fn extract_titled_range(caps: &Captures<'_>) -> Result<FieldDraft> {
    Ok(FieldDraft {
        title: Some(group(caps, 1)?.trim().to_string()),
        venue_name: Some(group(caps, 8)?.trim().to_string()),
        start: Some(DateParts::from_groups(caps, 2, 3, 4)?),
        end: Some(DateParts::from_groups(caps, 5, 6, 7)?),
        ..FieldDraft::default()
    })
}

fn extract_mmca(caps: &Captures<'_>) -> Result<FieldDraft> {
    let title = group(caps, 1)?.trim();
    let title = title.strip_suffix("전시").unwrap_or(title);
    let venue = if group(caps, 8)?.contains("국립현대미술관") {
        "국립현대미술관"
    } else {
        "MMCA"
    };

    Ok(FieldDraft {
        title: Some(title.to_string()),
        venue_name: Some(venue.to_string()),
        start: Some(DateParts::from_groups(caps, 2, 3, 4)?),
        end: Some(DateParts::from_groups(caps, 5, 6, 7)?),
        ..FieldDraft::default()
    })
}

// English announcements carry M/D/YYYY; reorder into year-first parts.
fn extract_english(caps: &Captures<'_>) -> Result<FieldDraft> {
    Ok(FieldDraft {
        title: Some(group(caps, 1)?.trim().to_string()),
        venue_name: Some(group(caps, 8)?.trim().to_string()),
        start: Some(DateParts::from_groups(caps, 4, 2, 3)?),
        end: Some(DateParts::from_groups(caps, 7, 5, 6)?),
        ..FieldDraft::default()
    })
}

fn extract_date_range(caps: &Captures<'_>) -> Result<FieldDraft> {
    Ok(FieldDraft {
        start: Some(DateParts::from_groups(caps, 1, 2, 3)?),
        end: Some(DateParts::from_groups(caps, 4, 5, 6)?),
        ..FieldDraft::default()
    })
}

fn extract_admission_fee(caps: &Captures<'_>) -> Result<FieldDraft> {
    let fee = match caps.get(1) {
        Some(amount) => amount
            .as_str()
            .replace(',', "")
            .parse()
            .with_context(|| format!("admission fee {} is out of range", amount.as_str()))?,
        None => 0,
    };

    Ok(FieldDraft {
        admission_fee: Some(fee),
        ..FieldDraft::default()
    })
}

fn extract_website_url(caps: &Captures<'_>) -> Result<FieldDraft> {
    Ok(FieldDraft {
        website_url: Some(group(caps, 1)?.to_string()),
        ..FieldDraft::default()
    })
}

fn group<'t>(caps: &Captures<'t>, idx: usize) -> Result<&'t str> {
    caps.get(idx)
        .map(|m| m.as_str())
        .with_context(|| format!("capture group {idx} is missing"))
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    #[default]
    Draft,
    Upcoming,
    Ongoing,
    Ended,
}

impl ExhibitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitionStatus::Draft => "draft",
            ExhibitionStatus::Upcoming => "upcoming",
            ExhibitionStatus::Ongoing => "ongoing",
            ExhibitionStatus::Ended => "ended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExhibition {
    pub title: String,
    pub description: Option<String>,
    pub venue_name: String,
    pub venue_city: String,
    pub venue_address: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub admission_fee: Option<u32>,
    pub website_url: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub status: ExhibitionStatus,
    pub confidence: u8,
    pub raw_text: String,
    pub parsing_errors: Vec<String>,
}

impl ParsedExhibition {
    pub fn from_raw(raw_text: &str) -> Self {
        Self {
            title: String::new(),
            description: None,
            venue_name: String::new(),
            venue_city: String::new(),
            venue_address: None,
            start_date: None,
            end_date: None,
            admission_fee: None,
            website_url: None,
            image_url: None,
            tags: Vec::new(),
            status: ExhibitionStatus::Draft,
            confidence: 0,
            raw_text: raw_text.to_string(),
            parsing_errors: Vec::new(),
        }
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn has_ordered_date_range(&self) -> bool {
        self.date_range().is_some_and(|(start, end)| start <= end)
    }
}

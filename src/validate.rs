use crate::model::ParsedExhibition;
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate(record: &ParsedExhibition) -> ValidationReport {
    let mut errors = Vec::new();

    if record.title.chars().count() < 2 {
        errors.push("전시명이 너무 짧거나 없습니다".to_string());
    }

    if record.venue_name.chars().count() < 2 {
        errors.push("장소명이 너무 짧거나 없습니다".to_string());
    }

    match record.date_range() {
        None => errors.push("전시 기간이 설정되지 않았습니다".to_string()),
        Some((start, end)) if start > end => {
            errors.push("시작일이 종료일보다 늦습니다".to_string());
        }
        Some(_) => {}
    }

    if let Some(url) = &record.website_url
        && Url::parse(url).is_err()
    {
        errors.push("웹사이트 URL 형식이 올바르지 않습니다".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

use crate::model::{ExhibitionStatus, ParsedExhibition};
use chrono::NaiveDate;

const CITY_NAMES: [&str; 17] = [
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종", "경기", "강원", "충북",
    "충남", "전북", "전남", "경북", "경남", "제주",
];

// Announcements with no other city signal are assumed to be in the capital.
const DEFAULT_CITY: &str = "서울";

const GENRE_TAGS: &[(&[&str], &str)] = &[
    (&["현대", "contemporary"], "현대미술"),
    (&["전통", "traditional"], "전통예술"),
    (&["사진", "photo"], "사진"),
    (&["조각", "sculpture"], "조각"),
    (&["회화", "painting"], "회화"),
    (&["디지털", "digital", "미디어", "media"], "미디어아트"),
    (&["설치", "installation"], "설치미술"),
];

pub(crate) fn postprocess(record: &mut ParsedExhibition, today: NaiveDate) {
    if !record.title.is_empty() {
        record.title = clean_title(&record.title);
    }

    if !record.venue_name.is_empty() && record.venue_city.is_empty() {
        record.venue_city = infer_city(&record.venue_name).to_string();
    }

    if let Some((start, end)) = record.date_range() {
        record.status = derive_status(start, end, today);
    }

    record.tags = generate_tags(record);
}

fn clean_title(title: &str) -> String {
    title
        .trim_matches(|c: char| c == ':' || c == '-' || c.is_whitespace())
        .replace(['《', '》'], "")
        .trim()
        .to_string()
}

pub fn infer_city(venue: &str) -> &'static str {
    CITY_NAMES
        .into_iter()
        .find(|city| venue.contains(*city))
        .unwrap_or(DEFAULT_CITY)
}

fn derive_status(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> ExhibitionStatus {
    if today < start {
        ExhibitionStatus::Upcoming
    } else if today <= end {
        ExhibitionStatus::Ongoing
    } else {
        ExhibitionStatus::Ended
    }
}

fn generate_tags(record: &ParsedExhibition) -> Vec<String> {
    let mut tags = Vec::new();

    if !record.title.is_empty() {
        let title = record.title.to_lowercase();
        for (keywords, tag) in GENRE_TAGS {
            if keywords.iter().any(|keyword| title.contains(keyword)) {
                push_unique(&mut tags, tag);
            }
        }
    }

    if record.admission_fee == Some(0) {
        push_unique(&mut tags, "무료관람");
    }

    if !record.venue_name.is_empty() {
        if record.venue_name.contains("국립") {
            push_unique(&mut tags, "국립미술관");
        }
        if record.venue_name.contains("시립") {
            push_unique(&mut tags, "시립미술관");
        }
        if record.venue_name.contains("갤러리") {
            push_unique(&mut tags, "갤러리");
        }
    }

    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|existing| existing == tag) {
        tags.push(tag.to_string());
    }
}

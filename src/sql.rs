use crate::model::ParsedExhibition;
use chrono::NaiveDate;

// Escaped INSERT for the exhibitions table of the persistence backend. The
// parser never executes SQL; this is an export convenience for its caller.
pub fn insert_statement(record: &ParsedExhibition) -> String {
    let title = text_or_null(&record.title);
    let description = opt_text(record.description.as_deref());
    let venue_name = text_or_null(&record.venue_name);
    let venue_city = text_or_null(&record.venue_city);
    let venue_address = opt_text(record.venue_address.as_deref());
    let start_date = date_or_null(record.start_date);
    let end_date = date_or_null(record.end_date);
    let admission_fee = number_or_null(record.admission_fee);
    let website_url = opt_text(record.website_url.as_deref());
    let image_url = opt_text(record.image_url.as_deref());
    let tags = tags_or_null(&record.tags);
    let status = quoted(record.status.as_str());

    format!(
        "INSERT INTO exhibitions (
  title,
  description,
  venue_name,
  venue_city,
  venue_address,
  start_date,
  end_date,
  admission_fee,
  website_url,
  image_url,
  tags,
  status,
  view_count,
  like_count,
  created_at,
  updated_at
) VALUES (
  {title},
  {description},
  {venue_name},
  {venue_city},
  {venue_address},
  {start_date},
  {end_date},
  {admission_fee},
  {website_url},
  {image_url},
  {tags},
  {status},
  0,
  0,
  NOW(),
  NOW()
);"
    )
}

fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn text_or_null(value: &str) -> String {
    if value.is_empty() {
        "NULL".to_string()
    } else {
        quoted(value)
    }
}

fn opt_text(value: Option<&str>) -> String {
    value.map(quoted).unwrap_or_else(|| "NULL".to_string())
}

fn date_or_null(value: Option<NaiveDate>) -> String {
    value
        .map(|date| format!("'{date}'"))
        .unwrap_or_else(|| "NULL".to_string())
}

fn number_or_null(value: Option<u32>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

fn tags_or_null(tags: &[String]) -> String {
    if tags.is_empty() {
        return "NULL".to_string();
    }

    let json = serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string());
    quoted(&json)
}

use axum::{
    extract::{Json, Query},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::{
    editor::{
        calendar::CalendarMonth,
        range::{format_date, parse_date, DateRange},
    },
    error::AppError,
};

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeClick {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    pub day: String,
}

fn parse_field(name: &str, value: &str) -> Result<Option<NaiveDate>, AppError> {
    parse_date(value).map_err(|_| AppError::Validation(format!("Invalid {name}: {value}")))
}

// GET /api/editor/calendar?date=YYYY-MM-DD
pub async fn calendar_handler(Query(query): Query<CalendarQuery>) -> Result<impl IntoResponse, AppError> {
    let reference = parse_field("date", query.date.as_deref().unwrap_or(""))?
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let month = CalendarMonth::build(reference)
        .ok_or_else(|| AppError::Validation(format!("Date out of range: {reference}")))?;

    Ok(Json(json!({
        "month_start": format_date(month.month_start),
        "month_end": format_date(month.month_end),
        "weeks": month.weeks().collect::<Vec<_>>(),
        "previous_month": month.previous_month().map(format_date),
        "next_month": month.next_month().map(format_date),
    })))
}

// POST /api/editor/range/click
pub async fn range_click_handler(Json(body): Json<RangeClick>) -> Result<impl IntoResponse, AppError> {
    let day = parse_field("day", &body.day)?
        .ok_or_else(|| AppError::Validation("Missing day".to_string()))?;
    let mut range = DateRange::from_bounds(
        parse_field("start", &body.start)?,
        parse_field("end", &body.end)?,
    );

    let action = range.click(day);

    Ok(Json(json!({
        "range": range,
        "start": range.start().map(format_date).unwrap_or_default(),
        "end": range.end().map(format_date).unwrap_or_default(),
        "action": action,
        "display": range.display(),
    })))
}

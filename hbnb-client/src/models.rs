use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// Владелец объявления или автор отзыва.
pub struct Person {
    /// Имя.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Фамилия.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Person {
    /// Полное имя; `None`, если обе части пустые.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            return None;
        }
        Some(parts.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Объявление (place) в том виде, в каком его отдаёт `/api/v1/places/`.
pub struct Listing {
    /// Непрозрачный идентификатор (строка или число в JSON).
    #[serde(deserialize_with = "de_opaque_id")]
    pub id: String,
    /// Заголовок.
    #[serde(default)]
    pub title: String,
    /// Цена за ночь; число или числовая строка.
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub price: Option<f64>,
    /// Страна.
    #[serde(default)]
    pub country: Option<String>,
    /// Город.
    #[serde(default)]
    pub city: Option<String>,
    /// Описание.
    #[serde(default)]
    pub description: Option<String>,
    /// Владелец; может отсутствовать.
    #[serde(default)]
    pub owner: Option<Person>,
}

impl Listing {
    /// Страна без пробелов по краям; пустая строка считается отсутствующей.
    pub fn country_name(&self) -> Option<&str> {
        non_blank(self.country.as_deref())
    }

    /// `город, страна` без пустых частей.
    pub fn location(&self) -> String {
        [non_blank(self.city.as_deref()), self.country_name()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `$120 / night`, либо `$— / night`, если цена неизвестна.
    pub fn price_label(&self) -> String {
        let price = self
            .price
            .map(format_number)
            .unwrap_or_else(|| "—".to_string());
        format!("${price} / night")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Существующий отзыв.
pub struct Review {
    /// Текст отзыва.
    #[serde(default)]
    pub comment: Option<String>,
    /// Оценка; может отсутствовать.
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub rating: Option<f64>,
    /// Автор; может отсутствовать.
    #[serde(default)]
    pub user: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Тело `POST /api/v1/reviews/`.
pub struct NewReview {
    /// Идентификатор объявления.
    pub place_id: String,
    /// Оценка, приведённая к числу по правилам `Number()`.
    #[serde(serialize_with = "ser_js_number")]
    pub rating: Option<f64>,
    /// Текст отзыва без пробелов по краям.
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub(crate) access_token: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    msg: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl ErrorBody {
    /// Первое непустое строковое поле из `message`, `msg`, `error`.
    pub(crate) fn human_message(&self) -> Option<String> {
        [&self.message, &self.msg, &self.error]
            .into_iter()
            .flatten()
            .find_map(|value| match value {
                Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
                _ => None,
            })
    }
}

/// Приводит ввод формы к числу как `Number()` в браузере:
/// пустая строка даёт `0`, нечисловая строка даёт `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    parse_number(raw)
}

/// Печатает целые значения без дробной части: `120`, но `99.5`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn de_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

fn de_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(value)) => value.as_f64().filter(|value| value.is_finite()),
        Some(Value::String(raw)) => parse_number(&raw),
        _ => None,
    })
}

fn ser_js_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
            serializer.serialize_i64(*value as i64)
        }
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_accepts_numeric_id_and_string_price() {
        let raw = r#"{"id":7,"title":"Loft","price":"120","country":" France ","city":"Paris"}"#;
        let listing: Listing = serde_json::from_str(raw).expect("listing should parse");

        assert_eq!(listing.id, "7");
        assert_eq!(listing.price, Some(120.0));
        assert_eq!(listing.country_name(), Some("France"));
        assert_eq!(listing.location(), "Paris, France");
        assert!(listing.owner.is_none());
    }

    #[test]
    fn listing_keeps_unparseable_price_as_unknown() {
        let raw = r#"{"id":"a1","title":"Hut","price":"cheap"}"#;
        let listing: Listing = serde_json::from_str(raw).expect("listing should parse");

        assert_eq!(listing.price, None);
        assert_eq!(listing.price_label(), "$— / night");
    }

    #[test]
    fn listing_rejects_object_id() {
        let raw = r#"{"id":{"x":1},"title":"Bad"}"#;
        assert!(serde_json::from_str::<Listing>(raw).is_err());
    }

    #[test]
    fn price_label_drops_trailing_zero_fraction() {
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(99.5), "99.5");
    }

    #[test]
    fn person_full_name_skips_blank_parts() {
        let person = Person {
            first_name: Some("Ada".to_string()),
            last_name: Some("  ".to_string()),
        };
        assert_eq!(person.full_name().as_deref(), Some("Ada"));
        assert_eq!(Person::default().full_name(), None);
    }

    #[test]
    fn coerce_number_follows_browser_rules() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number(" 4 "), Some(4.0));
        assert_eq!(coerce_number("four"), None);
    }

    #[test]
    fn new_review_serializes_integral_rating_as_integer() {
        let review = NewReview {
            place_id: "42".to_string(),
            rating: Some(5.0),
            comment: "Great".to_string(),
        };
        let json = serde_json::to_value(&review).expect("review should serialize");
        assert_eq!(
            json,
            serde_json::json!({"place_id": "42", "rating": 5, "comment": "Great"})
        );
    }

    #[test]
    fn error_body_prefers_message_then_msg_then_error() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"","msg":"bad token","error":"x"}"#)
                .expect("body should parse");
        assert_eq!(body.human_message().as_deref(), Some("bad token"));

        let body: ErrorBody = serde_json::from_str(r#"{"errors":{"rating":"required"}}"#)
            .expect("body should parse");
        assert_eq!(body.human_message(), None);
    }
}

use serde::{Deserialize, Serialize};

/// Body of `POST /get-weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherRequest {
    pub city: String,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub description: String,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_kmph: f64,
    pub suggestions: Suggestions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub clothing: Vec<String>,
    pub accessories: Vec<String>,
    pub travel: Vec<String>,
    pub health: Vec<String>,
}

/// Body the backend sends alongside a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `error` field as banner text, if it holds a non-empty, non-zero scalar.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => {
                Some(n.to_string())
            }
            serde_json::Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_city_object() {
        let json = serde_json::to_string(&WeatherRequest::new("Paris")).unwrap();
        assert_eq!(json, r#"{"city":"Paris"}"#);
    }

    #[test]
    fn response_accepts_integer_numbers() {
        let body = r#"{
            "city": "Paris", "country": "France", "temperature": 18,
            "description": "Cloudy", "feels_like": 16, "humidity": 70, "wind_kmph": 12,
            "suggestions": {
                "clothing": ["Jacket"], "accessories": ["Umbrella"],
                "travel": ["Bring a scarf"], "health": ["Stay hydrated"]
            }
        }"#;

        let parsed: WeatherResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.temperature, 18.0);
        assert_eq!(parsed.suggestions.travel, vec!["Bring a scarf".to_string()]);
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.error.is_none());
        assert!(parsed.message().is_none());
    }

    #[test]
    fn error_body_message_stringifies_scalars() {
        let message = |body: &str| serde_json::from_str::<ErrorBody>(body).unwrap().message();

        assert_eq!(message(r#"{"error":"City not found"}"#).as_deref(), Some("City not found"));
        assert_eq!(message(r#"{"error":42}"#).as_deref(), Some("42"));
        assert_eq!(message(r#"{"error":true}"#).as_deref(), Some("true"));
        assert_eq!(message(r#"{"error":""}"#), None);
        assert_eq!(message(r#"{"error":0}"#), None);
        assert_eq!(message(r#"{"error":null}"#), None);
        assert_eq!(message(r#"{"error":{"code":1}}"#), None);
    }
}

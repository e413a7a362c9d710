use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A company record as returned by the directory API.
///
/// Only `name` is relied upon (for sorting); every other attribute may be absent
/// and unknown attributes are ignored. A null or mistyped attribute reads as absent
/// instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub industry: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub employees: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub founded: Option<i32>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_text(deserializer).map(Option::unwrap_or_default)
}

/// Whole number from an integer, an integral float or a numeric string
fn whole_number(value: Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .and_then(|f| format!("{f:.0}").parse().ok())
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(value).and_then(|n| u64::try_from(n).ok()))
}

fn lenient_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(value).and_then(|n| i32::try_from(n).ok()))
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn employees(mut self, employees: u64) -> Self {
        self.employees = Some(employees);
        self
    }

    pub fn founded(mut self, founded: i32) -> Self {
        self.founded = Some(founded);
        self
    }

    /// "city, country", leaving out whichever part is missing
    pub fn location(&self) -> String {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.to_string(),
            (None, Some(country)) => country.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Decode a page body. The API answers with a bare JSON array of companies.
///
/// Only a body that is not an array is an error. Entries that are not objects are
/// skipped and logged so one bad row does not cost the whole page.
pub fn decode_page(body: &[u8]) -> Result<Vec<Company>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_slice(body)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(company) => Some(company),
            Err(e) => {
                log::warn!("skipping company #{i} in page: {e}");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_decode_full_record() {
        let body = br#"[{"name":"Acme","industry":"Manufacturing","city":"Berlin","country":"Germany","employees":1200,"founded":1987}]"#;
        let companies = decode_page(body).expect("valid body");
        assert_eq!(
            companies,
            vec![Company::new("Acme")
                .industry("Manufacturing")
                .city("Berlin")
                .country("Germany")
                .employees(1200)
                .founded(1987)]
        );
    }

    #[test]
    fn test_decode_tolerates_missing_and_unknown_fields() {
        let body = br#"[{"name":"Initech","id":42,"website":"https://initech.example"}]"#;
        let companies = decode_page(body).expect("valid body");
        assert_eq!(companies, vec![Company::new("Initech")]);
    }

    #[test]
    fn test_decode_empty_page() {
        assert_eq!(decode_page(b"[]").expect("valid body"), vec![]);
    }

    #[test]
    fn test_decode_null_name_keeps_record() {
        let body = br#"[{"name":"Acme"},{"name":null,"country":"JP"}]"#;
        let companies = decode_page(body).expect("valid body");
        assert_eq!(
            companies,
            vec![Company::new("Acme"), Company::new("").country("JP")]
        );
    }

    #[rstest]
    #[case(r#"{"name":"Acme","employees":1200.0}"#, Company::new("Acme").employees(1200))]
    #[case(r#"{"name":"Acme","employees":"1200"}"#, Company::new("Acme").employees(1200))]
    #[case(r#"{"name":"Acme","employees":12.5}"#, Company::new("Acme"))]
    #[case(r#"{"name":"Acme","employees":-3}"#, Company::new("Acme"))]
    #[case(r#"{"name":"Acme","employees":null}"#, Company::new("Acme"))]
    #[case(r#"{"name":"Acme","founded":1987.0}"#, Company::new("Acme").founded(1987))]
    #[case(r#"{"name":"Acme","founded":"unknown"}"#, Company::new("Acme"))]
    #[case(r#"{"name":"Acme","city":null,"industry":["a"]}"#, Company::new("Acme"))]
    fn test_decode_mistyped_optional_fields(#[case] record: &str, #[case] expected: Company) {
        let body = format!("[{record}]");
        assert_eq!(
            decode_page(body.as_bytes()).expect("valid body"),
            vec![expected]
        );
    }

    #[test]
    fn test_decode_skips_non_object_entries() {
        let body = br#"[{"name":"Acme"},42,null,{"name":"Globex"}]"#;
        let companies = decode_page(body).expect("valid body");
        assert_eq!(companies, vec![Company::new("Acme"), Company::new("Globex")]);
    }

    #[test]
    fn test_decode_rejects_object_body() {
        assert!(decode_page(br#"{"error":"nope"}"#).is_err());
    }

    #[test]
    fn test_location() {
        let company = Company::new("Acme").city("Osaka").country("Japan");
        assert_eq!(company.location(), "Osaka, Japan");
        assert_eq!(Company::new("Acme").country("Japan").location(), "Japan");
        assert_eq!(Company::new("Acme").location(), "");
    }
}

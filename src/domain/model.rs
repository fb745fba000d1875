use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The three kinds of geographic entity the backend accepts in bulk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Countries,
    States,
    Cities,
}

impl Category {
    /// Posting order. States reference countries and cities reference states.
    pub const ALL: [Category; 3] = [Category::Countries, Category::States, Category::Cities];

    pub fn key(self) -> &'static str {
        match self {
            Category::Countries => "countries",
            Category::States => "states",
            Category::Cities => "cities",
        }
    }

    pub fn bulk_path(self) -> &'static str {
        match self {
            Category::Countries => "/countries/bulk",
            Category::States => "/states/bulk",
            Category::Cities => "/cities/bulk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Contents of a seed file. Records are opaque to this tool; the backend owns their shape.
///
/// A missing key and an explicit `null` both read as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub countries: Option<Vec<Value>>,
    #[serde(default)]
    pub states: Option<Vec<Value>>,
    #[serde(default)]
    pub cities: Option<Vec<Value>>,
}

impl SeedDocument {
    pub fn records(&self, category: Category) -> &[Value] {
        let list = match category {
            Category::Countries => &self.countries,
            Category::States => &self.states,
            Category::Cities => &self.cities,
        };
        list.as_deref().unwrap_or(&[])
    }

    pub fn total_records(&self) -> usize {
        Category::ALL.iter().map(|c| self.records(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

/// Raw reply to one bulk POST, before the status check.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// JSON bodies are kept parsed; anything else is kept verbatim.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }

    pub fn render(&self) -> String {
        match self {
            ResponseBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostOutcome {
    Skipped,
    Posted {
        status: u16,
        records: usize,
        body: ResponseBody,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub category: Category,
    pub outcome: PostOutcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub categories: Vec<CategoryReport>,
}

impl SeedReport {
    pub fn posted_count(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| matches!(c.outcome, PostOutcome::Posted { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| c.outcome == PostOutcome::Skipped)
            .count()
    }

    pub fn outcome(&self, category: Category) -> Option<&PostOutcome> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_keys_read_as_empty() {
        let doc: SeedDocument =
            serde_json::from_value(json!({"countries": [{"name": "X"}], "states": null})).unwrap();

        assert_eq!(doc.records(Category::Countries).len(), 1);
        assert!(doc.records(Category::States).is_empty());
        assert!(doc.records(Category::Cities).is_empty());
        assert_eq!(doc.total_records(), 1);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let doc: SeedDocument =
            serde_json::from_value(json!({"regions": [{"name": "R"}]})).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_record_key_order_is_preserved() {
        let doc: SeedDocument =
            serde_json::from_str(r#"{"cities": [{"zeta": 1, "alpha": 2}]}"#).unwrap();
        let body = serde_json::to_string(doc.records(Category::Cities)).unwrap();
        assert_eq!(body, r#"[{"zeta":1,"alpha":2}]"#);
    }

    #[test]
    fn test_category_paths_and_order() {
        let paths: Vec<_> = Category::ALL.iter().map(|c| c.bulk_path()).collect();
        assert_eq!(paths, vec!["/countries/bulk", "/states/bulk", "/cities/bulk"]);
        assert_eq!(Category::States.to_string(), "states");
    }

    #[test]
    fn test_response_body_falls_back_to_text() {
        let json_body = ResponseBody::from_text(r#"{"created": 2}"#.to_string());
        assert_eq!(json_body.render(), "{\n  \"created\": 2\n}");

        let text_body = ResponseBody::from_text("<html>ok</html>".to_string());
        assert_eq!(text_body, ResponseBody::Text("<html>ok</html>".to_string()));
        assert_eq!(text_body.render(), "<html>ok</html>");
    }
}

use serde::{Deserialize, Serialize};

/// One row of the roster.
///
/// Wire names are `studentId` and `class` for the CSV header, the query
/// parameter and the JSON output alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: u64,
    pub class: String,
}

impl Student {
    pub fn new(student_id: u64, class: impl Into<String>) -> Self {
        Self {
            student_id,
            class: class.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
}

/// Filter values taken from every `class` query parameter, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentQuery {
    pub classes: Vec<String>,
}

impl StudentQuery {
    pub const CLASS_PARAM: &'static str = "class";

    /// Builds the query from raw key/value pairs, ignoring unrelated keys.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let classes = pairs
            .into_iter()
            .filter(|(key, _)| key == Self::CLASS_PARAM)
            .map(|(_, value)| value)
            .collect();
        Self { classes }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_serializes_with_wire_names_in_order() {
        let json = serde_json::to_string(&Student::new(7, "2C")).unwrap();
        assert_eq!(json, r#"{"studentId":7,"class":"2C"}"#);
    }

    #[test]
    fn response_wraps_students_under_single_key() {
        let response = StudentsResponse {
            students: vec![Student::new(1, "1A")],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"students":[{"studentId":1,"class":"1A"}]}"#);
    }

    #[test]
    fn query_keeps_only_class_values_in_request_order() {
        let query = StudentQuery::from_pairs(vec![
            ("class".to_string(), "1B".to_string()),
            ("page".to_string(), "2".to_string()),
            ("class".to_string(), "1A".to_string()),
        ]);
        assert_eq!(query.classes, vec!["1B", "1A"]);
        assert!(!query.is_unfiltered());
    }

    #[test]
    fn query_without_class_is_unfiltered() {
        let query = StudentQuery::from_pairs(Vec::new());
        assert!(query.is_unfiltered());
    }
}

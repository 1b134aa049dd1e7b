use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Tech,
    Finance,
}

impl Department {
    pub fn all() -> [Department; 3] {
        [Department::Hr, Department::Tech, Department::Finance]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Tech => "Tech",
            Department::Finance => "Finance",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hr" => Ok(Department::Hr),
            "tech" => Ok(Department::Tech),
            "finance" => Ok(Department::Finance),
            _ => Err(format!(
                "Unknown department '{}'. Available: HR, Tech, Finance",
                s
            )),
        }
    }
}

/// Record shape returned by the remote users endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u8,
    pub image: Option<String>,
    #[allow(dead_code)]
    pub gender: Option<String>,
}

/// A remote user record augmented with a locally assigned department
/// and performance rating. Immutable for the session once built.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u8,
    pub image: Option<String>,
    pub department: Department,
    pub rating: u8, // 1-5
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn all() -> [ProjectStatus; 3] {
        [
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
            ProjectStatus::OnHold,
        ]
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub status: ProjectStatus,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub completion: u8, // 0-100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackKind {
    Peer,
    Manager,
    SelfReview,
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedbackKind::Peer => "peer",
            FeedbackKind::Manager => "manager",
            FeedbackKind::SelfReview => "self",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: u64,
    pub from: String,
    pub date: String,
    pub rating: u8,
    pub message: String,
    pub kind: FeedbackKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReview {
    pub month: String, // "January 2026"
    pub rating: u8,
    pub comment: String,
}

/// Mock detail bundle for one employee. Regenerated on every detail
/// view, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDetails {
    pub address: String,
    pub phone: String,
    pub bio: String,
    pub performance_history: Vec<PerformanceReview>,
    pub projects: Vec<Project>,
    pub feedback: Vec<Feedback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_parse() {
        assert_eq!("hr".parse::<Department>().unwrap(), Department::Hr);
        assert_eq!("Tech".parse::<Department>().unwrap(), Department::Tech);
        assert_eq!(
            "FINANCE".parse::<Department>().unwrap(),
            Department::Finance
        );
        assert!("sales".parse::<Department>().is_err());
    }

    #[test]
    fn test_department_serde_names() {
        assert_eq!(serde_json::to_string(&Department::Hr).unwrap(), "\"HR\"");
        assert_eq!(
            serde_json::to_string(&Department::Tech).unwrap(),
            "\"Tech\""
        );
        let d: Department = serde_json::from_str("\"Finance\"").unwrap();
        assert_eq!(d, Department::Finance);
    }

    #[test]
    fn test_raw_user_camel_case() {
        let json = r#"{
            "id": 1,
            "firstName": "Emily",
            "lastName": "Johnson",
            "email": "emily.johnson@x.dummyjson.com",
            "age": 28,
            "image": "https://dummyjson.com/icon/emilys/128",
            "gender": "female"
        }"#;
        let user: RawUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name, "Emily");
        assert_eq!(user.age, 28);
    }

    #[test]
    fn test_project_status_display() {
        assert_eq!(ProjectStatus::InProgress.to_string(), "In Progress");
        assert_eq!(ProjectStatus::OnHold.to_string(), "On Hold");
    }
}

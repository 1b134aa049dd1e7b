use crate::models::{Department, Employee};

/// Free-text search plus optional department/rating constraints.
///
/// `None` means "no filter". An empty `Some` collection also matches
/// everything rather than nothing, mirroring how the filter selectors
/// behave when every option is deselected.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search_term: String,
    pub departments: Option<Vec<Department>>,
    pub ratings: Option<Vec<u8>>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.departments.as_ref().is_some_and(|d| !d.is_empty())
            || self.ratings.as_ref().is_some_and(|r| !r.is_empty())
    }

    pub fn reset(&mut self) {
        self.search_term.clear();
        self.departments = None;
        self.ratings = None;
    }
}

fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    employee.first_name.to_lowercase().contains(&term)
        || employee.last_name.to_lowercase().contains(&term)
        || employee.email.to_lowercase().contains(&term)
        || employee.department.as_str().to_lowercase().contains(&term)
}

fn matches_departments(employee: &Employee, filter: &Option<Vec<Department>>) -> bool {
    match filter {
        None => true,
        Some(departments) => departments.is_empty() || departments.contains(&employee.department),
    }
}

fn matches_ratings(employee: &Employee, filter: &Option<Vec<u8>>) -> bool {
    match filter {
        None => true,
        Some(ratings) => ratings.is_empty() || ratings.contains(&employee.rating),
    }
}

pub fn matches(employee: &Employee, filters: &FilterState) -> bool {
    matches_search(employee, &filters.search_term)
        && matches_departments(employee, &filters.departments)
        && matches_ratings(employee, &filters.ratings)
}

/// Pure derivation of the visible subset. Stable: input order is
/// preserved, nothing is re-sorted.
pub fn select_visible(employees: &[Employee], filters: &FilterState) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| matches(e, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u64, first: &str, department: Department, rating: u8) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: "Example".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            age: 30,
            image: None,
            department,
            rating,
        }
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee(1, "Ann", Department::Tech, 5),
            employee(2, "Bob", Department::Hr, 2),
        ]
    }

    #[test]
    fn test_no_filters_is_identity() {
        let employees = sample();
        let visible = select_visible(&employees, &FilterState::default());
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, 1);
        assert_eq!(visible[1].id, 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let employees = sample();
        let filters = FilterState {
            search_term: "an".to_string(),
            ..Default::default()
        };
        let visible = select_visible(&employees, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "Ann");
    }

    #[test]
    fn test_search_matches_email_and_department() {
        let employees = sample();

        let by_email = FilterState {
            search_term: "bob@".to_string(),
            ..Default::default()
        };
        assert_eq!(select_visible(&employees, &by_email)[0].id, 2);

        let by_department = FilterState {
            search_term: "tech".to_string(),
            ..Default::default()
        };
        assert_eq!(select_visible(&employees, &by_department)[0].id, 1);
    }

    #[test]
    fn test_department_filter() {
        let employees = sample();
        let filters = FilterState {
            departments: Some(vec![Department::Hr]),
            ..Default::default()
        };
        let visible = select_visible(&employees, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "Bob");
    }

    #[test]
    fn test_rating_filter() {
        let employees = sample();
        let filters = FilterState {
            ratings: Some(vec![5]),
            ..Default::default()
        };
        let visible = select_visible(&employees, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "Ann");
    }

    #[test]
    fn test_empty_filter_set_means_no_filter() {
        let employees = sample();
        let filters = FilterState {
            departments: Some(vec![]),
            ratings: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(select_visible(&employees, &filters).len(), 2);
    }

    #[test]
    fn test_clauses_are_and_combined() {
        let employees = sample();
        let filters = FilterState {
            search_term: "ann".to_string(),
            departments: Some(vec![Department::Hr]),
            ..Default::default()
        };
        assert!(select_visible(&employees, &filters).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let employees = vec![
            employee(3, "Cara", Department::Tech, 4),
            employee(1, "Ann", Department::Tech, 4),
            employee(2, "Bea", Department::Tech, 4),
        ];
        let filters = FilterState {
            ratings: Some(vec![4]),
            ..Default::default()
        };
        let ids: Vec<u64> = select_visible(&employees, &filters)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_is_active_and_reset() {
        let mut filters = FilterState {
            search_term: "x".to_string(),
            departments: Some(vec![Department::Tech]),
            ratings: None,
        };
        assert!(filters.is_active());
        filters.reset();
        assert!(!filters.is_active());
        assert!(filters.departments.is_none());
    }
}

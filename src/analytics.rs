use chrono::{Months, NaiveDate};

use crate::models::{Department, Employee};

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentStat {
    pub department: Department,
    pub headcount: usize,
    pub average_rating: f64,
}

/// Average performance rating per department, in enum order.
/// Departments with no employees are omitted.
pub fn department_averages(employees: &[Employee]) -> Vec<DepartmentStat> {
    Department::all()
        .into_iter()
        .filter_map(|department| {
            let ratings: Vec<u8> = employees
                .iter()
                .filter(|e| e.department == department)
                .map(|e| e.rating)
                .collect();
            if ratings.is_empty() {
                return None;
            }
            let sum: u32 = ratings.iter().map(|r| *r as u32).sum();
            Some(DepartmentStat {
                department,
                headcount: ratings.len(),
                average_rating: sum as f64 / ratings.len() as f64,
            })
        })
        .collect()
}

pub fn top_department(stats: &[DepartmentStat]) -> Option<&DepartmentStat> {
    stats.iter().max_by(|a, b| {
        a.average_rating
            .partial_cmp(&b.average_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// Six-month bookmark trend: fixed historical mock points with the
/// live bookmark count as the final month.
pub fn bookmark_trend(current: usize) -> [usize; 6] {
    [4, 6, 8, 7, 9, current]
}

/// Short month labels for the trailing six months, oldest first.
pub fn trend_labels(today: NaiveDate) -> [String; 6] {
    std::array::from_fn(|i| {
        let month = today
            .checked_sub_months(Months::new((5 - i) as u32))
            .unwrap_or(today);
        month.format("%b").to_string()
    })
}

/// Whether the live point continues the mock series' upward movement.
pub fn trend_is_increasing(trend: &[usize; 6]) -> bool {
    trend[5] > trend[4]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u64, department: Department, rating: u8) -> Employee {
        Employee {
            id,
            first_name: format!("E{}", id),
            last_name: "Test".to_string(),
            email: format!("e{}@example.com", id),
            age: 30,
            image: None,
            department,
            rating,
        }
    }

    #[test]
    fn test_department_averages() {
        let employees = vec![
            employee(1, Department::Tech, 5),
            employee(2, Department::Tech, 3),
            employee(3, Department::Hr, 2),
        ];
        let stats = department_averages(&employees);
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].department, Department::Hr);
        assert_eq!(stats[0].headcount, 1);
        assert!((stats[0].average_rating - 2.0).abs() < 1e-9);

        assert_eq!(stats[1].department, Department::Tech);
        assert_eq!(stats[1].headcount, 2);
        assert!((stats[1].average_rating - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_departments_omitted() {
        let employees = vec![employee(1, Department::Finance, 4)];
        let stats = department_averages(&employees);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].department, Department::Finance);
    }

    #[test]
    fn test_top_department() {
        let employees = vec![
            employee(1, Department::Tech, 5),
            employee(2, Department::Hr, 2),
        ];
        let stats = department_averages(&employees);
        let top = top_department(&stats).unwrap();
        assert_eq!(top.department, Department::Tech);
        assert!(top_department(&[]).is_none());
    }

    #[test]
    fn test_bookmark_trend_ends_with_live_count() {
        assert_eq!(bookmark_trend(12), [4, 6, 8, 7, 9, 12]);
        assert!(trend_is_increasing(&bookmark_trend(12)));
        assert!(!trend_is_increasing(&bookmark_trend(2)));
    }

    #[test]
    fn test_trend_labels() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let labels = trend_labels(today);
        assert_eq!(labels[0], "Mar");
        assert_eq!(labels[5], "Aug");
    }
}

use rand::Rng;
use serde::Deserialize;

use crate::error::HrError;
use crate::models::{Department, Employee, RawUser};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
const PAGE_SIZE: u32 = 20;

// Weighted department assignment: HR 30%, Tech 50%, Finance 20%.
const DEPARTMENT_WEIGHTS: [(Department, f64); 3] = [
    (Department::Hr, 0.30),
    (Department::Tech, 0.50),
    (Department::Finance, 0.20),
];

// Biased toward 3s and 4s. Not a real normal distribution, and that is
// intentional.
const RATING_DISTRIBUTION: [u8; 12] = [1, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5];

#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<RawUser>,
}

/// Cumulative-threshold sample over the department weights. Falls back
/// to Tech if rounding exhausts the table without a hit.
pub fn random_department(rng: &mut impl Rng) -> Department {
    let draw: f64 = rng.gen_range(0.0..1.0);
    let mut threshold = 0.0;
    for (dept, weight) in DEPARTMENT_WEIGHTS {
        threshold += weight;
        if draw < threshold {
            return dept;
        }
    }
    Department::Tech
}

pub fn random_rating(rng: &mut impl Rng) -> u8 {
    RATING_DISTRIBUTION[rng.gen_range(0..RATING_DISTRIBUTION.len())]
}

fn augment(raw: RawUser, rng: &mut impl Rng) -> Employee {
    Employee {
        id: raw.id,
        first_name: raw.first_name,
        last_name: raw.last_name,
        email: raw.email,
        age: raw.age,
        image: raw.image,
        department: random_department(rng),
        rating: random_rating(rng),
    }
}

/// Fetch one page of users from the remote endpoint and augment each
/// record with a department and performance rating. A single failed
/// call surfaces the error; there is no retry.
pub fn fetch_employees_from(
    base_url: &str,
    rng: &mut impl Rng,
) -> Result<Vec<Employee>, HrError> {
    let client = reqwest::blocking::Client::new();
    let url = format!("{}/users?limit={}", base_url, PAGE_SIZE);

    let response = client.get(&url).send()?;

    if !response.status().is_success() {
        return Err(HrError::Network(format!(
            "HTTP status {} from {}",
            response.status(),
            url
        )));
    }

    let body: UsersResponse = response
        .json()
        .map_err(|e| HrError::Decode(e.to_string()))?;

    Ok(body.users.into_iter().map(|u| augment(u, rng)).collect())
}

pub fn fetch_employees(rng: &mut impl Rng) -> Result<Vec<Employee>, HrError> {
    fetch_employees_from(DEFAULT_BASE_URL, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_department_weights_sum_to_one() {
        let total: f64 = DEPARTMENT_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_department_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;
        let mut counts: HashMap<Department, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(random_department(&mut rng)).or_default() += 1;
        }

        let freq = |d: Department| counts.get(&d).copied().unwrap_or(0) as f64 / draws as f64;
        assert!((freq(Department::Hr) - 0.30).abs() < 0.02);
        assert!((freq(Department::Tech) - 0.50).abs() < 0.02);
        assert!((freq(Department::Finance) - 0.20).abs() < 0.02);
    }

    #[test]
    fn test_rating_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let rating = random_rating(&mut rng);
            assert!((1..=5).contains(&rating));
        }
    }

    #[test]
    fn test_rating_biased_toward_middle() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 100_000;
        let mut counts = [0u32; 6];
        for _ in 0..draws {
            counts[random_rating(&mut rng) as usize] += 1;
        }
        // 3 appears 4/12 times in the multiset, 1 appears 1/12.
        assert!(counts[3] > counts[1] * 2);
        assert!(counts[4] > counts[5]);
    }

    #[test]
    fn test_fetch_bad_url_is_network_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = fetch_employees_from("http://127.0.0.1:1", &mut rng);
        assert!(matches!(result, Err(HrError::Network(_))));
    }

    #[test]
    fn test_augment_keeps_identity_fields() {
        let raw = RawUser {
            id: 9,
            first_name: "Ann".to_string(),
            last_name: "Rao".to_string(),
            email: "ann.rao@example.com".to_string(),
            age: 31,
            image: None,
            gender: Some("female".to_string()),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let employee = augment(raw, &mut rng);
        assert_eq!(employee.id, 9);
        assert_eq!(employee.full_name(), "Ann Rao");
        assert!((1..=5).contains(&employee.rating));
    }
}

use chrono::{Datelike, Local, Months, NaiveDate};
use rand::Rng;

use crate::models::{
    Department, Employee, EmployeeDetails, Feedback, FeedbackKind, PerformanceReview, Project,
    ProjectStatus,
};

// --- Word lists ---

const DOOR_NUMBERS: [&str; 7] = ["#123", "Flat 4B", "7/A", "203", "42", "101/D", "Villa 9"];
const STREET_NAMES: [&str; 7] = [
    "Nehru Road",
    "Gandhi Street",
    "MG Road",
    "Patel Nagar",
    "Krishna Lane",
    "Juhu Beach Road",
    "Connaught Place",
];
const AREAS: [&str; 7] = [
    "Andheri East",
    "Bandra West",
    "Indiranagar",
    "Koramangala",
    "Salt Lake",
    "Adyar",
    "Aundh",
];
const CITIES: [&str; 7] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
];
const STATES: [&str; 7] = [
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Telangana",
    "West Bengal",
    "Uttar Pradesh",
    "Gujarat",
];
const PIN_CODES: [&str; 7] = [
    "400001", "500082", "560001", "600001", "700001", "110001", "411001",
];

const PHONE_PREFIXES: [&str; 8] = ["91", "70", "80", "90", "98", "99", "63", "73"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const HR_SKILLS: [&str; 6] = [
    "recruitment",
    "employee relations",
    "training",
    "benefits administration",
    "onboarding",
    "conflict resolution",
];
const TECH_SKILLS: [&str; 6] = [
    "full-stack development",
    "cloud architecture",
    "data analysis",
    "UI/UX design",
    "cybersecurity",
    "system administration",
];
const FINANCE_SKILLS: [&str; 6] = [
    "financial analysis",
    "budgeting",
    "forecasting",
    "risk assessment",
    "investment analysis",
    "tax planning",
];

const HR_PROJECTS: [&str; 6] = [
    "Employee Onboarding Redesign",
    "Corporate Diwali Event",
    "Talent Acquisition Program",
    "HR Policy Update",
    "Performance Review System",
    "Company Culture Initiative",
];
const TECH_PROJECTS: [&str; 6] = [
    "E-commerce Platform",
    "Payments App Development",
    "Cloud Migration",
    "Data Security Enhancement",
    "Legacy System Upgrade",
    "AI Implementation",
];
const FINANCE_PROJECTS: [&str; 6] = [
    "FY23 Budget Planning",
    "GST Compliance",
    "Financial Reporting Automation",
    "Investment Analysis",
    "Tax Compliance Review",
    "Accounting System Upgrade",
];

const HR_ROLES: [&str; 5] = [
    "HR Specialist",
    "Project Lead",
    "Recruiting Manager",
    "Training Coordinator",
    "HR Analyst",
];
const TECH_ROLES: [&str; 6] = [
    "Developer",
    "Project Manager",
    "UX Designer",
    "System Architect",
    "Data Analyst",
    "QA Specialist",
];
const FINANCE_ROLES: [&str; 5] = [
    "Financial Analyst",
    "Project Lead",
    "Budget Coordinator",
    "Accounting Specialist",
    "Investment Advisor",
];

const HR_DESCRIPTIONS: [&str; 3] = [
    "Streamlining the employee onboarding process to improve new hire experience and reduce time-to-productivity.",
    "Reviewing and updating employee benefits to enhance satisfaction and retention.",
    "Implementing new recruitment strategies to attract top talent across departments.",
];
const TECH_DESCRIPTIONS: [&str; 3] = [
    "Developing a new responsive design with improved user experience and modern framework implementation.",
    "Creating a cross-platform mobile application to extend our digital reach and user engagement.",
    "Transitioning on-premise infrastructure to cloud-based solutions for improved scalability.",
];
const FINANCE_DESCRIPTIONS: [&str; 3] = [
    "Creating comprehensive budget plans and forecasts for the upcoming fiscal year.",
    "Identifying opportunities for cost reduction while maintaining operational efficiency.",
    "Implementing automated reporting solutions to streamline month-end processes.",
];

const FEEDBACK_NAMES: [&str; 7] = [
    "Rahul Sharma",
    "Priya Patel",
    "Amit Singh",
    "Neha Gupta",
    "Vikram Mehta",
    "Ananya Desai",
    "Raj Malhotra",
];

const POSITIVE_FEEDBACK: [&str; 5] = [
    "Consistently delivers high-quality work and meets deadlines.",
    "Excellent team player who supports colleagues and contributes positively to team culture.",
    "Shows great initiative and problem-solving skills.",
    "Communicates effectively and keeps stakeholders informed.",
    "Demonstrates strong leadership qualities and mentors junior team members.",
];
const MIXED_FEEDBACK: [&str; 5] = [
    "Generally meets expectations, but could improve on meeting deadlines.",
    "Strong technical skills, but communication could be more consistent.",
    "Works well independently, but could contribute more in team settings.",
    "Good work quality, but sometimes takes on too much without asking for help.",
    "Effective in current role, but needs to develop more strategic thinking for advancement.",
];
const CONSTRUCTIVE_FEEDBACK: [&str; 5] = [
    "Needs to improve time management and meeting deadlines.",
    "Should work on communication frequency and transparency.",
    "Could benefit from more active participation in team discussions.",
    "Technical skills need development through additional training.",
    "Would benefit from more structured approach to project management.",
];

// Unknown departments fall back to the HR lists. Not reachable with the
// closed enum, kept as the lookup's defensive default.
fn skills_for(department: Department) -> &'static [&'static str] {
    match department {
        Department::Tech => &TECH_SKILLS,
        Department::Finance => &FINANCE_SKILLS,
        Department::Hr => &HR_SKILLS,
    }
}

fn projects_for(department: Department) -> &'static [&'static str] {
    match department {
        Department::Tech => &TECH_PROJECTS,
        Department::Finance => &FINANCE_PROJECTS,
        Department::Hr => &HR_PROJECTS,
    }
}

fn roles_for(department: Department) -> &'static [&'static str] {
    match department {
        Department::Tech => &TECH_ROLES,
        Department::Finance => &FINANCE_ROLES,
        Department::Hr => &HR_ROLES,
    }
}

fn descriptions_for(department: Department) -> &'static [&'static str] {
    match department {
        Department::Tech => &TECH_DESCRIPTIONS,
        Department::Finance => &FINANCE_DESCRIPTIONS,
        Department::Hr => &HR_DESCRIPTIONS,
    }
}

// --- Random helpers ---

fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Up to `count` distinct elements, in draw order.
fn pick_distinct<'a>(
    rng: &mut impl Rng,
    items: &'a [&'static str],
    count: usize,
) -> Vec<&'a str> {
    let mut chosen: Vec<&str> = Vec::with_capacity(count);
    while chosen.len() < count.min(items.len()) {
        let candidate = *pick(rng, items);
        if !chosen.contains(&candidate) {
            chosen.push(candidate);
        }
    }
    chosen
}

/// A date up to `months_ago` months before `today`, day clamped to 1-28.
fn random_date(rng: &mut impl Rng, today: NaiveDate, months_ago: u32) -> NaiveDate {
    let back = rng.gen_range(0..=months_ago);
    let shifted = today
        .checked_sub_months(Months::new(back))
        .unwrap_or(today);
    shifted
        .with_day(rng.gen_range(1..=28))
        .unwrap_or(shifted)
}

fn format_date(date: NaiveDate) -> String {
    // "Apr 12, 2026" to match the dashboard's short date form.
    date.format("%b %-d, %Y").to_string()
}

// --- Generators ---

fn generate_address(rng: &mut impl Rng) -> String {
    format!(
        "{}, {}, {}, {}, {} - {}",
        pick(rng, &DOOR_NUMBERS),
        pick(rng, &STREET_NAMES),
        pick(rng, &AREAS),
        pick(rng, &CITIES),
        pick(rng, &STATES),
        pick(rng, &PIN_CODES),
    )
}

fn generate_phone(rng: &mut impl Rng) -> String {
    let prefix = pick(rng, &PHONE_PREFIXES);
    let rest: u32 = rng.gen_range(10_000_000..100_000_000);
    format!("+91 {}{}", prefix, rest)
}

fn generate_bio(employee: &Employee, today: NaiveDate, rng: &mut impl Rng) -> String {
    let name = &employee.first_name;
    let department = employee.department;
    let skills = pick_distinct(rng, skills_for(department), 3);

    let intro = match rng.gen_range(0..3) {
        0 => format!(
            "{} is a dedicated professional with a strong background in {}.",
            name, department
        ),
        1 => format!(
            "As a valued member of our {} team, {} brings exceptional skills to the table.",
            department, name
        ),
        _ => format!(
            "{} joined our company in {} after completing education from IIT/IIM and has been an integral part of the {} department.",
            name,
            format_date(random_date(rng, today, 36)),
            department
        ),
    };

    let middle = match rng.gen_range(0..3) {
        0 => format!(
            "{} specializes in {} and {}, and has demonstrated remarkable skill in {}.",
            name, skills[0], skills[1], skills[2]
        ),
        1 => format!(
            "With expertise in {}, {}, and {}, {} consistently delivers exceptional results.",
            skills[0], skills[1], skills[2], name
        ),
        _ => format!(
            "{}'s areas of expertise include {}, {}, and {}.",
            name, skills[0], skills[1], skills[2]
        ),
    };

    let conclusion = match rng.gen_range(0..3) {
        0 => format!(
            "Outside of work, {} enjoys cricket, classical music, and spending time with family.",
            name
        ),
        1 => format!(
            "{} holds a degree from Delhi University and is currently pursuing additional certifications in their field.",
            name
        ),
        _ => format!(
            "When not working, {} can be found volunteering in the community and practicing yoga.",
            name
        ),
    };

    format!("{}\n\n{}\n\n{}", intro, middle, conclusion)
}

fn review_comment(rng: &mut impl Rng, name: &str, rating: u8) -> String {
    if rating >= 4 {
        match rng.gen_range(0..3) {
            0 => format!(
                "{} consistently exceeds expectations. Excellent work on all assigned tasks.",
                name
            ),
            1 => "Outstanding performance this period. Demonstrated leadership and initiative."
                .to_string(),
            _ => "Excellent contributor who goes above and beyond requirements. A valuable team member."
                .to_string(),
        }
    } else if rating == 3 {
        match rng.gen_range(0..3) {
            0 => format!(
                "{} meets all job requirements and occasionally exceeds expectations.",
                name
            ),
            1 => "Solid performance. Completes assigned tasks on time with good quality.".to_string(),
            _ => "Reliable team member who consistently delivers on commitments.".to_string(),
        }
    } else {
        match rng.gen_range(0..3) {
            0 => format!(
                "{} is improving but needs to focus on meeting deadlines consistently.",
                name
            ),
            1 => "Performance meets some expectations but needs improvement in key areas."
                .to_string(),
            _ => "Has potential but requires additional support and guidance.".to_string(),
        }
    }
}

fn generate_performance_history(
    employee: &Employee,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<PerformanceReview> {
    let years = [today.year() - 1, today.year()];
    let count = rng.gen_range(3..=5);

    // (year, month index) pairs, unique per bundle.
    let mut used: Vec<(i32, usize)> = Vec::with_capacity(count);
    while used.len() < count {
        let candidate = (*pick(rng, &years), rng.gen_range(0..12));
        if !used.contains(&candidate) {
            used.push(candidate);
        }
    }

    let mut history: Vec<(i32, usize, PerformanceReview)> = used
        .into_iter()
        .map(|(year, month)| {
            let delta = rng.gen_range(-1i8..=1);
            let rating = (employee.rating as i8 + delta).clamp(1, 5) as u8;
            let review = PerformanceReview {
                month: format!("{} {}", MONTH_NAMES[month], year),
                rating,
                comment: review_comment(rng, &employee.first_name, rating),
            };
            (year, month, review)
        })
        .collect();

    // Newest month-year first.
    history.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    history.into_iter().map(|(_, _, review)| review).collect()
}

fn generate_projects(employee: &Employee, today: NaiveDate, rng: &mut impl Rng) -> Vec<Project> {
    let count = rng.gen_range(1..=4);
    let names = pick_distinct(rng, projects_for(employee.department), count);
    let roles = roles_for(employee.department);
    let descriptions = descriptions_for(employee.department);

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let status = *pick(rng, &ProjectStatus::all());
            let start = random_date(rng, today, 12);

            let (completion, end_date) = if status == ProjectStatus::Completed {
                let end = start
                    .checked_add_months(Months::new(rng.gen_range(1..=3)))
                    .unwrap_or(start);
                (100, Some(format_date(end)))
            } else {
                (rng.gen_range(10..=90), None)
            };

            Project {
                id: i as u64 + 1,
                name: name.to_string(),
                role: pick(rng, roles).to_string(),
                status,
                start_date: format_date(start),
                end_date,
                description: pick(rng, descriptions).to_string(),
                completion,
            }
        })
        .collect()
}

fn generate_feedback(today: NaiveDate, rng: &mut impl Rng) -> Vec<Feedback> {
    let count: u64 = rng.gen_range(0..=5);
    let kinds = [
        FeedbackKind::Peer,
        FeedbackKind::Manager,
        FeedbackKind::SelfReview,
    ];

    let mut entries: Vec<(NaiveDate, Feedback)> = (0..count)
        .map(|i| {
            let rating = rng.gen_range(2..=5);
            let kind = *pick(rng, &kinds);
            let from = match kind {
                FeedbackKind::SelfReview => "Self Assessment".to_string(),
                FeedbackKind::Manager => "Team Manager".to_string(),
                FeedbackKind::Peer => pick(rng, &FEEDBACK_NAMES).to_string(),
            };
            let pool: &[&str] = if rating >= 4 {
                &POSITIVE_FEEDBACK
            } else if rating == 3 {
                &MIXED_FEEDBACK
            } else {
                &CONSTRUCTIVE_FEEDBACK
            };
            let date = random_date(rng, today, 6);
            let feedback = Feedback {
                id: i + 1,
                from,
                date: format_date(date),
                rating,
                message: pick(rng, pool).to_string(),
                kind,
            };
            (date, feedback)
        })
        .collect();

    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries.into_iter().map(|(_, feedback)| feedback).collect()
}

/// Synthesizes the full detail bundle for one employee. Randomly
/// filled on every call; only the structure is stable.
pub fn generate_details(employee: &Employee, rng: &mut impl Rng) -> EmployeeDetails {
    generate_details_at(employee, Local::now().date_naive(), rng)
}

/// Same as [`generate_details`] but anchored to an explicit `today`.
pub fn generate_details_at(
    employee: &Employee,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> EmployeeDetails {
    EmployeeDetails {
        address: generate_address(rng),
        phone: generate_phone(rng),
        bio: generate_bio(employee, today, rng),
        performance_history: generate_performance_history(employee, today, rng),
        projects: generate_projects(employee, today, rng),
        feedback: generate_feedback(today, rng),
    }
}

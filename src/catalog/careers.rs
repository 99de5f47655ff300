use rust_decimal_macros::dec;

use super::model::CareerProfile;

fn career(
    title: &str,
    starting: rust_decimal::Decimal,
    mid: rust_decimal::Decimal,
    years_to_mid_career: u32,
) -> CareerProfile {
    CareerProfile {
        title: title.to_string(),
        avg_starting_salary: starting,
        avg_mid_career_salary: mid,
        years_to_mid_career,
    }
}

pub(super) fn builtin_careers() -> Vec<CareerProfile> {
    vec![
        career("Software Developer", dec!(70000), dec!(110000), 5),
        career("Cloud Engineer", dec!(75000), dec!(120000), 4),
        career("Data Analyst", dec!(60000), dec!(90000), 5),
        career("IT Support Specialist", dec!(45000), dec!(70000), 6),
        career("Web Developer", dec!(55000), dec!(85000), 5),
        career("Database Administrator", dec!(65000), dec!(95000), 5),
        career("Cybersecurity Analyst", dec!(70000), dec!(115000), 4),
    ]
}

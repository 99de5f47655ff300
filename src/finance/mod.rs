//! Education cost and return-on-investment model.
//!
//! Everything here is a pure function of `CostInputs` and a
//! `CareerProfile`. Values stay unrounded `Decimal`s until they reach the
//! display helpers in [`display`].

pub mod display;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{CareerProfile, DegreeLevel};

pub use display::{format_break_even, format_currency, format_roi};

/// Months of living expenses counted per academic year.
pub const MONTHS_PER_ACADEMIC_YEAR: u32 = 9;

/// Years of salary counted at the starting and at the mid-career rate.
const EARNING_YEARS_PER_RATE: u32 = 5;

/// Cost inputs collected by the financial planner.
///
/// Currency fields are expected to be non-negative; the planner clamps them
/// when they are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    pub degree_type: DegreeLevel,
    pub tuition_per_year: Decimal,
    pub books_per_year: Decimal,
    pub fees_per_year: Decimal,
    pub housing_per_month: Decimal,
    pub transportation_per_month: Decimal,
    pub food_per_month: Decimal,
    pub misc_per_month: Decimal,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            degree_type: DegreeLevel::Associate,
            tuition_per_year: dec!(4000),
            books_per_year: dec!(1200),
            fees_per_year: dec!(500),
            housing_per_month: dec!(800),
            transportation_per_month: dec!(200),
            food_per_month: dec!(400),
            misc_per_month: dec!(300),
        }
    }
}

/// Derived cost and return figures. Never stored; recompute instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjection {
    pub years: u32,
    pub months_per_year: u32,
    pub total_tuition: Decimal,
    pub total_books: Decimal,
    pub total_fees: Decimal,
    pub total_education_cost: Decimal,
    pub monthly_living: Decimal,
    pub total_living_cost: Decimal,
    pub grand_total: Decimal,
    pub lifetime_10yr_earnings: Decimal,
    /// `None` when the grand total is zero.
    pub roi_percent: Option<Decimal>,
    /// `None` when the starting salary is zero.
    pub break_even_months: Option<u32>,
}

impl FinancialProjection {
    pub fn roi_display(&self) -> String {
        format_roi(self.roi_percent)
    }

    pub fn break_even_display(&self) -> String {
        format_break_even(self.break_even_months)
    }
}

/// Project total cost and 10-year return for a degree and career.
pub fn project(inputs: &CostInputs, career: &CareerProfile) -> FinancialProjection {
    let years = inputs.degree_type.years();
    let years_dec = Decimal::from(years);
    let months_dec = Decimal::from(MONTHS_PER_ACADEMIC_YEAR);

    let total_tuition = inputs.tuition_per_year * years_dec;
    let total_books = inputs.books_per_year * years_dec;
    let total_fees = inputs.fees_per_year * years_dec;
    let total_education_cost = total_tuition + total_books + total_fees;

    let monthly_living = inputs.housing_per_month
        + inputs.transportation_per_month
        + inputs.food_per_month
        + inputs.misc_per_month;
    let total_living_cost = monthly_living * months_dec * years_dec;

    let grand_total = total_education_cost + total_living_cost;

    let rate_years = Decimal::from(EARNING_YEARS_PER_RATE);
    let lifetime_10yr_earnings =
        career.avg_starting_salary * rate_years + career.avg_mid_career_salary * rate_years;

    let roi_percent = (lifetime_10yr_earnings - grand_total)
        .checked_div(grand_total)
        .map(|ratio| ratio * dec!(100));

    let break_even_months = grand_total
        .checked_div(career.avg_starting_salary)
        .and_then(|ratio| (ratio * dec!(12)).ceil().to_u32());

    FinancialProjection {
        years,
        months_per_year: MONTHS_PER_ACADEMIC_YEAR,
        total_tuition,
        total_books,
        total_fees,
        total_education_cost,
        monthly_living,
        total_living_cost,
        grand_total,
        lifetime_10yr_earnings,
        roi_percent,
        break_even_months,
    }
}

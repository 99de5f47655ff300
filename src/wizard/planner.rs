//! Financial planner: enter costs and a target career, see the projection.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::{CareerCatalog, CareerProfile, DegreeLevel};
use crate::error::WizardError;
use crate::finance::{self, CostInputs, FinancialProjection};

use super::sequencer::{Advance, Retreat, StepSequencer, WizardStep};

const FLOW: &str = "financial planner";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlannerStep {
    Input,
    Results,
}

impl WizardStep for PlannerStep {
    const ORDER: &'static [Self] = &[Self::Input, Self::Results];
}

impl std::fmt::Display for PlannerStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Results => write!(f, "results"),
        }
    }
}

/// A currency field of `CostInputs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostField {
    TuitionPerYear,
    BooksPerYear,
    FeesPerYear,
    HousingPerMonth,
    TransportationPerMonth,
    FoodPerMonth,
    MiscPerMonth,
}

impl FromStr for CostField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "tuitionPerYear" | "tuition_per_year" => Self::TuitionPerYear,
            "booksPerYear" | "books_per_year" => Self::BooksPerYear,
            "feesPerYear" | "fees_per_year" => Self::FeesPerYear,
            "housingPerMonth" | "housing_per_month" => Self::HousingPerMonth,
            "transportationPerMonth" | "transportation_per_month" => Self::TransportationPerMonth,
            "foodPerMonth" | "food_per_month" => Self::FoodPerMonth,
            "miscPerMonth" | "misc_per_month" => Self::MiscPerMonth,
            _ => return Err(()),
        })
    }
}

/// One planner session.
pub struct FinancialPlanner<'c> {
    id: Uuid,
    careers: &'c CareerCatalog,
    inputs: CostInputs,
    career: &'c CareerProfile,
    seq: StepSequencer<PlannerStep>,
}

impl<'c> FinancialPlanner<'c> {
    pub fn open(careers: &'c CareerCatalog) -> Self {
        Self {
            id: Uuid::new_v4(),
            careers,
            inputs: CostInputs::default(),
            career: careers.default_career(),
            seq: StepSequencer::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> PlannerStep {
        self.seq.current()
    }

    pub fn is_closed(&self) -> bool {
        self.seq.is_closed()
    }

    pub fn loading(&self) -> bool {
        false
    }

    pub fn error(&self) -> Option<&str> {
        None
    }

    pub fn inputs(&self) -> &CostInputs {
        &self.inputs
    }

    pub fn career(&self) -> &'c CareerProfile {
        self.career
    }

    pub fn careers(&self) -> &'c [CareerProfile] {
        self.careers.careers()
    }

    /// The projection for the current inputs, computed fresh on each call
    /// while the results step is showing.
    pub fn projection(&self) -> Option<FinancialProjection> {
        (!self.seq.is_closed() && self.seq.current() == PlannerStep::Results)
            .then(|| finance::project(&self.inputs, self.career))
    }

    pub fn set_degree_type(&mut self, degree: DegreeLevel) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.inputs.degree_type = degree;
        Ok(())
    }

    /// Set a currency input. Negative amounts are clamped to zero.
    pub fn set_amount(&mut self, field: CostField, amount: Decimal) -> Result<(), WizardError> {
        self.ensure_open()?;
        let amount = amount.max(Decimal::ZERO);
        let slot = match field {
            CostField::TuitionPerYear => &mut self.inputs.tuition_per_year,
            CostField::BooksPerYear => &mut self.inputs.books_per_year,
            CostField::FeesPerYear => &mut self.inputs.fees_per_year,
            CostField::HousingPerMonth => &mut self.inputs.housing_per_month,
            CostField::TransportationPerMonth => &mut self.inputs.transportation_per_month,
            CostField::FoodPerMonth => &mut self.inputs.food_per_month,
            CostField::MiscPerMonth => &mut self.inputs.misc_per_month,
        };
        *slot = amount;
        Ok(())
    }

    /// Select a career by title. Unknown titles select the default career.
    pub fn set_career(&mut self, title: &str) -> Result<(), WizardError> {
        self.ensure_open()?;
        self.career = self.careers.find_or_default(title);
        Ok(())
    }

    /// String-keyed setter for the shell. Blank amounts count as zero.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), WizardError> {
        match name {
            "degreeType" | "degree_type" => {
                let degree = value.parse().map_err(|reason| WizardError::InvalidValue {
                    field: name.to_string(),
                    reason,
                })?;
                self.set_degree_type(degree)
            }
            "career" => self.set_career(value),
            other => {
                let field = CostField::from_str(other).map_err(|_| WizardError::UnknownField {
                    flow: FLOW,
                    name: other.to_string(),
                })?;
                let value = value.trim();
                let amount = if value.is_empty() {
                    Decimal::ZERO
                } else {
                    Decimal::from_str(value).map_err(|e| WizardError::InvalidValue {
                        field: other.to_string(),
                        reason: e.to_string(),
                    })?
                };
                self.set_amount(field, amount)
            }
        }
    }

    pub fn can_retreat(&self) -> bool {
        self.seq.can_retreat()
    }

    pub fn can_advance(&self) -> bool {
        !self.seq.is_closed() && self.seq.current() == PlannerStep::Input
    }

    pub fn advance(&mut self) -> Advance<PlannerStep> {
        let outcome = self.seq.advance_if(true);
        if outcome.moved() {
            let projection = finance::project(&self.inputs, self.career);
            info!(
                session = %self.id,
                career = %self.career.title,
                degree = %self.inputs.degree_type,
                grand_total = %projection.grand_total,
                roi = %projection.roi_display(),
                "Financial projection computed"
            );
        }
        outcome
    }

    /// Back to input ("Adjust Numbers") with every value kept; from input
    /// the planner closes.
    pub fn retreat(&mut self) -> Retreat<PlannerStep> {
        let outcome = self.seq.retreat();
        if outcome == Retreat::Closed {
            self.close();
        }
        outcome
    }

    pub fn close(&mut self) {
        self.inputs = CostInputs::default();
        self.career = self.careers.default_career();
        self.seq.close();
        debug!(session = %self.id, "Financial planner closed");
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.seq.is_closed() {
            Err(WizardError::Closed { flow: FLOW })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn open() -> FinancialPlanner<'static> {
        FinancialPlanner::open(CareerCatalog::builtin())
    }

    #[test]
    fn no_projection_on_input_step() {
        let planner = open();
        assert_eq!(planner.step(), PlannerStep::Input);
        assert!(planner.projection().is_none());
    }

    #[test]
    fn advance_computes_default_projection() {
        let mut planner = open();
        assert_eq!(planner.advance(), Advance::Moved(PlannerStep::Results));
        let p = planner.projection().unwrap();
        assert_eq!(p.total_education_cost, dec!(11400));
        assert_eq!(p.total_living_cost, dec!(30600));
        assert_eq!(planner.advance(), Advance::AtEnd);
    }

    #[test]
    fn negative_amounts_are_clamped() {
        let mut planner = open();
        planner.set_field("tuitionPerYear", "-2500").unwrap();
        assert_eq!(planner.inputs().tuition_per_year, Decimal::ZERO);
        planner
            .set_amount(CostField::FoodPerMonth, dec!(-1))
            .unwrap();
        assert_eq!(planner.inputs().food_per_month, Decimal::ZERO);
    }

    #[test]
    fn blank_amount_is_zero_and_garbage_is_rejected() {
        let mut planner = open();
        planner.set_field("booksPerYear", "  ").unwrap();
        assert_eq!(planner.inputs().books_per_year, Decimal::ZERO);

        let before = planner.inputs().clone();
        assert!(matches!(
            planner.set_field("feesPerYear", "lots"),
            Err(WizardError::InvalidValue { .. })
        ));
        assert_eq!(planner.inputs(), &before);
    }

    #[test]
    fn adjust_numbers_round_trip_keeps_inputs() {
        let mut planner = open();
        planner.set_field("degreeType", "bachelor").unwrap();
        planner.set_field("housingPerMonth", "1000").unwrap();
        planner.set_field("career", "Cloud Engineer").unwrap();
        planner.advance();
        let first = planner.projection().unwrap();
        assert_eq!(first.years, 4);

        assert_eq!(planner.retreat(), Retreat::Moved(PlannerStep::Input));
        assert_eq!(planner.inputs().housing_per_month, dec!(1000));
        assert_eq!(planner.career().title, "Cloud Engineer");

        planner.set_field("housingPerMonth", "800").unwrap();
        planner.advance();
        let second = planner.projection().unwrap();
        assert_eq!(first.total_living_cost - second.total_living_cost, dec!(7200));
    }

    #[test]
    fn unknown_career_selects_default() {
        let mut planner = open();
        planner.set_career("Cloud Engineer").unwrap();
        planner.set_career("Wizard").unwrap();
        assert_eq!(planner.career().title, "Software Developer");
    }

    #[test]
    fn unknown_field_is_reported() {
        let mut planner = open();
        assert!(matches!(
            planner.set_field("parking", "10"),
            Err(WizardError::UnknownField { .. })
        ));
    }

    #[test]
    fn retreat_from_input_closes() {
        let mut planner = open();
        planner.set_field("miscPerMonth", "50").unwrap();
        assert_eq!(planner.retreat(), Retreat::Closed);
        assert!(planner.is_closed());
        assert!(planner.projection().is_none());
        assert_eq!(planner.inputs(), &CostInputs::default());
        assert_eq!(
            planner.set_field("miscPerMonth", "50"),
            Err(WizardError::Closed { flow: FLOW })
        );
    }
}

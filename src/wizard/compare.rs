//! Program comparison: pick a major, choose 2–3 programs, compare them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::{DEFAULT_MAJOR_ID, Major, Program, ProgramCatalog};
use crate::error::WizardError;
use crate::selection::SelectionSet;

use super::sequencer::{Advance, Retreat, StepSequencer, WizardStep};

const FLOW: &str = "program comparison";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompareStep {
    SelectMajor,
    SelectPrograms,
    Compare,
}

impl WizardStep for CompareStep {
    const ORDER: &'static [Self] = &[Self::SelectMajor, Self::SelectPrograms, Self::Compare];
}

impl std::fmt::Display for CompareStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::SelectMajor => "select-major",
            Self::SelectPrograms => "select-programs",
            Self::Compare => "compare",
        };
        write!(f, "{s}")
    }
}

/// One comparison-tool session over a shared catalog.
pub struct ComparePrograms<'c> {
    id: Uuid,
    catalog: &'c ProgramCatalog,
    major_id: String,
    selection: SelectionSet,
    seq: StepSequencer<CompareStep>,
}

impl<'c> ComparePrograms<'c> {
    /// Open on `initial_major` (default `computer-science`). Unknown ids fall
    /// back to the catalog's first major.
    pub fn open(catalog: &'c ProgramCatalog, initial_major: Option<&str>) -> Self {
        let major = catalog.major_or_first(initial_major.unwrap_or(DEFAULT_MAJOR_ID));
        Self {
            id: Uuid::new_v4(),
            catalog,
            major_id: major.id.clone(),
            selection: SelectionSet::new(),
            seq: StepSequencer::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> CompareStep {
        self.seq.current()
    }

    pub fn is_closed(&self) -> bool {
        self.seq.is_closed()
    }

    /// Always false; comparison does no I/O.
    pub fn loading(&self) -> bool {
        false
    }

    /// Always `None`; constraint violations are silent no-ops.
    pub fn error(&self) -> Option<&str> {
        None
    }

    pub fn majors(&self) -> &'c [Major] {
        self.catalog.majors()
    }

    pub fn major(&self) -> &'c Major {
        self.catalog.major_or_first(&self.major_id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected programs in column order.
    pub fn selected_programs(&self) -> Vec<&'c Program> {
        self.selection.resolve(self.major())
    }

    pub fn is_selected(&self, program: &Program) -> bool {
        self.selection.contains(program)
    }

    pub fn is_disabled(&self, program: &Program) -> bool {
        self.selection.is_disabled(program)
    }

    pub fn can_retreat(&self) -> bool {
        self.seq.can_retreat()
    }

    pub fn can_advance(&self) -> bool {
        if self.seq.is_closed() {
            return false;
        }
        match self.seq.current() {
            CompareStep::SelectMajor => true,
            CompareStep::SelectPrograms => self.selection.can_compare(),
            CompareStep::Compare => false,
        }
    }

    /// Choose a major, drop any selection from the previous one and land on
    /// program selection, from whichever step the flow is on.
    pub fn select_major(&mut self, major_id: &str) -> Result<Advance<CompareStep>, WizardError> {
        if self.seq.is_closed() {
            return Err(WizardError::Closed { flow: FLOW });
        }
        let major = self
            .catalog
            .major(major_id)
            .ok_or_else(|| WizardError::InvalidValue {
                field: "major".to_string(),
                reason: format!("unknown major '{major_id}'"),
            })?;

        self.major_id = major.id.clone();
        self.selection.clear();
        debug!(session = %self.id, major = %self.major_id, "Major selected");

        if self.seq.current() == CompareStep::SelectMajor {
            return Ok(self.seq.advance_if(true));
        }
        self.seq.rewind_to(CompareStep::SelectPrograms);
        Ok(Advance::Moved(CompareStep::SelectPrograms))
    }

    /// Toggle a program of the current major. Only acts on the program
    /// selection step; unknown ids and a full set are ignored.
    pub fn toggle_program(&mut self, program_id: &str) -> bool {
        if self.seq.is_closed() || self.seq.current() != CompareStep::SelectPrograms {
            return false;
        }
        let major = self.catalog.major_or_first(&self.major_id);
        match major.program(program_id) {
            Some(program) => self.selection.toggle(program),
            None => false,
        }
    }

    /// String-keyed setter for the shell: `major` selects a major, `program`
    /// toggles a program.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), WizardError> {
        if self.seq.is_closed() {
            return Err(WizardError::Closed { flow: FLOW });
        }
        match name {
            "major" => self.select_major(value).map(|_| ()),
            "program" => {
                self.toggle_program(value);
                Ok(())
            }
            other => Err(WizardError::UnknownField {
                flow: FLOW,
                name: other.to_string(),
            }),
        }
    }

    pub fn advance(&mut self) -> Advance<CompareStep> {
        let ok = self.can_advance();
        let outcome = self.seq.advance_if(ok);
        if outcome == Advance::Moved(CompareStep::Compare) {
            info!(
                session = %self.id,
                major = %self.major_id,
                programs = ?self.selection.ids(),
                "Comparing programs"
            );
        }
        outcome
    }

    /// Step back. Leaving program selection returns to the major list and
    /// clears the selection.
    pub fn retreat(&mut self) -> Retreat<CompareStep> {
        let outcome = self.seq.retreat();
        match outcome {
            Retreat::Moved(CompareStep::SelectMajor) => self.selection.clear(),
            Retreat::Closed => self.close(),
            Retreat::Moved(_) => {}
        }
        outcome
    }

    pub fn close(&mut self) {
        self.selection.clear();
        self.seq.close();
        debug!(session = %self.id, "Program comparison closed");
    }
}

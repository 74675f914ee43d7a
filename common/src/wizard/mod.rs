//! Intake wizard state machine.
//!
//! The wizard never sleeps or performs I/O. Arriving on step 5 yields an
//! [`ArmTicket`]; the caller waits the delay and hands the ticket back through
//! [`Wizard::arm_submit`]. Tickets from an earlier visit to step 5 are ignored.

pub mod submission;

use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use crate::error::ApiError;
use crate::model::collection::{
    Attachment, CollectionDraft, CollectionRequest, CollectionStatus, ConsumptionProfile,
    Installation, InstallationKind, PersonalInfo, ProfileKind, RoofMaterial,
};
use crate::model::equipment::{Appliance, Equipment, EquipmentField};
use crate::validation::{ValidationError, validate_step};

pub use submission::{SubmitTarget, Submission, SubmissionMeta};

/// How long the submit control stays disabled after arriving on step 5.
pub const SUBMIT_GUARD_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    PersonalInfo,
    ConsumptionProfile,
    Equipment,
    Installation,
    Location,
}

impl Step {
    pub const COUNT: u8 = 5;

    pub const ALL: [Step; 5] = [
        Step::PersonalInfo,
        Step::ConsumptionProfile,
        Step::Equipment,
        Step::Installation,
        Step::Location,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::ConsumptionProfile => 2,
            Step::Equipment => 3,
            Step::Installation => 4,
            Step::Location => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_last(&self) -> bool {
        *self == Step::Location
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Informations Personnelles",
            Step::ConsumptionProfile => "Profil de Consommation",
            Step::Equipment => "Vos Équipements",
            Step::Installation => "Type d'Installation",
            Step::Location => "Derniers détails",
        }
    }

    /// Progress bar fill, rounded to a whole percent.
    pub fn progress_percent(&self) -> u8 {
        ((u16::from(self.number()) * 100 + u16::from(Self::COUNT) / 2) / u16::from(Self::COUNT))
            as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

/// Proof that a step-5 arrival happened; redeemed by [`Wizard::arm_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmTicket(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    /// Arrived on step 5. Submit stays disabled until `ticket` is redeemed
    /// after `delay`.
    ReachedSubmit { ticket: ArmTicket, delay: Duration },
}

impl Advance {
    pub fn step(&self) -> Step {
        match self {
            Advance::Moved(step) => *step,
            Advance::ReachedSubmit { .. } => Step::Location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NextError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("la dernière étape se termine par l'envoi de la demande")]
    AtLastStep,
    #[error("la demande n'est plus modifiable")]
    NotEditing,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("l'envoi n'est possible qu'à la dernière étape")]
    NotAtLastStep,
    #[error("l'envoi n'est pas encore disponible")]
    NotArmed,
    #[error("un envoi est déjà en cours")]
    InFlight,
    #[error("la demande a déjà été envoyée")]
    AlreadySubmitted,
}

/// Create a new request, or update the stored one with this id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update {
        id: String,
        status: CollectionStatus,
        submitted_at: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone)]
pub struct Wizard<F> {
    draft: CollectionDraft<F>,
    initial: CollectionDraft<F>,
    /// Profile data set aside when the visitor switches profile, restored if
    /// they switch back.
    shelved_profile: Option<ConsumptionProfile<F>>,
    step: Step,
    mode: Mode,
    phase: Phase,
    submit_armed: bool,
    arm_generation: u32,
    last_error: Option<ApiError>,
}

impl<F: Clone> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> Wizard<F> {
    pub fn new() -> Self {
        Self::with_draft(CollectionDraft::default(), Mode::Create)
    }

    /// Edit a stored request. Always restarts on step 1, whatever step the
    /// record was saved at, and submits an update.
    pub fn edit(record: CollectionRequest<F>) -> Self {
        let mode = Mode::Update {
            id: record.id,
            status: record.status,
            submitted_at: record.submitted_at,
        };
        Self::with_draft(record.draft, mode)
    }

    fn with_draft(draft: CollectionDraft<F>, mode: Mode) -> Self {
        Self {
            initial: draft.clone(),
            draft,
            shelved_profile: None,
            step: Step::PersonalInfo,
            mode,
            phase: Phase::Editing,
            submit_armed: false,
            arm_generation: 0,
            last_error: None,
        }
    }
}

impl<F> Wizard<F> {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn draft(&self) -> &CollectionDraft<F> {
        &self.draft
    }

    pub fn is_editing_existing(&self) -> bool {
        matches!(self.mode, Mode::Update { .. })
    }

    /// Error of the last failed submission, cleared on the next attempt.
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_last() && self.submit_armed && self.phase == Phase::Editing
    }

    /// Validates the current step and moves forward.
    ///
    /// From step 2 with the invoice profile the equipment step is skipped.
    /// On failure the step is unchanged.
    pub fn next(&mut self) -> Result<Advance, NextError> {
        if self.phase != Phase::Editing {
            return Err(NextError::NotEditing);
        }
        validate_step(self.step, &self.draft)?;

        let target = match (self.step, self.draft.profile_kind()) {
            (Step::ConsumptionProfile, Some(ProfileKind::Invoice)) => Step::Installation,
            (step, _) => step.next().ok_or(NextError::AtLastStep)?,
        };
        debug!("wizard: step {} -> {}", self.step.number(), target.number());
        self.step = target;

        if target.is_last() {
            self.submit_armed = false;
            self.arm_generation = self.arm_generation.wrapping_add(1);
            Ok(Advance::ReachedSubmit {
                ticket: ArmTicket(self.arm_generation),
                delay: SUBMIT_GUARD_DELAY,
            })
        } else {
            Ok(Advance::Moved(target))
        }
    }

    /// Moves one step down without validation. No-op on step 1 or once the
    /// request has been sent.
    pub fn back(&mut self) -> Step {
        if self.phase == Phase::Editing {
            if let Some(previous) = self.step.previous() {
                debug!("wizard: back {} -> {}", self.step.number(), previous.number());
                self.step = previous;
                self.submit_armed = false;
            }
        }
        self.step
    }

    /// Enables submit if `ticket` belongs to the current visit of step 5.
    /// Returns whether submit is now enabled.
    pub fn arm_submit(&mut self, ticket: ArmTicket) -> bool {
        if ticket.0 == self.arm_generation && self.step.is_last() {
            self.submit_armed = true;
        }
        self.can_submit()
    }

    /// Validates step 5, marks the submission in flight and returns the body
    /// to send. `now` is the ISO timestamp stamped on new requests.
    pub fn begin_submit(&mut self, now: &str) -> Result<Submission<'_, F>, SubmitError> {
        match self.phase {
            Phase::Submitting => return Err(SubmitError::InFlight),
            Phase::Submitted => return Err(SubmitError::AlreadySubmitted),
            Phase::Editing => {}
        }
        if !self.step.is_last() {
            return Err(SubmitError::NotAtLastStep);
        }
        if !self.submit_armed {
            return Err(SubmitError::NotArmed);
        }
        validate_step(Step::Location, &self.draft)?;

        self.phase = Phase::Submitting;
        self.last_error = None;

        let (target, status, stored_date) = match &self.mode {
            Mode::Create => (SubmitTarget::Create, CollectionStatus::Pending, None),
            Mode::Update {
                id,
                status,
                submitted_at,
            } => (
                SubmitTarget::Update(id.clone()),
                *status,
                submitted_at.map(|d| d.format("%Y-%m-%d").to_string()),
            ),
        };
        let submitted_at = match &target {
            SubmitTarget::Create => Some(now.to_string()),
            SubmitTarget::Update(_) => stored_date,
        };
        let meta = SubmissionMeta {
            status,
            submitted_at: submitted_at.as_deref(),
            step: self.step.number(),
        };
        let body = submission::draft_body(&self.draft, &target, &meta);
        Ok(Submission { target, body })
    }

    /// Records the backend's answer to the in-flight submission.
    ///
    /// Failure keeps the draft and the step, re-enables submit and stores the
    /// error for display; the visitor can resubmit as is.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                debug!("wizard: submission accepted");
                self.phase = Phase::Submitted;
            }
            Err(err) => {
                debug!("wizard: submission failed: {err}");
                self.phase = Phase::Editing;
                self.last_error = Some(err);
            }
        }
    }

    // --- draft edits -----------------------------------------------------

    pub fn personal_info_mut(&mut self) -> &mut PersonalInfo {
        &mut self.draft.personal_info
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.draft.city = city.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// Switches the consumption profile. The previous profile's data is
    /// shelved and comes back if the visitor switches back.
    pub fn select_profile(&mut self, kind: ProfileKind) {
        if self.draft.profile_kind() == Some(kind) {
            return;
        }
        let restored = match self.shelved_profile.take() {
            Some(shelved) if shelved.kind() == kind => shelved,
            other => {
                self.shelved_profile = other;
                ConsumptionProfile::empty(kind)
            }
        };
        if let Some(previous) = self.draft.profile.replace(restored) {
            self.shelved_profile = Some(previous);
        }
    }

    /// Adds a locally picked invoice. Ignored unless the invoice profile is
    /// selected.
    pub fn attach(&mut self, file: F) -> bool {
        match &mut self.draft.profile {
            Some(ConsumptionProfile::Invoice(files)) => {
                files.push(Attachment::Upload(file));
                true
            }
            _ => false,
        }
    }

    pub fn detach(&mut self, index: usize) -> Option<Attachment<F>> {
        match &mut self.draft.profile {
            Some(ConsumptionProfile::Invoice(files)) if index < files.len() => {
                Some(files.remove(index))
            }
            _ => None,
        }
    }

    /// Appends a new equipment line and returns its id. Ignored unless the
    /// equipment profile is selected.
    pub fn add_equipment(&mut self, appliance: Appliance, name: Option<String>) -> Option<String> {
        match &mut self.draft.profile {
            Some(ConsumptionProfile::Equipment(items)) => {
                let item = Equipment::new(appliance, name);
                let id = item.id.clone();
                items.push(item);
                Some(id)
            }
            _ => None,
        }
    }

    pub fn update_equipment(&mut self, id: &str, field: EquipmentField, value: i32) -> bool {
        let Some(ConsumptionProfile::Equipment(items)) = &mut self.draft.profile else {
            return false;
        };
        let Some(item) = items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        match field {
            EquipmentField::Quantity => item.quantity = value,
            EquipmentField::PowerWatts => item.power_watts = value,
            EquipmentField::HoursPerDay => item.hours_per_day = value,
        }
        true
    }

    pub fn remove_equipment(&mut self, id: &str) -> bool {
        match &mut self.draft.profile {
            Some(ConsumptionProfile::Equipment(items)) => {
                let before = items.len();
                items.retain(|i| i.id != id);
                items.len() != before
            }
            _ => false,
        }
    }

    /// Picks roof or ground. Re-selecting roof keeps the chosen material.
    pub fn select_installation(&mut self, kind: InstallationKind) {
        self.draft.installation = match (kind, self.draft.installation) {
            (InstallationKind::Roof, Some(Installation::Roof(material))) => {
                Some(Installation::Roof(material))
            }
            (InstallationKind::Roof, _) => Some(Installation::Roof(None)),
            (InstallationKind::Ground, _) => Some(Installation::Ground),
        };
    }

    /// Sets the roof material, selecting the roof installation if needed.
    pub fn select_roof_material(&mut self, material: RoofMaterial) {
        self.draft.installation = Some(Installation::Roof(Some(material)));
    }
}

impl<F: PartialEq> Wizard<F> {
    /// Whether the draft differs from what the wizard started with and has
    /// not been sent yet.
    pub fn is_dirty(&self) -> bool {
        self.phase != Phase::Submitted && self.draft != self.initial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multipart::METHOD_OVERRIDE;

    type TestWizard = Wizard<&'static str>;

    fn fill_personal_info(wizard: &mut TestWizard) {
        let info = wizard.personal_info_mut();
        info.name = "Koné".into();
        info.first_name = "Awa".into();
        info.email = "awa@lynays.ci".into();
        info.phone = "+2250700000000".into();
    }

    /// Drives a fresh wizard to step 5 along the invoice path.
    fn at_last_step() -> (TestWizard, ArmTicket) {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        wizard.select_profile(ProfileKind::Invoice);
        wizard.attach("facture-cie.pdf");
        wizard.next().expect("step 2");
        wizard.select_installation(InstallationKind::Ground);
        match wizard.next().expect("step 4") {
            Advance::ReachedSubmit { ticket, delay } => {
                assert_eq!(delay, SUBMIT_GUARD_DELAY);
                (wizard, ticket)
            }
            other => panic!("expected to reach submit, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_blocks_every_step() {
        let mut wizard = TestWizard::new();
        assert!(matches!(wizard.next(), Err(NextError::Invalid(ValidationError::MissingPersonalInfo))));
        assert_eq!(wizard.step(), Step::PersonalInfo);

        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        assert!(matches!(wizard.next(), Err(NextError::Invalid(ValidationError::MissingProfile))));
        assert_eq!(wizard.step(), Step::ConsumptionProfile);

        wizard.select_profile(ProfileKind::Equipment);
        wizard.next().expect("step 2");
        assert!(matches!(wizard.next(), Err(NextError::Invalid(ValidationError::EmptyEquipmentList))));
        assert_eq!(wizard.step(), Step::Equipment);

        wizard.add_equipment(Appliance::Television, None);
        wizard.next().expect("step 3");
        assert!(matches!(
            wizard.next(),
            Err(NextError::Invalid(ValidationError::MissingInstallationType))
        ));
        assert_eq!(wizard.step(), Step::Installation);

        wizard.select_installation(InstallationKind::Ground);
        wizard.next().expect("step 4");
        let ticket = ArmTicket(wizard.arm_generation);
        wizard.arm_submit(ticket);
        assert_eq!(wizard.begin_submit("now").err(), Some(SubmitError::Invalid(ValidationError::MissingCity)));
        assert_eq!(wizard.step(), Step::Location);
        assert_eq!(wizard.phase(), Phase::Editing);
    }

    #[test]
    fn invalid_email_blocks_step_one() {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.personal_info_mut().email = "awa.lynays.ci".into();
        assert_eq!(wizard.next(), Err(NextError::Invalid(ValidationError::InvalidEmail)));
        assert_eq!(wizard.step(), Step::PersonalInfo);
    }

    #[test]
    fn invoice_profile_skips_equipment_step() {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        wizard.select_profile(ProfileKind::Invoice);
        assert_eq!(wizard.next(), Err(NextError::Invalid(ValidationError::MissingInvoices)));
        assert!(wizard.attach("facture.pdf"));
        assert_eq!(wizard.next(), Ok(Advance::Moved(Step::Installation)));
        assert_eq!(wizard.step().number(), 4);
    }

    #[test]
    fn equipment_profile_goes_to_step_three() {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        wizard.select_profile(ProfileKind::Equipment);
        assert_eq!(wizard.next(), Ok(Advance::Moved(Step::Equipment)));
        assert_eq!(wizard.step().number(), 3);
    }

    #[test]
    fn zero_quantity_blocks_zero_power_does_not() {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        wizard.select_profile(ProfileKind::Equipment);
        wizard.next().expect("step 2");

        let id = wizard.add_equipment(Appliance::Lamps, None).expect("equipment profile");
        assert!(wizard.update_equipment(&id, EquipmentField::Quantity, 0));
        assert_eq!(wizard.next(), Err(NextError::Invalid(ValidationError::InvalidEquipment)));
        assert_eq!(wizard.step(), Step::Equipment);

        wizard.update_equipment(&id, EquipmentField::Quantity, 1);
        wizard.update_equipment(&id, EquipmentField::PowerWatts, 0);
        assert_eq!(wizard.next(), Ok(Advance::Moved(Step::Installation)));
    }

    #[test]
    fn roof_requires_material_ground_does_not() {
        let (mut wizard, _) = at_last_step();
        wizard.back();
        assert_eq!(wizard.step(), Step::Installation);

        wizard.select_installation(InstallationKind::Roof);
        assert_eq!(wizard.next(), Err(NextError::Invalid(ValidationError::MissingRoofMaterial)));
        assert_eq!(wizard.step(), Step::Installation);

        wizard.select_roof_material(RoofMaterial::Sheet);
        assert!(matches!(wizard.next(), Ok(Advance::ReachedSubmit { .. })));

        wizard.back();
        wizard.select_installation(InstallationKind::Ground);
        assert_eq!(wizard.draft().installation, Some(Installation::Ground));
        assert!(wizard.next().is_ok());
    }

    #[test]
    fn submit_disabled_on_arrival_until_ticket_redeemed() {
        let (mut wizard, ticket) = at_last_step();
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit("now").err(), Some(SubmitError::NotArmed));
        assert!(wizard.arm_submit(ticket));
        assert!(wizard.can_submit());
    }

    #[test]
    fn stale_ticket_does_not_arm_a_later_visit() {
        let (mut wizard, stale) = at_last_step();
        wizard.back();
        assert!(!wizard.arm_submit(stale));
        let fresh = match wizard.next().expect("step 4") {
            Advance::ReachedSubmit { ticket, .. } => ticket,
            other => panic!("unexpected {other:?}"),
        };
        assert!(!wizard.arm_submit(stale));
        assert!(wizard.arm_submit(fresh));
    }

    #[test]
    fn back_is_unconditional_and_stops_at_one() {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        // Step 2 is invalid (no profile) but back still works.
        assert_eq!(wizard.back(), Step::PersonalInfo);
        assert_eq!(wizard.back(), Step::PersonalInfo);
    }

    #[test]
    fn city_without_notes_produces_separate_fields() {
        let (mut wizard, ticket) = at_last_step();
        wizard.arm_submit(ticket);
        wizard.set_city("Abidjan");

        let submission = wizard.begin_submit("2025-03-04T09:30:00.000Z").expect("submit");
        assert_eq!(submission.target, SubmitTarget::Create);
        assert_eq!(submission.body.text_value("location"), Some("Abidjan"));
        assert_eq!(submission.body.text_value("additional_info"), Some(""));
        assert_eq!(submission.body.text_value("personalInfo[lastName]"), Some("Koné"));
        assert_eq!(submission.body.text_value("submittedAt"), Some("2025-03-04T09:30:00.000Z"));
        assert_eq!(submission.body.files("invoices[]"), vec![&"facture-cie.pdf"]);
        assert_eq!(wizard.phase(), Phase::Submitting);
        assert!(!wizard.can_submit());
    }

    #[test]
    fn in_flight_submission_is_single_shot() {
        let (mut wizard, ticket) = at_last_step();
        wizard.arm_submit(ticket);
        wizard.set_city("Abidjan");
        wizard.begin_submit("now").expect("first");
        assert_eq!(wizard.begin_submit("now").err(), Some(SubmitError::InFlight));
        wizard.finish_submit(Ok(()));
        assert_eq!(wizard.phase(), Phase::Submitted);
        assert_eq!(wizard.begin_submit("now").err(), Some(SubmitError::AlreadySubmitted));
        assert!(!wizard.is_dirty());
    }

    #[test]
    fn failed_submission_keeps_everything() {
        let (mut wizard, ticket) = at_last_step();
        wizard.arm_submit(ticket);
        wizard.set_city("Abidjan");
        wizard.set_notes("Portail étroit");
        let before = wizard.draft().clone();

        wizard.begin_submit("now").expect("submit");
        let error = ApiError::from_response(
            422,
            r#"{"message":"invalid","errors":{"location":["trop court"]}}"#,
            "Erreur lors de la sauvegarde",
        );
        wizard.finish_submit(Err(error.clone()));

        assert_eq!(wizard.step().number(), 5);
        assert_eq!(wizard.phase(), Phase::Editing);
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.last_error(), Some(&error));
        assert!(wizard.can_submit());
        assert!(wizard.is_dirty());

        // Retry clears the stored error.
        wizard.begin_submit("now").expect("retry");
        assert!(wizard.last_error().is_none());
    }

    #[test]
    fn editing_restarts_at_step_one_and_updates() {
        let mut draft = CollectionDraft::default();
        draft.personal_info = PersonalInfo {
            name: "Koné".into(),
            first_name: "Awa".into(),
            email: "awa@lynays.ci".into(),
            phone: "0700000000".into(),
        };
        draft.profile = Some(ConsumptionProfile::Invoice(vec![Attachment::Stored(
            "https://cdn/f.pdf".into(),
        )]));
        draft.installation = Some(Installation::Ground);
        draft.city = "Abidjan".into();
        let record = CollectionRequest {
            id: "c-9".into(),
            status: CollectionStatus::Pending,
            submitted_at: NaiveDate::from_ymd_opt(2025, 2, 1),
            step: 5,
            draft,
        };

        let mut wizard = TestWizard::edit(record);
        assert_eq!(wizard.step(), Step::PersonalInfo);
        assert!(wizard.is_editing_existing());
        assert!(!wizard.is_dirty());

        wizard.next().expect("1");
        wizard.next().expect("2");
        let ticket = match wizard.next().expect("4") {
            Advance::ReachedSubmit { ticket, .. } => ticket,
            other => panic!("unexpected {other:?}"),
        };
        wizard.arm_submit(ticket);
        let submission = wizard.begin_submit("now").expect("submit");
        assert_eq!(submission.target, SubmitTarget::Update("c-9".into()));
        assert_eq!(submission.body.text_value(METHOD_OVERRIDE), Some("PUT"));
        assert_eq!(submission.body.text_value("submittedAt"), Some("2025-02-01"));
        assert!(submission.body.files("invoices[]").is_empty());
    }

    #[test]
    fn switching_profile_shelves_and_restores_data() {
        let mut wizard = TestWizard::new();
        wizard.select_profile(ProfileKind::Equipment);
        let id = wizard.add_equipment(Appliance::Freezer, None).expect("added");
        wizard.select_profile(ProfileKind::Invoice);
        assert!(wizard.draft().equipment().is_empty());
        assert!(wizard.add_equipment(Appliance::Lamps, None).is_none());
        wizard.attach("f.pdf");

        wizard.select_profile(ProfileKind::Equipment);
        assert_eq!(wizard.draft().equipment()[0].id, id);
        wizard.select_profile(ProfileKind::Invoice);
        assert_eq!(wizard.draft().attachments().len(), 1);
    }

    #[test]
    fn equipment_removal_by_identity() {
        let mut wizard = TestWizard::new();
        wizard.select_profile(ProfileKind::Equipment);
        let a = wizard.add_equipment(Appliance::Lamps, None).expect("a");
        let b = wizard.add_equipment(Appliance::Lamps, None).expect("b");
        assert!(wizard.remove_equipment(&a));
        assert!(!wizard.remove_equipment(&a));
        assert_eq!(wizard.draft().equipment().len(), 1);
        assert_eq!(wizard.draft().equipment()[0].id, b);
    }

    #[test]
    fn detach_removes_by_position() {
        let mut wizard = TestWizard::new();
        wizard.select_profile(ProfileKind::Invoice);
        wizard.attach("a.pdf");
        wizard.attach("b.pdf");
        assert_eq!(wizard.detach(0), Some(Attachment::Upload("a.pdf")));
        assert_eq!(wizard.detach(5), None);
        assert_eq!(wizard.draft().attachments(), &[Attachment::Upload("b.pdf")]);
    }

    #[test]
    fn invoice_path_back_onto_equipment_step_adds_nothing() {
        let mut wizard = TestWizard::new();
        fill_personal_info(&mut wizard);
        wizard.next().expect("step 1");
        wizard.select_profile(ProfileKind::Invoice);
        wizard.attach("facture-cie.pdf");
        assert_eq!(wizard.next(), Ok(Advance::Moved(Step::Installation)));

        assert_eq!(wizard.back(), Step::Equipment);
        assert_eq!(wizard.add_equipment(Appliance::Refrigerator, None), None);
        assert!(wizard.draft().equipment().is_empty());
        assert_eq!(wizard.draft().profile_kind(), Some(ProfileKind::Invoice));
        assert_eq!(wizard.next(), Ok(Advance::Moved(Step::Installation)));
    }

    #[test]
    fn step_numbers_and_progress() {
        assert_eq!(Step::from_number(3), Some(Step::Equipment));
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::PersonalInfo.previous(), None);
        assert_eq!(Step::Location.next(), None);
        assert_eq!(Step::PersonalInfo.progress_percent(), 20);
        assert_eq!(Step::Location.progress_percent(), 100);
    }
}

//! Flattening of a draft into the `collection-requests` multipart body.

use crate::model::collection::{
    CollectionDraft, CollectionStatus, ConsumptionProfile, Installation,
};
use crate::multipart::FormBody;

/// Part name of uploaded invoices.
pub const INVOICES_PART: &str = "invoices[]";

/// Create or update, decided solely by the presence of a record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

impl SubmitTarget {
    pub fn record_id(&self) -> Option<&str> {
        match self {
            SubmitTarget::Create => None,
            SubmitTarget::Update(id) => Some(id),
        }
    }
}

/// Everything the frontend needs to send one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<'a, F> {
    pub target: SubmitTarget,
    pub body: FormBody<'a, F>,
}

/// Record-level fields that are not part of the draft itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionMeta<'s> {
    pub status: CollectionStatus,
    /// ISO timestamp; `None` on an update whose original date is unknown.
    pub submitted_at: Option<&'s str>,
    pub step: u8,
}

/// Builds the multipart body for `draft`.
///
/// City and notes go out as two separate fields (`location`,
/// `additional_info`); the city doubles as `personalInfo[address]`. Only
/// locally picked invoices are sent as binary parts: already stored ones are
/// kept by the backend.
pub fn draft_body<'a, F>(
    draft: &'a CollectionDraft<F>,
    target: &SubmitTarget,
    meta: &SubmissionMeta<'_>,
) -> FormBody<'a, F> {
    let mut body = match target {
        SubmitTarget::Create => FormBody::new(),
        SubmitTarget::Update(_) => FormBody::put_override(),
    };

    body.text("status", meta.status.as_str());
    if let Some(submitted_at) = meta.submitted_at {
        body.text("submittedAt", submitted_at);
    }
    body.text("step", meta.step.to_string())
        .text(
            "consumptionProfile",
            draft.profile_kind().map(|k| k.as_str()).unwrap_or_default(),
        )
        .text(
            "installationType",
            draft.installation.map(|i| i.kind().as_str()).unwrap_or_default(),
        );

    let city = draft.city.trim();
    body.text("location", city)
        .text("additional_info", draft.notes.trim());

    let info = &draft.personal_info;
    body.text("personalInfo[firstName]", info.first_name.trim())
        .text("personalInfo[lastName]", info.name.trim())
        .text("personalInfo[email]", info.email.trim())
        .text("personalInfo[phone]", info.phone.trim())
        .text("personalInfo[address]", city);

    if let Some(Installation::Roof(Some(material))) = draft.installation {
        body.text("roofType", material.as_str());
    }

    match &draft.profile {
        Some(ConsumptionProfile::Equipment(items)) => {
            for (index, item) in items.iter().enumerate() {
                let key = |field: &str| format!("equipmentList[{index}][{field}]");
                body.text(key("id"), item.id.as_str())
                    .text(key("type"), item.kind.as_str());
                if let Some(name) = &item.name {
                    body.text(key("name"), name.as_str());
                }
                body.text(key("quantity"), item.quantity.to_string())
                    .text(key("powerWatts"), item.power_watts.to_string())
                    .text(key("hoursPerDay"), item.hours_per_day.to_string());
            }
        }
        Some(ConsumptionProfile::Invoice(files)) => {
            for file in files.iter().filter_map(|a| a.as_upload()) {
                body.file(INVOICES_PART, file);
            }
        }
        None => {}
    }

    body
}

/// Body of a status-only update, used by the back-office.
pub fn status_body<'a, F>(status: CollectionStatus) -> FormBody<'a, F> {
    let mut body = FormBody::put_override();
    body.text("status", status.as_str());
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::collection::{Attachment, RoofMaterial};
    use crate::model::equipment::{Appliance, Equipment};
    use crate::multipart::PartValue;

    fn meta() -> SubmissionMeta<'static> {
        SubmissionMeta {
            status: CollectionStatus::Pending,
            submitted_at: Some("2025-03-04T09:30:00.000Z"),
            step: 5,
        }
    }

    #[test]
    fn equipment_list_is_indexed() {
        let mut item = Equipment::new(Appliance::Other, Some("Pompe".into()));
        item.quantity = 2;
        item.power_watts = 750;
        item.hours_per_day = 3;
        let mut draft = CollectionDraft::<()>::default();
        draft.profile = Some(ConsumptionProfile::Equipment(vec![item.clone()]));
        draft.installation = Some(Installation::Roof(Some(RoofMaterial::SteelTray)));

        let body = draft_body(&draft, &SubmitTarget::Create, &meta());
        assert_eq!(body.text_value("equipmentList[0][id]"), Some(item.id.as_str()));
        assert_eq!(body.text_value("equipmentList[0][type]"), Some("Autre"));
        assert_eq!(body.text_value("equipmentList[0][name]"), Some("Pompe"));
        assert_eq!(body.text_value("equipmentList[0][quantity]"), Some("2"));
        assert_eq!(body.text_value("equipmentList[0][powerWatts]"), Some("750"));
        assert_eq!(body.text_value("equipmentList[0][hoursPerDay]"), Some("3"));
        assert_eq!(body.text_value("consumptionProfile"), Some("EQUIPMENT"));
        assert_eq!(body.text_value("roofType"), Some("STEEL_TRAY"));
        assert!(!body.is_update());
    }

    #[test]
    fn only_local_invoices_become_file_parts() {
        let mut draft = CollectionDraft::<&str>::default();
        draft.profile = Some(ConsumptionProfile::Invoice(vec![
            Attachment::Stored("https://cdn/old.pdf".into()),
            Attachment::Upload("mars.pdf"),
            Attachment::Upload("avril.pdf"),
        ]));
        let body = draft_body(&draft, &SubmitTarget::Update("c-1".into()), &meta());
        assert_eq!(body.files(INVOICES_PART), vec![&"mars.pdf", &"avril.pdf"]);
        assert!(body.is_update());
        assert!(body.parts().iter().all(|p| !p.name.starts_with("equipmentList")));
    }

    #[test]
    fn blank_discriminators_are_sent_as_empty_strings() {
        let draft = CollectionDraft::<()>::default();
        let body = draft_body(&draft, &SubmitTarget::Create, &meta());
        assert_eq!(body.text_value("consumptionProfile"), Some(""));
        assert_eq!(body.text_value("installationType"), Some(""));
        assert_eq!(body.text_value("roofType"), None);
    }

    #[test]
    fn status_body_is_a_put_override() {
        let body = status_body::<()>(CollectionStatus::Processed);
        assert_eq!(body.parts()[0].value, PartValue::Text("PUT".into()));
        assert_eq!(body.text_value("status"), Some("PROCESSED"));
    }
}

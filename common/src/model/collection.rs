//! Collection requests: the customer's solar-quote intake submission.
//!
//! Two shapes live here:
//! - [`ApiCollectionRequest`], the flat record exactly as the backend returns it,
//!   with string discriminators and optional fields;
//! - [`CollectionRequest`] / [`CollectionDraft`], the domain form where the
//!   consumption profile and installation type are tagged enums that carry
//!   their dependent data (attachments, equipment, roof material).
//!
//! Drafts are generic over `F`, the type of a locally selected file
//! (`web_sys::File` in the browser, anything in tests).

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::equipment::Equipment;
use crate::serde_helpers::{blank_as_none, string_or_number};

/// Discriminator of [`ConsumptionProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileKind {
    Invoice,
    Equipment,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Invoice => "INVOICE",
            ProfileKind::Equipment => "EQUIPMENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileKind::Invoice => "Factures",
            ProfileKind::Equipment => "Équipements",
        }
    }
}

/// Discriminator of [`Installation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallationKind {
    Roof,
    Ground,
}

impl InstallationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallationKind::Roof => "ROOF",
            InstallationKind::Ground => "GROUND",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallationKind::Roof => "Installation sur Toiture",
            InstallationKind::Ground => "Installation au Sol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoofMaterial {
    Sheet,
    Slab,
    Slate,
    SteelTray,
    Tiles,
}

impl RoofMaterial {
    pub const ALL: [RoofMaterial; 5] = [
        RoofMaterial::Sheet,
        RoofMaterial::Slab,
        RoofMaterial::Slate,
        RoofMaterial::SteelTray,
        RoofMaterial::Tiles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoofMaterial::Sheet => "SHEET",
            RoofMaterial::Slab => "SLAB",
            RoofMaterial::Slate => "SLATE",
            RoofMaterial::SteelTray => "STEEL_TRAY",
            RoofMaterial::Tiles => "TILES",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoofMaterial::Sheet => "Tôle ondulée",
            RoofMaterial::Slab => "Dalle",
            RoofMaterial::Slate => "Ardoise",
            RoofMaterial::SteelTray => "Bac acier",
            RoofMaterial::Tiles => "Tuiles",
        }
    }
}

/// Backend-owned processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionStatus {
    #[default]
    Pending,
    Processed,
    Rejected,
}

impl CollectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Pending => "PENDING",
            CollectionStatus::Processed => "PROCESSED",
            CollectionStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectionStatus::Pending => "En attente",
            CollectionStatus::Processed => "Traitée",
            CollectionStatus::Rejected => "Rejetée",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfo {
    /// Family name (`lastName` on the wire).
    pub name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.name).trim().to_string()
    }
}

/// An invoice attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment<F> {
    /// Picked from the local machine, not uploaded yet.
    Upload(F),
    /// Already stored by the backend; the string is its URL.
    Stored(String),
}

impl<F> Attachment<F> {
    pub fn as_upload(&self) -> Option<&F> {
        match self {
            Attachment::Upload(file) => Some(file),
            Attachment::Stored(_) => None,
        }
    }
}

/// How the customer describes their consumption. Each variant owns the data
/// that only makes sense for it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumptionProfile<F> {
    Invoice(Vec<Attachment<F>>),
    Equipment(Vec<Equipment>),
}

impl<F> ConsumptionProfile<F> {
    pub fn empty(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Invoice => ConsumptionProfile::Invoice(Vec::new()),
            ProfileKind::Equipment => ConsumptionProfile::Equipment(Vec::new()),
        }
    }

    pub fn kind(&self) -> ProfileKind {
        match self {
            ConsumptionProfile::Invoice(_) => ProfileKind::Invoice,
            ConsumptionProfile::Equipment(_) => ProfileKind::Equipment,
        }
    }
}

/// Mounting context for the panels. A roof installation carries its material,
/// which stays `None` until the customer picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
    Roof(Option<RoofMaterial>),
    Ground,
}

impl Installation {
    pub fn kind(&self) -> InstallationKind {
        match self {
            Installation::Roof(_) => InstallationKind::Roof,
            Installation::Ground => InstallationKind::Ground,
        }
    }

    pub fn roof_material(&self) -> Option<RoofMaterial> {
        match self {
            Installation::Roof(material) => *material,
            Installation::Ground => None,
        }
    }
}

/// The record assembled across the five wizard steps.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDraft<F> {
    pub personal_info: PersonalInfo,
    pub profile: Option<ConsumptionProfile<F>>,
    pub installation: Option<Installation>,
    /// City or commune.
    pub city: String,
    /// Optional free text.
    pub notes: String,
}

impl<F> Default for CollectionDraft<F> {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            profile: None,
            installation: None,
            city: String::new(),
            notes: String::new(),
        }
    }
}

impl<F> CollectionDraft<F> {
    pub fn profile_kind(&self) -> Option<ProfileKind> {
        self.profile.as_ref().map(ConsumptionProfile::kind)
    }

    pub fn attachments(&self) -> &[Attachment<F>] {
        match &self.profile {
            Some(ConsumptionProfile::Invoice(files)) => files,
            _ => &[],
        }
    }

    pub fn equipment(&self) -> &[Equipment] {
        match &self.profile {
            Some(ConsumptionProfile::Equipment(items)) => items,
            _ => &[],
        }
    }
}

/// A request as stored by the backend, in domain form.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRequest<F> {
    pub id: String,
    pub status: CollectionStatus,
    pub submitted_at: Option<NaiveDate>,
    /// Step the customer was on when the record was last saved.
    pub step: u8,
    pub draft: CollectionDraft<F>,
}

impl<F> CollectionRequest<F> {
    /// Case-insensitive match on the customer's name or the record id.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.draft.personal_info.name.to_lowercase().contains(&term)
            || self.id.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Flat record as returned by `GET collection-requests`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCollectionRequest {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub status: CollectionStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub step: Option<u8>,
    #[serde(default)]
    pub personal_info: ApiPersonalInfo,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub consumption_profile: Option<ProfileKind>,
    #[serde(default)]
    pub invoices: Option<Vec<String>>,
    #[serde(default)]
    pub equipment_list: Option<Vec<Equipment>>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub installation_type: Option<InstallationKind>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub roof_type: Option<RoofMaterial>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "additional_info", alias = "additionalInfo")]
    pub additional_info: Option<String>,
}

/// Separator older clients used to pack notes into `location`.
pub const LEGACY_LOCATION_SEPARATOR: char = '|';

/// Recovers `(city, notes)` from a stored record.
///
/// The dedicated `additional_info` field always wins. A `|` in `location` is a
/// legacy packing of `city | notes`: the city is the part before the first
/// separator and the remainder is only used as notes when the dedicated field
/// is empty. Commas are never treated as separators, so `"Abidjan, Cocody"`
/// stays a single city.
pub fn split_location(location: &str, additional_info: Option<&str>) -> (String, String) {
    let dedicated = additional_info.map(str::trim).unwrap_or_default();
    match location.split_once(LEGACY_LOCATION_SEPARATOR) {
        Some((city, packed)) => {
            let notes = if dedicated.is_empty() { packed.trim() } else { dedicated };
            (city.trim().to_string(), notes.to_string())
        }
        None => (location.trim().to_string(), dedicated.to_string()),
    }
}

/// Parses the backend timestamp (RFC 3339 or a bare `YYYY-MM-DD` prefix).
pub fn parse_submitted_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

impl<F> From<ApiCollectionRequest> for CollectionRequest<F> {
    fn from(api: ApiCollectionRequest) -> Self {
        let (city, notes) = split_location(
            api.location.as_deref().unwrap_or_default(),
            api.additional_info.as_deref(),
        );

        let profile = api.consumption_profile.map(|kind| match kind {
            ProfileKind::Invoice => ConsumptionProfile::Invoice(
                api.invoices
                    .unwrap_or_default()
                    .into_iter()
                    .map(Attachment::Stored)
                    .collect(),
            ),
            ProfileKind::Equipment => {
                ConsumptionProfile::Equipment(api.equipment_list.unwrap_or_default())
            }
        });

        let installation = api.installation_type.map(|kind| match kind {
            InstallationKind::Roof => Installation::Roof(api.roof_type),
            InstallationKind::Ground => Installation::Ground,
        });

        CollectionRequest {
            id: api.id,
            status: api.status,
            submitted_at: api.submitted_at.as_deref().and_then(parse_submitted_at),
            step: api.step.unwrap_or(1),
            draft: CollectionDraft {
                personal_info: PersonalInfo {
                    name: api.personal_info.last_name,
                    first_name: api.personal_info.first_name,
                    email: api.personal_info.email,
                    phone: api.personal_info.phone,
                },
                profile,
                installation,
                city,
                notes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Request = CollectionRequest<()>;

    #[test]
    fn dedicated_notes_win_over_packed_suffix() {
        assert_eq!(
            split_location("Abidjan | vieux toit", Some("accès difficile")),
            ("Abidjan".to_string(), "accès difficile".to_string())
        );
    }

    #[test]
    fn packed_suffix_fills_empty_notes() {
        assert_eq!(
            split_location("Bouaké | portail étroit | chien", Some("  ")),
            ("Bouaké".to_string(), "portail étroit | chien".to_string())
        );
    }

    #[test]
    fn commas_stay_in_city() {
        assert_eq!(
            split_location("Abidjan, Cocody", None),
            ("Abidjan, Cocody".to_string(), String::new())
        );
    }

    #[test]
    fn maps_invoice_record_into_tagged_profile() {
        let api: ApiCollectionRequest = serde_json::from_value(json!({
            "id": "c-1",
            "status": "PENDING",
            "submittedAt": "2025-03-04T09:30:00.000000Z",
            "step": 5,
            "personalInfo": {
                "firstName": "Awa",
                "lastName": "Koné",
                "email": "awa@example.ci",
                "phone": "+2250700000000",
                "address": "Abidjan"
            },
            "consumptionProfile": "INVOICE",
            "invoices": ["https://cdn.example.ci/f1.pdf"],
            "equipmentList": [],
            "installationType": "ROOF",
            "roofType": "TILES",
            "location": "Abidjan",
            "additional_info": "RAS"
        }))
        .expect("decode");

        let request = Request::from(api);
        assert_eq!(request.draft.personal_info.name, "Koné");
        assert_eq!(request.submitted_at, NaiveDate::from_ymd_opt(2025, 3, 4));
        assert_eq!(
            request.draft.profile,
            Some(ConsumptionProfile::Invoice(vec![Attachment::Stored(
                "https://cdn.example.ci/f1.pdf".into()
            )]))
        );
        assert_eq!(request.draft.installation, Some(Installation::Roof(Some(RoofMaterial::Tiles))));
        assert_eq!(request.draft.notes, "RAS");
    }

    #[test]
    fn tolerates_blank_discriminators_and_null_lists() {
        let api: ApiCollectionRequest = serde_json::from_value(json!({
            "id": 12,
            "status": "PROCESSED",
            "personalInfo": { "firstName": "Yao", "lastName": "Kouassi" },
            "consumptionProfile": "",
            "invoices": null,
            "installationType": "GROUND",
            "roofType": "",
            "location": "Yamoussoukro",
            "additionalInfo": "camelCase notes"
        }))
        .expect("decode");

        let request = Request::from(api);
        assert_eq!(request.id, "12");
        assert_eq!(request.step, 1);
        assert!(request.draft.profile.is_none());
        assert_eq!(request.draft.installation, Some(Installation::Ground));
        assert_eq!(request.draft.notes, "camelCase notes");
        assert_eq!(request.submitted_at, None);
    }

    #[test]
    fn search_matches_name_or_id_case_insensitively() {
        let mut request = Request {
            id: "REQ-42".into(),
            status: CollectionStatus::Pending,
            submitted_at: None,
            step: 1,
            draft: CollectionDraft::default(),
        };
        request.draft.personal_info.name = "Traoré".into();
        assert!(request.matches("traor"));
        assert!(request.matches("req-4"));
        assert!(request.matches(""));
        assert!(!request.matches("bamba"));
    }
}

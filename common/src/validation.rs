use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::collection::{CollectionDraft, ConsumptionProfile, Installation};
use crate::wizard::Step;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` with no whitespace and a single `@` per side.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Veuillez remplir tous les champs obligatoires (Nom, Prénoms, Email, Téléphone).")]
    MissingPersonalInfo,
    #[error("Veuillez entrer une adresse email valide.")]
    InvalidEmail,
    #[error("Veuillez sélectionner un profil de consommation.")]
    MissingProfile,
    #[error("Veuillez joindre au moins une facture pour continuer.")]
    MissingInvoices,
    #[error("Veuillez ajouter au moins un équipement.")]
    EmptyEquipmentList,
    #[error("Veuillez vérifier les quantités et puissances de vos équipements.")]
    InvalidEquipment,
    #[error("Veuillez sélectionner un type d'installation.")]
    MissingInstallationType,
    #[error("Veuillez préciser le type de toiture.")]
    MissingRoofMaterial,
    #[error("Veuillez entrer votre ville ou commune.")]
    MissingCity,
    #[error("Veuillez remplir tous les champs du formulaire.")]
    MissingContactFields,
    #[error("Veuillez renseigner le nom, l'email et le mot de passe.")]
    MissingUserFields,
    #[error("Les mots de passe ne correspondent pas.")]
    PasswordMismatch,
}

impl ValidationError {
    /// Short alert title.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingPersonalInfo
            | ValidationError::MissingContactFields
            | ValidationError::MissingUserFields => "Champs manquants",
            ValidationError::InvalidEmail => "Email invalide",
            ValidationError::MissingProfile | ValidationError::MissingInstallationType => {
                "Sélection requise"
            }
            ValidationError::MissingInvoices => "Fichiers manquants",
            ValidationError::EmptyEquipmentList => "Liste vide",
            ValidationError::InvalidEquipment => "Valeurs incorrectes",
            ValidationError::MissingRoofMaterial => "Sélection manquante",
            ValidationError::MissingCity => "Information manquante",
            ValidationError::PasswordMismatch => "Mot de passe",
        }
    }
}

/// Checks the fields owned by `step`.
///
/// Step 3 only constrains the list when the profile is `Equipment`; a visitor
/// who stepped back onto it with invoices selected is not blocked.
pub fn validate_step<F>(step: Step, draft: &CollectionDraft<F>) -> Result<(), ValidationError> {
    match step {
        Step::PersonalInfo => {
            let info = &draft.personal_info;
            let required = [&info.name, &info.first_name, &info.email, &info.phone];
            if required.iter().any(|f| f.trim().is_empty()) {
                return Err(ValidationError::MissingPersonalInfo);
            }
            if !is_valid_email(&info.email) {
                return Err(ValidationError::InvalidEmail);
            }
            Ok(())
        }
        Step::ConsumptionProfile => match &draft.profile {
            None => Err(ValidationError::MissingProfile),
            Some(ConsumptionProfile::Invoice(files)) if files.is_empty() => {
                Err(ValidationError::MissingInvoices)
            }
            Some(_) => Ok(()),
        },
        Step::Equipment => match &draft.profile {
            Some(ConsumptionProfile::Equipment(items)) if items.is_empty() => {
                Err(ValidationError::EmptyEquipmentList)
            }
            Some(ConsumptionProfile::Equipment(items)) if !items.iter().all(|i| i.is_valid()) => {
                Err(ValidationError::InvalidEquipment)
            }
            _ => Ok(()),
        },
        Step::Installation => match draft.installation {
            None => Err(ValidationError::MissingInstallationType),
            Some(Installation::Roof(None)) => Err(ValidationError::MissingRoofMaterial),
            Some(_) => Ok(()),
        },
        Step::Location => {
            if draft.city.trim().is_empty() {
                Err(ValidationError::MissingCity)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::collection::{Attachment, RoofMaterial};
    use crate::model::equipment::{Appliance, Equipment};

    type Draft = CollectionDraft<&'static str>;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("awa@lynays.ci"));
        assert!(is_valid_email("a.b+c@sub.domain.com"));
        assert!(!is_valid_email("awa@lynays"));
        assert!(!is_valid_email("awa lynays@x.ci"));
        assert!(!is_valid_email("@x.ci"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn personal_info_requires_every_field() {
        let mut draft = Draft::default();
        draft.personal_info.name = "Koné".into();
        draft.personal_info.first_name = "Awa".into();
        draft.personal_info.email = "awa@lynays.ci".into();
        assert_eq!(
            validate_step(Step::PersonalInfo, &draft),
            Err(ValidationError::MissingPersonalInfo)
        );
        draft.personal_info.phone = "   ".into();
        assert_eq!(
            validate_step(Step::PersonalInfo, &draft),
            Err(ValidationError::MissingPersonalInfo)
        );
        draft.personal_info.phone = "+2250700000000".into();
        assert_eq!(validate_step(Step::PersonalInfo, &draft), Ok(()));
    }

    #[test]
    fn invoice_profile_needs_an_attachment() {
        let mut draft = Draft::default();
        assert_eq!(
            validate_step(Step::ConsumptionProfile, &draft),
            Err(ValidationError::MissingProfile)
        );
        draft.profile = Some(ConsumptionProfile::Invoice(Vec::new()));
        assert_eq!(
            validate_step(Step::ConsumptionProfile, &draft),
            Err(ValidationError::MissingInvoices)
        );
        draft.profile = Some(ConsumptionProfile::Invoice(vec![Attachment::Upload("cie.pdf")]));
        assert_eq!(validate_step(Step::ConsumptionProfile, &draft), Ok(()));
    }

    #[test]
    fn equipment_quantity_and_power_bounds() {
        let mut item = Equipment::new(Appliance::Lamps, None);
        item.quantity = 0;
        let mut draft = Draft::default();
        draft.profile = Some(ConsumptionProfile::Equipment(vec![item.clone()]));
        assert_eq!(validate_step(Step::Equipment, &draft), Err(ValidationError::InvalidEquipment));

        item.quantity = 1;
        item.power_watts = -5;
        draft.profile = Some(ConsumptionProfile::Equipment(vec![item.clone()]));
        assert_eq!(validate_step(Step::Equipment, &draft), Err(ValidationError::InvalidEquipment));

        item.power_watts = 0;
        draft.profile = Some(ConsumptionProfile::Equipment(vec![item]));
        assert_eq!(validate_step(Step::Equipment, &draft), Ok(()));
    }

    #[test]
    fn equipment_step_ignores_invoice_profile() {
        let mut draft = Draft::default();
        draft.profile = Some(ConsumptionProfile::Invoice(vec![Attachment::Stored("u".into())]));
        assert_eq!(validate_step(Step::Equipment, &draft), Ok(()));
    }

    #[test]
    fn roof_needs_material_ground_does_not() {
        let mut draft = Draft::default();
        draft.installation = Some(Installation::Roof(None));
        assert_eq!(
            validate_step(Step::Installation, &draft),
            Err(ValidationError::MissingRoofMaterial)
        );
        draft.installation = Some(Installation::Roof(Some(RoofMaterial::Slab)));
        assert_eq!(validate_step(Step::Installation, &draft), Ok(()));
        draft.installation = Some(Installation::Ground);
        assert_eq!(validate_step(Step::Installation, &draft), Ok(()));
    }

    #[test]
    fn titles_are_short_labels() {
        assert_eq!(ValidationError::MissingCity.title(), "Information manquante");
        assert_eq!(ValidationError::InvalidEmail.title(), "Email invalide");
    }
}

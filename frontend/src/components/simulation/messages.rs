use common::error::ApiError;
use common::model::collection::{InstallationKind, ProfileKind, RoofMaterial};
use common::model::equipment::{Appliance, EquipmentField};
use common::wizard::ArmTicket;
use web_sys::File;

pub enum Msg {
    SetName(String),
    SetFirstName(String),
    SetEmail(String),
    SetPhone(String),
    SelectProfile(ProfileKind),
    FilesPicked(Vec<File>),
    RemoveInvoice(usize),
    PickAppliance(Option<Appliance>),
    SetCustomName(String),
    AddEquipment,
    UpdateEquipment {
        id: String,
        field: EquipmentField,
        value: i32,
    },
    RemoveEquipment(String),
    SelectInstallation(InstallationKind),
    SelectRoof(RoofMaterial),
    SetCity(String),
    SetNotes(String),
    Next,
    Back,
    ArmSubmit(ArmTicket),
    Submit,
    SubmitFinished(Result<(), ApiError>),
    Finish,
}

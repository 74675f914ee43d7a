use common::model::equipment::Appliance;
use common::wizard::Wizard;
use web_sys::File;
use yew::NodeRef;

use crate::services::collections::Collection;

pub struct SimulationComponent {
    pub wizard: Wizard<File>,

    /// Hidden `<input type="file">` behind the invoice drop zone.
    pub file_input_ref: NodeRef,

    /// Appliance chosen in the equipment picker, not added yet.
    pub pending_appliance: Option<Appliance>,

    /// Free-text name typed for an `Autre` appliance.
    pub custom_name: String,
}

impl SimulationComponent {
    pub fn new(record: Option<Collection>) -> Self {
        let wizard = match record {
            Some(record) => Wizard::edit(record),
            None => Wizard::new(),
        };
        Self {
            wizard,
            file_input_ref: NodeRef::default(),
            pending_appliance: None,
            custom_name: String::new(),
        }
    }
}

use common::session::Session;
use yew::prelude::*;

use crate::services::collections::Collection;

#[derive(Properties, PartialEq, Clone)]
pub struct SimulationProps {
    /// Stored request to edit. `None` starts an empty request.
    ///
    /// Read once on creation; the parent remounts the component (new `key`)
    /// to switch records.
    #[prop_or_default]
    pub record: Option<Collection>,

    /// Sent along with the submission; empty for public visitors.
    #[prop_or_default]
    pub session: Session,

    /// Emitted when the backend rejects the session token.
    #[prop_or_default]
    pub on_unauthorized: Callback<()>,

    /// "Back" from the confirmation screen.
    pub on_finished: Callback<()>,
}

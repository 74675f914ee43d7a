use common::model::equipment::Appliance;
use common::wizard::{Advance, NextError, SubmitError};
use log::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{now_iso, scroll_to_top};
use super::messages::Msg;
use super::state::SimulationComponent;
use crate::components::feedback::{alert, set_window_dirty_flag, show_toast, ToastKind};
use crate::services::collections;

pub fn update(
    component: &mut SimulationComponent,
    ctx: &Context<SimulationComponent>,
    msg: Msg,
) -> bool {
    let wizard = &mut component.wizard;
    match msg {
        Msg::SetName(value) => wizard.personal_info_mut().name = value,
        Msg::SetFirstName(value) => wizard.personal_info_mut().first_name = value,
        Msg::SetEmail(value) => wizard.personal_info_mut().email = value,
        Msg::SetPhone(value) => wizard.personal_info_mut().phone = value,
        Msg::SelectProfile(kind) => wizard.select_profile(kind),
        Msg::FilesPicked(files) => {
            for file in files {
                wizard.attach(file);
            }
        }
        Msg::RemoveInvoice(index) => {
            wizard.detach(index);
        }
        Msg::PickAppliance(appliance) => {
            component.pending_appliance = appliance;
            return true;
        }
        Msg::SetCustomName(name) => {
            component.custom_name = name;
            return true;
        }
        Msg::AddEquipment => {
            let Some(appliance) = component.pending_appliance else {
                return false;
            };
            let name = (appliance == Appliance::Other).then(|| component.custom_name.clone());
            if wizard.add_equipment(appliance, name).is_none() {
                return false;
            }
            component.pending_appliance = None;
            component.custom_name.clear();
        }
        Msg::UpdateEquipment { id, field, value } => {
            wizard.update_equipment(&id, field, value);
        }
        Msg::RemoveEquipment(id) => {
            wizard.remove_equipment(&id);
        }
        Msg::SelectInstallation(kind) => wizard.select_installation(kind),
        Msg::SelectRoof(material) => wizard.select_roof_material(material),
        Msg::SetCity(city) => wizard.set_city(city),
        Msg::SetNotes(notes) => wizard.set_notes(notes),
        Msg::Next => {
            match wizard.next() {
                Ok(Advance::Moved(_)) => scroll_to_top(),
                Ok(Advance::ReachedSubmit { ticket, delay }) => {
                    scroll_to_top();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(delay.as_millis() as u32).await;
                        link.send_message(Msg::ArmSubmit(ticket));
                    });
                }
                Err(NextError::Invalid(err)) => alert(err.title(), &err.to_string()),
                Err(err) => warn!("next ignored: {err}"),
            }
            return true;
        }
        Msg::Back => {
            wizard.back();
            scroll_to_top();
            return true;
        }
        Msg::ArmSubmit(ticket) => {
            let armed = wizard.arm_submit(ticket);
            debug!("submit guard redeemed, armed: {armed}");
            return true;
        }
        Msg::Submit => {
            let now = now_iso();
            let prepared = match wizard.begin_submit(&now) {
                Ok(submission) => collections::prepare(&submission),
                Err(SubmitError::Invalid(err)) => {
                    alert(err.title(), &err.to_string());
                    return true;
                }
                Err(err) => {
                    debug!("submit ignored: {err}");
                    return false;
                }
            };
            match prepared {
                Ok((url, form)) => {
                    let link = ctx.link().clone();
                    let session = ctx.props().session.clone();
                    spawn_local(async move {
                        let result = collections::send(url, form, &session).await;
                        link.send_message(Msg::SubmitFinished(result));
                    });
                }
                Err(err) => {
                    alert("Erreur", &err.user_message());
                    wizard.finish_submit(Err(err));
                }
            }
            return true;
        }
        Msg::SubmitFinished(result) => {
            match &result {
                Ok(()) => show_toast("Demande envoyée.", ToastKind::Success),
                Err(err) if err.is_unauthorized() => ctx.props().on_unauthorized.emit(()),
                Err(err) => alert("Erreur", &err.user_message()),
            }
            wizard.finish_submit(result);
        }
        Msg::Finish => {
            ctx.props().on_finished.emit(());
            return false;
        }
    }

    set_window_dirty_flag(component.wizard.is_dirty());
    true
}

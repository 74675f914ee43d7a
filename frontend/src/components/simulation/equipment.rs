use common::model::collection::ProfileKind;
use common::model::equipment::{total_daily_energy_wh, Appliance, Equipment, EquipmentField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{energy_label, parse_number};
use super::messages::Msg;
use super::state::SimulationComponent;

pub fn equipment_manager(component: &SimulationComponent, link: &Scope<SimulationComponent>) -> Html {
    if component.wizard.draft().profile_kind() != Some(ProfileKind::Equipment) {
        return html! {
            <div class="notice">
                {"Vous avez choisi de joindre vos factures : la liste d'équipements n'est pas nécessaire. Passez à l'étape suivante."}
            </div>
        };
    }
    let items = component.wizard.draft().equipment();
    let pending = component.pending_appliance;

    let on_pick = link.callback(|e: Event| {
        let label = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::PickAppliance(Appliance::from_label(&label))
    });
    let options = Appliance::ALL.into_iter().map(|appliance| {
        html! {
            <option value={appliance.label()} selected={pending == Some(appliance)}>
                { appliance.label() }
            </option>
        }
    });

    html! {
        <div class="equipment">
            <div class="equipment-picker">
                <select onchange={on_pick}>
                    <option value="" selected={pending.is_none()}>{"Sélectionner un équipement..."}</option>
                    { for options }
                </select>
                if pending == Some(Appliance::Other) {
                    <input
                        type="text"
                        placeholder="Nom de l'appareil (optionnel)"
                        value={component.custom_name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetCustomName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                }
                <button
                    type="button"
                    class="btn primary"
                    title="Ajouter"
                    disabled={pending.is_none()}
                    onclick={link.callback(|_| Msg::AddEquipment)}
                >
                    <i class="material-icons">{"add"}</i>
                </button>
            </div>

            if items.is_empty() {
                <div class="empty-state">{"Aucun équipement ajouté"}</div>
            } else {
                <div class="stack">{ for items.iter().map(|item| equipment_row(item, link)) }</div>
                <p class="equipment-total">
                    {"Consommation estimée : "}
                    <strong>{ energy_label(total_daily_energy_wh(items)) }</strong>
                </p>
            }
        </div>
    }
}

fn equipment_row(item: &Equipment, link: &Scope<SimulationComponent>) -> Html {
    let number = |label: &'static str, field: EquipmentField, value: i32, min: &'static str| {
        let id = item.id.clone();
        html! {
            <div class="field compact">
                <label>{ label }</label>
                <input
                    type="number"
                    min={min}
                    value={value.to_string()}
                    oninput={link.callback(move |e: InputEvent| Msg::UpdateEquipment {
                        id: id.clone(),
                        field,
                        value: parse_number(&e.target_unchecked_into::<HtmlInputElement>().value()),
                    })}
                />
            </div>
        }
    };
    let id = item.id.clone();

    html! {
        <div class={classes!("equipment-row", (!item.is_valid()).then_some("invalid"))} key={item.id.clone()}>
            <div class="equipment-name">{ item.display_name() }</div>
            <div class="equipment-fields">
                { number("Qté", EquipmentField::Quantity, item.quantity, "1") }
                { number("Watts", EquipmentField::PowerWatts, item.power_watts, "0") }
                { number("Heures/j", EquipmentField::HoursPerDay, item.hours_per_day, "0") }
            </div>
            <button
                type="button"
                class="icon-btn danger"
                title="Supprimer"
                onclick={link.callback(move |_| Msg::RemoveEquipment(id.clone()))}
            >
                <i class="material-icons">{"delete"}</i>
            </button>
        </div>
    }
}

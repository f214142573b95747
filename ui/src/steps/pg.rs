use payloads::{
    FieldError, FormOption, Gender, PgDetails, PgRoom, PgRoomKind, PgRule,
};
use rust_decimal::Decimal;
use yew::prelude::*;

use super::{edit, optional_text};
use crate::components::form_fields::{
    CheckboxField, ChipGroup, DateField, MoneyField, SelectField,
    TextAreaField, TextField, TimeField, field_error,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: PgDetails,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<PgDetails>,
}

/// Add the room kind if missing, otherwise remove it.
fn toggle_room(details: &mut PgDetails, kind: PgRoomKind) {
    if let Some(pos) = details.rooms.iter().position(|r| r.kind == kind) {
        details.rooms.remove(pos);
    } else {
        details.rooms.push(PgRoom {
            kind,
            rent: None,
            deposit: None,
        });
    }
}

fn toggle_rule(details: &mut PgDetails, rule: PgRule) {
    if let Some(pos) = details.rules.iter().position(|r| *r == rule) {
        details.rules.remove(pos);
    } else {
        details.rules.push(rule);
    }
}

#[function_component]
pub fn PgStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    let room_amount = |index: usize, apply: fn(&mut PgRoom, Option<Decimal>)| {
        let value = value.clone();
        let on_change = on_change.clone();
        Callback::from(move |amount: Option<Decimal>| {
            let mut next = value.clone();
            if let Some(room) = next.rooms.get_mut(index) {
                apply(room, amount);
            }
            on_change.emit(next);
        })
    };

    let room_kinds: Vec<PgRoomKind> = value.rooms.iter().map(|r| r.kind).collect();

    html! {
        <div class="space-y-6">
            <TextField
                id="pg-name"
                label="PG/Hostel Name"
                value={value.pg_name.clone()}
                error={field_error(errors, "pg_name")}
                on_change={edit(value, on_change, |d, v| d.pg_name = v)}
            />
            <div>
                <ChipGroup<PgRoomKind>
                    label="Room Types"
                    selected={room_kinds}
                    on_toggle={edit(value, on_change, toggle_room)}
                />
                if let Some(error) = field_error(errors, "rooms") {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
                }
            </div>
            {for value.rooms.iter().enumerate().map(|(index, room)| html! {
                <div key={room.kind.slug()} class="grid grid-cols-1 sm:grid-cols-2 gap-4 p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                    <MoneyField
                        id={format!("rent-{}", room.kind.slug())}
                        label={format!("{} Room Rent", room.kind)}
                        value={room.rent}
                        on_change={room_amount(index, |r, v| r.rent = v)}
                    />
                    <MoneyField
                        id={format!("deposit-{}", room.kind.slug())}
                        label={format!("{} Room Deposit", room.kind)}
                        value={room.deposit}
                        on_change={room_amount(index, |r, v| r.deposit = v)}
                    />
                </div>
            })}
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <SelectField<Gender>
                    id="available-for"
                    label="Available For"
                    value={value.available_for}
                    error={field_error(errors, "available_for")}
                    on_change={edit(value, on_change, |d, v| d.available_for = v)}
                />
                <DateField
                    id="available-from"
                    label="Available From"
                    value={value.available_from}
                    error={field_error(errors, "available_from")}
                    on_change={edit(value, on_change, |d, v| d.available_from = v)}
                />
                <TimeField
                    id="gate-closing"
                    label="Gate Closing Time"
                    value={value.gate_closing_time}
                    on_change={edit(value, on_change, |d, v| d.gate_closing_time = v)}
                />
                <div class="flex items-end pb-2">
                    <CheckboxField
                        id="food-included"
                        label="Food included"
                        checked={value.food_included}
                        on_change={edit(value, on_change, |d, v| d.food_included = v)}
                    />
                </div>
            </div>
            <ChipGroup<PgRule>
                label="House Rules"
                selected={value.rules.clone()}
                on_toggle={edit(value, on_change, toggle_rule)}
            />
            <TextAreaField
                id="description"
                label="Description"
                value={value.description.clone().unwrap_or_default()}
                error={field_error(errors, "description")}
                on_change={edit(value, on_change, |d, v| d.description = optional_text(v))}
            />
        </div>
    }
}

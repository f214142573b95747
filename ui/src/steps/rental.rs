use payloads::{
    FieldError, Furnishing, Parking, PreferredTenants, RentalDetails,
};
use yew::prelude::*;

use super::{edit, optional_text};
use crate::components::form_fields::{
    CheckboxField, DateField, MoneyField, SelectField, TextAreaField,
    field_error,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: RentalDetails,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<RentalDetails>,
}

#[function_component]
pub fn RentalStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
            <MoneyField
                id="expected-rent"
                label="Expected Rent"
                value={value.expected_rent}
                error={field_error(errors, "expected_rent")}
                on_change={edit(value, on_change, |d, v| d.expected_rent = v)}
            />
            <MoneyField
                id="expected-deposit"
                label="Expected Deposit"
                value={value.expected_deposit}
                error={field_error(errors, "expected_deposit")}
                on_change={edit(value, on_change, |d, v| d.expected_deposit = v)}
            />
            <MoneyField
                id="monthly-maintenance"
                label="Monthly Maintenance"
                value={value.monthly_maintenance}
                error={field_error(errors, "monthly_maintenance")}
                on_change={edit(value, on_change, |d, v| d.monthly_maintenance = v)}
            />
            <DateField
                id="available-from"
                label="Available From"
                value={value.available_from}
                error={field_error(errors, "available_from")}
                on_change={edit(value, on_change, |d, v| d.available_from = v)}
            />
            <SelectField<PreferredTenants>
                id="preferred-tenants"
                label="Preferred Tenants"
                value={value.preferred_tenants}
                error={field_error(errors, "preferred_tenants")}
                on_change={edit(value, on_change, |d, v| d.preferred_tenants = v)}
            />
            <SelectField<Furnishing>
                id="furnishing"
                label="Furnishing"
                value={value.furnishing}
                error={field_error(errors, "furnishing")}
                on_change={edit(value, on_change, |d, v| d.furnishing = v)}
            />
            <SelectField<Parking>
                id="parking"
                label="Parking"
                value={value.parking}
                on_change={edit(value, on_change, |d, v| d.parking = v)}
            />
            <div class="flex items-end pb-2">
                <CheckboxField
                    id="rent-negotiable"
                    label="Rent negotiable"
                    checked={value.rent_negotiable}
                    on_change={edit(value, on_change, |d, v| d.rent_negotiable = v)}
                />
            </div>
            <div class="sm:col-span-2">
                <TextAreaField
                    id="description"
                    label="Description"
                    value={value.description.clone().unwrap_or_default()}
                    error={field_error(errors, "description")}
                    on_change={edit(value, on_change, |d, v| d.description = optional_text(v))}
                />
            </div>
        </div>
    }
}

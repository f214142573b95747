use payloads::{FieldError, FlatmateDetails, Furnishing, Gender};
use yew::prelude::*;

use super::{edit, optional_text};
use crate::components::form_fields::{
    CheckboxField, DateField, MoneyField, SelectField, TextAreaField,
    field_error,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: FlatmateDetails,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<FlatmateDetails>,
}

#[function_component]
pub fn FlatmateStep(props: &Props) -> Html {
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
            <DateField
                id="available-from"
                label="Available From"
                value={value.available_from}
                error={field_error(errors, "available_from")}
                on_change={edit(value, on_change, |d, v| d.available_from = v)}
            />
            <SelectField<Gender>
                id="preferred-gender"
                label="Looking For"
                value={value.preferred_gender}
                error={field_error(errors, "preferred_gender")}
                on_change={edit(value, on_change, |d, v| d.preferred_gender = v)}
            />
            <SelectField<Furnishing>
                id="furnishing"
                label="Furnishing"
                value={value.furnishing}
                on_change={edit(value, on_change, |d, v| d.furnishing = v)}
            />
            <div class="flex items-end pb-2">
                <CheckboxField
                    id="attached-bathroom"
                    label="Attached bathroom"
                    checked={value.attached_bathroom}
                    on_change={edit(value, on_change, |d, v| d.attached_bathroom = v)}
                />
            </div>
            <div class="sm:col-span-2">
                <TextAreaField
                    id="description"
                    label="About the flat and flatmates"
                    value={value.description.clone().unwrap_or_default()}
                    error={field_error(errors, "description")}
                    on_change={edit(value, on_change, |d, v| d.description = optional_text(v))}
                />
            </div>
        </div>
    }
}

use payloads::{FieldError, Furnishing, Parking, ResaleDetails};
use yew::prelude::*;

use super::{edit, optional_text};
use crate::components::form_fields::{
    CheckboxField, DateField, MoneyField, SelectField, TextAreaField,
    field_error,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: ResaleDetails,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<ResaleDetails>,
}

#[function_component]
pub fn ResaleStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
            <MoneyField
                id="expected-price"
                label="Expected Price"
                value={value.expected_price}
                error={field_error(errors, "expected_price")}
                on_change={edit(value, on_change, |d, v| d.expected_price = v)}
            />
            <DateField
                id="available-from"
                label="Available From"
                value={value.available_from}
                error={field_error(errors, "available_from")}
                on_change={edit(value, on_change, |d, v| d.available_from = v)}
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
            <CheckboxField
                id="price-negotiable"
                label="Price negotiable"
                checked={value.price_negotiable}
                on_change={edit(value, on_change, |d, v| d.price_negotiable = v)}
            />
            <CheckboxField
                id="under-loan"
                label="Currently under loan"
                checked={value.under_loan}
                on_change={edit(value, on_change, |d, v| d.under_loan = v)}
            />
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

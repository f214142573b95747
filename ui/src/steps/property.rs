use payloads::{
    BhkType, Facing, FieldError, PropertyClass, PropertyDetails, PropertyType,
};
use yew::prelude::*;

use super::edit;
use crate::components::form_fields::{NumberField, SelectField, field_error};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: PropertyDetails,
    pub class: PropertyClass,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<PropertyDetails>,
}

#[function_component]
pub fn PropertyStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
            <SelectField<PropertyType>
                id="property-type"
                label="Property Type"
                value={value.property_type}
                options={PropertyType::options_for(props.class)}
                error={field_error(errors, "property_type")}
                on_change={edit(value, on_change, |d, v| d.property_type = v)}
            />
            if props.class == PropertyClass::Residential {
                <SelectField<BhkType>
                    id="bhk-type"
                    label="BHK Type"
                    value={value.bhk_type}
                    error={field_error(errors, "bhk_type")}
                    on_change={edit(value, on_change, |d, v| d.bhk_type = v)}
                />
            }
            <NumberField
                id="floor"
                label="Floor"
                value={value.floor}
                error={field_error(errors, "floor")}
                on_change={edit(value, on_change, |d, v| d.floor = v)}
            />
            <NumberField
                id="total-floors"
                label="Total Floors"
                value={value.total_floors}
                error={field_error(errors, "total_floors")}
                on_change={edit(value, on_change, |d, v| d.total_floors = v)}
            />
            <NumberField
                id="property-age"
                label="Property Age"
                suffix="years"
                value={value.property_age_years}
                on_change={edit(value, on_change, |d, v| d.property_age_years = v)}
            />
            <SelectField<Facing>
                id="facing"
                label="Facing"
                value={value.facing}
                on_change={edit(value, on_change, |d, v| d.facing = v)}
            />
            <NumberField
                id="built-up-area"
                label="Built Up Area"
                suffix="sq. ft."
                value={value.built_up_area}
                error={field_error(errors, "built_up_area")}
                on_change={edit(value, on_change, |d, v| d.built_up_area = v)}
            />
        </div>
    }
}

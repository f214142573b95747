use payloads::{Amenities, Amenity, FieldError, WaterSupply};
use yew::prelude::*;

use super::edit;
use crate::components::form_fields::{
    ChipGroup, SelectField, StepperField, field_error,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Amenities,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<Amenities>,
}

#[function_component]
pub fn AmenitiesStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                <StepperField
                    label="Bathrooms"
                    value={value.bathrooms}
                    on_change={edit(value, on_change, |d, v| d.bathrooms = v)}
                />
                <StepperField
                    label="Balconies"
                    value={value.balconies}
                    on_change={edit(value, on_change, |d, v| d.balconies = v)}
                />
                <SelectField<WaterSupply>
                    id="water-supply"
                    label="Water Supply"
                    value={value.water_supply}
                    error={field_error(errors, "water_supply")}
                    on_change={edit(value, on_change, |d, v| d.water_supply = v)}
                />
            </div>
            <ChipGroup<Amenity>
                label="Available Amenities"
                selected={value.selected.clone()}
                on_toggle={edit(value, on_change, Amenities::toggle)}
            />
        </div>
    }
}

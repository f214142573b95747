use payloads::{Availability, FieldError, ScheduleDetails};
use yew::prelude::*;

use super::edit;
use crate::components::form_fields::{
    CheckboxField, SelectField, TimeField, field_error,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: ScheduleDetails,
    pub errors: Vec<FieldError>,
    pub on_change: Callback<ScheduleDetails>,
}

/// When visitors may come, plus the optional house services.
#[function_component]
pub fn ScheduleStep(props: &Props) -> Html {
    let value = &props.value;
    let errors = &props.errors;
    let on_change = &props.on_change;

    html! {
        <div class="space-y-6">
            <SelectField<Availability>
                id="availability"
                label="Availability"
                value={value.availability}
                error={field_error(errors, "availability")}
                on_change={edit(value, on_change, |d, v| d.availability = v)}
            />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <TimeField
                    id="start-time"
                    label="Start Time"
                    value={value.start_time}
                    error={field_error(errors, "start_time")}
                    on_change={edit(value, on_change, |d, v| d.start_time = v)}
                />
                <TimeField
                    id="end-time"
                    label="End Time"
                    value={value.end_time}
                    error={field_error(errors, "end_time")}
                    on_change={edit(value, on_change, |d, v| d.end_time = v)}
                />
            </div>
            <div class="space-y-3">
                <CheckboxField
                    id="wants-cleaning"
                    label="I'd like my house cleaned before listing"
                    checked={value.wants_cleaning}
                    on_change={edit(value, on_change, |d, v| d.wants_cleaning = v)}
                />
                <CheckboxField
                    id="wants-painting"
                    label="I'd like my house painted before listing"
                    checked={value.wants_painting}
                    on_change={edit(value, on_change, |d, v| d.wants_painting = v)}
                />
            </div>
        </div>
    }
}

//! Controlled inputs shared by the wizard steps. Each takes the current
//! value and reports edits through `on_change`; none keeps its own state.

use std::str::FromStr;

use jiff::civil::{Date, Time};
use payloads::{FieldError, FormOption, validation::error_for};
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
    rounded-md shadow-sm bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100
    focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
    dark:focus:ring-neutral-400 disabled:opacity-50";

const LABEL_CLASS: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

/// Message for `field`, if any, as an owned prop value.
pub fn field_error(errors: &[FieldError], field: &str) -> Option<AttrValue> {
    error_for(errors, field).map(|m| AttrValue::from(m.to_string()))
}

/// Parse a numeric input; blank or unparsable text clears the value.
pub fn parse_optional<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

#[derive(Properties, PartialEq)]
struct FieldShellProps {
    id: AttrValue,
    label: AttrValue,
    error: Option<AttrValue>,
    children: Children,
}

#[function_component]
fn FieldShell(props: &FieldShellProps) -> Html {
    html! {
        <div>
            <label for={props.id.clone()} class={LABEL_CLASS}>
                {&props.label}
            </label>
            {props.children.clone()}
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <input
                type="text"
                id={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
                class={INPUT_CLASS}
            />
        </FieldShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(4)]
    pub rows: u32,
}

#[function_component]
pub fn TextAreaField(props: &TextAreaFieldProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <textarea
                id={props.id.clone()}
                value={props.value.clone()}
                rows={props.rows.to_string()}
                {oninput}
                class={INPUT_CLASS}
            />
        </FieldShell>
    }
}

/// Numeric input for whole numbers (floors, areas, counts).
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Option<u32>,
    pub on_change: Callback<Option<u32>>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

#[function_component]
pub fn NumberField(props: &NumberFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        parse_optional::<u32>(&input.value())
    });

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <div class="flex items-center gap-2">
                <input
                    type="number"
                    min="0"
                    id={props.id.clone()}
                    value={props.value.map(|v| v.to_string()).unwrap_or_default()}
                    {onchange}
                    class={INPUT_CLASS}
                />
                if let Some(suffix) = &props.suffix {
                    <span class="text-sm text-neutral-500">{suffix}</span>
                }
            </div>
        </FieldShell>
    }
}

/// Money input. Amounts are kept as decimals end to end.
#[derive(Properties, PartialEq)]
pub struct MoneyFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Option<Decimal>,
    pub on_change: Callback<Option<Decimal>>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn MoneyField(props: &MoneyFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        parse_optional::<Decimal>(&input.value())
    });

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <div class="flex items-center gap-2">
                <span class="text-sm text-neutral-500">{"₹"}</span>
                <input
                    type="text"
                    inputmode="decimal"
                    id={props.id.clone()}
                    value={props.value.map(|v| v.to_string()).unwrap_or_default()}
                    {onchange}
                    class={INPUT_CLASS}
                />
            </div>
        </FieldShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Option<Date>,
    pub on_change: Callback<Option<Date>>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn DateField(props: &DateFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        parse_optional::<Date>(&input.value())
    });

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <input
                type="date"
                id={props.id.clone()}
                value={props.value.map(|d| d.to_string()).unwrap_or_default()}
                {onchange}
                class={INPUT_CLASS}
            />
        </FieldShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Option<Time>,
    pub on_change: Callback<Option<Time>>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn TimeField(props: &TimeFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        parse_time(&input.value())
    });

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <input
                type="time"
                id={props.id.clone()}
                value={props.value.map(format_time).unwrap_or_default()}
                {onchange}
                class={INPUT_CLASS}
            />
        </FieldShell>
    }
}

/// `<input type="time">` speaks `HH:MM`.
pub fn format_time(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

pub fn parse_time(text: &str) -> Option<Time> {
    Time::strptime("%H:%M", text.trim()).ok()
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps<T: FormOption> {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Option<T>,
    pub on_change: Callback<Option<T>>,
    /// Defaults to every option of `T`.
    #[prop_or_default]
    pub options: Option<Vec<T>>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component]
pub fn SelectField<T: FormOption>(props: &SelectFieldProps<T>) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        T::from_slug(&select.value())
    });

    let options: Vec<T> = props
        .options
        .clone()
        .unwrap_or_else(|| T::options().to_vec());

    html! {
        <FieldShell id={props.id.clone()} label={props.label.clone()} error={props.error.clone()}>
            <select id={props.id.clone()} {onchange} class={INPUT_CLASS}>
                <option value="" selected={props.value.is_none()}>{"Select"}</option>
                {for options.iter().map(|option| html! {
                    <option
                        value={option.slug()}
                        selected={props.value == Some(*option)}
                    >
                        {option.to_string()}
                    </option>
                })}
            </select>
        </FieldShell>
    }
}

/// Multi-select rendered as toggle chips.
#[derive(Properties, PartialEq)]
pub struct ChipGroupProps<T: FormOption> {
    pub label: AttrValue,
    pub selected: Vec<T>,
    pub on_toggle: Callback<T>,
}

#[function_component]
pub fn ChipGroup<T: FormOption>(props: &ChipGroupProps<T>) -> Html {
    html! {
        <div>
            <p class={LABEL_CLASS}>{&props.label}</p>
            <div class="flex flex-wrap gap-2">
                {for T::options().iter().map(|option| {
                    let option = *option;
                    let active = props.selected.contains(&option);
                    let onclick = props.on_toggle.reform(move |_: MouseEvent| option);
                    let class = if active {
                        "px-3 py-1.5 rounded-full text-sm border border-neutral-900 bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
                    } else {
                        "px-3 py-1.5 rounded-full text-sm border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 hover:bg-neutral-100 dark:hover:bg-neutral-700"
                    };
                    html! {
                        <button type="button" {class} {onclick}>
                            {option.to_string()}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
}

#[function_component]
pub fn CheckboxField(props: &CheckboxFieldProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.checked()
    });

    html! {
        <label for={props.id.clone()} class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
            <input
                type="checkbox"
                id={props.id.clone()}
                checked={props.checked}
                {onchange}
                class="h-4 w-4 rounded border-neutral-300"
            />
            {&props.label}
        </label>
    }
}

/// Plus/minus counter for small counts like bathrooms.
#[derive(Properties, PartialEq)]
pub struct StepperFieldProps {
    pub label: AttrValue,
    pub value: u32,
    pub on_change: Callback<u32>,
    #[prop_or(10)]
    pub max: u32,
}

#[function_component]
pub fn StepperField(props: &StepperFieldProps) -> Html {
    let value = props.value;
    let max = props.max;
    let on_minus = props
        .on_change
        .reform(move |_: MouseEvent| value.saturating_sub(1));
    let on_plus = props
        .on_change
        .reform(move |_: MouseEvent| (value + 1).min(max));

    html! {
        <div>
            <p class={LABEL_CLASS}>{&props.label}</p>
            <div class="flex items-center gap-3">
                <button type="button" onclick={on_minus} disabled={value == 0}
                    class="w-8 h-8 rounded-full border border-neutral-300 dark:border-neutral-600 disabled:opacity-50">
                    {"−"}
                </button>
                <span class="w-6 text-center">{value}</span>
                <button type="button" onclick={on_plus} disabled={value >= max}
                    class="w-8 h-8 rounded-full border border-neutral-300 dark:border-neutral-600 disabled:opacity-50">
                    {"+"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::time;
    use rust_decimal::dec;

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional::<u32>(" 12 "), Some(12));
        assert_eq!(parse_optional::<u32>(""), None);
        assert_eq!(parse_optional::<u32>("-3"), None);
        assert_eq!(parse_optional::<Decimal>("2500.50"), Some(dec!(2500.50)));
    }

    #[test]
    fn test_time_input_format() {
        assert_eq!(format_time(time(9, 5, 0, 0)), "09:05");
        assert_eq!(parse_time("18:30"), Some(time(18, 30, 0, 0)));
        assert_eq!(parse_time("later"), None);
    }
}

//! One form per wizard step. Every step is controlled: it renders the
//! section it is given and reports each edit as a whole new section.

pub mod amenities;
pub mod flatmate;
pub mod gallery;
pub mod locality;
pub mod pg;
pub mod property;
pub mod rental;
pub mod resale;
pub mod schedule;

pub use amenities::AmenitiesStep;
pub use flatmate::FlatmateStep;
pub use gallery::GalleryStep;
pub use locality::LocalityStep;
pub use pg::PgStep;
pub use property::PropertyStep;
pub use rental::RentalStep;
pub use resale::ResaleStep;
pub use schedule::ScheduleStep;

use yew::Callback;

/// Callback that applies one field edit to a copy of `value` and emits the
/// result.
pub fn edit<S, T>(
    value: &S,
    on_change: &Callback<S>,
    apply: fn(&mut S, T),
) -> Callback<T>
where
    S: Clone + 'static,
    T: 'static,
{
    let value = value.clone();
    let on_change = on_change.clone();
    Callback::from(move |input: T| {
        let mut next = value.clone();
        apply(&mut next, input);
        on_change.emit(next);
    })
}

/// Blank text means "not given" for optional free text.
pub fn optional_text(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

//! Per-step form checks.
//!
//! Each `validate_*` function returns every problem it finds so the form can
//! show them all at once. An empty list means the step is complete.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    Amenities, FlatmateDetails, GalleryPayload, ListingDraft, ListingKind,
    ListingSubmission, ListingTerms, LocalityDetails, PgDetails,
    PropertyClass, PropertyDetails, RentalDetails, ResaleDetails,
    ScheduleDetails, WizardStep,
};

pub const DESCRIPTION_MAX_LEN: usize = 2000;
pub const PLACE_QUERY_MIN_LEN: usize = 3;

/// A single validation failure, keyed by the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Lookup helper for rendering an error next to its field.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Whether a MIME type names an image.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

fn require<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &Option<T>,
    message: &str,
) {
    if value.is_none() {
        errors.push(FieldError::new(field, message));
    }
}

fn require_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &str,
) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn require_amount(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<Decimal>,
    label: &str,
) {
    match value {
        None => errors.push(FieldError::new(
            field,
            format!("Please enter the {label}"),
        )),
        Some(amount) if amount <= Decimal::ZERO => errors.push(
            FieldError::new(field, format!("{label} must be greater than 0")),
        ),
        Some(_) => {}
    }
}

fn check_description(errors: &mut Vec<FieldError>, value: &Option<String>) {
    if let Some(description) = value
        && description.chars().count() > DESCRIPTION_MAX_LEN
    {
        errors.push(FieldError::new(
            "description",
            format!(
                "Description must be at most {DESCRIPTION_MAX_LEN} characters"
            ),
        ));
    }
}

pub fn validate_property(
    details: &PropertyDetails,
    class: PropertyClass,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match details.property_type {
        None => errors.push(FieldError::new(
            "property_type",
            "Please select the property type",
        )),
        Some(t) if t.class() != class => errors.push(FieldError::new(
            "property_type",
            format!("{t} is not a {} property", class.slug()),
        )),
        Some(_) => {}
    }
    // BHK only makes sense for homes
    if class == PropertyClass::Residential {
        require(
            &mut errors,
            "bhk_type",
            &details.bhk_type,
            "Please select the BHK type",
        );
    }
    require(
        &mut errors,
        "floor",
        &details.floor,
        "Please enter the floor",
    );
    require(
        &mut errors,
        "total_floors",
        &details.total_floors,
        "Please enter the total floors",
    );
    if let (Some(floor), Some(total)) = (details.floor, details.total_floors)
        && floor > total
    {
        errors.push(FieldError::new(
            "floor",
            "Floor cannot be higher than the total floors",
        ));
    }
    match details.built_up_area {
        None => errors.push(FieldError::new(
            "built_up_area",
            "Please enter the built up area",
        )),
        Some(0) => errors.push(FieldError::new(
            "built_up_area",
            "Built up area must be greater than 0",
        )),
        Some(_) => {}
    }
    errors
}

pub fn validate_locality(details: &LocalityDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_text(&mut errors, "city", &details.city, "Please enter the city");
    require_text(
        &mut errors,
        "locality",
        &details.locality,
        "Please enter the locality",
    );
    errors
}

pub fn validate_rental(details: &RentalDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_amount(
        &mut errors,
        "expected_rent",
        details.expected_rent,
        "expected rent",
    );
    require_amount(
        &mut errors,
        "expected_deposit",
        details.expected_deposit,
        "expected deposit",
    );
    if let Some(maintenance) = details.monthly_maintenance
        && maintenance < Decimal::ZERO
    {
        errors.push(FieldError::new(
            "monthly_maintenance",
            "Maintenance cannot be negative",
        ));
    }
    require(
        &mut errors,
        "available_from",
        &details.available_from,
        "Please choose when the property is available",
    );
    require(
        &mut errors,
        "preferred_tenants",
        &details.preferred_tenants,
        "Please select preferred tenants",
    );
    require(
        &mut errors,
        "furnishing",
        &details.furnishing,
        "Please select the furnishing",
    );
    check_description(&mut errors, &details.description);
    errors
}

pub fn validate_resale(details: &ResaleDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_amount(
        &mut errors,
        "expected_price",
        details.expected_price,
        "expected price",
    );
    require(
        &mut errors,
        "available_from",
        &details.available_from,
        "Please choose when the property is available",
    );
    require(
        &mut errors,
        "furnishing",
        &details.furnishing,
        "Please select the furnishing",
    );
    check_description(&mut errors, &details.description);
    errors
}

pub fn validate_pg(details: &PgDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_text(
        &mut errors,
        "pg_name",
        &details.pg_name,
        "Please enter the PG/Hostel name",
    );
    if details.rooms.is_empty() {
        errors.push(FieldError::new(
            "rooms",
            "Please add at least one room type",
        ));
    }
    for room in &details.rooms {
        require_amount(
            &mut errors,
            "rooms",
            room.rent,
            &format!("{} room rent", room.kind),
        );
        require_amount(
            &mut errors,
            "rooms",
            room.deposit,
            &format!("{} room deposit", room.kind),
        );
    }
    require(
        &mut errors,
        "available_for",
        &details.available_for,
        "Please select who the PG is available for",
    );
    require(
        &mut errors,
        "available_from",
        &details.available_from,
        "Please choose when rooms are available",
    );
    check_description(&mut errors, &details.description);
    errors
}

pub fn validate_flatmate(details: &FlatmateDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require_amount(
        &mut errors,
        "expected_rent",
        details.expected_rent,
        "expected rent",
    );
    require_amount(
        &mut errors,
        "expected_deposit",
        details.expected_deposit,
        "expected deposit",
    );
    require(
        &mut errors,
        "available_from",
        &details.available_from,
        "Please choose when the room is available",
    );
    require(
        &mut errors,
        "preferred_gender",
        &details.preferred_gender,
        "Please select the preferred flatmate",
    );
    check_description(&mut errors, &details.description);
    errors
}

pub fn validate_amenities(details: &Amenities) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(
        &mut errors,
        "water_supply",
        &details.water_supply,
        "Please select the water supply",
    );
    errors
}

pub fn validate_gallery(gallery: &GalleryPayload) -> Vec<FieldError> {
    if gallery.photo_count() == 0 {
        vec![FieldError::new("photos", "Please add at least one photo")]
    } else {
        Vec::new()
    }
}

pub fn validate_schedule(details: &ScheduleDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    require(
        &mut errors,
        "availability",
        &details.availability,
        "Please select when visitors can come",
    );
    require(
        &mut errors,
        "start_time",
        &details.start_time,
        "Please choose a start time",
    );
    require(
        &mut errors,
        "end_time",
        &details.end_time,
        "Please choose an end time",
    );
    if let (Some(start), Some(end)) = (details.start_time, details.end_time)
        && end <= start
    {
        errors.push(FieldError::new(
            "end_time",
            "End time must be after the start time",
        ));
    }
    errors
}

fn missing(field: &'static str, step: WizardStep) -> Vec<FieldError> {
    vec![FieldError::new(
        field,
        format!("Please complete the {} step", step.title()),
    )]
}

/// Validate the section of `draft` that `step` edits.
pub fn validate_step(draft: &ListingDraft, step: WizardStep) -> Vec<FieldError> {
    match step {
        WizardStep::Property => match &draft.property {
            Some(d) => validate_property(d, draft.class),
            None => missing("property", step),
        },
        WizardStep::Locality => match &draft.locality {
            Some(d) => validate_locality(d),
            None => missing("locality", step),
        },
        WizardStep::Rental => match &draft.rental {
            Some(d) => validate_rental(d),
            None => missing("rental", step),
        },
        WizardStep::Resale => match &draft.resale {
            Some(d) => validate_resale(d),
            None => missing("resale", step),
        },
        WizardStep::PgDetails => match &draft.pg {
            Some(d) => validate_pg(d),
            None => missing("pg", step),
        },
        WizardStep::Flatmate => match &draft.flatmate {
            Some(d) => validate_flatmate(d),
            None => missing("flatmate", step),
        },
        WizardStep::Amenities => match &draft.amenities {
            Some(d) => validate_amenities(d),
            None => missing("amenities", step),
        },
        WizardStep::Gallery => match &draft.gallery {
            Some(d) => validate_gallery(d),
            None => missing("photos", step),
        },
        WizardStep::Schedule => match &draft.schedule {
            Some(d) => validate_schedule(d),
            None => missing("schedule", step),
        },
    }
}

/// Validate every step of the draft's flow and assemble the submission.
pub fn build_submission(
    draft: &ListingDraft,
) -> Result<ListingSubmission, Vec<FieldError>> {
    let errors: Vec<FieldError> = WizardStep::steps_for(draft.kind)
        .iter()
        .flat_map(|step| validate_step(draft, *step))
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }

    // every section used below was checked present by validate_step
    let incomplete = |step: WizardStep| missing("draft", step);
    let terms = match draft.kind {
        ListingKind::Rent => ListingTerms::Rent(
            draft
                .rental
                .clone()
                .ok_or_else(|| incomplete(WizardStep::Rental))?,
        ),
        ListingKind::Resale => ListingTerms::Resale(
            draft
                .resale
                .clone()
                .ok_or_else(|| incomplete(WizardStep::Resale))?,
        ),
        ListingKind::PgHostel => ListingTerms::PgHostel(
            draft
                .pg
                .clone()
                .ok_or_else(|| incomplete(WizardStep::PgDetails))?,
        ),
        ListingKind::Flatmates => ListingTerms::Flatmates(
            draft
                .flatmate
                .clone()
                .ok_or_else(|| incomplete(WizardStep::Flatmate))?,
        ),
    };

    Ok(ListingSubmission {
        class: draft.class,
        property: draft.property.clone(),
        locality: draft
            .locality
            .clone()
            .ok_or_else(|| incomplete(WizardStep::Locality))?,
        terms,
        amenities: draft
            .amenities
            .clone()
            .ok_or_else(|| incomplete(WizardStep::Amenities))?,
        gallery: draft
            .gallery
            .clone()
            .ok_or_else(|| incomplete(WizardStep::Gallery))?,
        schedule: draft
            .schedule
            .clone()
            .ok_or_else(|| incomplete(WizardStep::Schedule))?,
    })
}

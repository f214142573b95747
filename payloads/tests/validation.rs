use jiff::civil::time;
use payloads::{
    BhkType, FlatmateDetails, FormOption, GalleryPayload, LocalityDetails, PgDetails,
    PgRoom, PgRoomKind, PropertyClass, PropertyDetails, PropertyType,
    RentalDetails, ResaleDetails, ScheduleDetails,
    validation::{
        DESCRIPTION_MAX_LEN, error_for, validate_flatmate, validate_gallery,
        validate_locality, validate_pg, validate_property, validate_rental,
        validate_resale, validate_schedule,
    },
};
use rust_decimal::dec;

fn fields(errors: &[payloads::FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

#[test]
fn test_floor_cannot_exceed_total_floors() {
    let details = PropertyDetails {
        property_type: Some(PropertyType::Apartment),
        bhk_type: Some(BhkType::OneBhk),
        floor: Some(12),
        total_floors: Some(10),
        property_age_years: None,
        facing: None,
        built_up_area: Some(600),
    };
    let errors = validate_property(&details, PropertyClass::Residential);
    assert_eq!(fields(&errors), ["floor"]);
    assert_eq!(
        error_for(&errors, "floor"),
        Some("Floor cannot be higher than the total floors")
    );
}

#[test]
fn test_commercial_property_skips_bhk_but_checks_type() {
    let details = PropertyDetails {
        property_type: Some(PropertyType::Office),
        bhk_type: None,
        floor: Some(0),
        total_floors: Some(4),
        property_age_years: None,
        facing: None,
        built_up_area: Some(2500),
    };
    assert!(validate_property(&details, PropertyClass::Commercial).is_empty());

    let errors = validate_property(&details, PropertyClass::Residential);
    assert!(fields(&errors).contains(&"property_type"));
    assert!(fields(&errors).contains(&"bhk_type"));
}

#[test]
fn test_empty_property_lists_every_required_field() {
    let errors =
        validate_property(&PropertyDetails::default(), PropertyClass::Residential);
    assert_eq!(
        fields(&errors),
        ["property_type", "bhk_type", "floor", "total_floors", "built_up_area"]
    );
}

#[test]
fn test_locality_requires_trimmed_text() {
    let details = LocalityDetails {
        city: "  ".into(),
        locality: "Koramangala".into(),
        landmark: None,
        place_id: None,
    };
    assert_eq!(fields(&validate_locality(&details)), ["city"]);
}

#[test]
fn test_amounts_must_be_positive() {
    let details = RentalDetails {
        expected_rent: Some(dec!(0)),
        expected_deposit: None,
        monthly_maintenance: Some(dec!(-1)),
        ..Default::default()
    };
    let errors = validate_rental(&details);
    assert_eq!(
        error_for(&errors, "expected_rent"),
        Some("expected rent must be greater than 0")
    );
    assert_eq!(
        error_for(&errors, "expected_deposit"),
        Some("Please enter the expected deposit")
    );
    assert!(error_for(&errors, "monthly_maintenance").is_some());
}

#[test]
fn test_long_descriptions_are_rejected() {
    let details = ResaleDetails {
        expected_price: Some(dec!(7500000)),
        available_from: Some(jiff::civil::date(2027, 1, 1)),
        furnishing: Some(payloads::Furnishing::Full),
        description: Some("x".repeat(DESCRIPTION_MAX_LEN + 1)),
        ..Default::default()
    };
    assert_eq!(fields(&validate_resale(&details)), ["description"]);
}

#[test]
fn test_pg_needs_rooms_with_prices() {
    let mut details = PgDetails {
        pg_name: "Green Nest".into(),
        available_for: Some(payloads::Gender::Male),
        available_from: Some(jiff::civil::date(2026, 12, 1)),
        ..Default::default()
    };
    assert_eq!(fields(&validate_pg(&details)), ["rooms"]);

    details.rooms.push(PgRoom {
        kind: PgRoomKind::Single,
        rent: Some(dec!(12000)),
        deposit: None,
    });
    let errors = validate_pg(&details);
    assert_eq!(
        error_for(&errors, "rooms"),
        Some("Please enter the Single room deposit")
    );
}

#[test]
fn test_flatmate_requires_gender() {
    let details = FlatmateDetails {
        expected_rent: Some(dec!(15000)),
        expected_deposit: Some(dec!(30000)),
        available_from: Some(jiff::civil::date(2026, 11, 1)),
        ..Default::default()
    };
    assert_eq!(fields(&validate_flatmate(&details)), ["preferred_gender"]);
}

#[test]
fn test_gallery_needs_a_photo() {
    assert_eq!(
        fields(&validate_gallery(&GalleryPayload::default())),
        ["photos"]
    );
}

#[test]
fn test_schedule_end_after_start() {
    let details = ScheduleDetails {
        availability: Some(payloads::Availability::Weekend),
        start_time: Some(time(18, 0, 0, 0)),
        end_time: Some(time(9, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(fields(&validate_schedule(&details)), ["end_time"]);
}

#[test]
fn test_form_options_round_trip_through_slugs() {
    for option in PropertyType::ALL {
        assert_eq!(PropertyType::from_slug(option.slug()), Some(*option));
    }
    assert_eq!(BhkType::from_slug("2bhk"), Some(BhkType::TwoBhk));
    assert_eq!(BhkType::from_slug("nope"), None);
    assert_eq!(BhkType::TwoBhk.to_string(), "2 BHK");
    assert_eq!(
        PropertyType::options_for(PropertyClass::Commercial).len(),
        4
    );
}

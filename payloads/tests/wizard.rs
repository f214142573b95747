use jiff::civil::{date, time};
use payloads::{
    Amenities, Availability, BhkType, CategoryId, CategoryPhotos,
    GalleryPayload, Gender, ListingDraft, ListingKind, ListingTerms,
    LocalityDetails, PgDetails, PgRoom, PgRoomKind, PreferredTenants,
    PropertyClass, PropertyDetails, PropertyType, RentalDetails,
    ScheduleDetails, WaterSupply, WizardProgress, WizardStep, Furnishing,
    validation::build_submission,
};
use rust_decimal::dec;

fn property() -> PropertyDetails {
    PropertyDetails {
        property_type: Some(PropertyType::Apartment),
        bhk_type: Some(BhkType::TwoBhk),
        floor: Some(3),
        total_floors: Some(10),
        property_age_years: Some(5),
        facing: None,
        built_up_area: Some(1100),
    }
}

fn locality() -> LocalityDetails {
    LocalityDetails {
        city: "Bengaluru".into(),
        locality: "Indiranagar".into(),
        landmark: None,
        place_id: None,
    }
}

fn rental() -> RentalDetails {
    RentalDetails {
        expected_rent: Some(dec!(25000)),
        expected_deposit: Some(dec!(100000)),
        rent_negotiable: true,
        monthly_maintenance: Some(dec!(2000)),
        available_from: Some(date(2026, 11, 1)),
        preferred_tenants: Some(PreferredTenants::Family),
        furnishing: Some(Furnishing::Semi),
        parking: None,
        description: None,
    }
}

fn amenities() -> Amenities {
    Amenities {
        bathrooms: 2,
        balconies: 1,
        water_supply: Some(WaterSupply::Corporation),
        selected: Vec::new(),
    }
}

fn gallery() -> GalleryPayload {
    GalleryPayload::from_categorized(
        vec![CategoryPhotos {
            category: CategoryId::from("hall"),
            urls: vec!["https://cdn.test/hall.jpg".into()],
        }],
        None,
    )
}

fn schedule() -> ScheduleDetails {
    ScheduleDetails {
        availability: Some(Availability::Everyday),
        start_time: Some(time(9, 0, 0, 0)),
        end_time: Some(time(18, 0, 0, 0)),
        wants_cleaning: false,
        wants_painting: false,
    }
}

fn complete_rent_draft() -> ListingDraft {
    let mut draft = ListingDraft::new(ListingKind::Rent, PropertyClass::Residential);
    draft.property = Some(property());
    draft.locality = Some(locality());
    draft.rental = Some(rental());
    draft.amenities = Some(amenities());
    draft.gallery = Some(gallery());
    draft.schedule = Some(schedule());
    draft
}

#[test]
fn test_each_kind_has_its_own_steps() {
    assert_eq!(
        WizardStep::steps_for(ListingKind::Rent),
        [
            WizardStep::Property,
            WizardStep::Locality,
            WizardStep::Rental,
            WizardStep::Amenities,
            WizardStep::Gallery,
            WizardStep::Schedule,
        ]
    );
    assert!(WizardStep::steps_for(ListingKind::Resale).contains(&WizardStep::Resale));
    assert!(!WizardStep::steps_for(ListingKind::PgHostel).contains(&WizardStep::Property));
    assert!(WizardStep::steps_for(ListingKind::Flatmates).contains(&WizardStep::Flatmate));
    for kind in ListingKind::ALL {
        assert!(WizardStep::steps_for(kind).contains(&WizardStep::Gallery));
    }
}

#[test]
fn test_advance_requires_a_valid_step() {
    let mut draft = ListingDraft::new(ListingKind::Rent, PropertyClass::Residential);
    let mut progress = WizardProgress::new(ListingKind::Rent);

    let errors = progress.advance(&draft).unwrap_err();
    assert_eq!(errors[0].field, "property");
    assert_eq!(progress.current(), WizardStep::Property);

    let mut incomplete = property();
    incomplete.bhk_type = None;
    draft.property = Some(incomplete);
    let errors = progress.advance(&draft).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "bhk_type"));

    draft.property = Some(property());
    progress.advance(&draft).unwrap();
    assert_eq!(progress.current(), WizardStep::Locality);
    assert!(progress.is_completed(WizardStep::Property));
    assert_eq!(progress.percent_complete(), 16);
}

#[test]
fn test_back_and_jump_rules() {
    let draft = complete_rent_draft();
    let mut progress = WizardProgress::new(ListingKind::Rent);

    // cannot skip ahead of the first incomplete step
    assert!(!progress.jump_to(WizardStep::Gallery));
    assert_eq!(progress.current(), WizardStep::Property);

    progress.advance(&draft).unwrap();
    progress.advance(&draft).unwrap();
    assert_eq!(progress.current(), WizardStep::Rental);

    assert!(progress.jump_to(WizardStep::Property));
    assert_eq!(progress.current(), WizardStep::Property);
    assert!(progress.jump_to(WizardStep::Rental));
    assert!(!progress.jump_to(WizardStep::Amenities));

    progress.back();
    assert_eq!(progress.current(), WizardStep::Locality);
    progress.back();
    progress.back();
    assert!(progress.is_first());

    // steps not in this flow are never reachable
    assert!(!progress.jump_to(WizardStep::PgDetails));
}

#[test]
fn test_finishing_every_step_completes_the_wizard() {
    let draft = complete_rent_draft();
    let mut progress = WizardProgress::new(ListingKind::Rent);
    for _ in 0..progress.steps().len() {
        progress.advance(&draft).unwrap();
    }
    assert!(progress.is_last());
    assert!(progress.all_completed());
    assert_eq!(progress.percent_complete(), 100);
}

#[test]
fn test_resume_lands_on_first_incomplete_step() {
    let mut draft = complete_rent_draft();
    draft.amenities = None;
    let progress = WizardProgress::resume(&draft);
    assert_eq!(progress.current(), WizardStep::Amenities);
    assert!(progress.is_completed(WizardStep::Rental));
    assert!(!progress.is_completed(WizardStep::Gallery));

    let progress = WizardProgress::resume(&complete_rent_draft());
    assert!(progress.all_completed());
    assert_eq!(progress.current(), WizardStep::Schedule);
}

#[test]
fn test_submission_carries_the_flow_terms() -> anyhow::Result<()> {
    let submission = build_submission(&complete_rent_draft())
        .map_err(|errors| anyhow::anyhow!("{errors:?}"))?;
    assert_eq!(submission.kind(), ListingKind::Rent);
    assert!(matches!(submission.terms, ListingTerms::Rent(_)));
    assert_eq!(submission.gallery.photos, ["https://cdn.test/hall.jpg"]);

    let json = serde_json::to_value(&submission)?;
    assert_eq!(json["terms"]["kind"], "rent");
    assert_eq!(json["class"], "residential");
    Ok(())
}

#[test]
fn test_pg_submission_skips_property_details() -> anyhow::Result<()> {
    let mut draft = ListingDraft::new(ListingKind::PgHostel, PropertyClass::Commercial);
    // pg listings are always residential
    assert_eq!(draft.class, PropertyClass::Residential);

    draft.locality = Some(locality());
    draft.pg = Some(PgDetails {
        pg_name: "Sunrise PG".into(),
        rooms: vec![PgRoom {
            kind: PgRoomKind::Double,
            rent: Some(dec!(9000)),
            deposit: Some(dec!(18000)),
        }],
        available_for: Some(Gender::Female),
        available_from: Some(date(2026, 11, 15)),
        food_included: true,
        rules: Vec::new(),
        gate_closing_time: Some(time(22, 30, 0, 0)),
        description: None,
    });
    draft.amenities = Some(amenities());
    draft.gallery = Some(gallery());
    draft.schedule = Some(schedule());

    let submission =
        build_submission(&draft).map_err(|errors| anyhow::anyhow!("{errors:?}"))?;
    assert_eq!(submission.kind(), ListingKind::PgHostel);
    assert!(submission.property.is_none());
    Ok(())
}

#[test]
fn test_incomplete_draft_reports_every_missing_step() {
    let draft = ListingDraft::new(ListingKind::Resale, PropertyClass::Commercial);
    let errors = build_submission(&draft).unwrap_err();
    assert_eq!(errors.len(), WizardStep::steps_for(ListingKind::Resale).len());
}

#[test]
fn test_draft_round_trips_through_json() -> anyhow::Result<()> {
    let draft = complete_rent_draft();
    let json = serde_json::to_string(&draft)?;
    let back: ListingDraft = serde_json::from_str(&json)?;
    assert_eq!(back, draft);
    Ok(())
}

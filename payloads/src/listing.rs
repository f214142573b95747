//! Form sections for each listing flow, plus the draft and submission
//! bodies assembled from them.

use derive_more::Display;
use jiff::civil::{Date, Time};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{GalleryPayload, ListingKind, PropertyClass};

/// A closed set of choices rendered as a select or chip group.
pub trait FormOption:
    Copy + PartialEq + std::fmt::Display + 'static
{
    fn options() -> &'static [Self];
    /// Stable value used for the html option and in query strings.
    fn slug(&self) -> &'static str;
    fn from_slug(slug: &str) -> Option<Self>;
}

/// Helper to declare a form select enum with its option labels.
///
/// Generates `ALL` for rendering `<select>` options and implements
/// [`FormOption`] with the slug used as the option value.
macro_rules! form_options {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($slug:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize,
            Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(#[display($label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl FormOption for $name {
            fn options() -> &'static [Self] {
                Self::ALL
            }

            fn slug(&self) -> &'static str {
                match self {
                    $($name::$variant => $slug),+
                }
            }

            fn from_slug(slug: &str) -> Option<Self> {
                match slug {
                    $($slug => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

form_options! {
    pub enum PropertyType {
        Apartment => ("apartment", "Apartment"),
        IndependentHouse => ("independent_house", "Independent House/Villa"),
        GatedCommunityVilla => ("gated_villa", "Gated Community Villa"),
        Office => ("office", "Office Space"),
        Shop => ("shop", "Shop/Showroom"),
        Warehouse => ("warehouse", "Godown/Warehouse"),
        IndustrialBuilding => ("industrial", "Industrial Building"),
    }
}

impl PropertyType {
    pub fn class(&self) -> PropertyClass {
        match self {
            Self::Apartment
            | Self::IndependentHouse
            | Self::GatedCommunityVilla => PropertyClass::Residential,
            Self::Office
            | Self::Shop
            | Self::Warehouse
            | Self::IndustrialBuilding => PropertyClass::Commercial,
        }
    }

    pub fn options_for(class: PropertyClass) -> Vec<PropertyType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.class() == class)
            .collect()
    }
}

form_options! {
    pub enum BhkType {
        OneRk => ("1rk", "1 RK"),
        OneBhk => ("1bhk", "1 BHK"),
        TwoBhk => ("2bhk", "2 BHK"),
        ThreeBhk => ("3bhk", "3 BHK"),
        FourPlusBhk => ("4plus", "4+ BHK"),
    }
}

form_options! {
    pub enum Facing {
        North => ("north", "North"),
        South => ("south", "South"),
        East => ("east", "East"),
        West => ("west", "West"),
        NorthEast => ("north_east", "North-East"),
        NorthWest => ("north_west", "North-West"),
        SouthEast => ("south_east", "South-East"),
        SouthWest => ("south_west", "South-West"),
    }
}

form_options! {
    pub enum Furnishing {
        Full => ("full", "Fully Furnished"),
        Semi => ("semi", "Semi Furnished"),
        Unfurnished => ("none", "Unfurnished"),
    }
}

form_options! {
    pub enum Parking {
        Neither => ("none", "None"),
        Bike => ("bike", "Bike"),
        Car => ("car", "Car"),
        Both => ("both", "Bike and Car"),
    }
}

form_options! {
    pub enum PreferredTenants {
        Anyone => ("anyone", "Anyone"),
        Family => ("family", "Family"),
        Bachelors => ("bachelors", "Bachelors"),
        Company => ("company", "Company"),
    }
}

form_options! {
    pub enum WaterSupply {
        Corporation => ("corporation", "Corporation"),
        Borewell => ("borewell", "Borewell"),
        Both => ("both", "Corporation and Borewell"),
    }
}

form_options! {
    pub enum PgRoomKind {
        Single => ("single", "Single"),
        Double => ("double", "Double"),
        Triple => ("triple", "Triple"),
        Four => ("four", "Four"),
    }
}

form_options! {
    pub enum Gender {
        Male => ("male", "Male"),
        Female => ("female", "Female"),
        Any => ("any", "Anyone"),
    }
}

form_options! {
    pub enum Availability {
        Everyday => ("everyday", "Everyday (Mon-Sun)"),
        Weekday => ("weekday", "Weekdays (Mon-Fri)"),
        Weekend => ("weekend", "Weekends (Sat, Sun)"),
    }
}

form_options! {
    pub enum Amenity {
        Lift => ("lift", "Lift"),
        PowerBackup => ("power_backup", "Power Backup"),
        Security => ("security", "Security"),
        Gym => ("gym", "Gym"),
        SwimmingPool => ("swimming_pool", "Swimming Pool"),
        ClubHouse => ("club_house", "Club House"),
        Park => ("park", "Children Play Area"),
        GasPipeline => ("gas_pipeline", "Gas Pipeline"),
        InternetServices => ("internet", "Internet Services"),
        AirConditioner => ("ac", "Air Conditioner"),
        FireSafety => ("fire_safety", "Fire Safety"),
        VisitorParking => ("visitor_parking", "Visitor Parking"),
    }
}

form_options! {
    pub enum PgRule {
        NoSmoking => ("no_smoking", "No Smoking"),
        NoGuardians => ("no_guardians", "No Guardians Stay"),
        NoGirlsEntry => ("no_girls_entry", "No Girl's Entry"),
        NoBoysEntry => ("no_boys_entry", "No Boy's Entry"),
        NoDrinking => ("no_drinking", "No Drinking"),
        NoNonVeg => ("no_non_veg", "No Non-Veg"),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub property_type: Option<PropertyType>,
    pub bhk_type: Option<BhkType>,
    pub floor: Option<u32>,
    pub total_floors: Option<u32>,
    pub property_age_years: Option<u32>,
    pub facing: Option<Facing>,
    /// Built-up area in square feet.
    pub built_up_area: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalityDetails {
    pub city: String,
    pub locality: String,
    pub landmark: Option<String>,
    /// Filled in when the owner picks a place suggestion.
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RentalDetails {
    pub expected_rent: Option<Decimal>,
    pub expected_deposit: Option<Decimal>,
    pub rent_negotiable: bool,
    pub monthly_maintenance: Option<Decimal>,
    pub available_from: Option<Date>,
    pub preferred_tenants: Option<PreferredTenants>,
    pub furnishing: Option<Furnishing>,
    pub parking: Option<Parking>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResaleDetails {
    pub expected_price: Option<Decimal>,
    pub price_negotiable: bool,
    pub under_loan: bool,
    pub available_from: Option<Date>,
    pub furnishing: Option<Furnishing>,
    pub parking: Option<Parking>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgRoom {
    pub kind: PgRoomKind,
    pub rent: Option<Decimal>,
    pub deposit: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PgDetails {
    pub pg_name: String,
    pub rooms: Vec<PgRoom>,
    pub available_for: Option<Gender>,
    pub available_from: Option<Date>,
    pub food_included: bool,
    pub rules: Vec<PgRule>,
    pub gate_closing_time: Option<Time>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlatmateDetails {
    pub expected_rent: Option<Decimal>,
    pub expected_deposit: Option<Decimal>,
    pub available_from: Option<Date>,
    pub preferred_gender: Option<Gender>,
    pub furnishing: Option<Furnishing>,
    pub attached_bathroom: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Amenities {
    pub bathrooms: u32,
    pub balconies: u32,
    pub water_supply: Option<WaterSupply>,
    pub selected: Vec<Amenity>,
}

impl Amenities {
    pub fn has(&self, amenity: Amenity) -> bool {
        self.selected.contains(&amenity)
    }

    /// Add or remove an amenity, keeping the list free of repeats.
    pub fn toggle(&mut self, amenity: Amenity) {
        if let Some(pos) = self.selected.iter().position(|a| *a == amenity) {
            self.selected.remove(pos);
        } else {
            self.selected.push(amenity);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleDetails {
    pub availability: Option<Availability>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub wants_cleaning: bool,
    pub wants_painting: bool,
}

/// Everything an owner has entered so far. Sections are filled in as the
/// wizard advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub kind: ListingKind,
    pub class: PropertyClass,
    pub property: Option<PropertyDetails>,
    pub locality: Option<LocalityDetails>,
    pub rental: Option<RentalDetails>,
    pub resale: Option<ResaleDetails>,
    pub pg: Option<PgDetails>,
    pub flatmate: Option<FlatmateDetails>,
    pub amenities: Option<Amenities>,
    pub gallery: Option<GalleryPayload>,
    pub schedule: Option<ScheduleDetails>,
}

impl ListingDraft {
    pub fn new(kind: ListingKind, class: PropertyClass) -> Self {
        let class = if kind.supports_commercial() {
            class
        } else {
            PropertyClass::Residential
        };
        Self {
            kind,
            class,
            property: None,
            locality: None,
            rental: None,
            resale: None,
            pg: None,
            flatmate: None,
            amenities: None,
            gallery: None,
            schedule: None,
        }
    }
}

/// The section specific to each listing flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingTerms {
    Rent(RentalDetails),
    Resale(ResaleDetails),
    PgHostel(PgDetails),
    Flatmates(FlatmateDetails),
}

/// Final body posted when an owner submits a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSubmission {
    pub class: PropertyClass,
    /// Not collected for PG/Hostel listings.
    pub property: Option<PropertyDetails>,
    pub locality: LocalityDetails,
    pub terms: ListingTerms,
    pub amenities: Amenities,
    pub gallery: GalleryPayload,
    pub schedule: ScheduleDetails,
}

impl ListingSubmission {
    pub fn kind(&self) -> ListingKind {
        match self.terms {
            ListingTerms::Rent(_) => ListingKind::Rent,
            ListingTerms::Resale(_) => ListingKind::Resale,
            ListingTerms::PgHostel(_) => ListingKind::PgHostel,
            ListingTerms::Flatmates(_) => ListingKind::Flatmates,
        }
    }
}

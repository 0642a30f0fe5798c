//! Request and response records exchanged with clients and with the Bisnode API.
//!
//! Every upstream record derives `Default` and is decoded with `#[serde(default)]`,
//! so sparse upstream payloads never fail on a missing field. Fields also go through
//! [`null_as_default`], which gives an explicit `null` the same treatment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decodes `null` as the field type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metadata block the upstream attaches to every search envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub dataset: String,
    #[serde(deserialize_with = "null_as_default")]
    pub documentation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

// ---- directory -------------------------------------------------------------

pub const FREETEXT_FORM: &str = "Freetext";
/// Smart exact + phonetic matching.
pub const SEARCH_MODE_SMART_PHONETIC: u8 = 3;
pub const LISTING_TYPE_PERSON: u8 = 2;
pub const DIRECTORY_RESULT_LIMIT: u32 = 10;

/// Body of the upstream freetext directory search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorySearchRequest {
    #[serde(rename = "Form")]
    pub form: SearchForm,
    #[serde(rename = "Options")]
    pub options: SearchOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "Type")]
    pub form_type: String,
    #[serde(rename = "Searchstring")]
    pub search_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(rename = "SearchMode")]
    pub search_mode: u8,
    #[serde(rename = "OnlyFoundWords")]
    pub only_found_words: bool,
    #[serde(rename = "ListingType")]
    pub listing_type: u8,
    #[serde(rename = "ResultLimitSearch")]
    pub result_limit: u32,
}

impl DirectorySearchRequest {
    /// Person-only freetext lookup of a (sanitized) phone number.
    pub fn person_by_phone(search_string: impl Into<String>) -> Self {
        Self {
            form: SearchForm {
                form_type: FREETEXT_FORM.to_string(),
                search_string: search_string.into(),
            },
            options: SearchOptions {
                search_mode: SEARCH_MODE_SMART_PHONETIC,
                only_found_words: true,
                listing_type: LISTING_TYPE_PERSON,
                result_limit: DIRECTORY_RESULT_LIMIT,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySearchResponse {
    #[serde(rename = "Result", deserialize_with = "null_as_default")]
    pub result: Vec<DirectoryResult>,
    #[serde(rename = "Service", deserialize_with = "null_as_default")]
    pub service: ServiceInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryResult {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub result_type: String,
    #[serde(
        rename = "organizationnumber",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub organization_number: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub born: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub dead: String,
    #[serde(rename = "Age", deserialize_with = "null_as_default")]
    pub age: Age,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(
        rename = "firstname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub first_name: String,
    #[serde(
        rename = "middlename",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub middle_name: String,
    #[serde(
        rename = "lastname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub last_name: String,
    #[serde(
        rename = "streetname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub street_name: String,
    #[serde(
        rename = "houseno",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub house_no: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub entrance: String,
    #[serde(
        rename = "zipcode",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub zip_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub telephone: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub mobile: String,
    #[serde(rename = "Reservation", deserialize_with = "null_as_default")]
    pub reservation: Reservation,
    #[serde(
        rename = "Address",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub addresses: Vec<AddressRecord>,
    #[serde(
        rename = "Phone",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub phones: Vec<PhoneRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Age {
    #[serde(deserialize_with = "null_as_default")]
    pub year: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub month: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub day: u32,
}

/// Marketing reservations registered for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reservation {
    #[serde(rename = "directmail", deserialize_with = "null_as_default")]
    pub direct_mail: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub telemarketing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub humanitarian: bool,
}

// The upstream spells "acquired" without the c.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionDates {
    #[serde(rename = "firstaquired", deserialize_with = "null_as_default")]
    pub first_acquired: String,
    #[serde(rename = "lastaquired", deserialize_with = "null_as_default")]
    pub last_acquired: String,
    #[serde(rename = "informationchanged", deserialize_with = "null_as_default")]
    pub information_changed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub address_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(rename = "streetname", deserialize_with = "null_as_default")]
    pub street_name: String,
    #[serde(rename = "houseno", deserialize_with = "null_as_default")]
    pub house_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entrance: String,
    #[serde(rename = "zipcode", deserialize_with = "null_as_default")]
    pub zip_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(rename = "Date", deserialize_with = "null_as_default")]
    pub date: AcquisitionDates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub phone_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(rename = "Date", deserialize_with = "null_as_default")]
    pub date: AcquisitionDates,
}

// ---- motor vehicle ---------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorVehicleSearchResponse {
    #[serde(rename = "Result", deserialize_with = "null_as_default")]
    pub result: Vec<MotorVehicle>,
    #[serde(rename = "Service", deserialize_with = "null_as_default")]
    pub service: ServiceInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorVehicle {
    #[serde(rename = "regno", deserialize_with = "null_as_default")]
    pub reg_no: String,
    #[serde(rename = "personalplates", deserialize_with = "null_as_default")]
    pub personal_plates: String,
    #[serde(rename = "chassisno", deserialize_with = "null_as_default")]
    pub chassis_no: String,
    #[serde(rename = "regyear", deserialize_with = "null_as_default")]
    pub reg_year: String,
    #[serde(rename = "groupno", deserialize_with = "null_as_default")]
    pub group_no: i64,
    #[serde(rename = "modelyear", deserialize_with = "null_as_default")]
    pub model_year: String,
    #[serde(rename = "brandno", deserialize_with = "null_as_default")]
    pub brand_no: i64,
    #[serde(rename = "brandname", deserialize_with = "null_as_default")]
    pub brand_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(rename = "regdate", deserialize_with = "null_as_default")]
    pub reg_date: String,
    #[serde(rename = "organizationno", deserialize_with = "null_as_default")]
    pub organization_no: String,
    #[serde(rename = "reregdate", deserialize_with = "null_as_default")]
    pub rereg_date: String,
    #[serde(rename = "unregdate", deserialize_with = "null_as_default")]
    pub unreg_date: String,
    #[serde(rename = "scrapdate", deserialize_with = "null_as_default")]
    pub scrap_date: String,
    #[serde(rename = "finalscrapdate", deserialize_with = "null_as_default")]
    pub final_scrap_date: String,
    #[serde(rename = "lastinspectiondate", deserialize_with = "null_as_default")]
    pub last_inspection_date: String,
    #[serde(rename = "nextinspectiondate", deserialize_with = "null_as_default")]
    pub next_inspection_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "colortext", deserialize_with = "null_as_default")]
    pub color_text: String,
    #[serde(rename = "usedimport", deserialize_with = "null_as_default")]
    pub used_import: i64,
    #[serde(rename = "seatstotal", deserialize_with = "null_as_default")]
    pub seats_total: i64,
    #[serde(rename = "seatsfront", deserialize_with = "null_as_default")]
    pub seats_front: i64,
    #[serde(rename = "ownerregdate", deserialize_with = "null_as_default")]
    pub owner_reg_date: String,
    #[serde(rename = "ownerchangedate", deserialize_with = "null_as_default")]
    pub owner_change_date: String,
    #[serde(rename = "ownerunregdate", deserialize_with = "null_as_default")]
    pub owner_unreg_date: String,
    #[serde(rename = "platecolor", deserialize_with = "null_as_default")]
    pub plate_color: String,
    #[serde(rename = "regstatus", deserialize_with = "null_as_default")]
    pub reg_status: String,
    #[serde(rename = "numdoors", deserialize_with = "null_as_default")]
    pub num_doors: String,
    #[serde(rename = "natureofdriving", deserialize_with = "null_as_default")]
    pub nature_of_driving: String,
    #[serde(deserialize_with = "null_as_default")]
    pub supplement: String,

    #[serde(rename = "EngineAndTransmission", deserialize_with = "null_as_default")]
    pub engine_and_transmission: EngineAndTransmission,
    #[serde(rename = "AxleTiresAndRims", deserialize_with = "null_as_default")]
    pub axle_tires_and_rims: AxleTiresAndRims,
    #[serde(rename = "WeightsAndMeasures", deserialize_with = "null_as_default")]
    pub weights_and_measures: WeightsAndMeasures,
    #[serde(rename = "EU", deserialize_with = "null_as_default")]
    pub eu: EuApproval,
    #[serde(rename = "Owner", deserialize_with = "null_as_default")]
    pub owner: Owner,
    #[serde(rename = "CoOwner", deserialize_with = "null_as_default")]
    pub co_owner: Owner,
    #[serde(rename = "LeasingUser", deserialize_with = "null_as_default")]
    pub leasing_user: Owner,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineAndTransmission {
    #[serde(deserialize_with = "null_as_default")]
    pub transmission: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fuel: String,
    #[serde(rename = "fueltext", deserialize_with = "null_as_default")]
    pub fuel_text: String,
    #[serde(rename = "enginevolume", deserialize_with = "null_as_default")]
    pub engine_volume: String,
    #[serde(rename = "enginepower", deserialize_with = "null_as_default")]
    pub engine_power: String,
    #[serde(rename = "motorcode", deserialize_with = "null_as_default")]
    pub motor_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hybrid: String,
    #[serde(rename = "hybridcat", deserialize_with = "null_as_default")]
    pub hybrid_cat: String,
}

/// Per-axle tyre and rim data; the third axle columns are only present on heavier vehicles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxleTiresAndRims {
    #[serde(rename = "tyredim1", deserialize_with = "null_as_default")]
    pub tyre_dim1: String,
    #[serde(rename = "tyredim2", deserialize_with = "null_as_default")]
    pub tyre_dim2: String,
    #[serde(
        rename = "tyredim3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tyre_dim3: String,
    #[serde(rename = "tyreloadindex1", deserialize_with = "null_as_default")]
    pub tyre_load_index1: String,
    #[serde(rename = "tyreloadindex2", deserialize_with = "null_as_default")]
    pub tyre_load_index2: String,
    #[serde(
        rename = "tyreloadindex3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tyre_load_index3: String,
    #[serde(rename = "tyrespeedindex1", deserialize_with = "null_as_default")]
    pub tyre_speed_index1: String,
    #[serde(rename = "tyrespeedindex2", deserialize_with = "null_as_default")]
    pub tyre_speed_index2: String,
    #[serde(
        rename = "tyrespeedindex3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tyre_speed_index3: String,
    #[serde(rename = "bimoffset1", deserialize_with = "null_as_default")]
    pub bim_offset1: String,
    #[serde(rename = "bimoffset2", deserialize_with = "null_as_default")]
    pub bim_offset2: String,
    #[serde(
        rename = "bimoffset3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub bim_offset3: String,
    #[serde(
        rename = "axlespread1",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub axle_spread1: String,
    #[serde(
        rename = "axlespread2",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub axle_spread2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub axles: i64,
    #[serde(rename = "axleoperation", deserialize_with = "null_as_default")]
    pub axle_operation: i64,
    #[serde(rename = "rimdim1", deserialize_with = "null_as_default")]
    pub rim_dim1: String,
    #[serde(rename = "rimdim2", deserialize_with = "null_as_default")]
    pub rim_dim2: String,
    #[serde(
        rename = "rimdim3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub rim_dim3: String,
    #[serde(rename = "trackwideaxle1", deserialize_with = "null_as_default")]
    pub track_wide_axle1: String,
    #[serde(rename = "trackwideaxle2", deserialize_with = "null_as_default")]
    pub track_wide_axle2: String,
    #[serde(
        rename = "trackwideaxle3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub track_wide_axle3: String,
    #[serde(
        rename = "airsusp1",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub air_susp1: String,
    #[serde(
        rename = "airsusp2",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub air_susp2: String,
    #[serde(
        rename = "airsusp3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub air_susp3: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsAndMeasures {
    #[serde(rename = "totalweight", deserialize_with = "null_as_default")]
    pub total_weight: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(rename = "axleweightlimit1", deserialize_with = "null_as_default")]
    pub axle_weight_limit1: String,
    #[serde(rename = "axleweightlimit2", deserialize_with = "null_as_default")]
    pub axle_weight_limit2: String,
    #[serde(
        rename = "axleweightlimit3",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub axle_weight_limit3: String,
    #[serde(rename = "roofweightlimit", deserialize_with = "null_as_default")]
    pub roof_weight_limit: i64,
    #[serde(rename = "curbweight", deserialize_with = "null_as_default")]
    pub curb_weight: i64,
    #[serde(rename = "trailerweightwithbreaks", deserialize_with = "null_as_default")]
    pub trailer_weight_with_brakes: i64,
    #[serde(rename = "trailerweightwithoutbreaks", deserialize_with = "null_as_default")]
    pub trailer_weight_without_brakes: i64,
    #[serde(rename = "couplingload", deserialize_with = "null_as_default")]
    pub coupling_load: i64,
    #[serde(rename = "maxweight", deserialize_with = "null_as_default")]
    pub max_weight: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub length: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(rename = "standnoice", deserialize_with = "null_as_default")]
    pub stand_noise: String,
    #[serde(rename = "particlefilter", deserialize_with = "null_as_default")]
    pub particle_filter: i64,
    #[serde(
        rename = "nox_emissions_gprkwh",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub nox_emissions_g_per_kwh: String,
    #[serde(
        rename = "nox_emissions_mgprkh",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub nox_emissions_mg_per_km: String,
    #[serde(
        rename = "particleemissions",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub particle_emissions: String,
    #[serde(rename = "measurementmethod", deserialize_with = "null_as_default")]
    pub measurement_method: String,
    #[serde(rename = "co2_emission", deserialize_with = "null_as_default")]
    pub co2_emission: String,
    #[serde(rename = "fueleconomy", deserialize_with = "null_as_default")]
    pub fuel_economy: String,
}

/// EU type-approval identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuApproval {
    #[serde(rename = "inusecomplianceno", deserialize_with = "null_as_default")]
    pub in_use_compliance_no: String,
    #[serde(rename = "eu_mainno", deserialize_with = "null_as_default")]
    pub eu_main_no: String,
    #[serde(rename = "eu_typecode", deserialize_with = "null_as_default")]
    pub eu_type_code: String,
    #[serde(rename = "typevariant", deserialize_with = "null_as_default")]
    pub type_variant: String,
    #[serde(rename = "typeversion", deserialize_with = "null_as_default")]
    pub type_version: String,
    #[serde(rename = "euronormnew", deserialize_with = "null_as_default")]
    pub euronorm_new: String,
    #[serde(rename = "tekcode", deserialize_with = "null_as_default")]
    pub tek_code: String,
    #[serde(rename = "tekundercode", deserialize_with = "null_as_default")]
    pub tek_undercode: String,
}

/// Owner, co-owner or leasing user of a vehicle. Either `organization_number`
/// or `born` is filled depending on whether the holder is a company or a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    #[serde(rename = "organizationnumber", deserialize_with = "null_as_default")]
    pub organization_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub born: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zipcode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(
        rename = "municip",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub municipality: String,
}

// ---- legacy person lookup --------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub middle_name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub national_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub mobile_number: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub addresses: Vec<PersonAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<PersonPhone>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub email_addresses: Vec<PersonEmail>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub employment_details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonAddress {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub street_address: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub country: String,
    /// HOME, WORK, ...
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub address_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonPhone {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub number: String,
    /// MOBILE, HOME, WORK, ...
    #[serde(
        rename = "type",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub phone_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonEmail {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(
        rename = "type",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub email_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,
}

// ---- inbound search requests -----------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonSearchRequest {
    pub mobile_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationSearchRequest {
    pub organization_number: String,
}

/// Organization lookups also accept the short `orgNo` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationSearchQuery {
    pub org_no: String,
    pub organization_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotorVehicleSearchRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vin: String,
}

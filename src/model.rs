use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub report_number: Option<String>,
    pub report_date: Option<String>,
    pub protocol_number: Option<String>,
    pub report_type: Option<String>,
    pub description: Option<String>,
    pub record_type: Option<String>,
    pub facility_code: Option<String>,
    pub tracking_number: Option<String>,
    pub facility_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub gender: Option<String>,
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub code: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub diploma_number: Option<String>,
    pub registration_number: Option<String>,
    pub specialty: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub code: String,
    pub name: String,
    pub form: String,
    pub treatment_scheme: String,
    pub quantity: String,
    pub content: Option<String>,
    pub added_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalValue {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub note: Option<String>,
    pub added_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalReport {
    pub report_info: ReportInfo,
    #[serde(serialize_with = "serialize_patient_info")]
    pub patient_info: Option<PatientInfo>,
    pub notes: Vec<Note>,
    pub diagnoses: Vec<Diagnosis>,
    pub doctors: Vec<Doctor>,
    pub medications: Vec<Medication>,
    pub additional_values: Vec<AdditionalValue>,
}

impl MedicalReport {
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).context("failed to serialize medical report")
    }
}

fn serialize_patient_info<S>(
    value: &Option<PatientInfo>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(info) => info.serialize(serializer),
        None => PatientInfo::default().serialize(serializer),
    }
}

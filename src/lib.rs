pub mod model;
pub mod parser;

pub use model::{
    AdditionalValue, Diagnosis, Doctor, MedicalReport, Medication, Note, PatientInfo, ReportInfo,
};
pub use parser::{ReportParser, SAMPLE_REPORT, parse_report};

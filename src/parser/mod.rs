use anyhow::{Context, Result};
use tracing::debug;

use crate::model::MedicalReport;

mod additional_values;
mod diagnoses;
mod doctors;
mod heuristics;
mod medications;
mod normalize;
mod notes;
mod patient_info;
mod patterns;
mod report_info;
mod section;

pub use normalize::normalize_lines;

use additional_values::extract_additional_values;
use diagnoses::extract_diagnoses;
use doctors::extract_doctors;
use medications::extract_medications;
use notes::extract_notes;
use patient_info::extract_patient_info;
use patterns::ReportPatterns;
use report_info::extract_report_info;

const REPORT_INFO_HEADER: &str = "Rapor Bilgileri";
const NOTES_HEADER: &str = "Açıklamalar";
const NOTES_HEADER_COLUMN: &str = "Eklenme Zamanı";
const DIAGNOSIS_HEADER: &str = "Tanı Bilgileri";
const DOCTOR_HEADER: &str = "Doktor Bilgileri";
const MEDICATION_HEADER: &str = "Rapor Etkin Madde Bilgileri";
const ADDITIONAL_VALUE_HEADER: &str = "Rapor İlave Değer Bilgileri";
const GENDER_MARKER: &str = "Cinsiyet";

pub const SAMPLE_REPORT: &str = "
Rapor Bilgileri
 Rapor Numarası () :  79591   Rapor Tarihi () :  18/10/2023
 Protokol No :  85741127    Düzenleme Türü :  Uzman Hekim Raporu
 Açıklama :     Kayıt Şekli  :  Elektronik İmzalı Rapor
 Tesis Kodu (*)  :  11330005    Rapor Takip No  :  434270698
 Tesis Ünvanı  :  MERSIN TOROS DEVLET HASTANESİ(S)
 Kullanıcı Adı  :  MUSTAFA AKCA
Açıklamalar Eklenme Zamanı Not
12/09/2019 TARİHLİ RAPORDA LDL: 97 idame tedavi 18/10/2023 14:30
MONOTERAPİ İLE KAN BASINCI YETERLİ ORANDA KONTROL ALTINA ALINAMAMIŞTIR 18/10/2023 14:30

Tanı Bilgileri
Tanı   Başlangıç Bitiş
04.02 - Koroner arter hastaligi(I20)(I21)(I25)(Z95.1)(Z95.5-Z95.9)
I25.1 ATEROSKLEROTİK KALP HASTALIĞI
  18/10/2023 16/10/2025
04.05 - Arteriyel Hipertansiyon(I10 -I13)(I15)
I10 ESANSİYEL (PRİMER) HİPERTANSİYON
  18/10/2023 16/10/2025
04.08 - Hiperkolesterolemi, Hiperlipidemi(E78)
E78.4 HİPERLİPİDEMİ, DİĞER
  18/10/2023 16/10/2025

Doktor Bilgileri
Dr. Diploma No Dip. Tescil No Branş Adı Soyadı
12324 144070 Kardiyoloji ABDULLAH ZARARSIZ

Rapor Etkin Madde Bilgileri
Kodu Adı Form Tedavi Şema Adet / Miktar İçerik Mik. Eklenme Zamanı
SGKESD ATORVASTATIN KALSIYUM Ağızdan katı Günde 1 x 1.0 Adet   18/10/2023 14:30
SGKETJ BENIDIPIN HCL Ağızdan katı Günde 1 x 1.0 Adet   18/10/2023 14:30
SGKERW ASETILSALISILIK ASIT Ağızdan katı Günde 1 x 1.0 Adet   18/10/2023 14:30
SGKFDX METOPROLOL Ağızdan katı Günde 1 x 1.0 Adet   18/10/2023 14:30
SGKFRU TELMISARTAN+HIDROKLOROTIAZID Ağızdan katı Günde 1 x 1.0 Adet   18/10/2023 14:30
";

#[derive(Debug)]
pub struct ReportParser {
    patterns: ReportPatterns,
}

impl ReportParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: ReportPatterns::new()?,
        })
    }

    pub fn parse(&self, text: &str) -> MedicalReport {
        let lines = normalize_lines(text);

        let report = MedicalReport {
            report_info: extract_report_info(&lines, &self.patterns),
            patient_info: extract_patient_info(&lines, &self.patterns),
            notes: extract_notes(&lines, &self.patterns),
            diagnoses: extract_diagnoses(&lines, &self.patterns),
            doctors: extract_doctors(&lines),
            medications: extract_medications(&lines, &self.patterns),
            additional_values: extract_additional_values(&lines, &self.patterns),
        };

        debug!(
            lines = lines.len(),
            report_number = report.report_info.report_number.as_deref().unwrap_or_default(),
            has_patient_info = report.patient_info.is_some(),
            notes = report.notes.len(),
            diagnoses = report.diagnoses.len(),
            doctors = report.doctors.len(),
            medications = report.medications.len(),
            additional_values = report.additional_values.len(),
            "assembled medical report"
        );

        report
    }
}

pub fn parse_report(text: &str) -> Result<MedicalReport> {
    let parser = ReportParser::new().context("failed to parse medical report")?;
    Ok(parser.parse(text))
}

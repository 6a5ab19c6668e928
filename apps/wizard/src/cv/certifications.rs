use super::items;
use super::EditError;
use crate::models::resume::{Certification, CertificationField};

const KIND: &str = "certification";

pub fn create_certification() -> Certification {
    Certification::default()
}

pub fn add_certification(certifications: &mut Vec<Certification>) -> usize {
    items::add_item(certifications, create_certification(), None)
}

pub fn delete_certification(
    certifications: &mut Vec<Certification>,
    index: usize,
) -> Result<(), EditError> {
    items::delete_item(KIND, certifications, index, None).map(|_| ())
}

pub fn update_certification(
    certifications: &mut [Certification],
    index: usize,
    field: CertificationField,
    value: String,
) -> Result<(), EditError> {
    items::update_item(KIND, certifications, index, |cert| {
        let slot = match field {
            CertificationField::Name => &mut cert.name,
            CertificationField::Authority => &mut cert.authority,
            CertificationField::StartDate => &mut cert.start_date,
            CertificationField::EndDate => &mut cert.end_date,
            CertificationField::Url => &mut cert.url,
        };
        *slot = value;
    })
}

use crate::models::resume::{Profile, ProfileField};

/// Picks the `String` behind a `ProfileField`, borrowed as `(&)` or `(&mut)`.
macro_rules! profile_slot {
    (($($borrow:tt)+) $profile:expr, $field:expr) => {
        match $field {
            ProfileField::FirstName => $($borrow)+ $profile.first_name,
            ProfileField::LastName => $($borrow)+ $profile.last_name,
            ProfileField::MaidenName => $($borrow)+ $profile.maiden_name,
            ProfileField::Headline => $($borrow)+ $profile.headline,
            ProfileField::Summary => $($borrow)+ $profile.summary,
            ProfileField::Address => $($borrow)+ $profile.address,
            ProfileField::GeoLocation => $($borrow)+ $profile.geo_location,
            ProfileField::Email => $($borrow)+ $profile.email,
            ProfileField::Phone => $($borrow)+ $profile.phone,
            ProfileField::BirthDate => $($borrow)+ $profile.birth_date,
        }
    };
}

pub fn update_profile(profile: &mut Profile, field: ProfileField, value: String) {
    let slot: &mut String = profile_slot!((&mut) profile, field);
    *slot = value;
}

/// Returns the field, or `default` when it is blank.
pub fn profile_field<'a>(profile: &'a Profile, field: ProfileField, default: &'a str) -> &'a str {
    let value: &String = profile_slot!((&) profile, field);
    if value.is_empty() {
        default
    } else {
        value.as_str()
    }
}

//! Wires the step machine to the services: what "next" means on each step.

use tracing::{debug, info};

use crate::cv::profile::profile_field;
use crate::errors::AppError;
use crate::models::resume::ProfileField;
use crate::services::{parse, preview};
use crate::state::AppState;
use crate::store::{ContactInfo, StateField, Store};
use crate::workflow::step_flow::initialize_config_from_data;
use crate::workflow::stepper::{go_to_next_step, Step, Transition};
use crate::workflow::validation::validate_upload;

/// Moves forward from the current step.
///
/// Leaving Upload requires the three CSVs and parses them unless data is
/// already there. Configure always passes; reaching Preview renders the PDF.
pub async fn advance(app: &AppState) -> Transition {
    let from = app.store.lock().step();
    let transition = go_to_next_step(&app.store, from, |step| validate_step(app, step)).await;

    if transition == Transition::Advanced(Step::Preview) {
        // a failed render already left its error banner
        if let Err(e) = preview::generate_preview(&app.store, app.backend.as_ref()).await {
            debug!("Preview after step change failed: {e}");
        }
    }
    transition
}

async fn validate_step(app: &AppState, step: Step) -> bool {
    match step {
        Step::Upload => {
            {
                let mut store = app.store.lock();
                if let Err(err) = validate_upload(store.files()) {
                    store.show_error(err.to_string());
                    return false;
                }
                if store.parsed_data().is_some() {
                    return true;
                }
            }
            parse_data_for_configure(app).await.is_ok()
        }
        Step::Configure => true,
        Step::Preview => false,
    }
}

/// Parses the upload and seeds the configure step from it: config toggles and
/// visibility from the data, contact fields from the profile where it has them.
pub async fn parse_data_for_configure(app: &AppState) -> Result<(), AppError> {
    let parsed = parse::parse_linkedin_data(&app.store, app.backend.as_ref()).await?;

    let mut store = app.store.lock();
    let mut config = store.config().clone();
    initialize_config_from_data(&parsed, &mut config);

    let current = store.contact();
    let profile = &parsed.profile;
    let contact = ContactInfo {
        email: profile_field(profile, ProfileField::Email, &current.email).to_string(),
        phone: profile_field(profile, ProfileField::Phone, &current.phone).to_string(),
        address: profile_field(profile, ProfileField::Address, &current.address).to_string(),
    };

    info!(
        positions = parsed.positions.len(),
        education = parsed.education.len(),
        skills = parsed.skills.len(),
        "LinkedIn data parsed"
    );
    store.set_parsed_data(Some(parsed));
    store.set_config(config);
    store.set_contact(contact);
    Ok(())
}

/// Starts over: fresh store, step 1, default config, no banner.
pub fn reset_app(app: &AppState) {
    let mut store = app.store.lock();
    store.reset();
    watch_session(&mut store);
    info!("Wizard reset");
}

/// Debug tracing of step and file changes. A reset drops every observer, so
/// this runs again after each one.
pub fn watch_session(store: &mut Store) {
    store.observe(StateField::CurrentStep, |s| {
        debug!(step = s.current_step.number(), "step changed");
    });
    store.observe(StateField::SelectedFiles, |s| {
        debug!(files = s.selected_files.len(), "file selection changed");
    });
}

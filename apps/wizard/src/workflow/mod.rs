// Wizard flow: step machine, upload checks, config seeding from parsed data,
// and the payload mapping sent to the PDF renderer.

pub mod data_mapper;
pub mod step_flow;
pub mod stepper;
pub mod validation;
pub mod wizard;

//! Wizard session store.
//!
//! One `Store` holds the whole wizard state. Every update names the fields it
//! touched: per-field observers run synchronously with the new state, and a
//! `StoreEvent` is broadcast for anyone streaming changes (the SSE route).
//!
//! Observers run while the store lock is held and must not lock it again.

pub mod notifications;
pub mod state;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::models::config::{ConfigPatch, ResumeConfig};
use crate::models::files::UploadedFile;
use crate::models::resume::ParsedData;
use crate::workflow::stepper::Step;

pub use state::{ContactInfo, StateSnapshot, WizardState};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateField {
    SelectedFiles,
    ParsedData,
    PhotoFile,
    CurrentConfig,
    CurrentPdf,
    CurrentStep,
    IsProcessingStep,
    Contact,
    Notification,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEventKind {
    Change { fields: Vec<StateField> },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreEvent {
    pub revision: u64,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: StoreEventKind,
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("No file at index {index} ({len} selected)")]
    NoSuchFile { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

type Observer = Arc<dyn Fn(&WizardState) + Send + Sync>;

pub struct Store {
    state: WizardState,
    observers: HashMap<StateField, Vec<(ObserverId, Observer)>>,
    events: broadcast::Sender<StoreEvent>,
    revision: u64,
    generation: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: WizardState::default(),
            observers: HashMap::new(),
            events,
            revision: 0,
            generation: 0,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumped by every reset. Async work captures it before awaiting the
    /// backend and drops its result if a reset happened meanwhile.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            notification: self.current_notification().cloned(),
            ..self.state.snapshot(self.revision)
        }
    }

    /// Applies `mutate` and notifies observers of each field in `fields`.
    pub fn update<R>(
        &mut self,
        fields: &[StateField],
        mutate: impl FnOnce(&mut WizardState) -> R,
    ) -> R {
        let result = mutate(&mut self.state);
        self.notify(fields);
        result
    }

    pub fn observe(
        &mut self,
        field: StateField,
        callback: impl Fn(&WizardState) + Send + Sync + 'static,
    ) -> ObserverId {
        let id = ObserverId(Uuid::new_v4());
        self.observers
            .entry(field)
            .or_default()
            .push((id, Arc::new(callback)));
        id
    }

    /// Returns false when the observer was not registered (or already removed).
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let mut removed = false;
        for callbacks in self.observers.values_mut() {
            let before = callbacks.len();
            callbacks.retain(|(observer_id, _)| *observer_id != id);
            removed |= callbacks.len() != before;
        }
        removed
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Back to a fresh session: default state, no observers.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        self.observers.clear();
        self.revision += 1;
        self.generation += 1;
        debug!(revision = self.revision, "store reset");
        self.emit(StoreEventKind::Reset);
    }

    fn notify(&mut self, fields: &[StateField]) {
        self.revision += 1;
        for field in fields {
            if let Some(callbacks) = self.observers.get(field) {
                for (_, callback) in callbacks {
                    callback(&self.state);
                }
            }
        }
        self.emit(StoreEventKind::Change {
            fields: fields.to_vec(),
        });
    }

    fn emit(&self, kind: StoreEventKind) {
        // No subscribers is normal; the send error only reports that.
        let _ = self.events.send(StoreEvent {
            revision: self.revision,
            at: Utc::now(),
            kind,
        });
    }

    // ── Files ───────────────────────────────────────────────────────────────

    pub fn files(&self) -> &[UploadedFile] {
        &self.state.selected_files
    }

    pub fn set_files(&mut self, files: Vec<UploadedFile>) {
        self.update(&[StateField::SelectedFiles], |s| s.selected_files = files);
    }

    pub fn remove_file(&mut self, index: usize) -> Result<UploadedFile, StoreError> {
        let len = self.state.selected_files.len();
        if index >= len {
            return Err(StoreError::NoSuchFile { index, len });
        }
        Ok(self.update(&[StateField::SelectedFiles], |s| {
            s.selected_files.remove(index)
        }))
    }

    // ── Parsed data ─────────────────────────────────────────────────────────

    pub fn parsed_data(&self) -> Option<&ParsedData> {
        self.state.parsed_data.as_ref()
    }

    pub fn set_parsed_data(&mut self, data: Option<ParsedData>) {
        self.update(&[StateField::ParsedData], |s| s.parsed_data = data);
    }

    // ── Photo ───────────────────────────────────────────────────────────────

    pub fn photo(&self) -> Option<&UploadedFile> {
        self.state.photo_file.as_ref()
    }

    pub fn set_photo(&mut self, photo: UploadedFile) {
        self.update(&[StateField::PhotoFile], |s| s.photo_file = Some(photo));
    }

    pub fn remove_photo(&mut self) {
        self.update(&[StateField::PhotoFile], |s| s.photo_file = None);
    }

    // ── Config ──────────────────────────────────────────────────────────────

    pub fn config(&self) -> &ResumeConfig {
        &self.state.current_config
    }

    pub fn set_config(&mut self, config: ResumeConfig) {
        self.update(&[StateField::CurrentConfig], |s| s.current_config = config);
    }

    /// Shallow merge: each key present in the patch replaces the current value.
    pub fn update_config(&mut self, patch: ConfigPatch) {
        self.update(&[StateField::CurrentConfig], |s| {
            let config = &mut s.current_config;
            if let Some(sections) = patch.sections {
                config.sections = sections;
            }
            if let Some(order) = patch.section_order {
                config.section_order = order;
            }
            if let Some(visible) = patch.experience_visible {
                config.experience_visible = visible;
            }
            if let Some(visible) = patch.education_visible {
                config.education_visible = visible;
            }
            if let Some(selected) = patch.skills_selected {
                config.skills_selected = selected;
            }
            if let Some(template) = patch.template {
                config.template = template;
            }
            if let Some(colors) = patch.colors {
                config.colors = colors;
            }
        });
    }

    // ── PDF ─────────────────────────────────────────────────────────────────

    pub fn pdf(&self) -> Option<&Bytes> {
        self.state.current_pdf.as_ref()
    }

    pub fn set_pdf(&mut self, pdf: Option<Bytes>) {
        self.update(&[StateField::CurrentPdf], |s| s.current_pdf = pdf);
    }

    // ── Step & processing flag ──────────────────────────────────────────────

    pub fn step(&self) -> Step {
        self.state.current_step
    }

    pub fn set_step(&mut self, step: Step) {
        self.update(&[StateField::CurrentStep], |s| s.current_step = step);
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing_step
    }

    pub fn set_processing(&mut self, processing: bool) {
        self.update(&[StateField::IsProcessingStep], |s| {
            s.is_processing_step = processing;
        });
    }

    // ── Contact ─────────────────────────────────────────────────────────────

    pub fn contact(&self) -> &ContactInfo {
        &self.state.contact
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.update(&[StateField::Contact], |s| s.contact = contact);
    }

    // ── Loading ─────────────────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        self.state.loading > 0
    }

    fn begin_loading(&mut self) {
        self.update(&[StateField::Loading], |s| s.loading += 1);
    }

    fn end_loading(&mut self) {
        self.update(&[StateField::Loading], |s| {
            s.loading = s.loading.saturating_sub(1);
        });
    }
}

/// Cloneable handle to the one store of this process.
#[derive(Clone, Default)]
pub struct SharedStore(Arc<Mutex<Store>>);

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never hold the guard across an `.await`.
    pub fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raises the loading indicator until the returned guard is dropped.
    pub fn loading(&self) -> LoadingGuard {
        let generation = {
            let mut store = self.lock();
            store.begin_loading();
            store.generation()
        };
        LoadingGuard {
            store: self.clone(),
            generation,
        }
    }
}

pub struct LoadingGuard {
    store: SharedStore,
    generation: u64,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut store = self.store.lock();
        // a reset already cleared the counter this guard contributed to
        if store.generation() == self.generation {
            store.end_loading();
        }
    }
}

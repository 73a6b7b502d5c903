//! Authoritative in-memory garden state with bounded undo and durable persistence.

pub mod history;
pub mod transfer;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DEFAULT_STORAGE_KEY;
use crate::data::zones::{is_supported_zone, DEFAULT_ZONE};
use crate::data::PlantCatalog;
use crate::error::{GardenError, Result};
use crate::logic::{
    calendar::{planting_calendar, CalendarEvent},
    care::{care_summary, CareSummary},
    placement::{suggest_placements, CellSuggestion},
    relationships::{analyze_relationships, HarmonyReport},
    rotation::{self, RotationSuggestion, RotationWarning},
};
use crate::models::garden::{
    is_valid_grid_size, Garden, JournalEntry, PestIssue, PlacedPlant, Severity, Stage,
    DEFAULT_GRID_SIZE,
};
use crate::models::plant::SoilType;
use crate::models::reminder::{Notification, NotificationKind, Reminder};
use crate::storage::{MemoryStorage, Storage};

use history::UndoHistory;
use transfer::{decode_share_payload, extract_share_payload, parse_export, GardenExport};

pub const DEFAULT_GARDEN_NAME: &str = "My Garden";

fn default_zone() -> u8 {
    DEFAULT_ZONE
}

/// Everything written to durable storage. Derived views and undo history are rebuilt
/// at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub gardens: Vec<Garden>,
    pub active_garden_id: String,
    #[serde(default)]
    pub has_visited: bool,
    #[serde(default = "default_zone")]
    pub zone: u8,
    #[serde(default)]
    pub soil_type: SoilType,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl Default for PersistedState {
    fn default() -> Self {
        let garden = Garden::new(DEFAULT_GARDEN_NAME, DEFAULT_GRID_SIZE);
        Self {
            active_garden_id: garden.id.clone(),
            gardens: vec![garden],
            has_visited: false,
            zone: DEFAULT_ZONE,
            soil_type: SoilType::default(),
            notifications: Vec::new(),
            reminders: Vec::new(),
        }
    }
}

impl PersistedState {
    /// Repairs a loaded snapshot so that at least one garden exists and the active id
    /// points at one of them.
    fn normalize(mut self) -> Self {
        if self.gardens.is_empty() {
            log::warn!("Persisted state has no gardens, creating '{DEFAULT_GARDEN_NAME}'");
            let garden = Garden::new(DEFAULT_GARDEN_NAME, DEFAULT_GRID_SIZE);
            self.active_garden_id = garden.id.clone();
            self.gardens.push(garden);
        }
        if !self.gardens.iter().any(|g| g.id == self.active_garden_id) {
            self.active_garden_id = self.gardens[0].id.clone();
        }
        if !is_supported_zone(self.zone) {
            self.zone = DEFAULT_ZONE;
        }
        self
    }
}

/// Single-writer garden state. Every mutation goes through a method here and is
/// persisted before it returns.
pub struct GardenStore {
    storage: Box<dyn Storage>,
    key: String,
    catalog: Arc<PlantCatalog>,
    state: PersistedState,
    history: UndoHistory<Vec<PlacedPlant>>,
}

impl GardenStore {
    /// Loads the snapshot stored under `key`, falling back to a fresh state when it is
    /// missing or unreadable.
    pub fn load(storage: Box<dyn Storage>, key: impl Into<String>, catalog: Arc<PlantCatalog>) -> Self {
        let key = key.into();
        let state = match storage.load(&key) {
            Ok(Some(blob)) => match serde_json::from_str::<PersistedState>(&blob) {
                Ok(state) => {
                    log::info!("Loaded {} garden(s) from '{key}'", state.gardens.len());
                    state.normalize()
                }
                Err(e) => {
                    log::error!("Persisted state under '{key}' is corrupt, starting fresh: {e}");
                    PersistedState::default()
                }
            },
            Ok(None) => {
                log::info!("No persisted state under '{key}', starting fresh");
                PersistedState::default()
            }
            Err(e) => {
                log::error!("Failed to read persisted state under '{key}': {e}");
                PersistedState::default()
            }
        };

        let mut store = Self {
            storage,
            key,
            catalog,
            history: UndoHistory::new(Vec::new()),
            state,
        };
        store.reset_history();
        store
    }

    /// Store backed by process memory only.
    pub fn in_memory(catalog: Arc<PlantCatalog>) -> Self {
        Self::load(Box::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY, catalog)
    }

    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.state) {
            Ok(blob) => blob,
            Err(e) => {
                log::error!("Failed to serialize garden state: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.save(&self.key, &blob) {
            log::error!("Failed to persist garden state under '{}': {e}", self.key);
        }
    }

    fn reset_history(&mut self) {
        let plants = self.active_garden().plants.clone();
        self.history.reset(plants);
    }

    fn active_index(&self) -> usize {
        self.state
            .gardens
            .iter()
            .position(|g| g.id == self.state.active_garden_id)
            .unwrap_or(0)
    }

    pub fn active_garden(&self) -> &Garden {
        &self.state.gardens[self.active_index()]
    }

    fn active_garden_mut(&mut self) -> &mut Garden {
        let index = self.active_index();
        &mut self.state.gardens[index]
    }

    pub fn placed_plants(&self) -> &[PlacedPlant] {
        &self.active_garden().plants
    }

    // ---------------------------------------------------------------------
    // Placed plants and undo
    // ---------------------------------------------------------------------

    /// Replaces the active garden's plants and records the new list for undo.
    pub fn set_placed_plants(&mut self, plants: Vec<PlacedPlant>) {
        self.history.push(plants.clone());
        self.apply_plants(plants);
    }

    /// Snapshots taken before a resize may hold plants outside the current grid; those
    /// are left out.
    fn apply_plants(&mut self, mut plants: Vec<PlacedPlant>) {
        let garden = self.active_garden_mut();
        plants.retain(|p| garden.in_bounds(p.x, p.y));
        garden.plants = plants;
        garden.touch();
        self.persist();
    }

    pub fn undo(&mut self) -> bool {
        let Some(plants) = self.history.undo().cloned() else {
            return false;
        };
        self.apply_plants(plants);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(plants) = self.history.redo().cloned() else {
            return false;
        };
        self.apply_plants(plants);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Puts `plant_id` at (x, y), replacing whatever grew there.
    pub fn place_plant(&mut self, plant_id: &str, x: u32, y: u32) -> Result<PlacedPlant> {
        if !self.catalog.contains(plant_id) {
            return Err(GardenError::UnknownPlant(plant_id.to_string()));
        }
        let garden = self.active_garden();
        if !garden.in_bounds(x, y) {
            return Err(GardenError::OutOfBounds {
                x,
                y,
                size: garden.size,
            });
        }

        let placed = PlacedPlant::new(plant_id, x, y);
        let mut plants: Vec<PlacedPlant> = garden
            .plants
            .iter()
            .filter(|p| !p.is_at(x, y))
            .cloned()
            .collect();
        plants.push(placed.clone());
        self.set_placed_plants(plants);
        log::debug!("Placed {plant_id} at ({x}, {y})");
        Ok(placed)
    }

    /// Returns whether a plant was removed.
    pub fn remove_plant(&mut self, x: u32, y: u32) -> bool {
        let garden = self.active_garden();
        if garden.plant_at(x, y).is_none() {
            return false;
        }
        let plants = garden
            .plants
            .iter()
            .filter(|p| !p.is_at(x, y))
            .cloned()
            .collect();
        self.set_placed_plants(plants);
        true
    }

    /// Advances the growth stage of the plant at (x, y); `None` for an empty cell.
    pub fn cycle_stage(&mut self, x: u32, y: u32) -> Option<Stage> {
        let mut plants = self.active_garden().plants.clone();
        let placed = plants.iter_mut().find(|p| p.is_at(x, y))?;
        placed.stage = placed.stage.next();
        let stage = placed.stage;
        self.set_placed_plants(plants);
        Some(stage)
    }

    pub fn clear_garden(&mut self) {
        self.set_placed_plants(Vec::new());
    }

    // ---------------------------------------------------------------------
    // Gardens
    // ---------------------------------------------------------------------

    pub fn gardens(&self) -> &[Garden] {
        &self.state.gardens
    }

    /// Creates a garden and makes it active.
    pub fn create_garden(&mut self, name: &str, size: u32) -> Result<&Garden> {
        if !is_valid_grid_size(size) {
            return Err(GardenError::InvalidGridSize(size));
        }
        let garden = Garden::new(name, size);
        log::info!("Created garden '{}' ({})", garden.name, garden.id);
        self.state.active_garden_id = garden.id.clone();
        self.state.gardens.push(garden);
        self.reset_history();
        self.persist();
        Ok(self.active_garden())
    }

    /// Makes another garden active. Undo history restarts from its current plants.
    pub fn switch_garden(&mut self, id: &str) -> Result<()> {
        if !self.state.gardens.iter().any(|g| g.id == id) {
            return Err(GardenError::UnknownGarden(id.to_string()));
        }
        self.state.active_garden_id = id.to_string();
        self.reset_history();
        self.persist();
        Ok(())
    }

    pub fn rename_garden(&mut self, id: &str, name: &str) -> Result<()> {
        let garden = self
            .state
            .gardens
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| GardenError::UnknownGarden(id.to_string()))?;
        garden.name = name.to_string();
        garden.touch();
        self.persist();
        Ok(())
    }

    pub fn delete_garden(&mut self, id: &str) -> Result<()> {
        let index = self
            .state
            .gardens
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| GardenError::UnknownGarden(id.to_string()))?;
        if self.state.gardens.len() == 1 {
            return Err(GardenError::LastGarden);
        }
        self.state.gardens.remove(index);
        if self.state.active_garden_id == id {
            self.state.active_garden_id = self.state.gardens[0].id.clone();
            self.reset_history();
        }
        log::info!("Deleted garden {id}");
        self.persist();
        Ok(())
    }

    /// Resizes the active grid; plants left outside it are dropped.
    pub fn set_grid_size(&mut self, size: u32) -> Result<()> {
        if !is_valid_grid_size(size) {
            return Err(GardenError::InvalidGridSize(size));
        }
        let garden = self.active_garden_mut();
        garden.size = size;
        let plants = garden
            .plants
            .iter()
            .filter(|p| p.x < size && p.y < size)
            .cloned()
            .collect();
        self.set_placed_plants(plants);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Derived views
    // ---------------------------------------------------------------------

    pub fn relationships(&self) -> HarmonyReport {
        analyze_relationships(self.placed_plants(), &self.catalog)
    }

    pub fn calendar(&self, year: i32) -> Vec<CalendarEvent> {
        planting_calendar(self.placed_plants(), &self.catalog, self.state.zone, year)
    }

    pub fn care_summary(&self) -> CareSummary {
        care_summary(self.placed_plants(), &self.catalog)
    }

    pub fn placement_suggestions(&self, plant_id: &str, limit: usize) -> Vec<CellSuggestion> {
        let garden = self.active_garden();
        suggest_placements(plant_id, &garden.plants, garden.size, &self.catalog, limit)
    }

    // ---------------------------------------------------------------------
    // Rotation
    // ---------------------------------------------------------------------

    /// Overwrites `year` in the active garden's rotation history with its current layout.
    pub fn save_to_rotation_history(&mut self, year: i32) {
        let catalog = Arc::clone(&self.catalog);
        let garden = self.active_garden_mut();
        rotation::record_year(&mut garden.rotation_history, year, &garden.plants, &catalog);
        garden.touch();
        self.persist();
    }

    pub fn rotation_warnings(&self, current_year: i32) -> Vec<RotationWarning> {
        let garden = self.active_garden();
        rotation::rotation_warnings(
            &garden.rotation_history,
            &garden.plants,
            &self.catalog,
            current_year,
        )
    }

    pub fn rotation_suggestions(&self) -> Vec<RotationSuggestion> {
        rotation::rotation_suggestions(self.placed_plants(), &self.catalog)
    }

    pub fn clear_rotation_history(&mut self) {
        let garden = self.active_garden_mut();
        garden.rotation_history.clear();
        garden.touch();
        self.persist();
    }

    // ---------------------------------------------------------------------
    // Journal and pests
    // ---------------------------------------------------------------------

    pub fn add_journal_entry(
        &mut self,
        date: NaiveDate,
        text: &str,
        plant_id: Option<String>,
    ) -> JournalEntry {
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            date,
            text: text.to_string(),
            plant_id,
        };
        let garden = self.active_garden_mut();
        garden.journal.push(entry.clone());
        garden.touch();
        self.persist();
        entry
    }

    pub fn delete_journal_entry(&mut self, id: &str) -> Result<()> {
        let garden = self.active_garden_mut();
        let before = garden.journal.len();
        garden.journal.retain(|e| e.id != id);
        if garden.journal.len() == before {
            return Err(GardenError::UnknownRecord {
                kind: "Journal entry",
                id: id.to_string(),
            });
        }
        garden.touch();
        self.persist();
        Ok(())
    }

    pub fn add_pest_issue(
        &mut self,
        plant_id: &str,
        pest: &str,
        severity: Severity,
        notes: Option<String>,
        reported_at: NaiveDate,
    ) -> PestIssue {
        let issue = PestIssue {
            id: Uuid::new_v4().to_string(),
            plant_id: plant_id.to_string(),
            pest: pest.to_string(),
            severity,
            notes,
            reported_at,
            resolved: false,
        };
        let garden = self.active_garden_mut();
        garden.pest_issues.push(issue.clone());
        garden.touch();
        self.persist();
        issue
    }

    pub fn resolve_pest_issue(&mut self, id: &str) -> Result<()> {
        let garden = self.active_garden_mut();
        let issue = garden
            .pest_issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| GardenError::UnknownRecord {
                kind: "Pest issue",
                id: id.to_string(),
            })?;
        issue.resolved = true;
        garden.touch();
        self.persist();
        Ok(())
    }

    pub fn delete_pest_issue(&mut self, id: &str) -> Result<()> {
        let garden = self.active_garden_mut();
        let before = garden.pest_issues.len();
        garden.pest_issues.retain(|i| i.id != id);
        if garden.pest_issues.len() == before {
            return Err(GardenError::UnknownRecord {
                kind: "Pest issue",
                id: id.to_string(),
            });
        }
        garden.touch();
        self.persist();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Reminders and notifications
    // ---------------------------------------------------------------------

    pub fn reminders(&self) -> &[Reminder] {
        &self.state.reminders
    }

    /// Adds a reminder attached to the active garden.
    pub fn add_reminder(
        &mut self,
        title: &str,
        due_date: NaiveDate,
        plant_id: Option<String>,
    ) -> Reminder {
        let reminder = Reminder {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            due_date,
            garden_id: Some(self.state.active_garden_id.clone()),
            plant_id,
            completed: false,
            snoozed_until: None,
        };
        self.state.reminders.push(reminder.clone());
        self.persist();
        reminder
    }

    fn reminder_mut(&mut self, id: &str) -> Result<&mut Reminder> {
        self.state
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GardenError::UnknownRecord {
                kind: "Reminder",
                id: id.to_string(),
            })
    }

    pub fn complete_reminder(&mut self, id: &str) -> Result<()> {
        self.reminder_mut(id)?.completed = true;
        self.persist();
        Ok(())
    }

    pub fn snooze_reminder(&mut self, id: &str, until: NaiveDate) -> Result<()> {
        self.reminder_mut(id)?.snoozed_until = Some(until);
        self.persist();
        Ok(())
    }

    pub fn delete_reminder(&mut self, id: &str) -> Result<()> {
        let before = self.state.reminders.len();
        self.state.reminders.retain(|r| r.id != id);
        if self.state.reminders.len() == before {
            return Err(GardenError::UnknownRecord {
                kind: "Reminder",
                id: id.to_string(),
            });
        }
        self.persist();
        Ok(())
    }

    pub fn due_reminders(&self, today: NaiveDate) -> Vec<&Reminder> {
        self.state
            .reminders
            .iter()
            .filter(|r| r.is_due(today))
            .collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.state.notifications
    }

    pub fn push_notification(&mut self, message: &str, kind: NotificationKind) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            message: message.to_string(),
            kind,
            created_at: Utc::now(),
            read: false,
        };
        self.state.notifications.push(notification.clone());
        self.persist();
        notification
    }

    pub fn mark_notification_read(&mut self, id: &str) -> Result<()> {
        let notification = self
            .state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GardenError::UnknownRecord {
                kind: "Notification",
                id: id.to_string(),
            })?;
        notification.read = true;
        self.persist();
        Ok(())
    }

    pub fn clear_notifications(&mut self) {
        self.state.notifications.clear();
        self.persist();
    }

    // ---------------------------------------------------------------------
    // Preferences
    // ---------------------------------------------------------------------

    pub fn zone(&self) -> u8 {
        self.state.zone
    }

    pub fn set_zone(&mut self, zone: u8) -> Result<()> {
        if !is_supported_zone(zone) {
            return Err(GardenError::InvalidZone(zone));
        }
        self.state.zone = zone;
        self.persist();
        Ok(())
    }

    pub fn soil_type(&self) -> SoilType {
        self.state.soil_type
    }

    pub fn set_soil_type(&mut self, soil_type: SoilType) {
        self.state.soil_type = soil_type;
        self.persist();
    }

    pub fn has_visited(&self) -> bool {
        self.state.has_visited
    }

    pub fn mark_visited(&mut self) {
        self.state.has_visited = true;
        self.persist();
    }

    // ---------------------------------------------------------------------
    // Export, import and sharing
    // ---------------------------------------------------------------------

    pub fn export_garden(&self) -> GardenExport {
        GardenExport::from_garden(self.active_garden())
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_garden())?)
    }

    /// Loads an exported garden into the active one. Returns `false` and leaves the
    /// state untouched when the payload is rejected.
    pub fn import_garden(&mut self, json: &str) -> bool {
        let Some(export) = parse_export(json) else {
            return false;
        };
        let plants = export.placeable_plants();
        if plants.len() < export.plants.len() {
            log::warn!(
                "Dropped {} imported plant(s) outside the {}x{} grid or on a taken cell",
                export.plants.len() - plants.len(),
                export.size,
                export.size
            );
        }
        let garden = self.active_garden_mut();
        garden.size = export.size;
        garden.plants = plants;
        garden.pest_issues = export.pest_issues;
        garden.rotation_history = export.rotation_history;
        garden.touch();
        log::info!("Imported {} plant(s) into '{}'", garden.plants.len(), garden.name);
        self.reset_history();
        self.persist();
        true
    }

    pub fn share_link(&self, base_url: &str) -> Result<String> {
        transfer::share_link(base_url, &self.export_garden())
    }

    /// Creates and activates a new garden from a share link or bare payload.
    pub fn import_shared(&mut self, link_or_payload: &str) -> bool {
        let json = match decode_share_payload(extract_share_payload(link_or_payload)) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Rejected shared garden: {e}");
                return false;
            }
        };
        let Some(export) = parse_export(&json) else {
            return false;
        };
        let mut garden = Garden::new(export.name.clone(), export.size);
        garden.plants = export.placeable_plants();
        garden.pest_issues = export.pest_issues;
        garden.rotation_history = export.rotation_history;
        log::info!("Imported shared garden '{}' ({})", garden.name, garden.id);
        self.state.active_garden_id = garden.id.clone();
        self.state.gardens.push(garden);
        self.reset_history();
        self.persist();
        true
    }
}

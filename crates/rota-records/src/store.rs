//! Flat-file record store: one JSON array per record kind in a data
//! directory, loaded wholesale into an immutable snapshot.
//!
//! The store never holds records in memory across calls; every load is a
//! fresh read, and `append_booking` is a plain read-modify-write. Callers
//! racing other writers must serialize around "decide, then persist" — an
//! engine approval is a certificate, not a lock.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use rota_engine::Booking;

use crate::error::{Result, StoreError};
use crate::models::{
    BookingRecord, OperationRecord, PatientRecord, SurgeonRecord, TheatreRecord,
};

const SURGEONS_FILE: &str = "surgeons.json";
const PATIENTS_FILE: &str = "patients.json";
const OPERATIONS_FILE: &str = "operations.json";
const THEATRES_FILE: &str = "theatres.json";
const BOOKINGS_FILE: &str = "bookings.json";

/// Handle on a data directory of record files.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read every record file into a [`Registry`] snapshot.
    ///
    /// The four master files are required; `bookings.json` may be absent (a
    /// fresh directory has no bookings yet) and reads as empty.
    pub fn load(&self) -> Result<Registry> {
        let registry = Registry {
            surgeons: self.read_records(SURGEONS_FILE)?,
            patients: self.read_records(PATIENTS_FILE)?,
            operations: self.read_records(OPERATIONS_FILE)?,
            theatres: self.read_records(THEATRES_FILE)?,
            bookings: self.read_records_or_empty(BOOKINGS_FILE)?,
        };

        debug!(
            dir = %self.data_dir.display(),
            surgeons = registry.surgeons.len(),
            theatres = registry.theatres.len(),
            bookings = registry.bookings.len(),
            "loaded records"
        );

        Ok(registry)
    }

    /// Append one booking to `bookings.json`, creating the file if needed.
    /// Returns the record as written.
    pub fn append_booking(&self, record: BookingRecord) -> Result<BookingRecord> {
        let mut bookings: Vec<BookingRecord> = self.read_records_or_empty(BOOKINGS_FILE)?;
        bookings.push(record.clone());
        self.write_records(BOOKINGS_FILE, &bookings)?;

        debug!(booking_id = %record.booking_id, "appended booking");
        Ok(record)
    }

    fn read_records<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.data_dir.join(name);
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed { path, source })
    }

    fn read_records_or_empty<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        if !self.data_dir.join(name).exists() {
            return Ok(Vec::new());
        }
        self.read_records(name)
    }

    fn write_records<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        let path = self.data_dir.join(name);
        let text = serde_json::to_string_pretty(records)
            .map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, text).map_err(|source| StoreError::Write { path, source })
    }
}

/// Sequential booking id: `B0001`, `B0002`, ... from the current count.
pub fn next_booking_id(bookings: &[BookingRecord]) -> String {
    format!("B{:04}", bookings.len() + 1)
}

/// A point-in-time snapshot of every record file.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub surgeons: Vec<SurgeonRecord>,
    pub patients: Vec<PatientRecord>,
    pub operations: Vec<OperationRecord>,
    pub theatres: Vec<TheatreRecord>,
    pub bookings: Vec<BookingRecord>,
}

impl Registry {
    pub fn surgeon(&self, id: &str) -> Result<&SurgeonRecord> {
        self.surgeons
            .iter()
            .find(|s| s.surgeon_id == id)
            .ok_or_else(|| StoreError::UnknownSurgeon(id.to_string()))
    }

    pub fn patient(&self, id: &str) -> Result<&PatientRecord> {
        self.patients
            .iter()
            .find(|p| p.patient_id == id)
            .ok_or_else(|| StoreError::UnknownPatient(id.to_string()))
    }

    pub fn operation(&self, id: &str) -> Result<&OperationRecord> {
        self.operations
            .iter()
            .find(|o| o.operation_id == id)
            .ok_or_else(|| StoreError::UnknownOperation(id.to_string()))
    }

    pub fn theatre(&self, id: &str) -> Result<&TheatreRecord> {
        self.theatres
            .iter()
            .find(|t| t.theatre_id == id)
            .ok_or_else(|| StoreError::UnknownTheatre(id.to_string()))
    }

    /// The booking list in the engine's shape.
    pub fn engine_bookings(&self) -> Vec<Booking> {
        self.bookings.iter().map(BookingRecord::booking).collect()
    }
}

//! Injected sources of identifiers, time and roll scans
//!
//! Production code uses random UUIDs and the system clock; tests swap in
//! deterministic implementations.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_installation::{CutId, InstallationId};
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

/// Источник идентификаторов
pub trait IdProvider {
    fn next_uuid(&mut self) -> Uuid;

    fn installation_id(&mut self) -> InstallationId {
        InstallationId::new(self.next_uuid())
    }

    fn cut_id(&mut self) -> CutId {
        CutId::new(self.next_uuid())
    }
}

/// UUID v4
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Provider;

impl IdProvider for UuidV4Provider {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Последовательные UUID (1, 2, 3, ...) для детерминированных тестов
#[derive(Debug, Clone)]
pub struct SequentialIdProvider {
    next: u128,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_uuid(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}

/// Источник текущего времени
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Часы, которые двигаются только вручную
///
/// Клоны разделяют одно и то же время.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.now.set(at);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Сканер штрихкода рулона
pub trait RollScanner {
    fn scan(&mut self) -> String;
}

/// Имитация сканирования: "R" + 6 случайных цифр
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRollScanner;

impl RollScanner for RandomRollScanner {
    fn scan(&mut self) -> String {
        let digits: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("R{:06}", digits)
    }
}

/// Возвращает заранее заданный id рулона
#[derive(Debug, Clone)]
pub struct FixedRollScanner(pub String);

impl RollScanner for FixedRollScanner {
    fn scan(&mut self) -> String {
        self.0.clone()
    }
}

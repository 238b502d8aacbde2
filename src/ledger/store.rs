//! Ledger Store
//!
//! Reads and rewrites the inventory, staff and orders workbooks.
//!
//! Rewrites go through a temporary file and a rename so a crash never leaves a
//! half-written workbook behind. Callers that read-modify-write across several
//! workbooks must serialize themselves; the store does not lock.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::{LedgerError, LedgerResult};
use super::types::{normalize_key, InventoryItem, OrderRecord, StaffMember};
use crate::config::LedgerConfig;

/// Raw inventory row, as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InventoryRow {
    item_name: String,
    quantity: i64,
    min_required: i64,
}

/// Raw staff row, as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StaffRow {
    staff_name: String,
    skill: String,
    available: String,
}

impl StaffRow {
    fn is_available(&self) -> bool {
        self.available.trim().eq_ignore_ascii_case("yes")
    }
}

/// CSV-backed business ledger
#[derive(Debug, Clone)]
pub struct Ledger {
    config: LedgerConfig,
}

impl Ledger {
    /// Open a ledger, creating the data directory if needed
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        fs::create_dir_all(&config.data_dir)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Inventory keyed by normalized item name, in file order.
    ///
    /// A repeated item replaces the earlier entry's levels in place.
    pub fn load_inventory(&self) -> LedgerResult<Vec<InventoryItem>> {
        let rows: Vec<InventoryRow> = read_rows(&self.config.inventory_path(), true)?;
        let mut items: Vec<InventoryItem> = Vec::with_capacity(rows.len());

        for row in rows {
            let item = InventoryItem::new(&row.item_name, row.quantity, row.min_required);
            match items.iter_mut().find(|existing| existing.name == item.name) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
        }

        Ok(items)
    }

    /// Staff roster in file order
    pub fn load_staff(&self) -> LedgerResult<Vec<StaffMember>> {
        let rows: Vec<StaffRow> = read_rows(&self.config.staff_path(), true)?;
        Ok(rows
            .iter()
            .map(|row| StaffMember::new(&row.staff_name, &row.skill, row.is_available()))
            .collect())
    }

    /// All recorded orders, oldest first. A missing workbook means no orders.
    pub fn load_orders(&self) -> LedgerResult<Vec<OrderRecord>> {
        read_rows(&self.config.orders_path(), false)
    }

    /// Take `quantity` units of `item` out of stock, never going below zero.
    ///
    /// Returns the new stock level, or `None` if the item is not stocked.
    pub fn deduct_inventory(&self, item: &str, quantity: u32) -> LedgerResult<Option<i64>> {
        let path = self.config.inventory_path();
        let mut rows: Vec<InventoryRow> = read_rows(&path, true)?;
        let key = normalize_key(item);

        let Some(row) = rows.iter_mut().find(|r| normalize_key(&r.item_name) == key) else {
            return Ok(None);
        };
        row.quantity = (row.quantity - i64::from(quantity)).max(0);
        let remaining = row.quantity;

        write_rows(&path, &rows)?;
        tracing::debug!(item = %key, remaining, "Inventory deducted");
        Ok(Some(remaining))
    }

    /// Mark the first staff member called `name` as unavailable.
    ///
    /// Returns false if nobody by that name is on the roster.
    pub fn mark_staff_unavailable(&self, name: &str) -> LedgerResult<bool> {
        let path = self.config.staff_path();
        let mut rows: Vec<StaffRow> = read_rows(&path, true)?;
        let key = normalize_key(name);

        let Some(row) = rows.iter_mut().find(|r| normalize_key(&r.staff_name) == key) else {
            return Ok(false);
        };
        row.available = "no".to_string();

        write_rows(&path, &rows)?;
        tracing::debug!(staff = %name, "Staff marked unavailable");
        Ok(true)
    }

    /// Append a decided order, creating the workbook with a header if needed
    pub fn append_order(&self, record: &OrderRecord) -> LedgerResult<()> {
        let path = self.config.orders_path();
        let exists = path.exists() && fs::metadata(&path)?.len() > 0;

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!exists)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| LedgerError::malformed(&path, e))?;
        writer.flush()?;

        Ok(())
    }

    /// Replace the inventory workbook
    pub fn write_inventory(&self, items: &[InventoryItem]) -> LedgerResult<()> {
        let rows: Vec<InventoryRow> = items
            .iter()
            .map(|item| InventoryRow {
                item_name: item.name.clone(),
                quantity: item.quantity,
                min_required: item.min_required,
            })
            .collect();
        write_rows(&self.config.inventory_path(), &rows)
    }

    /// Replace the staff workbook
    pub fn write_staff(&self, staff: &[StaffMember]) -> LedgerResult<()> {
        let rows: Vec<StaffRow> = staff
            .iter()
            .map(|member| StaffRow {
                staff_name: member.name.clone(),
                skill: member.skill.clone(),
                available: if member.available { "yes" } else { "no" }.to_string(),
            })
            .collect();
        write_rows(&self.config.staff_path(), &rows)
    }

    /// Write a small demo dataset when no inventory or staff workbook exists.
    ///
    /// Returns true if anything was written.
    pub fn seed_demo(&self) -> LedgerResult<bool> {
        let mut seeded = false;

        if !self.config.inventory_path().exists() {
            self.write_inventory(&[
                InventoryItem::new("rice", 120, 50),
                InventoryItem::new("flour", 18, 40),
                InventoryItem::new("sugar", 60, 25),
                InventoryItem::new("cooking oil", 30, 20),
            ])?;
            seeded = true;
        }

        if !self.config.staff_path().exists() {
            self.write_staff(&[
                StaffMember::new("Asha", "rice", true),
                StaffMember::new("Ravi", "flour", true),
                StaffMember::new("Meena", "sugar", false),
                StaffMember::new("Kiran", "cooking oil", true),
            ])?;
            seeded = true;
        }

        if seeded {
            tracing::info!(data_dir = ?self.config.data_dir, "Seeded demo ledger");
        }
        Ok(seeded)
    }
}

/// Read every row of a workbook. Missing files are an error only if `required`.
fn read_rows<T: DeserializeOwned>(path: &Path, required: bool) -> LedgerResult<Vec<T>> {
    if !path.exists() {
        return if required {
            Err(LedgerError::MissingWorkbook(path.to_path_buf()))
        } else {
            Ok(Vec::new())
        };
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LedgerError::malformed(path, e))?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| LedgerError::malformed(path, e))
}

/// Rewrite a workbook through a temporary file
fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> LedgerResult<()> {
    let tmp_path = path.with_extension("csv.tmp");

    {
        let mut writer =
            csv::Writer::from_path(&tmp_path).map_err(|e| LedgerError::malformed(path, e))?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| LedgerError::malformed(path, e))?;
        }
        writer.flush()?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

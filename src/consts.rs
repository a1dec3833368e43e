//! Общие константы keyspace: зарезервированные префиксы и граничные ключи.
//!
//! Раскладка верхнего уровня (unsigned lexicographic order):
//! [""      .. 0x01)  : KeyMin
//! [0x01    .. 0x02)  : local keys (LOCAL_PREFIX), верхняя граница LOCAL_MAX
//! [0x02    .. 0x03)  : meta1 addressing
//! [0x03    .. 0x04)  : meta2 addressing, последний meta2-ключ < META2_KEY_MAX
//! [0x04    .. 0x88)  : system keys (liveness и т.п.)
//! [0x88    .. )      : table data

// -------- Local --------
pub const LOCAL_PREFIX: &[u8] = b"\x01";
/// First key not in the local key subspace (`prefix_end(LOCAL_PREFIX)`).
pub const LOCAL_MAX: &[u8] = b"\x02";

// -------- Meta addressing --------
pub const META1_PREFIX: &[u8] = b"\x02";
pub const META2_PREFIX: &[u8] = b"\x03";
/// First key past the meta2 subspace: META2_PREFIX + 0xff 0xff.
pub const META2_KEY_MAX: &[u8] = b"\x03\xff\xff";
/// End of the whole meta region (`prefix_end(META2_PREFIX)`).
pub const META_MAX: &[u8] = b"\x04";

// -------- System --------
pub const SYSTEM_PREFIX: &[u8] = b"\x04";
// Суффикс heartbeat-записей; ключ = SYSTEM_PREFIX + 0x00 + "liveness-" + <node id>
pub const NODE_LIVENESS_SUFFIX: &[u8] = b"\x00liveness-";

// -------- Table data --------
// Ключи таблиц начинаются с ordered-uvarint table id; id 0..=109 кодируются одним байтом 0x88 + id.
/// First system-config table key (table id 0).
pub const SYSTEM_CONFIG_TABLE_DATA_MIN: &[u8] = b"\x88";
/// End of the system-config table span (table id 11).
pub const SYSTEM_CONFIG_TABLE_DATA_MAX: &[u8] = b"\x93";

// -------- Env --------
pub const ENV_META2_SPLITS: &str = "KEYSPAN_META2_SPLITS";
pub const ENV_VERIFY_ON_INIT: &str = "KEYSPAN_VERIFY_ON_INIT";

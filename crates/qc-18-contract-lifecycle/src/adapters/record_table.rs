//! # Contract Record Table
//!
//! Maps a [`ContractRecord`] onto the fields of a contract's account table.
//! Lifecycle fields share the table with the ordinary account fields; the
//! field names below are the only place the lifecycle layer knows about the
//! row layout.
//!
//! | Field | Encoding |
//! |-------|----------|
//! | `frozen` | `"true"` / `"false"`; absent means available |
//! | `authority` | comma-separated 40-char lowercase hex addresses; absent or empty means none |
//! | `codeHash` | read only; absent, empty or all zeros marks a plain account |

use crate::domain::entities::{AuthorityList, ContractRecord, LifecycleState};
use crate::domain::value_objects::{Address, Hash};
use crate::errors::TableError;
use crate::ports::outbound::TableStore;
use tracing::debug;

/// Account balance field.
pub const ACCOUNT_BALANCE: &str = "balance";
/// Account code field.
pub const ACCOUNT_CODE: &str = "code";
/// Account code hash field.
pub const ACCOUNT_CODE_HASH: &str = "codeHash";
/// Account nonce field.
pub const ACCOUNT_NONCE: &str = "nonce";
/// Account liveness field.
pub const ACCOUNT_ALIVE: &str = "alive";
/// Freeze flag.
pub const ACCOUNT_FROZEN: &str = "frozen";
/// Manager list.
pub const ACCOUNT_AUTHORITY: &str = "authority";

/// Separator between entries of the `authority` field.
pub const AUTHORITY_DELIMITER: char = ',';

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Reads and writes the lifecycle fields of contract account tables.
pub struct RecordTable<'a, S: TableStore + ?Sized> {
    store: &'a S,
    prefix: &'a str,
}

impl<'a, S: TableStore + ?Sized> RecordTable<'a, S> {
    /// Creates an accessor naming tables `{prefix}{address hex}`.
    pub fn new(store: &'a S, prefix: &'a str) -> Self {
        Self { store, prefix }
    }

    /// Table name for `address`.
    #[must_use]
    pub fn table_name(&self, address: Address) -> String {
        format!("{}{}", self.prefix, address.to_hex())
    }

    /// Reads the record; `None` if the account table does not exist.
    ///
    /// # Errors
    ///
    /// Storage failures or a corrupt lifecycle field.
    pub fn read_record(&self, address: Address) -> Result<Option<ContractRecord>, TableError> {
        let table = self.table_name(address);
        if !self.store.table_exists(&table)? {
            debug!(table = %table, "Account table not found");
            return Ok(None);
        }

        let state = parse_state(&table, self.store.get_field(&table, ACCOUNT_FROZEN)?)?;
        let authorities =
            parse_authorities(&table, self.store.get_field(&table, ACCOUNT_AUTHORITY)?)?;
        let code_hash = self.store.get_field(&table, ACCOUNT_CODE_HASH)?;
        let is_contract = holds_code(code_hash.as_deref());

        Ok(Some(ContractRecord {
            address,
            state,
            authorities,
            is_contract,
        }))
    }

    /// Writes the freeze flag.
    ///
    /// # Errors
    ///
    /// Storage failures.
    pub fn write_state(&self, address: Address, state: LifecycleState) -> Result<(), TableError> {
        let value = match state {
            LifecycleState::Available => FALSE,
            LifecycleState::Frozen => TRUE,
        };
        self.store
            .set_field(&self.table_name(address), ACCOUNT_FROZEN, value)
    }

    /// Writes the whole authority list as one field.
    ///
    /// # Errors
    ///
    /// Storage failures.
    pub fn write_authorities(
        &self,
        address: Address,
        authorities: &AuthorityList,
    ) -> Result<(), TableError> {
        self.store.set_field(
            &self.table_name(address),
            ACCOUNT_AUTHORITY,
            &format_authorities(authorities),
        )
    }

    /// Creates the account table the way contract deployment does: default
    /// account fields, no freeze flag, no managers.
    ///
    /// # Errors
    ///
    /// [`TableError::TableExists`] if the account already exists.
    pub fn initialize_account(&self, address: Address, code_hash: Hash) -> Result<(), TableError> {
        let table = self.table_name(address);
        self.store.create_table(&table)?;
        self.store.set_field(&table, ACCOUNT_BALANCE, "0")?;
        self.store
            .set_field(&table, ACCOUNT_CODE_HASH, &hex::encode(code_hash.as_bytes()))?;
        self.store.set_field(&table, ACCOUNT_CODE, "")?;
        self.store.set_field(&table, ACCOUNT_NONCE, "0")?;
        self.store.set_field(&table, ACCOUNT_ALIVE, TRUE)?;
        Ok(())
    }
}

/// Formats an authority list for storage.
#[must_use]
pub fn format_authorities(authorities: &AuthorityList) -> String {
    authorities
        .as_slice()
        .iter()
        .map(Address::to_hex)
        .collect::<Vec<_>>()
        .join(&AUTHORITY_DELIMITER.to_string())
}

/// Parses a stored authority list.
///
/// # Errors
///
/// [`TableError::CorruptField`] on a malformed entry or a duplicate.
pub fn parse_authorities(table: &str, raw: Option<String>) -> Result<AuthorityList, TableError> {
    let Some(raw) = raw else {
        return Ok(AuthorityList::new());
    };
    if raw.is_empty() {
        return Ok(AuthorityList::new());
    }

    let corrupt = || TableError::CorruptField {
        table: table.to_string(),
        key: ACCOUNT_AUTHORITY.to_string(),
        value: raw.clone(),
    };

    let mut list = AuthorityList::new();
    for entry in raw.split(AUTHORITY_DELIMITER) {
        let canonical = entry.len() == Address::HEX_LEN
            && entry.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !canonical {
            return Err(corrupt());
        }
        let address = Address::from_hex(entry).map_err(|_| corrupt())?;
        if !list.push(address) {
            return Err(corrupt());
        }
    }
    Ok(list)
}

/// A stored code hash marks a contract unless it is absent, empty or zero.
fn holds_code(code_hash: Option<&str>) -> bool {
    code_hash.is_some_and(|hash| hash.bytes().any(|b| b != b'0'))
}

fn parse_state(table: &str, raw: Option<String>) -> Result<LifecycleState, TableError> {
    match raw.as_deref() {
        None | Some(FALSE) => Ok(LifecycleState::Available),
        Some(TRUE) => Ok(LifecycleState::Frozen),
        Some(other) => Err(TableError::CorruptField {
            table: table.to_string(),
            key: ACCOUNT_FROZEN.to_string(),
            value: other.to_string(),
        }),
    }
}

// =============================================================================
// TESTS
// =============================================================================

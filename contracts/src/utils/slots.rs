//! Typed access to the [ERC-1967] implementation slot.
//!
//! Contracts meant to run behind an upgradeable proxy keep the address of
//! the active implementation in a well-known storage slot, outside the
//! reach of ordinary field layout. This module exposes that one slot as a
//! zero-sized storage handle, so an implementation contract (such as
//! [`crate::stem::Stem`]) can read and retarget the proxy it runs behind
//! without any low-level storage arithmetic at the call site.
//!
//! [ERC-1967]: https://eips.ethereum.org/EIPS/eip-1967

use alloy_primitives::{uint, Address, U256};
use stylus_sdk::{host::VMAccess, prelude::*, storage::StorageAddress};

const SLOT_BYTE_SPACE: u8 = 32;

/// Storage slot with the address of the current implementation.
/// This is the keccak-256 hash of "eip1967.proxy.implementation" subtracted
/// by 1.
pub const IMPLEMENTATION_SLOT: U256 = uint!(
    0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc_U256
);

/// Zero-sized storage handle over the proxy's implementation pointer.
#[storage]
pub struct ImplementationSlot;

impl ImplementationSlot {
    /// Returns the current implementation address.
    #[must_use]
    pub fn get(&self) -> Address {
        self.cell().get()
    }

    /// Points the proxy at `new_implementation`.
    pub fn set(&mut self, new_implementation: Address) {
        self.cell().set(new_implementation);
    }

    fn cell(&self) -> StorageAddress {
        // SAFETY: an address occupies the trailing 20 bytes of its slot;
        // `SLOT_BYTES` is at most 32, so the offset cannot underflow.
        #[allow(clippy::cast_possible_truncation)]
        unsafe {
            StorageAddress::new(
                IMPLEMENTATION_SLOT,
                SLOT_BYTE_SPACE - StorageAddress::SLOT_BYTES as u8,
                self.raw_vm(),
            )
        }
    }
}

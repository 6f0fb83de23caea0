//! Contract module providing constructor-fixed, time-delayed ownership.
//!
//! Ownership is a pure function of time: [`FixedOwnable::owner`] is the
//! before-owner until a preset timestamp and the after-owner from then on.
//! The flip needs no transaction, there is no pending state, and there are
//! no transfer entry points. The schedule written at construction is the
//! whole story. [`crate::stem::Stem`] reuses this to hand a paused contract
//! to its emergency owner after a delay.
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U64};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{
    block,
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageU64},
};

use crate::{
    access::ownable::OwnershipTransferred,
    utils::introspection::erc165::IErc165,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// The caller account is not authorized to perform an operation.
        ///
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error FixedOwnableUnauthorizedAccount(address account);
        /// The owner is not a valid owner account. (eg. [`Address::ZERO`])
        ///
        /// * `owner` - Account that's not allowed to become the owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error FixedOwnableInvalidOwner(address owner);
    }
}

/// An error that occurred in the implementation of a [`FixedOwnable`]
/// contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(FixedOwnableUnauthorizedAccount),
    /// The owner is not a valid owner account.
    InvalidOwner(FixedOwnableInvalidOwner),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a [`FixedOwnable`] contract.
#[storage]
pub struct FixedOwnable {
    /// Owner until the flip.
    pub(crate) before_owner: StorageAddress,
    /// Owner from the flip on.
    pub(crate) after_owner: StorageAddress,
    /// Timestamp of the flip.
    pub(crate) transfer_at: StorageU64,
}

/// Interface of a [`FixedOwnable`] contract.
#[interface_id]
pub trait IFixedOwnable {
    /// Returns the address of the current owner: the before-owner while
    /// `block.timestamp < transfer_at`, the after-owner from then on.
    #[must_use]
    fn owner(&self) -> Address;

    /// Returns the owner before the flip.
    #[must_use]
    fn before_owner(&self) -> Address;

    /// Returns the owner after the flip.
    #[must_use]
    fn after_owner(&self) -> Address;

    /// Returns the timestamp of the flip.
    #[must_use]
    fn transfer_at(&self) -> u64;
}

#[public]
#[implements(IFixedOwnable, IErc165)]
impl FixedOwnable {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `before_owner` - Owner until the flip; the deployer when zero.
    /// * `after_owner` - Owner from the flip on.
    /// * `transfer_at` - Timestamp of the flip.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `after_owner` is [`Address::ZERO`];
    ///   the flip would otherwise be a silent renunciation.
    #[constructor]
    pub fn constructor(
        &mut self,
        before_owner: Address,
        after_owner: Address,
        transfer_at: u64,
    ) -> Result<(), Error> {
        self._init(before_owner, after_owner, transfer_at)
    }
}

#[public]
impl IFixedOwnable for FixedOwnable {
    fn owner(&self) -> Address {
        self.owner()
    }

    fn before_owner(&self) -> Address {
        self.before_owner.get()
    }

    fn after_owner(&self) -> Address {
        self.after_owner.get()
    }

    fn transfer_at(&self) -> u64 {
        self.transfer_at.get().to::<u64>()
    }
}

impl FixedOwnable {
    /// Writes the ownership schedule.
    /// Internal function without access restriction.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `after_owner` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub(crate) fn _init(
        &mut self,
        before_owner: Address,
        after_owner: Address,
        transfer_at: u64,
    ) -> Result<(), Error> {
        if after_owner.is_zero() {
            return Err(Error::InvalidOwner(FixedOwnableInvalidOwner {
                owner: Address::ZERO,
            }));
        }
        let before = if before_owner.is_zero() {
            msg::sender()
        } else {
            before_owner
        };
        self.before_owner.set(before);
        self.after_owner.set(after_owner);
        self.transfer_at.set(U64::from(transfer_at));
        evm::log(OwnershipTransferred {
            previous_owner: Address::ZERO,
            new_owner: before,
        });
        Ok(())
    }

    /// Returns the address of the current owner. See [`IFixedOwnable::owner`].
    #[must_use]
    pub fn owner(&self) -> Address {
        if U64::from(block::timestamp()) >= self.transfer_at.get() {
            self.after_owner.get()
        } else {
            self.before_owner.get()
        }
    }

    /// Checks if the [`msg::sender`] is the current (time-computed) owner.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If called by any account other
    ///   than the owner.
    pub fn only_owner(&self) -> Result<(), Error> {
        let account = msg::sender();
        if self.owner() != account {
            return Err(Error::UnauthorizedAccount(
                FixedOwnableUnauthorizedAccount { account },
            ));
        }

        Ok(())
    }
}

#[public]
impl IErc165 for FixedOwnable {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IFixedOwnable>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

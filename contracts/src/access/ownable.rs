//! Contract module providing the ownership core shared by every transition
//! protocol in this crate, plus the deployment bootstrap protocol itself.
//!
//! A freshly initialized contract is owned by its deployer, who is granted
//! exactly one unprotected [`Ownable::transfer_ownership`] to the nominee
//! recorded at initialization, valid for [`Ownable::BOOTSTRAP_WINDOW`]
//! seconds. Once that transfer completes (or the window closes), the
//! one-step path is locked forever; the only remaining ways to move
//! ownership are the windowed protocols layered on top of this module
//! ([`crate::access::ownable_handover`] and
//! [`crate::access::ownable_transferrable`]).
//!
//! A deployer who nominates themselves controls both ends of the bootstrap
//! and is therefore granted one additional unprotected transfer (or
//! renunciation), bounded by the same window.
//!
//! This module is used through composition: embedding contracts get
//! [`Ownable::only_owner`] plus the internal transition machinery
//! ([`Ownable::_initiate`], [`Ownable::_accept`], [`Ownable::_cancel`]).
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U64};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{
    block,
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageU64},
};

use crate::utils::introspection::erc165::IErc165;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when ownership gets transferred between accounts.
        ///
        /// * `previous_owner` - Address of the previous owner.
        /// * `new_owner` - Address of the new owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
    }

    sol! {
        /// The caller account is not authorized to perform an operation.
        ///
        /// * `account` - Account that was found to not be authorized.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableUnauthorizedAccount(address account);
        /// The contract has already been initialized. Initialization can
        /// never run twice for the same storage, not even after ownership
        /// has been renounced.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableAlreadyInitialized();
        /// No live pending transition authorizes the requested transfer:
        /// there is nothing pending, the nominee does not match, the timing
        /// window is violated, or the nominee has not validated.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableCannotCompleteTransfer();
        /// The cool-down of a pending renunciation has not elapsed yet.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableCannotRenounceYet();
    }
}

/// An error that occurred in the implementation of an [`Ownable`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(OwnableUnauthorizedAccount),
    /// The contract has already been initialized.
    AlreadyInitialized(OwnableAlreadyInitialized),
    /// No live pending transition authorizes the requested transfer.
    CannotCompleteTransfer(OwnableCannotCompleteTransfer),
    /// The cool-down of a pending renunciation has not elapsed yet.
    CannotRenounceYet(OwnableCannotRenounceYet),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// Cause for which a live pending transfer cannot complete.
///
/// Protocol variants map these onto their own error vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TransferBlock {
    /// No transition record is live.
    NoPending,
    /// The live record nominates a different address.
    TargetMismatch,
    /// The completion cool-down has not elapsed.
    TooEarly,
    /// The validity window has closed.
    Expired,
    /// The nominee has not validated the transition.
    NotValidated,
}

/// Cause for which a validation attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AcceptBlock {
    /// No transition record is live.
    NoPending,
    /// The caller is not the nominee of the live record.
    NotTarget,
    /// The variant's validation deadline has passed.
    TooLate,
}

/// Cause for which a cancellation attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CancelBlock {
    /// No transition record is live.
    NoPending,
    /// The caller is neither the owner nor the nominee.
    Unauthorized,
}

/// The singleton pending-transition record.
///
/// At most one transition is in flight per contract; beginning a new one
/// overwrites whatever was there. The record is deliberately not keyed by
/// nominee: concurrent multi-target transitions are not a supported state.
#[storage]
pub struct PendingTransfer {
    /// Nominated next owner. [`Address::ZERO`] nominates renunciation.
    pub(crate) target: StorageAddress,
    /// Timestamp at which the record was (re)created.
    pub(crate) initiated_at: StorageU64,
    /// Completion is forbidden while `block.timestamp <= pause_until`.
    pub(crate) pause_until: StorageU64,
    /// The record is dead once `block.timestamp >= expires_at`.
    pub(crate) expires_at: StorageU64,
    /// Whether the nominee has proven control of their address.
    pub(crate) validated: StorageBool,
}

impl PendingTransfer {
    /// Overwrites the record with a fresh transition to `target`, paused for
    /// `pause` seconds and expiring after `window` seconds.
    ///
    /// A zero `target` nominates renunciation and is born validated, since
    /// no one can act for the zero address.
    pub(crate) fn begin(&mut self, target: Address, pause: u64, window: u64) {
        let now = block::timestamp();
        self.target.set(target);
        self.initiated_at.set(U64::from(now));
        self.pause_until.set(U64::from(now + pause));
        self.expires_at.set(U64::from(now + window));
        self.validated.set(target.is_zero());
    }

    /// Overwrites the record with a transition that may complete
    /// immediately. Used for the deployment bootstrap, whose nominee was
    /// chosen by the deployer and needs neither cool-down nor validation.
    pub(crate) fn begin_immediate(&mut self, target: Address, window: u64) {
        let now = block::timestamp();
        self.target.set(target);
        self.initiated_at.set(U64::from(now));
        self.pause_until.set(U64::ZERO);
        self.expires_at.set(U64::from(now + window));
        self.validated.set(true);
    }

    /// Zeroes every field of the record.
    pub(crate) fn clear(&mut self) {
        self.target.set(Address::ZERO);
        self.initiated_at.set(U64::ZERO);
        self.pause_until.set(U64::ZERO);
        self.expires_at.set(U64::ZERO);
        self.validated.set(false);
    }

    /// A record is live while its expiry is set.
    pub(crate) fn is_live(&self) -> bool {
        !self.expires_at.get().is_zero()
    }

    /// Checks whether the record authorizes a transfer to `to` right now.
    ///
    /// The checks run in a fixed order: liveness, nominee, cool-down,
    /// expiry, validation. Both timing bounds are strict, so completion at
    /// exactly `pause_until` or exactly `expires_at` fails.
    pub(crate) fn completable(&self, to: Address) -> Result<(), TransferBlock> {
        if !self.is_live() {
            return Err(TransferBlock::NoPending);
        }
        if self.target.get() != to {
            return Err(TransferBlock::TargetMismatch);
        }
        let now = U64::from(block::timestamp());
        if now <= self.pause_until.get() {
            return Err(TransferBlock::TooEarly);
        }
        if now >= self.expires_at.get() {
            return Err(TransferBlock::Expired);
        }
        if !self.validated.get() {
            return Err(TransferBlock::NotValidated);
        }
        Ok(())
    }
}

/// State of an [`Ownable`] contract.
#[storage]
pub struct Ownable {
    /// The current owner of this contract.
    pub(crate) owner: StorageAddress,
    /// Whether [`Ownable::initialize`] has ever run for this storage.
    pub(crate) initialized: StorageBool,
    /// Deadline until which the deployer's extra unprotected transfer stays
    /// available. Zero when no such transfer is, or ever was, available.
    pub(crate) extra_shot_until: StorageU64,
    /// The singleton pending-transition record.
    pub(crate) pending: PendingTransfer,
}

/// Interface of an [`Ownable`] contract.
#[interface_id]
pub trait IOwnable {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Initializes ownership: the caller becomes the provisional owner and
    /// `final_owner` is nominated for the one bootstrap transfer, valid for
    /// [`Ownable::BOOTSTRAP_WINDOW`] seconds.
    ///
    /// Callable exactly once per contract storage. If `final_owner` is the
    /// caller, one additional unprotected transfer is granted within the
    /// same window.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `final_owner` - The nominated owner of this contract.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyInitialized`] - If initialization has already run.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn initialize(&mut self, final_owner: Address) -> Result<(), Self::Error>;

    /// Returns the address of the current owner.
    #[must_use]
    fn owner(&self) -> Address;

    /// Completes the live pending transition to `confirm_owner`.
    /// Can only be called by the current owner.
    ///
    /// The nominee must match the live record and the call must land inside
    /// the record's timing window. After the bootstrap transfer has been
    /// consumed, this entry point only ever succeeds again if a protocol
    /// layered on top of this contract creates a new pending record.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `confirm_owner` - The nominee to confirm as next owner.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::CannotCompleteTransfer`] - If no live record authorizes
    ///   the transfer.
    /// * [`Error::CannotRenounceYet`] - If the record nominates the zero
    ///   address and the cool-down has not elapsed.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    fn transfer_ownership(
        &mut self,
        confirm_owner: Address,
    ) -> Result<(), Self::Error>;

    /// Returns the live transition record as
    /// `(target, expires_at, validated, pause_until)`.
    ///
    /// All-zero when no transition is pending.
    #[must_use]
    fn pending(&self) -> (Address, u64, bool, u64);
}

#[public]
#[implements(IOwnable<Error = Error>, IErc165)]
impl Ownable {}

#[public]
impl IOwnable for Ownable {
    type Error = Error;

    fn initialize(&mut self, final_owner: Address) -> Result<(), Self::Error> {
        self.initialize(final_owner)
    }

    fn owner(&self) -> Address {
        self.owner()
    }

    fn transfer_ownership(
        &mut self,
        confirm_owner: Address,
    ) -> Result<(), Self::Error> {
        self.transfer_ownership(confirm_owner)
    }

    fn pending(&self) -> (Address, u64, bool, u64) {
        self.pending()
    }
}

impl Ownable {
    /// Seconds during which the deployment bootstrap transfer may complete.
    pub const BOOTSTRAP_WINDOW: u64 = 60 * 60;

    /// Initializes ownership. See [`IOwnable::initialize`].
    pub fn initialize(&mut self, final_owner: Address) -> Result<(), Error> {
        if self.initialized.get() {
            return Err(Error::AlreadyInitialized(OwnableAlreadyInitialized {}));
        }
        self.initialized.set(true);

        let deployer = msg::sender();
        self._transfer_ownership(deployer);
        self.pending.begin_immediate(final_owner, Self::BOOTSTRAP_WINDOW);
        if final_owner == deployer {
            // The deployer controls both ends of the bootstrap, so the
            // confirmation transfer to themselves proves nothing; they get
            // one real transfer on top of it, within the same window.
            self.extra_shot_until
                .set(U64::from(block::timestamp() + Self::BOOTSTRAP_WINDOW));
        }
        Ok(())
    }

    /// Returns the address of the current owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    /// Completes the live pending transition to `confirm_owner`.
    /// See [`IOwnable::transfer_ownership`].
    pub fn transfer_ownership(
        &mut self,
        confirm_owner: Address,
    ) -> Result<(), Error> {
        self.only_owner()?;
        self._complete_transfer(confirm_owner)
    }

    /// Returns the live transition record. See [`IOwnable::pending`].
    #[must_use]
    pub fn pending(&self) -> (Address, u64, bool, u64) {
        let p = &self.pending;
        (
            p.target.get(),
            p.expires_at.get().to::<u64>(),
            p.validated.get(),
            p.pause_until.get().to::<u64>(),
        )
    }
}

impl Ownable {
    /// Checks if the [`msg::sender`] is set as the owner.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If called by any account other
    ///   than the owner.
    pub fn only_owner(&self) -> Result<(), Error> {
        let account = msg::sender();
        if self.owner() != account {
            return Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account },
            ));
        }

        Ok(())
    }

    /// Transfers ownership of the contract to a new account (`new_owner`).
    /// Internal function without access restriction.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferred`].
    pub fn _transfer_ownership(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);
        evm::log(OwnershipTransferred { previous_owner, new_owner });
    }

    /// Starts or restarts a windowed transition to `target`, paused for
    /// `pause` seconds and expiring after `window` seconds. Owner-gated.
    ///
    /// Any prior pending record, for this or any other nominee, is
    /// silently superseded.
    pub(crate) fn _initiate(
        &mut self,
        target: Address,
        pause: u64,
        window: u64,
    ) -> Result<(), Error> {
        self.only_owner()?;
        self.pending.begin(target, pause, window);
        Ok(())
    }

    /// Records the nominee's validation of the live record and returns the
    /// nominee. `deadline` is the first timestamp at which validation is no
    /// longer accepted; variants derive it from the record bound of their
    /// choice.
    pub(crate) fn _accept(&mut self, deadline: U64) -> Result<Address, AcceptBlock> {
        if !self.pending.is_live() {
            return Err(AcceptBlock::NoPending);
        }
        let caller = msg::sender();
        if caller != self.pending.target.get() {
            return Err(AcceptBlock::NotTarget);
        }
        if U64::from(block::timestamp()) >= deadline {
            return Err(AcceptBlock::TooLate);
        }
        self.pending.validated.set(true);
        Ok(caller)
    }

    /// Clears the live record and returns its nominee. Permitted for the
    /// owner and for the nominee itself.
    pub(crate) fn _cancel(&mut self) -> Result<Address, CancelBlock> {
        if !self.pending.is_live() {
            return Err(CancelBlock::NoPending);
        }
        let target = self.pending.target.get();
        let caller = msg::sender();
        if caller != self.owner.get() && caller != target {
            return Err(CancelBlock::Unauthorized);
        }
        self.pending.clear();
        Ok(target)
    }

    /// Shared completion path: consumes the live record when it authorizes
    /// a transfer to `to`, falling back to the deployer's extra shot while
    /// the bootstrap window is still open.
    pub(crate) fn _complete_transfer(&mut self, to: Address) -> Result<(), Error> {
        match self.pending.completable(to) {
            Ok(()) => {
                self.pending.clear();
                self._transfer_ownership(to);
                Ok(())
            }
            Err(cause) => {
                let deadline = self.extra_shot_until.get();
                if !deadline.is_zero()
                    && U64::from(block::timestamp()) < deadline
                {
                    self.extra_shot_until.set(U64::ZERO);
                    self.pending.clear();
                    self._transfer_ownership(to);
                    return Ok(());
                }
                Err(Self::_cannot_complete(to, cause))
            }
        }
    }

    /// Maps a completion failure cause onto the transfer error vocabulary.
    pub(crate) fn _cannot_complete(to: Address, cause: TransferBlock) -> Error {
        if to.is_zero() && cause == TransferBlock::TooEarly {
            Error::CannotRenounceYet(OwnableCannotRenounceYet {})
        } else {
            Error::CannotCompleteTransfer(OwnableCannotCompleteTransfer {})
        }
    }
}

#[public]
impl IErc165 for Ownable {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IOwnable>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

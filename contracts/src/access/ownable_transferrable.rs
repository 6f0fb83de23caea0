//! Contract module extending the ownership core with a three-step transfer.
//!
//! The owner nominates a new owner with
//! [`OwnableTransferrable::initiate_ownership_transfer`]; the nominee proves
//! control of their address with
//! [`OwnableTransferrable::validate_ownership_transfer`]; the owner finishes
//! with [`crate::access::ownable::Ownable::transfer_ownership`]; completion
//! is folded into the ordinary transfer entry point rather than getting a
//! separate one.
//!
//! The [`OwnableTransferrable::TRANSFER_WINDOW`]-second window is split at
//! its midpoint: validation is only accepted in the first half, completion
//! only in the second. A nominee that does not respond promptly therefore
//! never gains ownership late, and a completion can never be rushed through
//! before observers have had the first half of the window to react.
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U64};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{call::MethodError, evm, msg, prelude::*};

use crate::{
    access::ownable::{
        self, AcceptBlock, CancelBlock, IOwnable, Ownable,
        OwnableAlreadyInitialized, OwnableCannotCompleteTransfer,
        OwnableCannotRenounceYet, OwnableUnauthorizedAccount,
    },
    utils::introspection::erc165::IErc165,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when an ownership transfer to `pending_owner` is started
        /// or restarted.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferInitiated(address indexed pending_owner);
        /// Emitted when `pending_owner` validates the transfer.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferValidated(address indexed pending_owner);
        /// Emitted when the transfer to `pending_owner` is canceled.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipTransferCanceled(address indexed pending_owner);
    }

    sol! {
        /// There is no transfer in flight to act upon.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableNoTransferInitiated();
        /// The validation half of the transfer window has passed.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableTransferExpired();
    }
}

/// An error that occurred in the implementation of an
/// [`OwnableTransferrable`] contract.
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
    /// There is no transfer in flight to act upon.
    NoTransferInitiated(OwnableNoTransferInitiated),
    /// The validation half of the transfer window has passed.
    TransferExpired(OwnableTransferExpired),
}

impl From<ownable::Error> for Error {
    fn from(value: ownable::Error) -> Self {
        match value {
            ownable::Error::UnauthorizedAccount(e) => {
                Error::UnauthorizedAccount(e)
            }
            ownable::Error::AlreadyInitialized(e) => {
                Error::AlreadyInitialized(e)
            }
            ownable::Error::CannotCompleteTransfer(e) => {
                Error::CannotCompleteTransfer(e)
            }
            ownable::Error::CannotRenounceYet(e) => Error::CannotRenounceYet(e),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`OwnableTransferrable`] contract.
#[storage]
pub struct OwnableTransferrable {
    /// The embedded ownership core.
    // Left public so that embedding contracts have access to the internal
    // gates and transition machinery.
    pub ownable: Ownable,
}

/// Interface of the three-step transfer extension.
///
/// Completion has no entry point of its own; it rides on
/// [`IOwnable::transfer_ownership`].
#[interface_id]
pub trait IOwnableTransferrable {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Starts or restarts an ownership transfer to `target`. Can only be
    /// called by the current owner.
    ///
    /// Re-initiating refreshes the window; initiating for a different
    /// nominee silently supersedes the previous record. A zero `target`
    /// nominates renunciation and needs no validation.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `target` - The nominated next owner.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the
    ///   owner.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferInitiated`].
    fn initiate_ownership_transfer(
        &mut self,
        target: Address,
    ) -> Result<(), Self::Error>;

    /// Validates the live transfer. Can only be called by the nominee, and
    /// only during the first half of the window: once the completion half
    /// begins, a nominee that has not validated is out of time.
    ///
    /// # Errors
    ///
    /// * [`Error::NoTransferInitiated`] - If no transfer is in flight.
    /// * [`Error::UnauthorizedAccount`] - If the caller is not the nominee.
    /// * [`Error::TransferExpired`] - If the validation half has passed.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferValidated`].
    fn validate_ownership_transfer(&mut self) -> Result<(), Self::Error>;

    /// Cancels the live transfer. Permitted for the current owner and for
    /// the nominee.
    ///
    /// # Errors
    ///
    /// * [`Error::NoTransferInitiated`] - If no transfer is in flight; this
    ///   outranks the authorization check.
    /// * [`Error::UnauthorizedAccount`] - If the caller is neither the
    ///   owner nor the nominee.
    ///
    /// # Events
    ///
    /// * [`OwnershipTransferCanceled`].
    fn cancel_ownership_transfer(&mut self) -> Result<(), Self::Error>;
}

#[public]
#[implements(IOwnable<Error = Error>, IOwnableTransferrable<Error = Error>, IErc165)]
impl OwnableTransferrable {}

#[public]
impl IOwnable for OwnableTransferrable {
    type Error = Error;

    fn initialize(&mut self, final_owner: Address) -> Result<(), Self::Error> {
        Ok(self.ownable.initialize(final_owner)?)
    }

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    /// Completes the live pending transition: the deployment bootstrap or
    /// an initiated, validated transfer in the second half of its window.
    fn transfer_ownership(
        &mut self,
        confirm_owner: Address,
    ) -> Result<(), Self::Error> {
        Ok(self.ownable.transfer_ownership(confirm_owner)?)
    }

    fn pending(&self) -> (Address, u64, bool, u64) {
        self.ownable.pending()
    }
}

#[public]
impl IOwnableTransferrable for OwnableTransferrable {
    type Error = Error;

    fn initiate_ownership_transfer(
        &mut self,
        target: Address,
    ) -> Result<(), Self::Error> {
        self.initiate_ownership_transfer(target)
    }

    fn validate_ownership_transfer(&mut self) -> Result<(), Self::Error> {
        self.validate_ownership_transfer()
    }

    fn cancel_ownership_transfer(&mut self) -> Result<(), Self::Error> {
        self.cancel_ownership_transfer()
    }
}

impl OwnableTransferrable {
    /// Total validity window of a transfer, in seconds.
    pub const TRANSFER_WINDOW: u64 = 4 * 24 * 60 * 60;
    /// Length of the validation half of the window, in seconds.
    pub const TRANSFER_PAUSE: u64 = Self::TRANSFER_WINDOW / 2;

    /// Starts or restarts an ownership transfer to `target`.
    /// See [`IOwnableTransferrable::initiate_ownership_transfer`].
    pub fn initiate_ownership_transfer(
        &mut self,
        target: Address,
    ) -> Result<(), Error> {
        self.ownable._initiate(
            target,
            Self::TRANSFER_PAUSE,
            Self::TRANSFER_WINDOW,
        )?;
        evm::log(OwnershipTransferInitiated { pending_owner: target });
        Ok(())
    }

    /// Validates the live transfer.
    /// See [`IOwnableTransferrable::validate_ownership_transfer`].
    pub fn validate_ownership_transfer(&mut self) -> Result<(), Error> {
        // Validation closes where completion opens: the first timestamp of
        // the completion half is the first one refused here.
        let deadline = self.ownable.pending.pause_until.get() + U64::from(1);
        match self.ownable._accept(deadline) {
            Ok(pending_owner) => {
                evm::log(OwnershipTransferValidated { pending_owner });
                Ok(())
            }
            Err(AcceptBlock::NoPending) => Err(Error::NoTransferInitiated(
                OwnableNoTransferInitiated {},
            )),
            Err(AcceptBlock::NotTarget) => Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account: msg::sender() },
            )),
            Err(AcceptBlock::TooLate) => {
                Err(Error::TransferExpired(OwnableTransferExpired {}))
            }
        }
    }

    /// Cancels the live transfer.
    /// See [`IOwnableTransferrable::cancel_ownership_transfer`].
    pub fn cancel_ownership_transfer(&mut self) -> Result<(), Error> {
        match self.ownable._cancel() {
            Ok(pending_owner) => {
                evm::log(OwnershipTransferCanceled { pending_owner });
                Ok(())
            }
            Err(CancelBlock::NoPending) => Err(Error::NoTransferInitiated(
                OwnableNoTransferInitiated {},
            )),
            Err(CancelBlock::Unauthorized) => Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account: msg::sender() },
            )),
        }
    }
}

#[public]
impl IErc165 for OwnableTransferrable {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IOwnable>::interface_id() == interface_id
            || <Self as IOwnableTransferrable>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

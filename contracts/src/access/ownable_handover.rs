//! Contract module extending the ownership core with a two-step handover.
//!
//! The owner nominates a new owner with
//! [`OwnableHandover::initiate_ownership_handover`], which opens a
//! [`OwnableHandover::HANDOVER_WINDOW`]-second validity window. The nominee
//! proves control of their address by calling
//! [`OwnableHandover::accept_ownership_handover`] any time before the window
//! closes. The owner may then complete the handover with
//! [`OwnableHandover::complete_ownership_handover`], but only in the second
//! half of the window: the first half is a mandatory cool-down that leaves
//! time to notice, and cancel, a handover that should not happen.
//!
//! Either side can abort with
//! [`OwnableHandover::cancel_ownership_handover`], and re-initiating simply
//! supersedes whatever was pending.
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{call::MethodError, evm, msg, prelude::*};

use crate::{
    access::ownable::{
        self, AcceptBlock, CancelBlock, IOwnable, Ownable,
        OwnableAlreadyInitialized, OwnableCannotCompleteTransfer,
        OwnableCannotRenounceYet, OwnableUnauthorizedAccount, TransferBlock,
    },
    utils::introspection::erc165::IErc165,
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when an ownership handover to `pending_owner` is started
        /// or restarted.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipHandoverInitiated(address indexed pending_owner);
        /// Emitted when `pending_owner` accepts the handover.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipHandoverAccepted(address indexed pending_owner);
        /// Emitted when the handover to `pending_owner` is canceled.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event OwnershipHandoverCanceled(address indexed pending_owner);
    }

    sol! {
        /// There is no handover in flight to act upon.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableNoHandoverInitiated();
        /// The live handover does not authorize the requested completion:
        /// the nominee does not match, the timing window is violated, or
        /// the nominee has not accepted.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableCannotCompleteHandover();
        /// The handover's validity window has closed.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error OwnableHandoverExpired();
    }
}

/// An error that occurred in the implementation of an [`OwnableHandover`]
/// contract.
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
    /// There is no handover in flight to act upon.
    NoHandoverInitiated(OwnableNoHandoverInitiated),
    /// The live handover does not authorize the requested completion.
    CannotCompleteHandover(OwnableCannotCompleteHandover),
    /// The handover's validity window has closed.
    HandoverExpired(OwnableHandoverExpired),
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

/// State of an [`OwnableHandover`] contract.
#[storage]
pub struct OwnableHandover {
    /// The embedded ownership core.
    // Left public so that embedding contracts have access to the internal
    // gates and transition machinery.
    pub ownable: Ownable,
}

/// Interface of the two-step handover extension.
#[interface_id]
pub trait IOwnableHandover {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Starts or restarts an ownership handover to `target`. Can only be
    /// called by the current owner.
    ///
    /// Re-initiating refreshes the window; initiating for a different
    /// nominee silently supersedes the previous record. A zero `target`
    /// nominates renunciation and needs no acceptance.
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
    /// * [`OwnershipHandoverInitiated`].
    fn initiate_ownership_handover(
        &mut self,
        target: Address,
    ) -> Result<(), Self::Error>;

    /// Accepts the live handover. Can only be called by the nominee, any
    /// time strictly before the window expires.
    ///
    /// # Errors
    ///
    /// * [`Error::NoHandoverInitiated`] - If no handover is in flight.
    /// * [`Error::UnauthorizedAccount`] - If the caller is not the nominee.
    /// * [`Error::HandoverExpired`] - If the window has closed.
    ///
    /// # Events
    ///
    /// * [`OwnershipHandoverAccepted`].
    fn accept_ownership_handover(&mut self) -> Result<(), Self::Error>;

    /// Cancels the live handover. Permitted for the current owner and for
    /// the nominee.
    ///
    /// # Errors
    ///
    /// * [`Error::NoHandoverInitiated`] - If no handover is in flight; this
    ///   outranks the authorization check.
    /// * [`Error::UnauthorizedAccount`] - If the caller is neither the
    ///   owner nor the nominee.
    ///
    /// # Events
    ///
    /// * [`OwnershipHandoverCanceled`].
    fn cancel_ownership_handover(&mut self) -> Result<(), Self::Error>;

    /// Completes the live handover to `target`. Can only be called by the
    /// current owner, strictly inside the second half of the window, and
    /// only once the nominee has accepted (the zero address is born
    /// accepted).
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `target` - The nominee to confirm as next owner.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the
    ///   owner.
    /// * [`Error::NoHandoverInitiated`] - If no handover is in flight.
    /// * [`Error::CannotCompleteHandover`] - If the nominee does not match,
    ///   the timing window is violated, or the nominee has not accepted.
    /// * [`Error::CannotRenounceYet`] - If a renunciation's cool-down has
    ///   not elapsed.
    ///
    /// # Events
    ///
    /// * [`ownable::OwnershipTransferred`].
    fn complete_ownership_handover(
        &mut self,
        target: Address,
    ) -> Result<(), Self::Error>;
}

#[public]
#[implements(IOwnable<Error = Error>, IOwnableHandover<Error = Error>, IErc165)]
impl OwnableHandover {}

#[public]
impl IOwnable for OwnableHandover {
    type Error = Error;

    fn initialize(&mut self, final_owner: Address) -> Result<(), Self::Error> {
        Ok(self.ownable.initialize(final_owner)?)
    }

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

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
impl IOwnableHandover for OwnableHandover {
    type Error = Error;

    fn initiate_ownership_handover(
        &mut self,
        target: Address,
    ) -> Result<(), Self::Error> {
        self.initiate_ownership_handover(target)
    }

    fn accept_ownership_handover(&mut self) -> Result<(), Self::Error> {
        self.accept_ownership_handover()
    }

    fn cancel_ownership_handover(&mut self) -> Result<(), Self::Error> {
        self.cancel_ownership_handover()
    }

    fn complete_ownership_handover(
        &mut self,
        target: Address,
    ) -> Result<(), Self::Error> {
        self.complete_ownership_handover(target)
    }
}

impl OwnableHandover {
    /// Total validity window of a handover, in seconds.
    pub const HANDOVER_WINDOW: u64 = 4 * 24 * 60 * 60;
    /// Cool-down before a handover may complete, in seconds.
    pub const HANDOVER_PAUSE: u64 = Self::HANDOVER_WINDOW / 2;

    /// Starts or restarts an ownership handover to `target`.
    /// See [`IOwnableHandover::initiate_ownership_handover`].
    pub fn initiate_ownership_handover(
        &mut self,
        target: Address,
    ) -> Result<(), Error> {
        self.ownable._initiate(
            target,
            Self::HANDOVER_PAUSE,
            Self::HANDOVER_WINDOW,
        )?;
        evm::log(OwnershipHandoverInitiated { pending_owner: target });
        Ok(())
    }

    /// Accepts the live handover.
    /// See [`IOwnableHandover::accept_ownership_handover`].
    pub fn accept_ownership_handover(&mut self) -> Result<(), Error> {
        let deadline = self.ownable.pending.expires_at.get();
        match self.ownable._accept(deadline) {
            Ok(pending_owner) => {
                evm::log(OwnershipHandoverAccepted { pending_owner });
                Ok(())
            }
            Err(AcceptBlock::NoPending) => Err(Error::NoHandoverInitiated(
                OwnableNoHandoverInitiated {},
            )),
            Err(AcceptBlock::NotTarget) => Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account: msg::sender() },
            )),
            Err(AcceptBlock::TooLate) => {
                Err(Error::HandoverExpired(OwnableHandoverExpired {}))
            }
        }
    }

    /// Cancels the live handover.
    /// See [`IOwnableHandover::cancel_ownership_handover`].
    pub fn cancel_ownership_handover(&mut self) -> Result<(), Error> {
        match self.ownable._cancel() {
            Ok(pending_owner) => {
                evm::log(OwnershipHandoverCanceled { pending_owner });
                Ok(())
            }
            Err(CancelBlock::NoPending) => Err(Error::NoHandoverInitiated(
                OwnableNoHandoverInitiated {},
            )),
            Err(CancelBlock::Unauthorized) => Err(Error::UnauthorizedAccount(
                OwnableUnauthorizedAccount { account: msg::sender() },
            )),
        }
    }

    /// Completes the live handover to `target`.
    /// See [`IOwnableHandover::complete_ownership_handover`].
    pub fn complete_ownership_handover(
        &mut self,
        target: Address,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        match self.ownable.pending.completable(target) {
            Ok(()) => {
                self.ownable.pending.clear();
                self.ownable._transfer_ownership(target);
                Ok(())
            }
            Err(TransferBlock::NoPending) => Err(Error::NoHandoverInitiated(
                OwnableNoHandoverInitiated {},
            )),
            Err(TransferBlock::TooEarly) if target.is_zero() => {
                Err(Error::CannotRenounceYet(OwnableCannotRenounceYet {}))
            }
            Err(_) => Err(Error::CannotCompleteHandover(
                OwnableCannotCompleteHandover {},
            )),
        }
    }
}

#[public]
impl IErc165 for OwnableHandover {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IOwnable>::interface_id() == interface_id
            || <Self as IOwnableHandover>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

#[cfg(test)]
mod tests {
    use motsu::prelude::*;
    use stylus_sdk::{alloy_primitives::Address, block, prelude::*};

    use super::*;
    use crate::{
        access::ownable::OwnershipTransferred,
        utils::introspection::erc165::IErc165,
    };

    unsafe impl TopLevelStorage for OwnableHandover {}

    const WINDOW: u64 = OwnableHandover::HANDOVER_WINDOW;
    const PAUSE: u64 = OwnableHandover::HANDOVER_PAUSE;

    impl OwnableHandover {
        fn rewind(&mut self, secs: u64) {
            self.ownable.rewind(secs);
        }
    }

    /// Initializes `owner` and hands the bootstrap off so that the
    /// one-step path is locked and only the handover protocol remains.
    fn setup(contract: &Contract<OwnableHandover>, owner: Address) {
        contract.sender(owner).initialize(owner).motsu_unwrap();
        contract.sender(owner).transfer_ownership(owner).motsu_unwrap();
        contract.sender(owner).transfer_ownership(owner).motsu_unwrap();
    }

    #[motsu::test]
    fn initiation_records_the_window(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);

        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract
            .assert_emitted(&OwnershipHandoverInitiated { pending_owner: bob });

        let (target, expires_at, validated, pause_until) =
            contract.sender(alice).pending();
        assert_eq!(target, bob);
        assert_eq!(expires_at, block::timestamp() + WINDOW);
        assert!(!validated);
        assert_eq!(pause_until, block::timestamp() + PAUSE);
    }

    #[motsu::test]
    fn only_owner_initiates(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);

        let err = contract
            .sender(bob)
            .initiate_ownership_handover(bob)
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == bob
        ));
    }

    #[motsu::test]
    fn happy_path(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();

        // Just past the midpoint: the cool-down has elapsed.
        contract.sender(alice).rewind(PAUSE + 1);

        contract.sender(bob).accept_ownership_handover().motsu_unwrap();
        contract
            .assert_emitted(&OwnershipHandoverAccepted { pending_owner: bob });

        contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap();
        assert_eq!(contract.sender(alice).owner(), bob);
        contract.assert_emitted(&OwnershipTransferred {
            previous_owner: alice,
            new_owner: bob,
        });

        let (target, expires_at, validated, pause_until) =
            contract.sender(alice).pending();
        assert_eq!(target, Address::ZERO);
        assert_eq!(expires_at, 0);
        assert!(!validated);
        assert_eq!(pause_until, 0);
    }

    #[motsu::test]
    fn premature_completion_rejected(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(bob).accept_ownership_handover().motsu_unwrap();

        // One second short of the midpoint.
        contract.sender(alice).rewind(PAUSE - 1);

        let err = contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::CannotCompleteHandover(_)));
        assert_eq!(contract.sender(alice).owner(), alice);

        let (target, _, validated, _) = contract.sender(alice).pending();
        assert_eq!(target, bob);
        assert!(validated);
    }

    #[motsu::test]
    fn completion_boundary_is_strict(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(bob).accept_ownership_handover().motsu_unwrap();

        // Exactly at the pause boundary: must fail.
        contract.sender(alice).rewind(PAUSE);
        let err = contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::CannotCompleteHandover(_)));

        // One second later: must succeed.
        contract.sender(alice).rewind(1);
        contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap();
        assert_eq!(contract.sender(alice).owner(), bob);
    }

    #[motsu::test]
    fn completion_fails_at_expiry(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(bob).accept_ownership_handover().motsu_unwrap();
        contract.sender(alice).rewind(WINDOW);

        let err = contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::CannotCompleteHandover(_)));
    }

    #[motsu::test]
    fn completion_requires_acceptance(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(alice).rewind(PAUSE + 1);

        let err = contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::CannotCompleteHandover(_)));
    }

    #[motsu::test]
    fn acceptance_allowed_until_expiry(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();

        // Deep into the second half the nominee can still accept.
        contract.sender(alice).rewind(WINDOW - 1);
        contract.sender(bob).accept_ownership_handover().motsu_unwrap();
    }

    #[motsu::test]
    fn acceptance_fails_once_expired(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(alice).rewind(WINDOW);

        let err =
            contract.sender(bob).accept_ownership_handover().motsu_unwrap_err();
        assert!(matches!(err, Error::HandoverExpired(_)));
    }

    #[motsu::test]
    fn only_nominee_accepts(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();

        let err = contract
            .sender(charlie)
            .accept_ownership_handover()
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == charlie
        ));
    }

    #[motsu::test]
    fn reinitiation_resets_the_timer(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(alice).rewind(PAUSE);

        // Same nominee: the timer restarts from now.
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        let (_, expires_at, _, _) = contract.sender(alice).pending();
        assert_eq!(expires_at, block::timestamp() + WINDOW);

        // Different nominee: the old record is gone without a trace.
        contract
            .sender(alice)
            .initiate_ownership_handover(charlie)
            .motsu_unwrap();
        let (target, expires_at, _, _) = contract.sender(alice).pending();
        assert_eq!(target, charlie);
        assert_eq!(expires_at, block::timestamp() + WINDOW);
    }

    #[motsu::test]
    fn reinitiation_discards_acceptance(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(bob).accept_ownership_handover().motsu_unwrap();

        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        let (_, _, validated, _) = contract.sender(alice).pending();
        assert!(!validated);
    }

    #[motsu::test]
    fn cancel_by_owner_and_by_nominee(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);

        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(alice).cancel_ownership_handover().motsu_unwrap();
        contract
            .assert_emitted(&OwnershipHandoverCanceled { pending_owner: bob });

        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(bob).cancel_ownership_handover().motsu_unwrap();

        let (target, expires_at, validated, pause_until) =
            contract.sender(alice).pending();
        assert_eq!(target, Address::ZERO);
        assert_eq!(expires_at, 0);
        assert!(!validated);
        assert_eq!(pause_until, 0);
    }

    #[motsu::test]
    fn cancel_rejects_third_parties(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();

        let err = contract
            .sender(charlie)
            .cancel_ownership_handover()
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == charlie
        ));
    }

    #[motsu::test]
    fn cancel_without_handover_reports_no_handover(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);

        // Owner and stranger alike: the lifecycle error wins.
        let err = contract
            .sender(alice)
            .cancel_ownership_handover()
            .motsu_unwrap_err();
        assert!(matches!(err, Error::NoHandoverInitiated(_)));

        let err = contract
            .sender(bob)
            .cancel_ownership_handover()
            .motsu_unwrap_err();
        assert!(matches!(err, Error::NoHandoverInitiated(_)));
    }

    #[motsu::test]
    fn completion_after_cancel_reports_no_handover(
        contract: Contract<OwnableHandover>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(bob)
            .motsu_unwrap();
        contract.sender(alice).cancel_ownership_handover().motsu_unwrap();

        let err = contract
            .sender(alice)
            .complete_ownership_handover(bob)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::NoHandoverInitiated(_)));
    }

    #[motsu::test]
    fn renunciation_through_handover(
        contract: Contract<OwnableHandover>,
        alice: Address,
    ) {
        setup(&contract, alice);
        contract
            .sender(alice)
            .initiate_ownership_handover(Address::ZERO)
            .motsu_unwrap();

        // The zero address is born accepted, but the cool-down still holds.
        let err = contract
            .sender(alice)
            .complete_ownership_handover(Address::ZERO)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::CannotRenounceYet(_)));

        contract.sender(alice).rewind(PAUSE + 1);
        contract
            .sender(alice)
            .complete_ownership_handover(Address::ZERO)
            .motsu_unwrap();
        assert_eq!(contract.sender(alice).owner(), Address::ZERO);
    }

    #[motsu::test]
    fn supports_interface(contract: Contract<OwnableHandover>, alice: Address) {
        assert!(contract.sender(alice).supports_interface(
            <OwnableHandover as IOwnableHandover>::interface_id()
        ));
        assert!(contract
            .sender(alice)
            .supports_interface(<OwnableHandover as IOwnable>::interface_id()));
        assert!(contract
            .sender(alice)
            .supports_interface(<OwnableHandover as IErc165>::interface_id()));

        let fake_interface_id: B32 = 0x12345678_u32.into();
        assert!(!contract.sender(alice).supports_interface(fake_interface_id));
    }
}
